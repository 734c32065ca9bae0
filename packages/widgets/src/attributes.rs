//! The declarative attribute surface of the widgets.
//!
//! Attributes arrive as `(name, value)` pairs, for example from markup or a
//! URL query. Unrecognised names are ignored.
use std::str::FromStr;

use silkenweb::{StrAttribute, Value};
use strum::{AsRefStr, Display};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AttributeError {
    #[error("unknown dropdown position `{0}`, expected one of top, bottom, left or right")]
    UnknownPosition(String),
}

/// Where the dropdown panel appears, relative to the toggle button.
#[derive(
    Copy, Clone, Debug, Default, Eq, PartialEq, Display, AsRefStr, StrAttribute, Value,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Position {
    Top,
    #[default]
    Bottom,
    Left,
    Right,
}

impl FromStr for Position {
    type Err = AttributeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            _ => Err(AttributeError::UnknownPosition(s.to_owned())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DropdownAttributes {
    pub label: String,
    pub position: Position,
}

impl Default for DropdownAttributes {
    fn default() -> Self {
        Self {
            label: "Dropdown".to_owned(),
            position: Position::default(),
        }
    }
}

impl DropdownAttributes {
    pub fn parse<'a>(
        attributes: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, AttributeError> {
        let mut parsed = Self::default();

        for (name, value) in attributes {
            match name {
                "label" => parsed.label = value.to_owned(),
                "position" => parsed.position = value.parse()?,
                _ => (),
            }
        }

        Ok(parsed)
    }
}

/// How an item renders: as a link or as a plain, focusable entry.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ItemKind<'a> {
    Link(&'a str),
    Plain,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemAttributes {
    pub active: bool,
    pub disabled: bool,
    pub href: Option<String>,
}

impl ItemAttributes {
    /// Boolean attributes are set by their presence, whatever their value.
    pub fn parse<'a>(attributes: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut parsed = Self::default();

        for (name, value) in attributes {
            match name {
                "active" => parsed.active = true,
                "disabled" => parsed.disabled = true,
                "href" => parsed.href = (!value.is_empty()).then(|| value.to_owned()),
                _ => (),
            }
        }

        parsed
    }

    pub fn kind(&self) -> ItemKind<'_> {
        match &self.href {
            Some(href) => ItemKind::Link(href),
            None => ItemKind::Plain,
        }
    }

    pub fn is_selectable(&self) -> bool {
        !self.disabled
    }
}
