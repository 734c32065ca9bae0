//! Dropdown menu widgets for [silkenweb].
//!
//! A [`Dropdown`] is a toggle button with a panel of [`DropdownItem`]s. The
//! panel opens and closes on the button, closes when an item is selected and
//! closes on any click outside the dropdown.
//!
//! ```no_run
//! use dropdown_widgets::{Dropdown, DropdownItem, Position};
//!
//! let dropdown = Dropdown::new()
//!     .label("Menu")
//!     .position(Position::Right)
//!     .item(DropdownItem::new("Home").href("/"))
//!     .item(DropdownItem::new("Archived").disabled(true));
//! ```
pub mod attributes;
pub mod dropdown;
pub mod item;
pub mod state;

pub use attributes::{AttributeError, DropdownAttributes, ItemAttributes, ItemKind, Position};
pub use dropdown::Dropdown;
pub use item::DropdownItem;
pub use state::{Interaction, OpenState};

macro_rules! component {
    ($path:literal) => {
        silkenweb::css!(path = $path, auto_mount, transpile = (modules));
    };
}

use component;
