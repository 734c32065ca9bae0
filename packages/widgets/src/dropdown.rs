use futures::future;
use futures_signals::signal::SignalExt;
use silkenweb::{
    clone, document,
    elements::{
        html::{button, div},
        ElementEvents,
    },
    node::Node,
    prelude::{Element, ParentElement},
    value::Sig,
    Value,
};

use crate::{
    attributes::{DropdownAttributes, Position},
    component,
    item::DropdownItem,
    state::{Interaction, OpenState},
};

component!("css/dropdown.css");

/// A button that opens a panel of [`DropdownItem`]s.
///
/// The panel closes when an item is clicked, or on a click anywhere outside
/// the dropdown. The document click listener lives as long as the rendered
/// element.
#[derive(Value)]
pub struct Dropdown {
    attributes: DropdownAttributes,
    items: Vec<DropdownItem>,
    state: OpenState,
}

impl Default for Dropdown {
    fn default() -> Self {
        Self::new()
    }
}

impl Dropdown {
    pub fn new() -> Self {
        Self {
            attributes: DropdownAttributes::default(),
            items: Vec::new(),
            state: OpenState::new(),
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.attributes.label = label.into();
        self
    }

    pub fn position(mut self, position: Position) -> Self {
        self.attributes.position = position;
        self
    }

    pub fn attributes(mut self, attributes: DropdownAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn item(mut self, item: DropdownItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn items(mut self, items: impl IntoIterator<Item = DropdownItem>) -> Self {
        self.items.extend(items);
        self
    }

    /// A handle to the open flag, shared with the rendered element.
    pub fn state(&self) -> OpenState {
        self.state.clone()
    }
}

impl From<Dropdown> for Node {
    fn from(dropdown: Dropdown) -> Self {
        let Dropdown {
            attributes: DropdownAttributes { label, position },
            items,
            state,
        } = dropdown;

        let host = div()
            .class(class::host())
            .attribute("data-position", position);
        let host_elem = host.handle().dom_element();

        let outside_click = document::on_click({
            clone!(state);
            move |event| {
                let inside = event.composed_path().includes(host_elem.as_ref(), 0);
                state.apply(Interaction::DocumentClick { inside });
            }
        });

        host.child(
            button()
                .class(class::dropdown_button())
                .class(class::button())
                .r#type("button")
                .attribute("aria-haspopup", "menu")
                .attribute(
                    "aria-expanded",
                    Sig(state.signal().map(|open| open.to_string())),
                )
                .text(label.as_str())
                .on_click({
                    clone!(state);
                    move |ev, _| {
                        ev.prevent_default();
                        state.apply(Interaction::Toggle);
                    }
                }),
        )
        .child(
            div()
                .class(class::dropdown_content())
                .classes(Sig(state
                    .signal()
                    .map(move |open| content_classes(open, position))))
                .child(
                    div()
                        .class(class::items())
                        .attribute("role", "menu")
                        .on_click({
                            clone!(state);
                            move |_, _| {
                                state.apply(Interaction::ItemSelected);
                            }
                        })
                        .children(items),
                ),
        )
        .spawn_future(async move {
            // Dropping the callback removes the listener.
            let _outside_click = outside_click;
            future::pending::<()>().await
        })
        .into()
    }
}

fn content_classes(open: bool, position: Position) -> Vec<&'static str> {
    let position = match position {
        Position::Top => class::position_top(),
        Position::Bottom => class::position_bottom(),
        Position::Left => class::position_left(),
        Position::Right => class::position_right(),
    };

    if open {
        vec![position, class::open()]
    } else {
        vec![position]
    }
}

#[cfg(test)]
mod tests {
    use super::{class, content_classes};
    use crate::attributes::Position;

    #[test]
    fn panel_classes() {
        for (position, position_class) in [
            (Position::Top, class::position_top()),
            (Position::Bottom, class::position_bottom()),
            (Position::Left, class::position_left()),
            (Position::Right, class::position_right()),
        ] {
            assert_eq!(content_classes(false, position), vec![position_class]);
            assert_eq!(
                content_classes(true, position),
                vec![position_class, class::open()]
            );
        }
    }

    #[test]
    fn positions_have_distinct_classes() {
        let mut classes: Vec<_> = [
            Position::Top,
            Position::Bottom,
            Position::Left,
            Position::Right,
        ]
        .into_iter()
        .map(|position| content_classes(false, position)[0])
        .collect();
        classes.sort_unstable();
        classes.dedup();

        assert_eq!(classes.len(), 4);
    }
}
