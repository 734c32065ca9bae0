use silkenweb::{
    elements::{
        html::{a, div, Div},
        ElementEvents,
    },
    node::Node,
    prelude::{Element, ParentElement},
    Value,
};

use crate::{
    attributes::{ItemAttributes, ItemKind},
    component,
};

component!("css/dropdown-item.css");

/// An entry in a [`Dropdown`](crate::Dropdown).
///
/// With an `href` the item renders as a link. Otherwise it is a focusable
/// menu item that selects on click or Enter.
#[derive(Value)]
pub struct DropdownItem {
    attributes: ItemAttributes,
    text: Option<String>,
    children: Vec<Node>,
    on_select: Option<Box<dyn FnMut()>>,
}

impl DropdownItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::empty()
        }
    }

    pub fn empty() -> Self {
        Self {
            attributes: ItemAttributes::default(),
            text: None,
            children: Vec::new(),
            on_select: None,
        }
    }

    pub fn attributes(mut self, attributes: ItemAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.attributes.active = active;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.attributes.disabled = disabled;
        self
    }

    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.attributes.href = Some(href.into());
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// `handler` is not called for disabled items.
    pub fn on_select(mut self, handler: impl FnMut() + 'static) -> Self {
        self.on_select = Some(Box::new(handler));
        self
    }

    pub fn item_attributes(&self) -> &ItemAttributes {
        &self.attributes
    }

    fn body(&self, children: Vec<Node>) -> Div {
        let mut body = div().class(class::item());

        if self.attributes.active {
            body = body.class(class::active()).attribute("aria-current", "true");
        }

        if self.attributes.disabled {
            body = body
                .class(class::disabled())
                .attribute("aria-disabled", "true");
        }

        if let Some(text) = &self.text {
            body = body.text(text.as_str());
        }

        body.children(children)
    }
}

impl From<DropdownItem> for Node {
    fn from(mut item: DropdownItem) -> Self {
        let children = std::mem::take(&mut item.children);
        let body = item.body(children);
        let on_select = item
            .on_select
            .take()
            .filter(|_| item.attributes.is_selectable());

        match item.attributes.kind() {
            ItemKind::Link(href) => {
                let mut link = a()
                    .class(class::link())
                    .href(href.to_owned())
                    .attribute("role", "menuitem")
                    .child(body);

                if item.attributes.disabled {
                    link = link
                        .class(class::link_disabled())
                        .attribute("aria-disabled", "true")
                        .attribute("tabindex", "-1");
                }

                if let Some(mut on_select) = on_select {
                    link = link.on_click(move |_, _| on_select());
                }

                link.into()
            }
            ItemKind::Plain => {
                let tab_index = if item.attributes.disabled { "-1" } else { "0" };
                let mut body = body
                    .attribute("role", "menuitem")
                    .attribute("tabindex", tab_index);

                // Disabled items can still take focus programmatically.
                if item.attributes.is_selectable() {
                    body = body.on_keydown(|ev, elem| {
                        if ev.key() == "Enter" {
                            elem.click();
                        }
                    });
                }

                if let Some(mut on_select) = on_select {
                    body = body.on_click(move |_, _| on_select());
                }

                body.into()
            }
        }
    }
}
