use dropdown_widgets::{Dropdown, DropdownAttributes, DropdownItem};
use gloo_console::log;
use silkenweb::{
    elements::html::{div, h1, Div},
    prelude::{Element, ParentElement},
};

pub mod config;

silkenweb::css!(path = "css/app.css", auto_mount, transpile = (modules));

pub fn app(attributes: DropdownAttributes) -> Div {
    div()
        .class(class::shell())
        .child(h1().text("Dropdown"))
        .child(demo_dropdown(attributes))
}

fn demo_dropdown(attributes: DropdownAttributes) -> Dropdown {
    Dropdown::new().attributes(attributes).items([
        DropdownItem::new("Item 1").on_select(|| log!("item 1 clicked")),
        DropdownItem::new("Item 2").href("#item-2"),
        DropdownItem::new("Item 3 active")
            .href("#item-3")
            .active(true),
        DropdownItem::new("Item 4").href("/item-4"),
        DropdownItem::new("Item 5 disabled").disabled(true),
    ])
}
