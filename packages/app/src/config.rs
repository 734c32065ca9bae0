//! Dropdown overrides from the page URL, e.g. `?position=top&label=Menu`.
use dropdown_widgets::DropdownAttributes;
use gloo_console::warn;
use web_sys::UrlSearchParams;

const KEYS: [&str; 2] = ["label", "position"];

pub fn dropdown_attributes() -> DropdownAttributes {
    let pairs = query_pairs();

    DropdownAttributes::parse(
        pairs
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str())),
    )
    .unwrap_or_else(|e| {
        warn!(format!("Ignoring URL query: {e}"));
        DropdownAttributes::default()
    })
}

fn query_pairs() -> Vec<(String, String)> {
    let Some(search) = web_sys::window().and_then(|window| window.location().search().ok())
    else {
        return Vec::new();
    };

    let Ok(params) = UrlSearchParams::new_with_str(&search) else {
        warn!(format!("Unable to parse URL query `{search}`"));
        return Vec::new();
    };

    KEYS.iter()
        .filter_map(|&key| Some((key.to_owned(), params.get(key)?)))
        .collect()
}
