use dioxus::prelude::*;

/// Bulleted list of pre-formatted lines.
///
/// An empty `items` renders an empty list (marked `data-empty`), never a
/// placeholder message, so absent data leaves the section visibly blank.
#[component]
pub fn ItemList(
    items: Vec<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let mut base = vec![Attribute::new("class", "item-list", None, false)];
    if items.is_empty() {
        base.push(Attribute::new("data-empty", "true", None, false));
    }
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        ul {
            ..merged,
            for (index, item) in items.iter().enumerate() {
                li { key: "{index}", class: "item-list-item", "{item}" }
            }
        }
    }
}
