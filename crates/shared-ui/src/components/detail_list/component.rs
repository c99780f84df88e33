use dioxus::prelude::*;

/// Label/value rows describing the record a page is about.
#[component]
pub fn DetailList(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        dl { class: "detail-list", {children} }
    }
}

/// One row of a `DetailList`. A blank value still renders the row so the
/// layout does not shift when data is partial.
#[component]
pub fn DetailItem(
    /// Field label, e.g. "Patient ID".
    label: String,
    #[props(default)] value: String,
) -> Element {
    rsx! {
        div { class: "detail-item",
            dt { class: "detail-item-label", "{label}" }
            dd { class: "detail-item-value", "{value}" }
        }
    }
}
