use dioxus::prelude::*;

/// Top-of-page heading with an optional one-line subtitle. Anything passed
/// as children is laid out to the right of the title.
#[component]
pub fn PageHeader(
    title: String,
    #[props(default)] subtitle: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        header { class: "page-header",
            div { class: "page-header-text",
                h1 { class: "page-title", "{title}" }
                if let Some(subtitle) = subtitle {
                    p { class: "page-subtitle", "{subtitle}" }
                }
            }
            div { class: "page-header-aside", {children} }
        }
    }
}
