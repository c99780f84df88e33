use dioxus::prelude::*;

/// Labelled single-line text input.
///
/// The label wraps the input, so no `id`/`for` pairing is needed.
#[component]
pub fn TextField(
    label: String,
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default = false)] required: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        label { class: "input-label",
            span { class: "input-label-text", "{label}" }
            input {
                r#type: "text",
                value: value,
                placeholder: placeholder,
                required: required,
                oninput: move |evt| on_input.call(evt),
                ..merged,
            }
        }
    }
}
