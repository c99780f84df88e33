use dioxus::prelude::*;

/// Tone of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum StatusTone {
    #[default]
    Info,
    Error,
}

impl StatusTone {
    fn class(&self) -> &'static str {
        match self {
            StatusTone::Info => "info",
            StatusTone::Error => "error",
        }
    }

    fn role(&self) -> &'static str {
        match self {
            StatusTone::Info => "status",
            StatusTone::Error => "alert",
        }
    }
}

/// One-line status text (loading, empty, error) announced to assistive
/// technology.
#[component]
pub fn StatusMessage(#[props(default)] tone: StatusTone, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "status-message",
            "data-tone": tone.class(),
            role: tone.role(),
            {children}
        }
    }
}
