use dioxus::prelude::*;

/// Fill style for buttons.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Outline => "outline",
        }
    }
}

/// What the button does inside a form.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ButtonKind {
    /// Runs `onclick` only.
    #[default]
    Action,
    /// Submits the enclosing form.
    Submit,
}

impl ButtonKind {
    fn html_type(&self) -> &'static str {
        match self {
            ButtonKind::Action => "button",
            ButtonKind::Submit => "submit",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default)]
    pub kind: ButtonKind,
    /// Toggle state for buttons used as a choice group, rendered as
    /// `aria-pressed`. `None` leaves the attribute off.
    #[props(default)]
    pub pressed: Option<bool>,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    let mut base = vec![
        Attribute::new("class", "button", None, false),
        Attribute::new("data-style", props.variant.class(), None, false),
    ];
    if let Some(pressed) = props.pressed {
        base.push(Attribute::new("aria-pressed", pressed.to_string(), None, false));
    }
    let merged = dioxus_primitives::merge_attributes(vec![base, props.attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        button {
            r#type: props.kind.html_type(),
            disabled: props.disabled,
            onclick: move |evt| {
                if let Some(handler) = &props.onclick {
                    handler.call(evt);
                }
            },
            ..merged,
            {props.children}
        }
    }
}
