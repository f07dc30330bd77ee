use dioxus::prelude::*;

/// Visual variant for buttons.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
    Link,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Outline => "outline",
            ButtonVariant::Ghost => "ghost",
            ButtonVariant::Link => "link",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default = false)]
    pub disabled: bool,
    /// Renders `type="submit"` so the button submits its enclosing form.
    #[props(default = false)]
    pub submit: bool,
    /// Extra classes appended after `button`.
    #[props(default)]
    pub class: String,
    #[props(default)]
    pub title: String,
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    pub children: Element,
}

/// A themed button.
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let class = if props.class.is_empty() {
        "button".to_string()
    } else {
        format!("button {}", props.class)
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        button {
            class: "{class}",
            "data-style": props.variant.class(),
            r#type: if props.submit { "submit" } else { "button" },
            title: "{props.title}",
            disabled: props.disabled,
            onclick: move |evt| {
                if let Some(handler) = &props.onclick {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}
