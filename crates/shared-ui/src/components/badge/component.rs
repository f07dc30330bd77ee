use dioxus::prelude::*;

/// Visual variant for badges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
}

impl BadgeVariant {
    fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "primary",
            BadgeVariant::Secondary => "secondary",
            BadgeVariant::Outline => "outline",
        }
    }
}

/// An inline label. With `on_remove` set it becomes a removable chip.
#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    #[props(default)] title: String,
    #[props(default)] on_remove: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span { class: "badge", "data-style": variant.class(), title: "{title}",
            {children}
            if let Some(handler) = on_remove {
                button {
                    class: "badge-remove",
                    r#type: "button",
                    "aria-label": "Remove",
                    onclick: move |evt| handler.call(evt),
                    "×"
                }
            }
        }
    }
}
