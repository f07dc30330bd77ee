use dioxus::prelude::*;

use crate::components::button::{Button, ButtonVariant};

/// Free-text query input with a submit button.
///
/// The input is uncontrolled between submissions: typing updates a local
/// draft, and `on_submit` fires with the draft on Enter or button press.
#[component]
pub fn SearchBar(
    /// Text shown when the bar is first rendered.
    #[props(default)]
    initial: String,
    #[props(default = "Search...".to_string())] placeholder: String,
    on_submit: EventHandler<String>,
    /// Extra controls rendered after the submit button.
    children: Element,
) -> Element {
    let mut draft = use_signal(|| initial.clone());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        form {
            class: "search-bar",
            onsubmit: move |evt| {
                evt.prevent_default();
                on_submit.call(draft.read().clone());
            },
            input {
                class: "search-bar-input",
                r#type: "search",
                placeholder: "{placeholder}",
                value: "{draft}",
                oninput: move |evt| draft.set(evt.value()),
            }
            Button { variant: ButtonVariant::Primary, submit: true, "Search" }
            {children}
        }
    }
}
