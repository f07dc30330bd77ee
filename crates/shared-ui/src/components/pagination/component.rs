use dioxus::prelude::*;

use crate::components::button::{Button, ButtonVariant};

/// Page-number pagination controls with Previous/Next buttons.
///
/// Pages are 1-based. `on_change` receives the requested page number.
#[component]
pub fn Pagination(
    current_page: u64,
    total_pages: u64,
    /// Total number of matching items, shown in the summary.
    total: u64,
    on_change: EventHandler<u64>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        nav { class: "pagination", "aria-label": "Pagination",
            if current_page > 1 {
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_change.call(current_page - 1),
                    "Previous"
                }
            }
            span { class: "pagination-info",
                "Page {current_page} of {total_pages} ({total} total)"
            }
            if current_page < total_pages {
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_change.call(current_page + 1),
                    "Next"
                }
            }
        }
    }
}
