use dioxus::prelude::*;

use crate::routes::Route;

/// Any unknown path, including `/`, sends the user to the search page.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let nav = navigator();
    let path = format!("/{}", route.join("/"));

    use_effect(move || {
        nav.replace(Route::Search {});
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }
        div { class: "not-found-page",
            p { class: "not-found-message",
                "Redirecting from "
                code { "{path}" }
                " to search..."
            }
            Link { to: Route::Search {}, class: "not-found-link", "Go to search" }
        }
    }
}
