use dioxus::prelude::*;

mod controller;
mod format_helpers;
mod routes;

use controller::SearchController;
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Config is read once per process; later calls return the cached value.
    let config = use_hook(search_client::config::load_client_config);

    let search = use_context_provider(|| SearchController::new(config));

    // The label lookup only feeds the additional-field options, so it runs
    // alongside the first search rather than blocking it.
    use_hook(move || search.load_dynamic_labels());

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
