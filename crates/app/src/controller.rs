use dioxus::prelude::*;
use search_client::{HttpSearchService, Reconciliation, SearchRequest, SearchService, SearchSession};
use shared_types::{ClientConfig, FacetStyle, FilterCriterion};

/// Search state shared across the app.
///
/// Owns the [`SearchSession`] behind a signal so every reader re-renders on
/// change. Each intent mutates the session synchronously, then the request it
/// issued runs on a spawned task and its reply goes back through
/// [`SearchSession::complete`], which drops anything superseded meanwhile.
#[derive(Clone, Copy)]
pub struct SearchController {
    pub session: Signal<SearchSession>,
    /// Bumped on every applied response. Used as the facet tree's key so
    /// expand/collapse state starts over with each new tree.
    pub generation: Signal<u64>,
    service: Signal<HttpSearchService>,
}

impl SearchController {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            session: Signal::new(SearchSession::new(&config.search)),
            generation: Signal::new(0),
            service: Signal::new(HttpSearchService::new(&config.service)),
        }
    }

    pub fn submit_search(mut self, text: String) {
        let request = self.session.write().submit_search(text);
        self.run(request);
    }

    pub fn change_page(mut self, page: u64) {
        let request = self.session.write().change_page(page);
        self.run(request);
    }

    pub fn add_filter(mut self, field: String, term: String) {
        let request = self.session.write().add_filter(field, term);
        self.run(request);
    }

    pub fn remove_filter(mut self, criterion: FilterCriterion) {
        let request = self.session.write().remove_filter(&criterion);
        self.run(request);
    }

    pub fn set_facet_style(mut self, style: FacetStyle) {
        let request = self.session.write().set_facet_style(style);
        self.run(request);
    }

    /// Takes effect with the next request; nothing is sent now.
    pub fn set_additional_field(mut self, field: String, enabled: bool) {
        self.session.write().set_additional_field(field, enabled);
    }

    /// Fetch the dynamic label fields once. On failure they stay unknown.
    pub fn load_dynamic_labels(self) {
        let service = self.service.read().clone();
        let mut session = self.session;
        spawn(async move {
            match service.dynamic_label_fields().await {
                Ok(fields) => session.write().set_dynamic_labels(fields),
                Err(e) => tracing::warn!(error = %e, "Dynamic label lookup failed"),
            }
        });
    }

    fn run(self, request: SearchRequest) {
        let service = self.service.read().clone();
        let mut session = self.session;
        let mut generation = self.generation;
        spawn(async move {
            let outcome = service.search(&request.params).await;
            let reconciliation = session.write().complete(request.seq, outcome);
            if reconciliation == Reconciliation::Applied {
                *generation.write() += 1;
            }
        });
    }
}

/// Hook to access the search controller.
pub fn use_search() -> SearchController {
    use_context::<SearchController>()
}
