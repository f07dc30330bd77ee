use std::collections::BTreeSet;

use shared_types::{
    FacetStyle, FilterCriterion, ResultPage, SearchError, SearchParams, SearchResponse,
    SearchSettings,
};

use crate::query::{self, Trigger};

/// Lifecycle of a search session. There is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Errored,
}

/// Result of the dynamic label field lookup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DynamicLabels {
    /// Not loaded yet, or the lookup failed.
    #[default]
    Unknown,
    /// The service answered with an empty list.
    Empty,
    Fields(Vec<String>),
}

impl DynamicLabels {
    pub fn fields(&self) -> &[String] {
        match self {
            DynamicLabels::Fields(fields) => fields,
            _ => &[],
        }
    }
}

/// Everything the search page knows. Only [`SearchSession`] mutates it.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    pub(crate) query_text: String,
    pub(crate) additional_fields: BTreeSet<String>,
    pub(crate) filters: Vec<FilterCriterion>,
    pub(crate) facet_style: FacetStyle,
    pub(crate) page: u64,
    page_size: u64,
    top_level_facet_field: String,
    pub(crate) last_response: Option<ResultPage>,
    pub(crate) error: Option<String>,
    pub(crate) request_seq: u64,
}

impl SearchState {
    pub fn new(page_size: u64, top_level_facet_field: impl Into<String>) -> Self {
        Self {
            query_text: String::new(),
            additional_fields: BTreeSet::new(),
            filters: Vec::new(),
            facet_style: FacetStyle::None,
            page: 1,
            page_size: page_size.max(1),
            top_level_facet_field: top_level_facet_field.into(),
            last_response: None,
            error: None,
            request_seq: 0,
        }
    }

    pub fn query_text(&self) -> &str {
        &self.query_text
    }

    pub fn additional_fields(&self) -> &BTreeSet<String> {
        &self.additional_fields
    }

    pub fn filters(&self) -> &[FilterCriterion] {
        &self.filters
    }

    pub fn facet_style(&self) -> FacetStyle {
        self.facet_style
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    pub fn top_level_facet_field(&self) -> &str {
        &self.top_level_facet_field
    }

    /// Last successful page. Survives later failures.
    pub fn last_response(&self) -> Option<&ResultPage> {
        self.last_response.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn request_seq(&self) -> u64 {
        self.request_seq
    }

    /// Offset of the first result on the current page.
    pub fn start_offset(&self) -> u64 {
        (self.page.max(1) - 1).saturating_mul(self.page_size)
    }

    pub fn filters_applied(&self) -> bool {
        !self.filters.is_empty()
    }

    /// Top-level facets show while no facet style is chosen and no applied
    /// filter targets the top-level facet field.
    pub fn show_top_level_facets(&self) -> bool {
        self.facet_style == FacetStyle::None
            && !self
                .filters
                .iter()
                .any(|f| f.field == self.top_level_facet_field)
    }

    pub fn show_second_level_facets(&self) -> bool {
        self.filters_applied()
    }
}

/// A request ready to send, stamped with the sequence number it was issued at.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub seq: u64,
    pub trigger: Trigger,
    pub params: SearchParams,
}

/// What [`SearchSession::complete`] did with a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciliation {
    Applied,
    Failed,
    /// Superseded by a newer request and dropped without touching state.
    Stale,
}

/// The faceted-search state machine.
///
/// Every event mutates [`SearchState`] synchronously, bumps the request
/// sequence and returns the request to send. Callers deliver the outcome to
/// [`complete`](Self::complete); only the response to the most recently
/// issued request is ever applied.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSession {
    state: SearchState,
    status: SessionStatus,
    dedupe_filters: bool,
    dynamic_labels: DynamicLabels,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new(&SearchSettings::default())
    }
}

impl SearchSession {
    pub fn new(settings: &SearchSettings) -> Self {
        Self {
            state: SearchState::new(settings.page_size, settings.top_level_facet_field.clone()),
            status: SessionStatus::Idle,
            dedupe_filters: settings.dedupe_filters,
            dynamic_labels: DynamicLabels::Unknown,
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn dynamic_labels(&self) -> &DynamicLabels {
        &self.dynamic_labels
    }

    /// New top-level search: clears filters and returns to page one.
    pub fn submit_search(&mut self, text: impl Into<String>) -> SearchRequest {
        self.state.query_text = text.into();
        self.state.filters.clear();
        self.state.page = 1;
        self.issue(Trigger::Search)
    }

    pub fn change_page(&mut self, page: u64) -> SearchRequest {
        self.state.page = page.max(1);
        self.issue(Trigger::Page)
    }

    /// Appends a filter. Duplicates are kept unless deduplication is enabled.
    pub fn add_filter(&mut self, field: impl Into<String>, term: impl Into<String>) -> SearchRequest {
        let criterion = FilterCriterion::new(field, term);
        if !(self.dedupe_filters && self.state.filters.contains(&criterion)) {
            self.state.filters.push(criterion);
        }
        self.state.page = 1;
        self.issue(Trigger::AddFilter)
    }

    /// Removes the first filter equal to `criterion`.
    pub fn remove_filter(&mut self, criterion: &FilterCriterion) -> SearchRequest {
        if let Some(pos) = self.state.filters.iter().position(|f| f == criterion) {
            self.state.filters.remove(pos);
        }
        self.state.page = 1;
        self.issue(Trigger::RemoveFilter)
    }

    pub fn set_facet_style(&mut self, style: FacetStyle) -> SearchRequest {
        self.state.facet_style = style;
        self.issue(Trigger::FacetStyle)
    }

    /// Opt a field in or out of the search. Takes effect on the next request.
    pub fn set_additional_field(&mut self, field: impl Into<String>, enabled: bool) {
        let field = field.into();
        if enabled {
            self.state.additional_fields.insert(field);
        } else {
            self.state.additional_fields.remove(&field);
        }
    }

    /// Fields the user can opt into: `configured` followed by the dynamic
    /// label fields, each listed once in first-seen order.
    pub fn additional_field_options(&self, configured: &[String]) -> Vec<String> {
        let mut seen = BTreeSet::new();
        configured
            .iter()
            .chain(self.dynamic_labels.fields())
            .filter(|field| seen.insert(*field))
            .cloned()
            .collect()
    }

    pub fn set_dynamic_labels(&mut self, fields: Vec<String>) {
        self.dynamic_labels = if fields.is_empty() {
            DynamicLabels::Empty
        } else {
            DynamicLabels::Fields(fields)
        };
    }

    /// Reconcile the outcome of request `seq` into the session.
    ///
    /// Stale outcomes are dropped. Failures keep the previous results and
    /// surface only the generic message; the detail goes to the log.
    pub fn complete(
        &mut self,
        seq: u64,
        outcome: Result<SearchResponse, SearchError>,
    ) -> Reconciliation {
        if seq != self.state.request_seq {
            tracing::debug!(
                seq,
                current = self.state.request_seq,
                "Discarding stale search response"
            );
            return Reconciliation::Stale;
        }

        match outcome.and_then(SearchResponse::into_page) {
            Ok(page) => {
                tracing::debug!(seq, total = page.total, "Search response applied");
                self.state.last_response = Some(page);
                self.state.error = None;
                self.status = SessionStatus::Ready;
                Reconciliation::Applied
            }
            Err(e) => {
                tracing::error!(seq, kind = %e.kind, error = %e.message, "Search request failed");
                self.state.error = Some(e.user_message().to_string());
                self.status = SessionStatus::Errored;
                Reconciliation::Failed
            }
        }
    }

    fn issue(&mut self, trigger: Trigger) -> SearchRequest {
        self.state.request_seq += 1;
        self.status = SessionStatus::Loading;
        let params = query::build(&self.state, trigger);
        tracing::debug!(seq = self.state.request_seq, ?trigger, "Issuing search request");
        SearchRequest {
            seq: self.state.request_seq,
            trigger,
            params,
        }
    }

    pub fn show_top_level_facets(&self) -> bool {
        self.state.show_top_level_facets()
    }

    pub fn show_second_level_facets(&self) -> bool {
        self.state.show_second_level_facets()
    }

    pub fn filters_applied(&self) -> bool {
        self.state.filters_applied()
    }
}
