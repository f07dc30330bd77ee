use shared_types::{FilterCriterion, SearchParams};

use crate::session::SearchState;

/// The event that caused a request to be issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Search,
    Page,
    AddFilter,
    RemoveFilter,
    FacetStyle,
}

/// Build the exact request parameters for `state`.
///
/// Deterministic: additional fields come out in sorted order and filters in
/// application order, so identical inputs give identical parameters. `start`
/// is only sent for pagination; `fq` is omitted when no filter is applied.
pub fn build(state: &SearchState, trigger: Trigger) -> SearchParams {
    SearchParams {
        q: state.query_text().to_string(),
        additional_fields: state.additional_fields().iter().cloned().collect(),
        fq: state.filters().iter().map(FilterCriterion::encode).collect(),
        facet_style: state.facet_style(),
        start: (trigger == Trigger::Page).then(|| state.start_offset()),
    }
}
