//! Faceted-search session core: the state machine that turns user intents
//! into search requests and reconciles the responses, plus the HTTP client
//! for the remote search service.

pub mod client;
pub mod config;
pub mod query;
pub mod session;

pub use client::{HttpSearchService, SearchService};
pub use query::Trigger;
pub use session::{
    DynamicLabels, Reconciliation, SearchRequest, SearchSession, SearchState, SessionStatus,
};
