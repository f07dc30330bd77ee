use serde::{Deserialize, Serialize};
use std::fmt;

/// Banner text shown to the user for any failed search.
///
/// The underlying error detail is logged, never displayed.
pub const GENERIC_ERROR_MESSAGE: &str = "A server error has occurred - try again later.";

/// Categorization of search failures.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SearchErrorKind {
    /// The service answered with `error: true`.
    RemoteService,
    /// The call itself failed (network, timeout, non-2xx status).
    Transport,
    /// The service answered but the body could not be decoded.
    InvalidResponse,
}

impl fmt::Display for SearchErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchErrorKind::RemoteService => write!(f, "RemoteService"),
            SearchErrorKind::Transport => write!(f, "Transport"),
            SearchErrorKind::InvalidResponse => write!(f, "InvalidResponse"),
        }
    }
}

/// Structured error for every failed call to the remote search service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchError {
    pub kind: SearchErrorKind,
    pub message: String,
}

impl SearchError {
    pub fn remote_service(message: impl Into<String>) -> Self {
        Self {
            kind: SearchErrorKind::RemoteService,
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            kind: SearchErrorKind::Transport,
            message: message.into(),
        }
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self {
            kind: SearchErrorKind::InvalidResponse,
            message: message.into(),
        }
    }

    /// The message to surface in the UI. Identical for every kind.
    pub fn user_message(&self) -> &'static str {
        GENERIC_ERROR_MESSAGE
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for SearchError {}
