use serde::{Deserialize, Serialize};
use std::fmt;

/// A single applied `(field, term)` constraint on the result set.
///
/// On the wire a criterion is the filter expression `field:"term"`, with
/// literal quotes around the term.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterCriterion {
    pub field: String,
    pub term: String,
}

impl FilterCriterion {
    pub fn new(field: impl Into<String>, term: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            term: term.into(),
        }
    }

    /// Encode as a filter expression, e.g. `efo_labels_str:"cancer"`.
    pub fn encode(&self) -> String {
        format!("{}:\"{}\"", self.field, self.term)
    }

    /// Decode a filter expression.
    ///
    /// Splits once at the first `:` and strips one pair of surrounding quotes
    /// from the term. Total: input without a `:` becomes a criterion whose
    /// field is the whole string and whose term is empty.
    pub fn decode(wire: &str) -> Self {
        match wire.split_once(':') {
            Some((field, rest)) => Self::new(field, strip_quotes(rest)),
            None => Self::new(wire, ""),
        }
    }
}

fn strip_quotes(s: &str) -> &str {
    s.strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(s)
}

impl fmt::Display for FilterCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}
