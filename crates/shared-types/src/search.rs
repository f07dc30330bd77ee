use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use crate::error::SearchError;

/// Treat an explicit JSON `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Facet display mode requested from the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FacetStyle {
    #[default]
    None,
    Flat,
    Hierarchical,
}

/// All facet styles in display order.
pub const ALL_FACET_STYLES: &[FacetStyle] =
    &[FacetStyle::None, FacetStyle::Flat, FacetStyle::Hierarchical];

impl FacetStyle {
    /// Wire value, also used as the select option value.
    pub fn as_str(&self) -> &'static str {
        match self {
            FacetStyle::None => "NONE",
            FacetStyle::Flat => "FLAT",
            FacetStyle::Hierarchical => "HIERARCHICAL",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FacetStyle::None => "Top-level only",
            FacetStyle::Flat => "Flat",
            FacetStyle::Hierarchical => "Hierarchical",
        }
    }

    /// Parse a wire value, falling back to `None`.
    pub fn from_key(s: &str) -> Self {
        match s {
            "FLAT" => FacetStyle::Flat,
            "HIERARCHICAL" => FacetStyle::Hierarchical,
            _ => FacetStyle::None,
        }
    }
}

/// Query parameters for `GET /service/search`.
///
/// Array parameters are sent as repeated keys. `fq` and `start` are omitted
/// entirely when they carry nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub q: String,
    pub additional_fields: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fq: Vec<String>,
    pub facet_style: FacetStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<u64>,
}

impl SearchParams {
    /// Flatten into ordered `(key, value)` pairs for the query string.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("q", self.q.clone())];
        pairs.extend(
            self.additional_fields
                .iter()
                .map(|f| ("additionalFields", f.clone())),
        );
        pairs.extend(self.fq.iter().map(|f| ("fq", f.clone())));
        pairs.push(("facetStyle", self.facet_style.as_str().to_string()));
        if let Some(start) = self.start {
            pairs.push(("start", start.to_string()));
        }
        pairs
    }
}

/// One document in a result page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchDocument {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub first_author: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub publication: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub snp: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub disease_trait: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub efo_uri: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub efo_labels: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub parent_labels: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub child_labels: Vec<String>,
    /// Labels reached through ontology relations, keyed by the raw
    /// `*_rel_labels_t` field name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub related_labels: BTreeMap<String, Vec<String>>,
}

impl SearchDocument {
    pub fn has_related(&self) -> bool {
        !self.related_labels.is_empty()
    }
}

/// A facet value with its document count. Hierarchical facets nest further
/// entries under `hierarchy`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetEntry {
    #[serde(alias = "label")]
    pub value: String,
    pub count: u64,
    #[serde(
        default,
        alias = "hierarchy",
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub children: Vec<FacetEntry>,
}

/// Raw JSON body returned by `GET /service/search`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub error: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<SearchDocument>,
    #[serde(default)]
    pub total_results: u64,
    #[serde(default)]
    pub start: u64,
    #[serde(default)]
    pub rows: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub facets: BTreeMap<String, Vec<FacetEntry>>,
}

impl SearchResponse {
    /// Convert into a result page, or a `RemoteService` error when the
    /// service flagged the request as failed.
    pub fn into_page(self) -> Result<ResultPage, SearchError> {
        if self.error {
            let detail = self
                .error_message
                .unwrap_or_else(|| "service reported an error".to_string());
            return Err(SearchError::remote_service(detail));
        }
        Ok(ResultPage {
            items: self.results,
            total: self.total_results,
            start: self.start,
            rows: self.rows,
            facets: self.facets,
        })
    }
}

/// A successfully reconciled page of results.
///
/// Display offsets are derived on demand and never stored.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultPage {
    pub items: Vec<SearchDocument>,
    pub total: u64,
    pub start: u64,
    pub rows: u64,
    pub facets: BTreeMap<String, Vec<FacetEntry>>,
}

impl ResultPage {
    /// 1-based index of the first item on this page.
    pub fn display_start(&self) -> u64 {
        self.start + 1
    }

    /// 1-based index of the last slot on this page.
    pub fn display_end(&self) -> u64 {
        self.start + self.rows
    }

    pub fn current_page(&self) -> u64 {
        if self.rows == 0 {
            1
        } else {
            self.start / self.rows + 1
        }
    }

    pub fn total_pages(&self) -> u64 {
        if self.rows == 0 {
            1
        } else {
            self.total.div_ceil(self.rows).max(1)
        }
    }

    pub fn facet(&self, field: &str) -> &[FacetEntry] {
        self.facets.get(field).map(Vec::as_slice).unwrap_or(&[])
    }
}
