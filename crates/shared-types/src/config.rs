use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Top-level client configuration, matching `search.toml`.
///
/// Every field has a default so a missing or partial file still yields a
/// working client.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ClientConfig {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub labels: LabelSettings,
}

/// Where the remote search service lives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServiceConfig {
    pub base_url: String,
    pub search_path: String,
    pub dynamic_labels_path: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            search_path: "/service/search".to_string(),
            dynamic_labels_path: "/service/dynamicLabelFields".to_string(),
        }
    }
}

impl ServiceConfig {
    pub fn search_url(&self) -> String {
        join_url(&self.base_url, &self.search_path)
    }

    pub fn dynamic_labels_url(&self) -> String {
        join_url(&self.base_url, &self.dynamic_labels_path)
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Session behaviour.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SearchSettings {
    /// Results per page. Fixed for the lifetime of a session.
    pub page_size: u64,
    /// Collapse a filter that is already applied instead of appending it again.
    pub dedupe_filters: bool,
    /// Facet field whose filters switch the top-level facet list off.
    pub top_level_facet_field: String,
    /// Extra fields the user may opt into searching.
    pub additional_field_options: Vec<String>,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            page_size: 10,
            dedupe_filters: false,
            top_level_facet_field: "facet_labels".to_string(),
            additional_field_options: vec![
                "efo_child_labels".to_string(),
                "efo_parent_labels".to_string(),
            ],
        }
    }
}

/// Display label rules for raw field names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LabelSettings {
    pub overrides: BTreeMap<String, String>,
    /// Prefix stripped from related-type field names.
    pub related_prefix: String,
    /// Trailing `_`-separated segments dropped from related-type field names.
    pub related_suffix_segments: usize,
}

impl Default for LabelSettings {
    fn default() -> Self {
        let overrides = [
            ("efo_child_labels_str", "Child labels"),
            ("efo_labels_str", "Labels"),
            ("facet_labels", "Top-level labels"),
            ("efo_child_labels", "Child labels"),
            ("efo_parent_labels", "Parent labels"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        Self {
            overrides,
            related_prefix: "efo_uri_".to_string(),
            related_suffix_segments: 3,
        }
    }
}
