use serde::{Deserialize, Serialize};

use crate::search::FacetEntry;

/// A node in a facet hierarchy (e.g. an ontology term and its children).
///
/// Trees are only ever built from server data, so they are finite and
/// acyclic. Expand/collapse state is not stored here: it belongs to the
/// rendered tree and starts closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyNode {
    pub label: String,
    pub count: u64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<HierarchyNode>,
}

impl HierarchyNode {
    pub fn leaf(label: impl Into<String>, count: u64) -> Self {
        Self {
            label: label.into(),
            count,
            children: Vec::new(),
        }
    }

    pub fn with_children(label: impl Into<String>, count: u64, children: Vec<Self>) -> Self {
        Self {
            label: label.into(),
            count,
            children,
        }
    }

    /// Leaves render without an expand control.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Convert a server facet tree into render nodes.
    pub fn from_facets(entries: &[FacetEntry]) -> Vec<HierarchyNode> {
        entries.iter().map(HierarchyNode::from).collect()
    }
}

impl From<&FacetEntry> for HierarchyNode {
    fn from(entry: &FacetEntry) -> Self {
        Self {
            label: entry.value.clone(),
            count: entry.count,
            children: HierarchyNode::from_facets(&entry.children),
        }
    }
}
