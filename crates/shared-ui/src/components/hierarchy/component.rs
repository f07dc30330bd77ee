use std::collections::BTreeSet;

use dioxus::prelude::*;
use shared_types::HierarchyNode;

/// Which nodes of one rendered tree are expanded, identified by their
/// child-index path from the roots. Everything not listed is closed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpenPaths(BTreeSet<Vec<usize>>);

impl OpenPaths {
    pub fn is_open(&self, path: &[usize]) -> bool {
        self.0.contains(path)
    }

    /// Flip one node. Siblings and ancestors are untouched; closing a node
    /// also forgets its open descendants so they come back closed.
    pub fn toggle(&mut self, path: &[usize]) {
        if self.0.remove(path) {
            self.0.retain(|open| !open.starts_with(path));
        } else {
            self.0.insert(path.to_vec());
        }
    }
}

/// An expandable tree of facet terms.
///
/// Every node is drawn by the same [`HierarchyEntry`] component, which
/// renders itself for its children. The component's template is built once
/// at compile time; child instances are only created when their parent is
/// open, so the depth of the tree never affects how much is mounted up front.
///
/// Every node starts closed. To reset the tree when new data arrives, give
/// this component a fresh `key`.
#[component]
pub fn FacetHierarchy(
    nodes: Vec<HierarchyNode>,
    /// Called with the node label when a term is chosen.
    on_select: EventHandler<String>,
) -> Element {
    let open = use_signal(OpenPaths::default);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        HierarchyList { nodes: nodes, open: open, on_select: on_select }
    }
}

#[component]
fn HierarchyList(
    nodes: Vec<HierarchyNode>,
    open: Signal<OpenPaths>,
    on_select: EventHandler<String>,
) -> Element {
    rsx! {
        ul { class: "hierarchy", role: "tree",
            for (index, node) in nodes.iter().enumerate() {
                HierarchyEntry {
                    key: "{index}-{node.label}",
                    node: node.clone(),
                    path: vec![index],
                    open: open,
                    on_select: on_select,
                }
            }
        }
    }
}

fn child_path(parent: &[usize], index: usize) -> Vec<usize> {
    let mut path = parent.to_vec();
    path.push(index);
    path
}

/// One term in a [`FacetHierarchy`] and, while open, its subtree.
///
/// The toggle flips only this entry's path. Leaves have no toggle.
#[component]
pub fn HierarchyEntry(
    node: HierarchyNode,
    path: Vec<usize>,
    open: Signal<OpenPaths>,
    on_select: EventHandler<String>,
) -> Element {
    let mut open_paths = open;
    let has_children = node.has_children();
    let is_open = has_children && open.read().is_open(&path);
    let depth = path.len().saturating_sub(1);
    let label = node.label.clone();
    let toggle_path = path.clone();
    let expanded = has_children.then_some(if is_open { "true" } else { "false" });
    let toggle_label = if is_open { "Collapse" } else { "Expand" };

    rsx! {
        li {
            class: "hierarchy-entry",
            role: "treeitem",
            "data-depth": "{depth}",
            "aria-expanded": expanded,
            div { class: "hierarchy-row",
                if has_children {
                    button {
                        class: "hierarchy-toggle",
                        r#type: "button",
                        "aria-label": toggle_label,
                        onclick: move |_| open_paths.write().toggle(&toggle_path),
                        if is_open { "−" } else { "+" }
                    }
                } else {
                    span { class: "hierarchy-spacer" }
                }
                button {
                    class: "hierarchy-label",
                    r#type: "button",
                    onclick: move |_| on_select.call(label.clone()),
                    "{node.label}"
                }
                span { class: "hierarchy-count", "({node.count})" }
            }
            if is_open {
                ul { class: "hierarchy-children", role: "group",
                    for (index, child) in node.children.iter().enumerate() {
                        HierarchyEntry {
                            key: "{index}-{child.label}",
                            node: child.clone(),
                            path: child_path(&path, index),
                            open: open,
                            on_select: on_select,
                        }
                    }
                }
            }
        }
    }
}
