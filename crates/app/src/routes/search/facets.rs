use dioxus::prelude::*;
use search_client::config::client_config;
use shared_types::{FacetEntry, FacetStyle, HierarchyNode};
use shared_ui::components::FacetHierarchy;

use crate::controller::use_search;
use crate::format_helpers::display_label;

/// Facet groups for the current result page.
///
/// With no facet style the top-level group shows until a filter targets it,
/// and the remaining groups appear once any filter is applied. With a flat
/// or hierarchical style every group the service returned is shown.
#[component]
pub fn FacetPanel() -> Element {
    let search = use_search();
    let generation = *search.generation.read();

    let (style, groups) = {
        let session = search.session.read();
        let state = session.state();
        let style = state.facet_style();
        let top_field = state.top_level_facet_field();
        let show_top = state.show_top_level_facets();
        let show_second = state.show_second_level_facets();

        let groups: Vec<(String, Vec<FacetEntry>)> = state
            .last_response()
            .map(|page| {
                page.facets
                    .iter()
                    .filter(|(field, entries)| {
                        if entries.is_empty() {
                            return false;
                        }
                        match style {
                            FacetStyle::None if field.as_str() == top_field => show_top,
                            FacetStyle::None => show_second,
                            FacetStyle::Flat | FacetStyle::Hierarchical => true,
                        }
                    })
                    .map(|(field, entries)| (field.clone(), entries.clone()))
                    .collect()
            })
            .unwrap_or_default();
        (style, groups)
    };

    rsx! {
        for (field, entries) in groups {
            FacetGroup {
                key: "{generation}-{field}",
                field: field.clone(),
                entries: entries.clone(),
                hierarchical: style == FacetStyle::Hierarchical,
            }
        }
    }
}

#[component]
fn FacetGroup(field: String, entries: Vec<FacetEntry>, hierarchical: bool) -> Element {
    let search = use_search();
    let heading = display_label(&field, &client_config().labels).to_string();
    let select_field = field.clone();

    rsx! {
        div { class: "facet-group",
            h3 { class: "facet-group-title", "{heading}" }
            if hierarchical {
                FacetHierarchy {
                    nodes: HierarchyNode::from_facets(&entries),
                    on_select: move |term: String| search.add_filter(select_field.clone(), term),
                }
            } else {
                ul { class: "facet-list",
                    {entries.iter().enumerate().map(|(index, entry)| {
                        let field = field.clone();
                        let term = entry.value.clone();
                        rsx! {
                            li { key: "{index}", class: "facet-item",
                                button {
                                    class: "facet-link",
                                    r#type: "button",
                                    onclick: move |_| search.add_filter(field.clone(), term.clone()),
                                    "{entry.value}"
                                }
                                span { class: "facet-count", "({entry.count})" }
                            }
                        }
                    })}
                }
            }
        }
    }
}
