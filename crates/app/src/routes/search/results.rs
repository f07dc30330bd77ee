use dioxus::prelude::*;
use search_client::config::client_config;
use shared_types::{ResultPage, SearchDocument};
use shared_ui::components::{
    Badge, BadgeVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, Pagination,
};

use crate::controller::use_search;
use crate::format_helpers::related_type_label;

/// Result summary, the documents on this page and the pager.
#[component]
pub fn ResultList(page: ResultPage) -> Element {
    let search = use_search();

    if page.items.is_empty() {
        return rsx! {
            p { class: "search-empty", "No results found." }
        };
    }

    rsx! {
        p { class: "result-summary",
            "Showing {page.display_start()} to {page.display_end()} of {page.total} results"
        }
        div { class: "result-list",
            for (index, doc) in page.items.iter().enumerate() {
                ResultItem { key: "{index}", doc: doc.clone() }
            }
        }
        Pagination {
            current_page: page.current_page(),
            total_pages: page.total_pages(),
            total: page.total,
            on_change: move |n: u64| search.change_page(n),
        }
    }
}

#[component]
fn ResultItem(doc: SearchDocument) -> Element {
    let labels = &client_config().labels;
    let related: Vec<(String, Vec<String>)> = doc
        .related_labels
        .iter()
        .map(|(field, values)| (related_type_label(field, labels), values.clone()))
        .collect();

    rsx! {
        Card { class: "result-item".to_string(),
            CardHeader {
                CardTitle { "{doc.title}" }
                CardDescription {
                    "{doc.first_author}"
                    if !doc.publication.is_empty() {
                        " · {doc.publication}"
                    }
                }
            }
            CardContent {
                dl { class: "result-fields",
                    if !doc.disease_trait.is_empty() {
                        dt { "Trait" }
                        dd { "{doc.disease_trait}" }
                    }
                    if !doc.snp.is_empty() {
                        dt { "SNP" }
                        dd { "{doc.snp}" }
                    }
                    if !doc.efo_uri.is_empty() {
                        dt { "EFO" }
                        dd {
                            a { href: "{doc.efo_uri}", target: "_blank", "{doc.efo_uri}" }
                        }
                    }
                }
                LabelRow { heading: "Labels", values: doc.efo_labels.clone(), variant: BadgeVariant::Primary }
                LabelRow { heading: "Parent labels", values: doc.parent_labels.clone() }
                LabelRow { heading: "Child labels", values: doc.child_labels.clone() }
                if doc.has_related() {
                    div { class: "result-related",
                        for (index, (heading, values)) in related.iter().enumerate() {
                            LabelRow { key: "{index}", heading: heading.clone(), values: values.clone() }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn LabelRow(
    heading: String,
    values: Vec<String>,
    #[props(default = BadgeVariant::Outline)] variant: BadgeVariant,
) -> Element {
    if values.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "label-row",
            span { class: "label-row-heading", "{heading}" }
            for (index, value) in values.iter().enumerate() {
                Badge { key: "{index}", variant: variant, "{value}" }
            }
        }
    }
}
