use dioxus::prelude::*;
use search_client::config::client_config;
use search_client::SessionStatus;
use shared_types::{FacetStyle, FilterCriterion, ALL_FACET_STYLES};
use shared_ui::components::{Badge, BadgeVariant, FormSelect, SearchBar, Skeleton};

use super::facets::FacetPanel;
use super::results::ResultList;
use crate::controller::use_search;
use crate::format_helpers::display_label;

/// Faceted search page: query bar, facet sidebar, applied filters and results.
#[component]
pub fn Search() -> Element {
    let search = use_search();

    let (query_text, facet_style, loading, error, page) = {
        let session = search.session.read();
        let state = session.state();
        (
            state.query_text().to_string(),
            state.facet_style(),
            session.status() == SessionStatus::Loading,
            state.error().map(str::to_string),
            state.last_response().cloned(),
        )
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./search.css") }

        div { class: "search-page",
            header { class: "search-header",
                h1 { class: "search-title", "Ontology Search" }
                SearchBar {
                    initial: query_text,
                    placeholder: "Search studies, traits and ontology labels...".to_string(),
                    on_submit: move |text: String| search.submit_search(text),
                    FormSelect {
                        label: "Facets".to_string(),
                        value: facet_style.as_str().to_string(),
                        onchange: move |evt: Event<FormData>| {
                            search.set_facet_style(FacetStyle::from_key(&evt.value()));
                        },
                        for style in ALL_FACET_STYLES.iter() {
                            option {
                                value: style.as_str(),
                                selected: *style == facet_style,
                                "{style.display_name()}"
                            }
                        }
                    }
                }
                AdditionalFields {}
            }

            if let Some(message) = error {
                div { class: "search-error", role: "alert", "{message}" }
            }

            AppliedFilters {}

            div { class: "search-body",
                aside { class: "search-facets", FacetPanel {} }
                section { class: "search-results",
                    if let Some(page) = page {
                        ResultList { page: page }
                    } else if loading {
                        for i in 0..3 {
                            Skeleton { key: "{i}", class: "result-skeleton".to_string() }
                        }
                    } else {
                        p { class: "search-empty", "Enter a query to search." }
                    }
                }
            }
        }
    }
}

/// Checkboxes for the extra fields sent with each search. Options are the
/// configured ones followed by any dynamic label fields the service reported,
/// each listed once.
#[component]
fn AdditionalFields() -> Element {
    let search = use_search();
    let config = client_config();

    let options: Vec<(String, bool)> = {
        let session = search.session.read();
        let selected = session.state().additional_fields();
        session
            .additional_field_options(&config.search.additional_field_options)
            .into_iter()
            .map(|field| {
                let checked = selected.contains(&field);
                (field, checked)
            })
            .collect()
    };

    if options.is_empty() {
        return rsx! {};
    }

    rsx! {
        fieldset { class: "additional-fields",
            legend { class: "additional-fields-legend", "Include" }
            {options.into_iter().enumerate().map(|(index, (field, checked))| {
                let label = display_label(&field, &config.labels).to_string();
                rsx! {
                    label { key: "{index}", class: "additional-field",
                        input {
                            r#type: "checkbox",
                            checked: checked,
                            onchange: move |evt: Event<FormData>| {
                                search.set_additional_field(field.clone(), evt.checked());
                            },
                        }
                        "{label}"
                    }
                }
            })}
        }
    }
}

/// Removable chips for the filters currently applied.
#[component]
fn AppliedFilters() -> Element {
    let search = use_search();
    let labels = &client_config().labels;
    let filters: Vec<FilterCriterion> = search.session.read().state().filters().to_vec();

    if filters.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "applied-filters",
            span { class: "applied-filters-label", "Filtered by" }
            {filters.into_iter().enumerate().map(|(index, criterion)| {
                let heading = display_label(&criterion.field, labels).to_string();
                let term = criterion.term.clone();
                let title = criterion.encode();
                rsx! {
                    Badge {
                        key: "{index}",
                        variant: BadgeVariant::Secondary,
                        title: title,
                        on_remove: move |_| search.remove_filter(criterion.clone()),
                        "{heading}: {term}"
                    }
                }
            })}
        }
    }
}
