use pretty_assertions::assert_eq;
use search_client::{SearchService, SearchSession};
use shared_types::{FacetStyle, SearchSettings};

use crate::common::{pairs, spawn_stub};

/// A fresh search sends the query and facet style, nothing else.
#[tokio::test]
async fn fresh_search_sends_query_and_facet_style() {
    let stub = spawn_stub().await;
    let client = stub.client();
    let mut session = SearchSession::default();

    let request = session.submit_search("lung");
    client.search(&request.params).await.unwrap();

    assert_eq!(stub.last_query(), pairs(&[("q", "lung"), ("facetStyle", "NONE")]));
}

/// Filters travel as repeated `fq` keys; pagination adds `start`.
#[tokio::test]
async fn filter_then_page_sends_fq_and_start() {
    let stub = spawn_stub().await;
    let client = stub.client();
    let mut session = SearchSession::default();

    session.submit_search("lung");
    session.add_filter("efo_labels_str", "cancer");
    session.add_filter("facet_labels", "disease");
    let request = session.change_page(2);
    client.search(&request.params).await.unwrap();

    assert_eq!(
        stub.last_query(),
        pairs(&[
            ("q", "lung"),
            ("fq", r#"efo_labels_str:"cancer""#),
            ("fq", r#"facet_labels:"disease""#),
            ("facetStyle", "NONE"),
            ("start", "10"),
        ])
    );
}

/// Additional fields are sent in sorted order, each as its own key, and
/// selecting one does not issue a request on its own.
#[tokio::test]
async fn additional_fields_ride_along_with_next_request() {
    let stub = spawn_stub().await;
    let client = stub.client();
    let mut session = SearchSession::default();

    session.set_additional_field("efo_parent_labels", true);
    session.set_additional_field("efo_child_labels", true);
    assert!(stub.search_queries().is_empty());

    let request = session.submit_search("asthma");
    client.search(&request.params).await.unwrap();

    assert_eq!(
        stub.last_query(),
        pairs(&[
            ("q", "asthma"),
            ("additionalFields", "efo_child_labels"),
            ("additionalFields", "efo_parent_labels"),
            ("facetStyle", "NONE"),
        ])
    );
}

/// Changing facet style keeps applied filters and omits `start`.
#[tokio::test]
async fn facet_style_change_keeps_filters() {
    let stub = spawn_stub().await;
    let client = stub.client();
    let mut session = SearchSession::default();

    session.submit_search("heart");
    session.add_filter("efo_labels_str", "heart disease");
    let request = session.set_facet_style(FacetStyle::Hierarchical);
    client.search(&request.params).await.unwrap();

    assert_eq!(
        stub.last_query(),
        pairs(&[
            ("q", "heart"),
            ("fq", r#"efo_labels_str:"heart disease""#),
            ("facetStyle", "HIERARCHICAL"),
        ])
    );
}

/// A new top-level search drops filters from the wire.
#[tokio::test]
async fn new_search_clears_filters_on_the_wire() {
    let stub = spawn_stub().await;
    let client = stub.client();
    let mut session = SearchSession::default();

    session.submit_search("lung");
    session.add_filter("efo_labels_str", "cancer");
    let request = session.submit_search("liver");
    client.search(&request.params).await.unwrap();

    assert_eq!(stub.last_query(), pairs(&[("q", "liver"), ("facetStyle", "NONE")]));
}

/// Duplicate filters are sent twice unless de-duplication is configured.
#[tokio::test]
async fn duplicate_filters_follow_dedupe_setting() {
    let stub = spawn_stub().await;
    let client = stub.client();

    let mut tolerant = SearchSession::default();
    tolerant.add_filter("efo_labels_str", "cancer");
    let request = tolerant.add_filter("efo_labels_str", "cancer");
    client.search(&request.params).await.unwrap();
    let fq_count = stub.last_query().iter().filter(|(k, _)| k == "fq").count();
    assert_eq!(fq_count, 2);

    let mut strict = SearchSession::new(&SearchSettings {
        dedupe_filters: true,
        ..SearchSettings::default()
    });
    strict.add_filter("efo_labels_str", "cancer");
    let request = strict.add_filter("efo_labels_str", "cancer");
    client.search(&request.params).await.unwrap();
    let fq_count = stub.last_query().iter().filter(|(k, _)| k == "fq").count();
    assert_eq!(fq_count, 1);
}
