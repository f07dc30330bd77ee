use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use search_client::{DynamicLabels, SearchService, SearchSession};
use serde_json::json;
use shared_types::SearchErrorKind;

use crate::common::{spawn_stub, Reply};

#[tokio::test]
async fn empty_list_means_no_dynamic_labels() {
    let stub = spawn_stub().await;
    let client = stub.client();
    let mut session = SearchSession::default();
    assert_eq!(session.dynamic_labels(), &DynamicLabels::Unknown);

    let fields = client.dynamic_label_fields().await.unwrap();
    session.set_dynamic_labels(fields);

    assert_eq!(session.dynamic_labels(), &DynamicLabels::Empty);
    assert!(session.dynamic_labels().fields().is_empty());
}

#[tokio::test]
async fn reported_fields_are_kept_in_order() {
    let stub = spawn_stub().await;
    stub.reply_labels(Reply::Json(
        StatusCode::OK,
        json!(["has_disease_location_rel_labels", "part_of_rel_labels"]),
    ));
    let client = stub.client();
    let mut session = SearchSession::default();

    let fields = client.dynamic_label_fields().await.unwrap();
    session.set_dynamic_labels(fields);

    assert_eq!(
        session.dynamic_labels().fields(),
        ["has_disease_location_rel_labels", "part_of_rel_labels"]
    );
}

#[tokio::test]
async fn lookup_failure_is_reported() {
    let stub = spawn_stub().await;
    stub.reply_labels(Reply::Raw(StatusCode::SERVICE_UNAVAILABLE, "down"));
    let client = stub.client();

    let err = client.dynamic_label_fields().await.unwrap_err();
    assert_eq!(err.kind, SearchErrorKind::Transport);
}
