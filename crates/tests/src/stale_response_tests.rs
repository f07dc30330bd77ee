use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use search_client::{Reconciliation, SearchService, SearchSession, SessionStatus};

use crate::common::{page_body, spawn_stub, Reply};

/// The newer request's reply lands first; the older one arrives after and
/// must not overwrite it.
#[tokio::test]
async fn older_reply_arriving_late_is_discarded() {
    let stub = spawn_stub().await;
    let client = stub.client();
    let mut session = SearchSession::default();

    session.submit_search("lung");
    let first = session.change_page(2);
    let second = session.change_page(3);

    stub.reply_search(Reply::Json(StatusCode::OK, page_body(42, 20, 10, &["page three"])));
    let second_outcome = client.search(&second.params).await;
    stub.reply_search(Reply::Json(StatusCode::OK, page_body(42, 10, 10, &["page two"])));
    let first_outcome = client.search(&first.params).await;

    assert_eq!(session.complete(second.seq, second_outcome), Reconciliation::Applied);
    assert_eq!(session.complete(first.seq, first_outcome), Reconciliation::Stale);

    let page = session.state().last_response().unwrap();
    assert_eq!(page.items[0].title, "page three");
    assert_eq!(page.current_page(), 3);
    assert_eq!(session.status(), SessionStatus::Ready);
}

/// A late failure for a superseded request does not raise the banner.
#[tokio::test]
async fn stale_failure_does_not_set_error() {
    let stub = spawn_stub().await;
    let client = stub.client();
    let mut session = SearchSession::default();

    let first = session.submit_search("lung");
    let second = session.add_filter("efo_labels_str", "cancer");

    stub.reply_search(Reply::Json(StatusCode::OK, page_body(3, 0, 10, &["filtered"])));
    let second_outcome = client.search(&second.params).await;
    stub.reply_search(Reply::Raw(StatusCode::BAD_GATEWAY, "upstream timeout"));
    let first_outcome = client.search(&first.params).await;
    assert!(first_outcome.is_err());

    session.complete(second.seq, second_outcome);
    assert_eq!(session.complete(first.seq, first_outcome), Reconciliation::Stale);
    assert_eq!(session.state().error(), None);
    assert_eq!(session.state().last_response().unwrap().total, 3);
}

/// While a newer request is outstanding, the older reply changes nothing.
#[tokio::test]
async fn in_flight_newer_request_keeps_session_loading() {
    let stub = spawn_stub().await;
    let client = stub.client();
    let mut session = SearchSession::default();

    let first = session.submit_search("lung");
    let _second = session.change_page(2);

    let outcome = client.search(&first.params).await;
    assert_eq!(session.complete(first.seq, outcome), Reconciliation::Stale);
    assert_eq!(session.status(), SessionStatus::Loading);
    assert!(session.state().last_response().is_none());
}
