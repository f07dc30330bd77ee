use std::sync::{Arc, Mutex};

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use search_client::HttpSearchService;
use serde_json::{json, Value};
use shared_types::ServiceConfig;

/// What the stub answers with.
#[derive(Clone)]
pub enum Reply {
    Json(StatusCode, Value),
    Raw(StatusCode, &'static str),
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        match self {
            Reply::Json(status, body) => (status, Json(body)).into_response(),
            Reply::Raw(status, body) => (status, body).into_response(),
        }
    }
}

#[derive(Clone)]
struct StubState {
    search_queries: Arc<Mutex<Vec<Vec<(String, String)>>>>,
    search_reply: Arc<Mutex<Reply>>,
    labels_reply: Arc<Mutex<Reply>>,
}

/// An in-process stand-in for the remote search service, bound to an
/// ephemeral port on localhost.
pub struct StubService {
    base_url: String,
    state: StubState,
}

impl StubService {
    /// HTTP client pointed at this stub.
    pub fn client(&self) -> HttpSearchService {
        HttpSearchService::new(&ServiceConfig {
            base_url: self.base_url.clone(),
            ..ServiceConfig::default()
        })
    }

    pub fn reply_search(&self, reply: Reply) {
        *self.state.search_reply.lock().unwrap() = reply;
    }

    pub fn reply_labels(&self, reply: Reply) {
        *self.state.labels_reply.lock().unwrap() = reply;
    }

    /// Decoded query pairs of every `/service/search` call so far.
    pub fn search_queries(&self) -> Vec<Vec<(String, String)>> {
        self.state.search_queries.lock().unwrap().clone()
    }

    pub fn last_query(&self) -> Vec<(String, String)> {
        self.search_queries()
            .pop()
            .expect("no search request reached the stub")
    }
}

async fn search_handler(
    State(state): State<StubState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Reply {
    state.search_queries.lock().unwrap().push(pairs);
    state.search_reply.lock().unwrap().clone()
}

async fn labels_handler(State(state): State<StubState>) -> Reply {
    state.labels_reply.lock().unwrap().clone()
}

/// Start a stub that answers every search with an empty first page and
/// the label lookup with an empty list.
pub async fn spawn_stub() -> StubService {
    let state = StubState {
        search_queries: Arc::new(Mutex::new(Vec::new())),
        search_reply: Arc::new(Mutex::new(Reply::Json(StatusCode::OK, page_body(0, 0, 10, &[])))),
        labels_reply: Arc::new(Mutex::new(Reply::Json(StatusCode::OK, json!([])))),
    };

    let app = Router::new()
        .route("/service/search", get(search_handler))
        .route("/service/dynamicLabelFields", get(labels_handler))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub listener");
    let addr = listener.local_addr().expect("Failed to read stub address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Stub server failed");
    });

    StubService {
        base_url: format!("http://{addr}"),
        state,
    }
}

/// A successful search body with one document per title.
pub fn page_body(total: u64, start: u64, rows: u64, titles: &[&str]) -> Value {
    let results: Vec<Value> = titles
        .iter()
        .enumerate()
        .map(|(i, title)| {
            json!({
                "id": format!("doc-{}", start + i as u64),
                "title": title,
                "firstAuthor": "Smith J",
                "publication": "Nature Genetics",
                "efoLabels": ["asthma"],
                "relatedLabels": null,
            })
        })
        .collect();

    json!({
        "error": false,
        "results": results,
        "totalResults": total,
        "start": start,
        "rows": rows,
        "facets": {
            "facet_labels": [{ "value": "disease", "count": total }],
        },
    })
}

/// Build owned query pairs for comparisons.
pub fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
