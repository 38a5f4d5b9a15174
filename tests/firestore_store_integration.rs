//! Integration tests for the Firestore REST tool store.
//!
//! Runs the store against a fake Firestore served by axum on a local port and
//! checks the requests it issues and how responses map back to tools.

use std::sync::{Arc, Mutex};

use axum::extract::{Path, RawQuery, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, patch};
use axum::{Json, Router};
use serde_json::{json, Map, Value};

use tool_shelf::adapters::firestore::{FirestoreConfig, FirestoreToolStore};
use tool_shelf::domain::foundation::ToolId;
use tool_shelf::domain::tool::{NewTool, ToolPatch};
use tool_shelf::ports::{StoreError, ToolStore};

// =============================================================================
// Fake Firestore
// =============================================================================

const DOC_PREFIX: &str = "projects/demo/databases/(default)/documents/tools";

#[derive(Default)]
struct FakeState {
    docs: Vec<(String, Map<String, Value>)>,
    queries: Vec<String>,
    fail_list: bool,
    next_id: u32,
}

type Shared = Arc<Mutex<FakeState>>;

fn document(id: &str, fields: &Map<String, Value>) -> Value {
    json!({ "name": format!("{}/{}", DOC_PREFIX, id), "fields": fields })
}

fn query_param<'a>(query: &'a str, key: &str) -> Option<&'a str> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v)
}

/// Serves one document per page so paging is always exercised.
async fn list_documents(State(state): State<Shared>, RawQuery(query): RawQuery) -> Response {
    let mut state = state.lock().unwrap();
    let query = query.unwrap_or_default();
    state.queries.push(query.clone());
    if state.fail_list {
        return (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response();
    }

    let index: usize = query_param(&query, "pageToken")
        .and_then(|t| t.parse().ok())
        .unwrap_or(0);
    let Some((id, fields)) = state.docs.get(index) else {
        return Json(json!({})).into_response();
    };

    let mut body = json!({ "documents": [document(id, fields)] });
    if index + 1 < state.docs.len() {
        body["nextPageToken"] = json!((index + 1).to_string());
    }
    Json(body).into_response()
}

async fn create_document(
    State(state): State<Shared>,
    RawQuery(query): RawQuery,
    Json(body): Json<Value>,
) -> Response {
    let mut state = state.lock().unwrap();
    state.queries.push(query.unwrap_or_default());
    state.next_id += 1;
    let id = format!("gen{}", state.next_id);
    let fields = body["fields"].as_object().cloned().unwrap_or_default();
    let doc = document(&id, &fields);
    state.docs.push((id, fields));
    Json(doc).into_response()
}

async fn patch_document(
    State(state): State<Shared>,
    Path((_project, _database, id)): Path<(String, String, String)>,
    RawQuery(query): RawQuery,
    Json(body): Json<Value>,
) -> Response {
    let mut state = state.lock().unwrap();
    state.queries.push(query.unwrap_or_default());
    let Some((_, fields)) = state.docs.iter_mut().find(|(doc_id, _)| *doc_id == id) else {
        return (StatusCode::NOT_FOUND, "no such document").into_response();
    };
    if let Some(patch) = body["fields"].as_object() {
        for (key, value) in patch {
            fields.insert(key.clone(), value.clone());
        }
    }
    let doc = document(&id, fields);
    Json(doc).into_response()
}

async fn delete_document(
    State(state): State<Shared>,
    Path((_project, _database, id)): Path<(String, String, String)>,
    RawQuery(query): RawQuery,
) -> Response {
    let mut state = state.lock().unwrap();
    state.queries.push(query.unwrap_or_default());
    let before = state.docs.len();
    state.docs.retain(|(doc_id, _)| *doc_id != id);
    if state.docs.len() == before {
        return (StatusCode::NOT_FOUND, "no such document").into_response();
    }
    Json(json!({})).into_response()
}

fn fields(title: &str, description: &str, url: &str) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert("title".into(), json!({ "stringValue": title }));
    map.insert("description".into(), json!({ "stringValue": description }));
    map.insert("url".into(), json!({ "stringValue": url }));
    map
}

async fn start_fake(docs: Vec<(&str, Map<String, Value>)>) -> (FirestoreToolStore, Shared) {
    let state: Shared = Arc::new(Mutex::new(FakeState {
        docs: docs.into_iter().map(|(id, f)| (id.to_string(), f)).collect(),
        ..Default::default()
    }));

    let app = Router::new()
        .route(
            "/v1/projects/:project/databases/:database/documents/tools",
            get(list_documents).post(create_document),
        )
        .route(
            "/v1/projects/:project/databases/:database/documents/tools/:id",
            patch(patch_document).delete(delete_document),
        )
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    let config = FirestoreConfig::new("demo")
        .with_base_url(format!("http://{}/v1", addr))
        .with_api_key("test-key");
    (FirestoreToolStore::new(config).unwrap(), state)
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn list_all_follows_page_tokens_in_order() {
    let (store, state) = start_fake(vec![
        ("a", fields("Hammer", "Steel", "u1")),
        ("b", fields("Saw", "Wood", "u2")),
        ("c", fields("Drill", "Cordless", "u3")),
    ])
    .await;

    let tools = store.list_all().await.unwrap();
    let titles: Vec<&str> = tools.iter().map(|t| t.title()).collect();
    assert_eq!(titles, vec!["Hammer", "Saw", "Drill"]);
    assert_eq!(tools[1].id().as_str(), "b");

    let queries = state.lock().unwrap().queries.clone();
    assert_eq!(queries.len(), 3);
    for query in &queries {
        assert_eq!(query_param(query, "key"), Some("test-key"));
        assert_eq!(query_param(query, "pageSize"), Some("300"));
    }
    assert_eq!(query_param(&queries[2], "pageToken"), Some("2"));
}

#[tokio::test]
async fn list_all_decodes_missing_fields_as_empty() {
    let mut partial = Map::new();
    partial.insert("title".into(), json!({ "stringValue": "Level" }));
    partial.insert("url".into(), json!({ "integerValue": "3" }));
    let (store, _) = start_fake(vec![("a", partial)]).await;

    let tools = store.list_all().await.unwrap();
    assert_eq!(tools[0].title(), "Level");
    assert_eq!(tools[0].description(), "");
    assert_eq!(tools[0].url(), "");
}

#[tokio::test]
async fn list_failure_maps_to_unavailable() {
    let (store, state) = start_fake(vec![]).await;
    state.lock().unwrap().fail_list = true;

    let err = store.list_all().await.unwrap_err();
    assert!(matches!(err, StoreError::Unavailable(_)));
}

#[tokio::test]
async fn add_returns_generated_id() {
    let (store, state) = start_fake(vec![]).await;

    let id = store
        .add(&NewTool {
            title: "Chisel".to_string(),
            description: "Sharp".to_string(),
            url: "https://chisel.example".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(id.as_str(), "gen1");

    let state = state.lock().unwrap();
    let (_, stored) = &state.docs[0];
    assert_eq!(stored["title"]["stringValue"], "Chisel");
    assert_eq!(stored["url"]["stringValue"], "https://chisel.example");
}

#[tokio::test]
async fn update_masks_only_patched_fields() {
    let (store, state) = start_fake(vec![("a", fields("Hammer", "Steel", "u1"))]).await;

    store
        .update(&ToolId::new("a").unwrap(), &ToolPatch::title("Claw Hammer"))
        .await
        .unwrap();

    let state = state.lock().unwrap();
    let query = state.queries.last().unwrap();
    assert_eq!(query_param(query, "updateMask.fieldPaths"), Some("title"));
    assert_eq!(query_param(query, "currentDocument.exists"), Some("true"));

    let (_, stored) = &state.docs[0];
    assert_eq!(stored["title"]["stringValue"], "Claw Hammer");
    assert_eq!(stored["description"]["stringValue"], "Steel");
}

#[tokio::test]
async fn update_of_missing_document_is_write_error() {
    let (store, _) = start_fake(vec![]).await;

    let err = store
        .update(&ToolId::new("zz").unwrap(), &ToolPatch::title("X"))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Write(_)));
}

#[tokio::test]
async fn delete_removes_document_and_tolerates_missing() {
    let (store, state) = start_fake(vec![("a", fields("Hammer", "Steel", "u1"))]).await;

    store.delete(&ToolId::new("a").unwrap()).await.unwrap();
    assert!(state.lock().unwrap().docs.is_empty());

    store.delete(&ToolId::new("a").unwrap()).await.unwrap();
}

#[tokio::test]
async fn ids_with_reserved_characters_address_their_own_document() {
    let (store, state) = start_fake(vec![
        ("a b%", fields("Hammer", "Steel", "u1")),
        ("a", fields("Saw", "Wood", "u2")),
    ])
    .await;

    store
        .update(&ToolId::new("a b%").unwrap(), &ToolPatch::title("Claw Hammer"))
        .await
        .unwrap();
    {
        let state = state.lock().unwrap();
        assert_eq!(state.docs[0].1["title"]["stringValue"], "Claw Hammer");
        assert_eq!(state.docs[1].1["title"]["stringValue"], "Saw");
    }

    store.delete(&ToolId::new("a b%").unwrap()).await.unwrap();
    let state = state.lock().unwrap();
    assert_eq!(state.docs.len(), 1);
    assert_eq!(state.docs[0].0, "a");
}

#[tokio::test]
async fn converted_documents_round_trip_through_store() {
    let (store, _) = start_fake(vec![]).await;
    let payload = NewTool {
        title: "Square".to_string(),
        description: String::new(),
        url: "u".to_string(),
    };
    let id = store.add(&payload).await.unwrap();

    let tools = store.list_all().await.unwrap();
    assert_eq!(tools.len(), 1);
    assert_eq!(tools[0].id(), &id);
    assert_eq!(tools[0].title(), "Square");
    assert_eq!(tools[0].description(), "");
}
