//! In-process stub of the request-tracking server.
//!
//! Serves the four lifecycle endpoints with canned responses and records
//! every call it receives, so tests can assert on ordering, bodies, and
//! short-circuit behavior.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// A canned answer for one stub endpoint.
#[derive(Clone)]
pub enum StubResponse {
    /// 200 with the given JSON body.
    Json(Value),
    /// The given error status with a plain-text body.
    Status(u16),
    /// 200 with a body that is not valid JSON.
    Garbage,
}

/// Canned answers for all four endpoints.
#[derive(Clone)]
pub struct StubBehavior {
    pub create: StubResponse,
    pub start: StubResponse,
    pub accept: StubResponse,
    pub complete: StubResponse,
}

impl StubBehavior {
    /// The happy path: one request `id` threaded through all four states.
    pub fn happy(id: &str) -> Self {
        Self {
            create: StubResponse::Json(proof_request(id, "created", None)),
            start: StubResponse::Json(proof_request(id, "pending", None)),
            accept: StubResponse::Json(proof_request(id, "accepted", None)),
            complete: StubResponse::Json(proof_request(id, "completed", Some("ab12"))),
        }
    }
}

/// A minimal proof-request payload in the server's wire shape.
pub fn proof_request(id: &str, status: &str, proof: Option<&str>) -> Value {
    json!({
        "id": id,
        "min_age": 18,
        "current_date": "20260807",
        "status": status,
        "citizenship": null,
        "proof": proof,
    })
}

struct StubState {
    behavior: StubBehavior,
    calls: Mutex<Vec<(String, Value)>>,
}

/// Handle to a running stub server.
pub struct StubServer {
    pub base_url: String,
    state: Arc<StubState>,
}

impl StubServer {
    /// Bind to an ephemeral port and serve the canned behavior.
    pub async fn spawn(behavior: StubBehavior) -> Self {
        let state = Arc::new(StubState {
            behavior,
            calls: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/request/create", post(handle_create))
            .route("/request/start", post(handle_start))
            .route("/request/accept", post(handle_accept))
            .route("/request/complete", post(handle_complete))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    /// The endpoint names hit so far, in order.
    pub fn endpoints(&self) -> Vec<String> {
        self.state
            .calls
            .lock()
            .unwrap()
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// The JSON body received by the given call index.
    pub fn body(&self, index: usize) -> Value {
        self.state.calls.lock().unwrap()[index].1.clone()
    }

    pub fn call_count(&self) -> usize {
        self.state.calls.lock().unwrap().len()
    }
}

async fn handle_create(State(state): State<Arc<StubState>>, Json(body): Json<Value>) -> Response {
    respond(&state, "create", body)
}

async fn handle_start(State(state): State<Arc<StubState>>, Json(body): Json<Value>) -> Response {
    respond(&state, "start", body)
}

async fn handle_accept(State(state): State<Arc<StubState>>, Json(body): Json<Value>) -> Response {
    respond(&state, "accept", body)
}

async fn handle_complete(State(state): State<Arc<StubState>>, Json(body): Json<Value>) -> Response {
    respond(&state, "complete", body)
}

fn respond(state: &StubState, name: &str, body: Value) -> Response {
    state
        .calls
        .lock()
        .unwrap()
        .push((name.to_string(), body));

    let canned = match name {
        "create" => &state.behavior.create,
        "start" => &state.behavior.start,
        "accept" => &state.behavior.accept,
        _ => &state.behavior.complete,
    };

    match canned {
        StubResponse::Json(value) => Json(value.clone()).into_response(),
        StubResponse::Status(code) => (
            StatusCode::from_u16(*code).unwrap(),
            "stub failure".to_string(),
        )
            .into_response(),
        StubResponse::Garbage => (StatusCode::OK, "<!doctype html><h1>oops</h1>".to_string())
            .into_response(),
    }
}
