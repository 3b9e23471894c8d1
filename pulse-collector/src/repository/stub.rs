//! Local AWS JSON endpoint for exercising the HTTP repositories
//!
//! Binds an ephemeral port, answers every `POST /` through a responder
//! closure keyed on the `X-Amz-Target` header, and records what was sent.

use axum::{
    Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
};
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// A request as the stub received it
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub target: String,
    pub content_type: String,
    pub body: Value,
}

type Responder = Arc<dyn Fn(&str, &Value) -> (StatusCode, Value) + Send + Sync>;

#[derive(Clone)]
struct StubState {
    responder: Responder,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

/// Running stub endpoint
pub struct StubService {
    base_url: String,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl StubService {
    /// Start serving; `responder` gets the target and request body
    pub async fn start<F>(responder: F) -> Self
    where
        F: Fn(&str, &Value) -> (StatusCode, Value) + Send + Sync + 'static,
    {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            responder: Arc::new(responder),
            calls: calls.clone(),
        };
        let app = Router::new().route("/", post(answer)).with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub listener");
        let addr = listener.local_addr().expect("Stub listener has no address");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Stub server failed");
        });

        Self {
            base_url: format!("http://{}", addr),
            calls,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Requests received so far, in arrival order
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

/// POST /
async fn answer(
    State(state): State<StubState>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String) {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string()
    };
    let target = header("x-amz-target");
    let content_type = header("content-type");
    let body: Value = serde_json::from_str(&body).unwrap_or(Value::Null);

    let (status, response) = (state.responder)(&target, &body);
    state.calls.lock().unwrap().push(RecordedCall {
        target,
        content_type,
        body,
    });

    (status, response.to_string())
}

/// AWS JSON error body for `code`
pub fn aws_error(code: &str, message: &str) -> Value {
    serde_json::json!({
        "__type": format!("com.amazonaws.service#{}", code),
        "message": message,
    })
}
