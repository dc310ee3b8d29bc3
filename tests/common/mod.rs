//! Shared utilities for integration testing.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::post;
use axum::Router;
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// Anvil account #0.
#[allow(dead_code)]
pub const IDENTITY_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// Anvil account #1.
#[allow(dead_code)]
pub const SIGNING_KEY: &str = "59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d";

/// Address of [`SIGNING_KEY`].
#[allow(dead_code)]
pub const SIGNING_ADDRESS: &str = "0x70997970C51812dc3A010C7d01b50e0d17dc79C8";

/// How the mock answers one JSON-RPC method.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub enum MockReply {
    /// 200 with `{"result": ...}`, echoing the request id.
    Result(Value),
    /// 200 with a JSON-RPC error object.
    RpcError { code: i64, message: String },
    /// Arbitrary status and raw body.
    Raw { status: u16, body: String },
}

/// A request the mock received.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct ReceivedCall {
    pub method: String,
    pub params: Value,
    pub signature: Option<String>,
    pub body: String,
}

#[derive(Clone, Default)]
struct MockState {
    replies: Arc<HashMap<String, MockReply>>,
    received: Arc<Mutex<Vec<ReceivedCall>>>,
}

/// Handle to a running mock JSON-RPC endpoint.
#[derive(Clone)]
pub struct MockRpc {
    pub url: String,
    received: Arc<Mutex<Vec<ReceivedCall>>>,
}

#[allow(dead_code)]
impl MockRpc {
    pub fn calls(&self) -> Vec<ReceivedCall> {
        self.received.lock().unwrap().clone()
    }

    pub fn methods(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.method).collect()
    }
}

/// Start a JSON-RPC endpoint on an ephemeral port.
///
/// Methods without a configured reply get a `-32601` error.
pub async fn start_mock_rpc(replies: Vec<(&str, MockReply)>) -> MockRpc {
    let state = MockState {
        replies: Arc::new(
            replies
                .into_iter()
                .map(|(method, reply)| (method.to_string(), reply))
                .collect(),
        ),
        received: Arc::new(Mutex::new(Vec::new())),
    };
    let received = state.received.clone();

    let app = Router::new().route("/", post(handle)).with_state(state);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    MockRpc {
        url: format!("http://{}/", addr),
        received,
    }
}

/// Start a node that answers the calls a session makes.
#[allow(dead_code)]
pub async fn start_mock_node(chain_id: u64, head: u64) -> MockRpc {
    start_mock_rpc(vec![
        ("eth_chainId", MockReply::Result(json!(format!("{:#x}", chain_id)))),
        ("eth_blockNumber", MockReply::Result(json!(format!("{:#x}", head)))),
    ])
    .await
}

/// A URL nothing listens on.
#[allow(dead_code)]
pub fn closed_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/", addr)
}

async fn handle(
    State(state): State<MockState>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
    let request: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
    let method = request["method"].as_str().unwrap_or_default().to_string();
    let id = request.get("id").cloned().unwrap_or(json!(1));

    state.received.lock().unwrap().push(ReceivedCall {
        method: method.clone(),
        params: request["params"].clone(),
        signature: headers
            .get("x-flashbots-signature")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: body.clone(),
    });

    let (status, response) = match state.replies.get(&method) {
        Some(MockReply::Result(result)) => (
            StatusCode::OK,
            json!({"jsonrpc": "2.0", "id": id, "result": result}).to_string(),
        ),
        Some(MockReply::RpcError { code, message }) => (
            StatusCode::OK,
            json!({"jsonrpc": "2.0", "id": id, "error": {"code": code, "message": message}})
                .to_string(),
        ),
        Some(MockReply::Raw { status, body }) => (
            StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            body.clone(),
        ),
        None => (
            StatusCode::OK,
            json!({"jsonrpc": "2.0", "id": id, "error": {"code": -32601, "message": "method not found"}})
                .to_string(),
        ),
    };

    (status, [(header::CONTENT_TYPE, "application/json")], response)
}
