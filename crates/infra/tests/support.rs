#![allow(dead_code)]

use std::net::TcpListener;
use std::sync::{Arc, Once};

use aisocial_infra::{ApiClient, ApiCommands};
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;
use wiremock::{MockServer, ResponseTemplate};

pub const TEST_API_KEY: &str = "test-api-key";

static TRACING: Once = Once::new();

/// Install a test-friendly tracing subscriber once per test binary.
///
/// Respects `RUST_LOG`; silent by default.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off")),
            )
            .with_test_writer()
            .try_init();
    });
}

/// Client pointed at the mock server, authenticating with [`TEST_API_KEY`].
pub fn api_client(server: &MockServer) -> Arc<ApiClient> {
    init_tracing();
    let client = ApiClient::builder()
        .base_url(server.uri())
        .api_key(TEST_API_KEY)
        .build()
        .expect("client should build");
    Arc::new(client)
}

/// Endpoint wrappers sharing the client returned alongside them.
pub fn commands(server: &MockServer) -> (Arc<ApiClient>, ApiCommands) {
    let client = api_client(server);
    (Arc::clone(&client), ApiCommands::new(client))
}

/// Base URL of a local port nothing listens on.
pub fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}")
}

/// `200` with `{"data": payload}`.
pub fn data_response(payload: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "data": payload }))
}

/// Error envelope with the given status, message and code.
pub fn error_response(status: u16, message: &str, code: &str) -> ResponseTemplate {
    ResponseTemplate::new(status)
        .set_body_json(json!({ "error": { "message": message, "code": code } }))
}

/// Minimal post payload as the server returns it.
pub fn post_json(id: &str, status: &str) -> Value {
    json!({
        "id": id,
        "content": "Hello from the tests",
        "platforms": ["twitter"],
        "status": status
    })
}
