/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for fixedfloat-adapter tests

use fixedfloat_adapter::{ClientConfig, FixedFloatClient};
use serde_json::{Value, json};
use wiremock::{MockServer, ResponseTemplate};

pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_API_SECRET: &str = "test-api-secret";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server with the test key pair
pub fn mock_client(server: &MockServer) -> FixedFloatClient {
    mock_client_with_keys(server, TEST_API_KEY, TEST_API_SECRET)
}

pub fn mock_client_with_keys(server: &MockServer, key: &str, secret: &str) -> FixedFloatClient {
    FixedFloatClient::with_config_and_base_url(ClientConfig::default(), key, secret, &server.uri())
        .expect("client init")
}

/// Successful envelope wrapping `data`
pub fn ok_response(data: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "code": 0,
        "msg": "OK",
        "data": data,
    }))
}

/// Rejected envelope with the given code and message
pub fn error_response(code: i64, msg: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "code": code,
        "msg": msg,
    }))
}
