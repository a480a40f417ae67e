/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for weex-connector tests

use wiremock::MockServer;

/// Setup a mock HTTP server for testing
#[allow(dead_code)]
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Successful WEEX envelope around `data`
#[allow(dead_code)]
pub fn success_body(data: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "code": "00000",
        "msg": "success",
        "requestTime": 1_700_000_000_000_i64,
        "data": data,
    })
}

/// Rejected WEEX envelope carrying an exchange error message
#[allow(dead_code)]
pub fn error_body(code: &str, msg: &str) -> serde_json::Value {
    serde_json::json!({
        "code": code,
        "msg": msg,
        "requestTime": 1_700_000_000_000_i64,
        "data": null,
    })
}

/// Canonical symbols used across translation tests
#[allow(dead_code)]
pub fn sample_symbols() -> Vec<&'static str> {
    vec!["BTCUSDT", "ETHUSDT_SPBL", "ordersUSDT", ""]
}
