//! Health endpoint integration tests.

mod common;

use common::TestHarness;
use serde_json::Value;

#[tokio::test]
async fn health_check_reports_store() {
    let harness = TestHarness::new();

    let response = harness.server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "salescope-server");
    assert_eq!(body["store"], "connected");
}
