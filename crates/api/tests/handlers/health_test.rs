use serde_json::Value;

use crate::test_utils::TestContext;

#[tokio::test]
async fn test_health_check() {
    let server = TestContext::new().server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "pawsync-api");
}

#[tokio::test]
async fn test_version() {
    let server = TestContext::new().server();

    let body: Value = server.get("/version").await.json();

    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}
