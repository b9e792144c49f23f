mod common;

use serde_json::{Value, json};

#[tokio::test]
async fn test_redirect_success() {
    let (server, _db, repo) = common::create_test_server().await;
    common::insert_url(&repo, "promo1", "https://example.com/target").await;

    let response = server.get("/promo1").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_after_save() {
    let (server, _db, _repo) = common::create_test_server().await;

    let saved = server
        .post("/api/v1/url")
        .json(&json!({ "url": "example.org/page" }))
        .await
        .json::<Value>();
    let alias = saved["alias"].as_str().unwrap();

    let response = server.get(&format!("/{alias}")).await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.org/page");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (server, _db, _repo) = common::create_test_server().await;

    let response = server.get("/unknown").await;

    assert_eq!(response.status_code(), 404);
    assert!(response.headers().get("location").is_none());
    assert_eq!(
        response.json::<Value>(),
        json!({ "status": "ERROR", "error": "url not found" })
    );
}

#[tokio::test]
async fn test_redirect_root_is_missing_alias() {
    let (server, _db, _repo) = common::create_test_server().await;

    let response = server.get("/").await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(response.json::<Value>()["error"], "missing alias");
}

#[tokio::test]
async fn test_redirect_refuses_unsendable_location() {
    let (server, _db, repo) = common::create_test_server().await;
    common::insert_url(&repo, "ctl", "https://example.com/a\nb").await;

    let response = server.get("/ctl").await;

    assert_eq!(response.status_code(), 400);
    assert!(response.headers().get("location").is_none());
    assert_eq!(
        response.json::<Value>(),
        json!({ "status": "ERROR", "error": "invalid URL format" })
    );
}
