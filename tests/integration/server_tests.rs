//! Tests against a bound listener: CORS and the static file fallback

use std::net::SocketAddr;

use reqwest::{Client, Method, StatusCode};
use serde_json::{json, Value};
use tempfile::TempDir;

use crate::test_app;

/// Start a server on an ephemeral port serving `static_dir`
async fn spawn_server(static_dir: &TempDir) -> SocketAddr {
    let app = test_app(static_dir.path());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("No local address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });
    addr
}

fn static_dir() -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("index.html"), "<h1>Bookshelf</h1>").unwrap();
    std::fs::create_dir(dir.path().join("assets")).unwrap();
    std::fs::write(dir.path().join("assets/app.js"), "console.log('hi');").unwrap();
    dir
}

#[tokio::test]
async fn test_crud_over_http() {
    let dir = static_dir();
    let addr = spawn_server(&dir).await;
    let client = Client::new();
    let base = format!("http://{addr}");

    let response = client
        .post(format!("{base}/books"))
        .json(&json!({ "title": "X", "author": "Y" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["book"]["id"], 1);

    let response = client
        .delete(format!("{base}/books/1"))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);

    let response = client
        .delete(format!("{base}/books/1"))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.text().await.unwrap(), "Book not found");
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let dir = static_dir();
    let addr = spawn_server(&dir).await;
    let client = Client::new();

    let response = client
        .get(format!("http://{addr}/books"))
        .header("Origin", "http://localhost:5173")
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["access-control-allow-origin"], "*");

    let response = client
        .request(Method::OPTIONS, format!("http://{addr}/books/1"))
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "PUT")
        .header("Access-Control-Request-Headers", "content-type")
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let headers = response.headers();
    assert_eq!(headers["access-control-allow-origin"], "*");
    let methods = headers["access-control-allow-methods"].to_str().unwrap();
    for method in ["GET", "POST", "PUT", "DELETE"] {
        assert!(methods.contains(method), "{method} not in {methods}");
    }
    let allowed = headers["access-control-allow-headers"].to_str().unwrap();
    assert!(allowed.eq_ignore_ascii_case("content-type"));
}

#[tokio::test]
async fn test_static_fallback() {
    let dir = static_dir();
    let addr = spawn_server(&dir).await;
    let client = Client::new();

    let response = client
        .get(format!("http://{addr}/"))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "<h1>Bookshelf</h1>");

    let response = client
        .get(format!("http://{addr}/assets/app.js"))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);

    let response = client
        .get(format!("http://{addr}/missing.css"))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
