use super::*;
use axum::Router;
use axum::routing::get;
use serde_json::{Value, json};

use crate::config::HostConfig;

#[test]
fn upstream_url_without_query_is_base() {
    assert_eq!(upstream_url("http://up/api/snippets", None), "http://up/api/snippets");
    assert_eq!(upstream_url("http://up/api/snippets", Some("")), "http://up/api/snippets");
}

#[test]
fn upstream_url_appends_query() {
    assert_eq!(
        upstream_url("http://up/api/snippets", Some("category=CSS")),
        "http://up/api/snippets?category=CSS"
    );
}

// =============================================================
// Pass-through against an in-process upstream
// =============================================================

async fn fake_list(RawQuery(query): RawQuery) -> axum::Json<Value> {
    let category = query
        .as_deref()
        .and_then(|q| q.strip_prefix("category="))
        .unwrap_or("PHP")
        .to_owned();
    axum::Json(json!([{
        "id": 1,
        "title": "hello",
        "description": "prints hello",
        "category": category,
        "code": "echo 1;"
    }]))
}

async fn fake_create(body: String) -> (StatusCode, String) {
    let mut created: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
    if created.is_null() {
        return (StatusCode::UNPROCESSABLE_ENTITY, "{}".to_owned());
    }
    created["id"] = json!(99);
    (StatusCode::CREATED, created.to_string())
}

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

async fn host_with_upstream(upstream_url: String) -> String {
    let config = HostConfig { port: 0, upstream_url };
    serve(crate::routes::api_routes(AppState::new(&config))).await
}

#[tokio::test]
async fn list_forwards_category_query() {
    let upstream = serve(Router::new().route("/api/snippets", get(fake_list).post(fake_create))).await;
    let host = host_with_upstream(format!("{upstream}/api/snippets")).await;

    let resp = reqwest::get(format!("{host}/api/snippets?category=HTML")).await.unwrap();

    assert_eq!(resp.status().as_u16(), 200);
    assert!(
        resp.headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.starts_with("application/json"))
    );
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body[0]["category"], "HTML");
}

#[tokio::test]
async fn create_forwards_body_and_status() {
    let upstream = serve(Router::new().route("/api/snippets", get(fake_list).post(fake_create))).await;
    let host = host_with_upstream(format!("{upstream}/api/snippets")).await;

    let payload = json!({ "title": "t", "description": "d", "category": "CSS", "code": "a { }" });
    let resp = reqwest::Client::new()
        .post(format!("{host}/api/snippets"))
        .json(&payload)
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 201);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["id"], 99);
    assert_eq!(body["code"], "a { }");
}

#[tokio::test]
async fn unreachable_upstream_is_bad_gateway() {
    let host = host_with_upstream("http://127.0.0.1:1/api/snippets".to_owned()).await;

    let resp = reqwest::get(format!("{host}/api/snippets")).await.unwrap();

    assert_eq!(resp.status().as_u16(), 502);
    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].as_str().is_some_and(|e| e.starts_with("upstream request failed")));
}

#[tokio::test]
async fn healthz_is_ok() {
    let host = host_with_upstream("http://127.0.0.1:1/api/snippets".to_owned()).await;
    let resp = reqwest::get(format!("{host}/healthz")).await.unwrap();
    assert_eq!(resp.status().as_u16(), 200);
}
