//! End-to-end: the real `reqwest` transport against an in-process server.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::Path;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde_json::{Value, json};

use wd::{Dialect, SessionOptions};

async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn options_for(addr: SocketAddr, capabilities: Value) -> SessionOptions {
    SessionOptions {
        hostname: addr.ip().to_string(),
        port: addr.port(),
        capabilities,
        ..SessionOptions::default()
    }
}

/// A legacy server: echoes `desiredCapabilities` as the flat `value` and
/// reports `sessionId` beside it.
fn legacy_app(visited: Arc<Mutex<Vec<String>>>) -> Router {
    let navigate_log = Arc::clone(&visited);
    let delete_log = Arc::clone(&visited);
    Router::new()
        .route(
            "/session",
            post(|Json(body): Json<Value>| async move {
                let caps = body["desiredCapabilities"].clone();
                Json(json!({"sessionId": "legacy-77", "status": 0, "value": caps}))
            }),
        )
        .route(
            "/session/:id/url",
            post(move |Path(id): Path<String>, Json(body): Json<Value>| async move {
                navigate_log
                    .lock()
                    .unwrap()
                    .push(format!("navigate {id} {}", body["url"]));
                Json(json!({"status": 0, "value": null}))
            }),
        )
        .route(
            "/session/:id",
            delete(move |Path(id): Path<String>| async move {
                delete_log.lock().unwrap().push(format!("delete {id}"));
                Json(json!({"status": 0, "value": null}))
            }),
        )
}

#[tokio::test]
async fn test_flat_capabilities_against_legacy_server() {
    let visited = Arc::new(Mutex::new(Vec::new()));
    let addr = serve(legacy_app(Arc::clone(&visited))).await;

    let client = wd::new_session(options_for(addr, json!({"browserName": "foobar"})))
        .await
        .unwrap();

    assert_eq!(client.session_id(), "legacy-77");
    assert_eq!(client.dialect(), Dialect::JsonWire);
    assert_eq!(client.capabilities()["browserName"], "foobar");
    assert!(client.has_command("getElementLocation"));
    assert!(!client.has_command("getElementRect"));

    client
        .execute("navigateTo", json!({"url": "https://a.example"}))
        .await
        .unwrap();
    client.end().await.unwrap();

    assert_eq!(
        visited.lock().unwrap().as_slice(),
        [
            "navigate legacy-77 \"https://a.example\"",
            "delete legacy-77"
        ]
    );
}

#[tokio::test]
async fn test_structured_capabilities_against_modern_server() {
    let app = Router::new()
        .route(
            "/session",
            post(|Json(body): Json<Value>| async move {
                // a W3C server only reads the structured shape
                let browser = body["capabilities"]["alwaysMatch"]["browserName"].clone();
                Json(json!({
                    "value": {
                        "sessionId": "w3c-11",
                        "capabilities": {"browserName": browser},
                    }
                }))
            }),
        )
        .route(
            "/session/:id/url",
            get(|| async { Json(json!({"value": "https://current.example"})) }),
        );
    let addr = serve(app).await;

    let client = wd::new_session(options_for(
        addr,
        json!({"alwaysMatch": {"browserName": "firefox"}, "firstMatch": [{}]}),
    ))
    .await
    .unwrap();

    assert_eq!(client.session_id(), "w3c-11");
    assert_eq!(client.dialect(), Dialect::WebDriver);
    assert!(client.has_command("getElementRect"));

    let url = client.execute("getUrl", Value::Null).await.unwrap();
    assert_eq!(url, json!("https://current.example"));
}

#[tokio::test]
async fn test_server_error_translated_over_the_wire() {
    let app = Router::new()
        .route(
            "/session",
            post(|| async {
                Json(json!({"value": {"sessionId": "w3c-12", "capabilities": {}}}))
            }),
        )
        .route(
            "/session/:id/element",
            post(|| async {
                (
                    axum::http::StatusCode::NOT_FOUND,
                    Json(json!({
                        "value": {
                            "error": "no such element",
                            "message": "Unable to locate element #gone",
                        }
                    })),
                )
            }),
        );
    let addr = serve(app).await;

    let client = wd::new_session(options_for(addr, json!({})))
        .await
        .unwrap();
    let error = client
        .execute(
            "findElement",
            json!({"using": "css selector", "value": "#gone"}),
        )
        .await
        .unwrap_err();

    assert_eq!(error.protocol_error_name(), Some("no such element"));
    assert_eq!(error.http_status(), Some(404));
}
