#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header::CONTENT_TYPE},
    routing::post,
};
use reqwest::Url;
use serde_json::{Value, json};
use tokio::net::TcpListener;

/// What the stub service saw for one request.
#[derive(Clone, Debug)]
pub struct Received {
    pub content_type: Option<String>,
    pub body: Value,
}

pub type Log = Arc<Mutex<Vec<Received>>>;

/// Serve `router` on an ephemeral loopback port and return the `/chat` url.
pub async fn serve(router: Router) -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    Url::parse(&format!("http://{addr}/chat")).unwrap()
}

/// Replies `reply to <message>`. Messages starting with `slow` are answered after a delay.
pub async fn echo_service() -> (Url, Log) {
    let log = Log::default();
    let router = Router::new()
        .route("/chat", post(echo_handler))
        .with_state(log.clone());
    (serve(router).await, log)
}

async fn echo_handler(
    State(log): State<Log>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Json<Value> {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    log.lock().unwrap().push(Received { content_type, body: body.clone() });

    let message = body["message"].as_str().unwrap_or_default().to_string();
    if message.starts_with("slow") {
        tokio::time::sleep(Duration::from_millis(300)).await;
    }
    Json(json!({ "reply": format!("reply to {message}") }))
}

/// Always answers with the given reply.
pub async fn fixed_reply(reply: &'static str) -> Url {
    serve(Router::new().route(
        "/chat",
        post(move || async move { Json(json!({ "reply": reply })) }),
    ))
    .await
}

/// Always answers with `status` and an empty body.
pub async fn status_service(status: StatusCode) -> Url {
    serve(Router::new().route("/chat", post(move || async move { status }))).await
}

/// Answers 200 with the given raw body.
pub async fn raw_body_service(body: &'static str) -> Url {
    serve(Router::new().route("/chat", post(move || async move { body }))).await
}

/// A url nobody is listening on.
pub async fn closed_port() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    Url::parse(&format!("http://{addr}/chat")).unwrap()
}
