//! Shared stub upstream servers for integration tests
//!
//! Each stub is a small warp filter bound to an ephemeral local port; the
//! adapters are pointed at it via the `base_url` field in
//! `ProviderSettings`. Stubs consume the full request path so one stub can
//! stand in for either provider's endpoint layout.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use funnx_backend::config::{ProviderSettings, RelayConfig};
use warp::Filter;

pub const GEMINI_TEST_KEY: &str = "test-gemini-key";
pub const OPENROUTER_TEST_KEY: &str = "test-openrouter-key";

/// Bind a stub filter to an ephemeral local port and run it in the background
pub async fn spawn_stub<F>(filter: F) -> SocketAddr
where
    F: Filter + Clone + Send + Sync + 'static,
    F::Extract: warp::Reply,
{
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", 0))
        .await
        .expect("failed to bind stub listener");
    let addr = listener.local_addr().expect("stub listener has no address");
    tokio::spawn(warp::serve(filter).incoming(listener).run());
    addr
}

/// Relay configuration pointing both adapters at stub addresses
pub fn stub_config(gemini_addr: SocketAddr, openrouter_addr: SocketAddr) -> RelayConfig {
    RelayConfig {
        gemini: ProviderSettings::new(
            Some(GEMINI_TEST_KEY.to_string()),
            format!("http://{}", gemini_addr),
            "gemini-1.5-flash",
        ),
        openrouter: ProviderSettings::new(
            Some(OPENROUTER_TEST_KEY.to_string()),
            format!("http://{}", openrouter_addr),
            "deepseek/deepseek-r1",
        ),
    }
}

/// Gemini-shaped stub that echoes `"ok:" + message`
pub fn gemini_echo() -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    warp::post()
        .and(warp::path::tail())
        .and(warp::body::json())
        .map(|_tail: warp::path::Tail, body: serde_json::Value| {
            let message = body["contents"][0]["parts"][0]["text"]
                .as_str()
                .unwrap_or_default();
            warp::reply::json(&gemini_body(&format!("ok:{}", message)))
        })
}

/// Gemini-shaped stub that always replies with the given text
pub fn gemini_reply(
    text: &'static str,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    warp::post()
        .and(warp::path::tail())
        .map(move |_tail: warp::path::Tail| warp::reply::json(&gemini_body(text)))
}

/// OpenRouter-shaped stub that echoes `"ok:" + message`
pub fn openrouter_echo() -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone
{
    warp::post()
        .and(warp::path::tail())
        .and(warp::body::json())
        .map(|_tail: warp::path::Tail, body: serde_json::Value| {
            let message = body["messages"][0]["content"].as_str().unwrap_or_default();
            warp::reply::json(&openrouter_body(&format!("ok:{}", message)))
        })
}

/// OpenRouter-shaped stub that always replies with the given text
pub fn openrouter_reply(
    text: &'static str,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    warp::post()
        .and(warp::path::tail())
        .map(move |_tail: warp::path::Tail| warp::reply::json(&openrouter_body(text)))
}

/// Stub that counts every request it receives before answering
pub fn counting_stub(
    counter: Arc<AtomicUsize>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    warp::post()
        .and(warp::path::tail())
        .map(move |_tail: warp::path::Tail| {
            counter.fetch_add(1, Ordering::SeqCst);
            warp::reply::json(&serde_json::json!({}))
        })
}

/// Stub that returns a fixed status code and raw body
pub fn status_stub(
    status: u16,
    body: &'static str,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    warp::post()
        .and(warp::path::tail())
        .map(move |_tail: warp::path::Tail| {
            warp::reply::with_status(
                body.to_string(),
                warp::http::StatusCode::from_u16(status).unwrap(),
            )
        })
}

/// Stub that returns 200 with an arbitrary raw body (for malformed replies)
pub fn raw_body_stub(
    body: &'static str,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    warp::post()
        .and(warp::path::tail())
        .map(move |_tail: warp::path::Tail| {
            warp::reply::with_header(body.to_string(), "Content-Type", "application/json")
        })
}

/// Stub that sleeps past the adapter deadline before replying
pub fn slow_stub(
    delay: Duration,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    warp::post()
        .and(warp::path::tail())
        .and_then(move |_tail: warp::path::Tail| async move {
            tokio::time::sleep(delay).await;
            Ok::<_, std::convert::Infallible>(warp::reply::json(&serde_json::json!({})))
        })
}

fn gemini_body(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [{"text": text}]
            },
            "finishReason": "STOP"
        }]
    })
}

fn openrouter_body(text: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "gen-test",
        "choices": [{
            "message": {"role": "assistant", "content": text},
            "finish_reason": "stop"
        }]
    })
}
