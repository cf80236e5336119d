#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, Response, StatusCode},
};
use httpmock::MockServer;
use kora_bridge::{
    config::{ClientCredentials, Config},
    server::{AppState, router},
};
use serde_json::Value;
use tower::ServiceExt as _;

/// Config whose broker and Spotify endpoints all point at `server`.
pub fn broker_config(server: &MockServer) -> Config {
    Config::default()
        .with_broker_url(server.url("/token"))
        .with_spotify_api_url(server.url("/v1"))
        .with_spotify_token_url(server.url("/api/token"))
}

/// Same as [`broker_config`] but using the local refresh flow.
pub fn refresh_config(server: &MockServer) -> Config {
    broker_config(server).with_credentials(ClientCredentials {
        client_id: "client-id".to_string(),
        client_secret: "client-secret".to_string(),
        refresh_token: "refresh-me".to_string(),
    })
}

pub async fn send(config: Config, request: Request<Body>) -> (StatusCode, Value) {
    let state = AppState::new(config).unwrap();
    let response = router(state).oneshot(request).await.unwrap();
    read_json(response).await
}

pub async fn read_json(response: Response<Body>) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}
