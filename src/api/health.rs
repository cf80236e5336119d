use axum::{extract::State, response::Json};
use serde_json::{Value, json};

use crate::server::AppState;

/// Liveness probe. Never touches the broker or Spotify.
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "tokenSource": state.tokens.source().to_string()
    }))
}
