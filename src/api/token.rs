use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{error::BridgeError, server::AppState, types::TokenResponse, warning};

/// Returns a freshly refreshed access token.
///
/// When the token endpoint itself rejects the grant, its status code is
/// forwarded together with `{"error": <upstream body>}` instead of a generic
/// 500. Every other failure renders like any other route.
pub async fn token(State(state): State<AppState>) -> Response {
    match state.tokens.access_token(&state.client).await {
        Ok(access_token) => Json(TokenResponse { access_token }).into_response(),
        Err(BridgeError::TokenEndpoint { status, body }) => {
            warning!("Token refresh failed with status {}: {}", status, body);
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, Json(json!({ "error": body }))).into_response()
        }
        Err(e) => {
            warning!("Token refresh failed: {}", e);
            e.into_response()
        }
    }
}
