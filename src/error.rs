//! Errors raised while resolving a token or forwarding an action.
//!
//! Every variant renders as HTTP 500 with `{"error": <message>}`. The bridge
//! makes no distinction between bad client input and upstream failures. The
//! only exception lives in the `/token` handler, which forwards the token
//! endpoint's own status for [`BridgeError::TokenEndpoint`].

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

#[derive(Debug)]
pub enum BridgeError {
    /// No usable `access_token` was obtained.
    MissingToken(String),
    /// The token endpoint rejected the refresh-token grant.
    TokenEndpoint { status: u16, body: String },
    /// The Spotify Web API answered with a non-success status.
    Upstream { status: u16, body: String },
    /// An upstream success body lacked a field the bridge needs.
    MissingField(&'static str),
    /// Transport or decoding failure talking to an upstream service.
    Http(String),
    /// The inbound request body could not be parsed.
    InvalidBody(String),
}

impl std::fmt::Display for BridgeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingToken(reason) => write!(f, "{}", reason),
            Self::TokenEndpoint { status, body } => {
                write!(f, "Token endpoint responded with {}: {}", status, body)
            }
            Self::Upstream { status, body } => {
                write!(f, "Spotify API responded with {}: {}", status, body)
            }
            Self::MissingField(field) => write!(f, "Spotify response is missing '{}'", field),
            Self::Http(e) => write!(f, "{}", e),
            Self::InvalidBody(e) => write!(f, "Invalid request body: {}", e),
        }
    }
}

impl std::error::Error for BridgeError {}

impl From<reqwest::Error> for BridgeError {
    fn from(e: reqwest::Error) -> Self {
        BridgeError::Http(e.to_string())
    }
}

impl From<axum::extract::rejection::JsonRejection> for BridgeError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        BridgeError::InvalidBody(rejection.body_text())
    }
}

impl IntoResponse for BridgeError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}
