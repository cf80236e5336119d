//! # API Module
//!
//! HTTP handlers for the bridge routes. Each handler is a single linear chain:
//! parse the inbound body, resolve a fresh token, issue one or two upstream
//! calls, relay the result.
//!
//! ## Endpoints
//!
//! - [`create_playlist`] - `POST /create-playlist` `{name, description?}`
//! - [`add_tracks`] - `POST /add-tracks` `{playlistId, uris}`
//! - [`play`] - `POST /play` `{playlistUri}`
//! - [`token`] - `GET /token`, mounted only for the refresh token source
//! - [`health`] - `GET /health`
//!
//! ## Failures
//!
//! Handlers return [`crate::error::BridgeError`], which renders as HTTP 500
//! with `{"error": <message>}`. Malformed inbound JSON is caught the same way
//! instead of using axum's default 4xx rejection. The `/token` handler is the
//! one exception: a failing token endpoint's status code is forwarded as-is.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Router, routing::{get, post}};
//! use kora_bridge::api;
//!
//! let app = Router::new()
//!     .route("/play", post(api::play))
//!     .route("/health", get(api::health))
//!     .with_state(state);
//! ```

mod health;
mod player;
mod playlist;
mod token;

pub use health::health;
pub use player::play;
pub use playlist::{add_tracks, create_playlist};
pub use token::token;
