//! # Spotify Integration Module
//!
//! This module holds everything the bridge needs to talk to Spotify: resolving
//! a bearer token and issuing the handful of Web API calls the routes forward.
//!
//! ## Architecture
//!
//! ```text
//! HTTP handlers (api)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (broker fetch or refresh-token grant)
//!     ├── User (current profile)
//!     ├── Playlist Operations (create, add tracks)
//!     └── Player (start playback)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Token Lifecycle
//!
//! A token lives for exactly one inbound request. [`auth::TokenProvider`] is
//! asked for a fresh token every time and nothing is cached, so a
//! [`SpotifyApi`] value is built per request and dropped with it.
//!
//! ## Response Handling
//!
//! Upstream response bodies are treated as opaque JSON values and relayed
//! unchanged. The bridge only ever looks inside a response to extract
//! `access_token` (token endpoint, broker) or `id` (current user).
//!
//! ## API Coverage
//!
//! - `GET /me` - Current user profile
//! - `POST /users/{user_id}/playlists` - Create a private playlist
//! - `POST /playlists/{playlist_id}/tracks` - Add tracks to a playlist
//! - `PUT /me/player/play` - Start playback of a context
//! - `POST /api/token` - Refresh-token grant (accounts service)

pub mod auth;
pub mod player;
pub mod playlist;
pub mod user;

use reqwest::{Client, Method, RequestBuilder, Response, header::AUTHORIZATION};
use serde_json::Value;

use crate::{error::BridgeError, utils};

/// A Spotify Web API handle bound to one bearer token.
pub struct SpotifyApi<'a> {
    client: &'a Client,
    base_url: &'a str,
    token: String,
}

impl<'a> SpotifyApi<'a> {
    pub fn new(client: &'a Client, base_url: &'a str, token: String) -> Self {
        SpotifyApi {
            client,
            base_url,
            token,
        }
    }

    fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder, BridgeError> {
        let url = utils::endpoint_url(self.base_url, segments).map_err(BridgeError::Http)?;
        Ok(self
            .client
            .request(method, url)
            .header(AUTHORIZATION, utils::bearer(&self.token)))
    }

    /// Checks the status and hands back the body as an opaque JSON value.
    async fn relay(res: Response) -> Result<Value, BridgeError> {
        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(BridgeError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        utils::parse_json_body(&body)
            .map_err(|e| BridgeError::Http(format!("Invalid JSON from Spotify API: {}", e)))
    }

    /// Checks the status only; the body is never read.
    async fn expect_success(res: Response) -> Result<(), BridgeError> {
        let status = res.status();
        if status.is_success() {
            return Ok(());
        }

        let body = res.text().await.unwrap_or_default();
        Err(BridgeError::Upstream {
            status: status.as_u16(),
            body,
        })
    }
}
