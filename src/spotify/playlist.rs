use reqwest::Method;
use serde_json::Value;

use crate::{
    error::BridgeError,
    types::{AddTrackToPlaylistRequest, CreatePlaylistRequest},
};

use super::SpotifyApi;

impl SpotifyApi<'_> {
    /// Creates a private playlist for `user_id`.
    ///
    /// Posts `{name, description, public: false}` to
    /// `users/{user_id}/playlists` and returns Spotify's playlist object
    /// verbatim.
    pub async fn create_playlist(
        &self,
        user_id: &str,
        name: String,
        description: String,
    ) -> Result<Value, BridgeError> {
        let body = CreatePlaylistRequest {
            name,
            description,
            public: false,
        };

        let res = self
            .request(Method::POST, &["users", user_id, "playlists"])?
            .json(&body)
            .send()
            .await?;

        Self::relay(res).await
    }

    /// Appends `uris` to a playlist in the given order.
    ///
    /// The URIs are passed through unvalidated; Spotify rejects malformed ones
    /// and that rejection surfaces as [`BridgeError::Upstream`].
    pub async fn add_tracks(
        &self,
        playlist_id: &str,
        uris: Vec<String>,
    ) -> Result<Value, BridgeError> {
        let body = AddTrackToPlaylistRequest { uris };

        let res = self
            .request(Method::POST, &["playlists", playlist_id, "tracks"])?
            .json(&body)
            .send()
            .await?;

        Self::relay(res).await
    }
}
