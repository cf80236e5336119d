use reqwest::Method;

use crate::{error::BridgeError, types::StartPlaybackRequest};

use super::SpotifyApi;

impl SpotifyApi<'_> {
    /// Starts playback of a context (playlist, album) on the active device.
    ///
    /// Whatever Spotify sends back is discarded, including empty or malformed
    /// bodies. Only a transport failure or a non-success status is an error.
    pub async fn play(&self, context_uri: String) -> Result<(), BridgeError> {
        let body = StartPlaybackRequest { context_uri };

        let res = self
            .request(Method::PUT, &["me", "player", "play"])?
            .json(&body)
            .send()
            .await?;

        Self::expect_success(res).await
    }
}
