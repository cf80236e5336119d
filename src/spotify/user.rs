use reqwest::Method;
use serde_json::Value;

use crate::{error::BridgeError, utils};

use super::SpotifyApi;

impl SpotifyApi<'_> {
    /// Fetches the profile of the user owning the token (`GET /me`).
    pub async fn current_user(&self) -> Result<Value, BridgeError> {
        let res = self.request(Method::GET, &["me"])?.send().await?;
        Self::relay(res).await
    }

    /// Returns the `id` of the current user.
    pub async fn current_user_id(&self) -> Result<String, BridgeError> {
        let me = self.current_user().await?;
        utils::non_empty_str(&me, "id")
            .map(str::to_string)
            .ok_or(BridgeError::MissingField("id"))
    }
}
