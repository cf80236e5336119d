use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde_json::Value;

use crate::{
    error::BridgeError,
    server::AppState,
    types::{AddTracksBody, CreatePlaylistBody},
};

/// Creates a private playlist for the token's owner.
///
/// Looks up the current user first, then creates the playlist under that
/// user. Spotify's playlist object is returned unchanged.
pub async fn create_playlist(
    State(state): State<AppState>,
    body: Result<Json<CreatePlaylistBody>, JsonRejection>,
) -> Result<Json<Value>, BridgeError> {
    let Json(body) = body?;
    let api = state.spotify().await?;

    let user_id = api.current_user_id().await?;
    let created = api
        .create_playlist(&user_id, body.name, body.description)
        .await?;

    Ok(Json(created))
}

/// Adds tracks to an existing playlist and relays Spotify's response.
pub async fn add_tracks(
    State(state): State<AppState>,
    body: Result<Json<AddTracksBody>, JsonRejection>,
) -> Result<Json<Value>, BridgeError> {
    let Json(body) = body?;
    let api = state.spotify().await?;

    let result = api.add_tracks(&body.playlist_id, body.uris).await?;
    Ok(Json(result))
}
