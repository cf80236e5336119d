use axum::{Json, extract::State, extract::rejection::JsonRejection};

use crate::{
    error::BridgeError,
    server::AppState,
    types::{PlayBody, PlayResponse},
};

/// Starts playback of a playlist.
///
/// Answers with a fixed `{status: "playing", playlistUri}` confirmation once
/// Spotify accepts the request; the upstream body is never inspected.
pub async fn play(
    State(state): State<AppState>,
    body: Result<Json<PlayBody>, JsonRejection>,
) -> Result<Json<PlayResponse>, BridgeError> {
    let Json(body) = body?;
    let api = state.spotify().await?;

    api.play(body.playlist_uri.clone()).await?;
    Ok(Json(PlayResponse::playing(body.playlist_uri)))
}
