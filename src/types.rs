use serde::{Deserialize, Serialize};

pub const DEFAULT_PLAYLIST_DESCRIPTION: &str = "Created by KORA";

fn default_description() -> String {
    DEFAULT_PLAYLIST_DESCRIPTION.to_string()
}

// Inbound bodies

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistBody {
    pub name: String,
    #[serde(default = "default_description")]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddTracksBody {
    pub playlist_id: String,
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayBody {
    pub playlist_uri: String,
}

// Outbound responses

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayResponse {
    pub status: String,
    pub playlist_uri: String,
}

impl PlayResponse {
    pub fn playing(playlist_uri: String) -> Self {
        PlayResponse {
            status: "playing".to_string(),
            playlist_uri,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

// Spotify request bodies

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackToPlaylistRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartPlaybackRequest {
    pub context_uri: String,
}
