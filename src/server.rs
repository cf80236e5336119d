use axum::{
    Router,
    routing::{get, post},
};
use reqwest::Client;
use std::{net::SocketAddr, str::FromStr, sync::Arc};
use tower_http::cors::CorsLayer;

use crate::{
    Res, api,
    config::{Config, TokenSource},
    error::BridgeError,
    info,
    spotify::{SpotifyApi, auth::TokenProvider},
    success,
};

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub tokens: Arc<TokenProvider>,
    pub client: Client,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, String> {
        let tokens = TokenProvider::from_config(&config)?;
        Ok(AppState {
            config: Arc::new(config),
            tokens: Arc::new(tokens),
            client: Client::new(),
        })
    }

    /// Resolves a fresh token and binds a Spotify API handle to it.
    pub async fn spotify(&self) -> Result<SpotifyApi<'_>, BridgeError> {
        let token = self.tokens.access_token(&self.client).await?;
        Ok(SpotifyApi::new(
            &self.client,
            &self.config.spotify_api_url,
            token,
        ))
    }
}

/// Build the axum router for the bridge.
///
/// `/token` is only mounted when tokens come from the local refresh flow.
pub fn router(state: AppState) -> Router {
    let mut app = Router::new()
        .route("/health", get(api::health))
        .route("/create-playlist", post(api::create_playlist))
        .route("/add-tracks", post(api::add_tracks))
        .route("/play", post(api::play));

    if state.tokens.source() == TokenSource::Refresh {
        app = app.route("/token", get(api::token));
    }

    app.layer(CorsLayer::permissive()).with_state(state)
}

pub async fn start_api_server(config: Config) -> Res<()> {
    let addr = SocketAddr::from_str(&config.server_addr())?;
    let state = AppState::new(config)?;

    info!("Token source: {}", state.tokens.source());

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    success!("KORA Spotify Bridge running on port {}", addr.port());

    axum::serve(listener, router(state)).await?;
    Ok(())
}
