use reqwest::{Client, header::AUTHORIZATION};
use serde_json::Value;

use crate::{
    config::{ClientCredentials, Config, TokenSource},
    error::BridgeError,
    utils,
};

const NO_BROKER_TOKEN: &str = "No access token from broker";
const NO_REFRESH_TOKEN: &str = "No access token from token endpoint";

/// Resolves a bearer token for one upstream call chain.
///
/// The strategy is fixed at startup from [`Config::token_source`]. Each call
/// to [`TokenProvider::access_token`] performs a fresh acquisition: there is
/// no caching and no expiry tracking.
#[derive(Debug, Clone)]
pub enum TokenProvider {
    /// Fetch a ready-to-use token from a remote broker.
    Broker { url: String },
    /// Exchange a refresh token at the Spotify token endpoint.
    Refresh {
        token_url: String,
        credentials: ClientCredentials,
    },
}

impl TokenProvider {
    /// Builds the provider matching the configured token source.
    ///
    /// # Errors
    ///
    /// Fails when the refresh strategy is selected without credentials.
    pub fn from_config(config: &Config) -> Result<Self, String> {
        match config.token_source {
            TokenSource::Broker => Ok(TokenProvider::Broker {
                url: config.broker_url.clone(),
            }),
            TokenSource::Refresh => {
                let credentials = config.credentials.clone().ok_or_else(|| {
                    "Token source 'refresh' requires client credentials".to_string()
                })?;
                Ok(TokenProvider::Refresh {
                    token_url: config.spotify_token_url.clone(),
                    credentials,
                })
            }
        }
    }

    pub fn source(&self) -> TokenSource {
        match self {
            TokenProvider::Broker { .. } => TokenSource::Broker,
            TokenProvider::Refresh { .. } => TokenSource::Refresh,
        }
    }

    /// Produces a non-empty bearer token or fails.
    pub async fn access_token(&self, client: &Client) -> Result<String, BridgeError> {
        match self {
            TokenProvider::Broker { url } => fetch_broker_token(client, url).await,
            TokenProvider::Refresh {
                token_url,
                credentials,
            } => refresh_access_token(client, token_url, credentials).await,
        }
    }
}

/// Fetches a token from the broker.
///
/// Issues a `GET` to the broker URL and extracts `access_token` from the JSON
/// body. Any failure along the way, whether transport, status, body or a
/// missing field, is reported as [`BridgeError::MissingToken`].
pub async fn fetch_broker_token(client: &Client, url: &str) -> Result<String, BridgeError> {
    let res = client
        .get(url)
        .send()
        .await
        .map_err(|e| BridgeError::MissingToken(format!("{}: {}", NO_BROKER_TOKEN, e)))?;

    if !res.status().is_success() {
        return Err(BridgeError::MissingToken(NO_BROKER_TOKEN.to_string()));
    }

    let json: Value = res.json().await.unwrap_or(Value::Null);

    utils::non_empty_str(&json, "access_token")
        .map(str::to_string)
        .ok_or_else(|| BridgeError::MissingToken(NO_BROKER_TOKEN.to_string()))
}

/// Exchanges the configured refresh token for a fresh access token.
///
/// Sends `grant_type=refresh_token&refresh_token=<value>` form-encoded to the
/// token endpoint, authenticated with HTTP Basic client credentials.
///
/// # Errors
///
/// - [`BridgeError::TokenEndpoint`] with the upstream status and raw body when
///   the endpoint answers with a non-success status
/// - [`BridgeError::Http`] on transport failures or a non-JSON success body
/// - [`BridgeError::MissingToken`] when the body has no usable `access_token`
pub async fn refresh_access_token(
    client: &Client,
    token_url: &str,
    credentials: &ClientCredentials,
) -> Result<String, BridgeError> {
    let res = client
        .post(token_url)
        .header(
            AUTHORIZATION,
            utils::basic_credentials(&credentials.client_id, &credentials.client_secret),
        )
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", credentials.refresh_token.as_str()),
        ])
        .send()
        .await?;

    let status = res.status();
    let body = res.text().await?;

    if !status.is_success() {
        return Err(BridgeError::TokenEndpoint {
            status: status.as_u16(),
            body,
        });
    }

    let json: Value = serde_json::from_str(&body)
        .map_err(|e| BridgeError::Http(format!("Invalid token endpoint response: {}", e)))?;

    utils::non_empty_str(&json, "access_token")
        .map(str::to_string)
        .ok_or_else(|| BridgeError::MissingToken(NO_REFRESH_TOKEN.to_string()))
}
