//! Configuration management for the KORA Spotify Bridge.
//!
//! This module loads configuration values from environment variables and an
//! optional `.env` file, and freezes them into an immutable [`Config`] at
//! startup. Nothing here is read again once the server is running.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Command-line flags (highest priority, applied by the binary)
//! 2. Environment variables
//! 3. `.env` file in the working directory
//! 4. Application defaults (where applicable)

use std::{env, fmt, str::FromStr};

pub const DEFAULT_PORT: u16 = 10000;
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";
pub const DEFAULT_BROKER_URL: &str = "https://kora-token-broker.onrender.com/token";
pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_SPOTIFY_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

const CREDENTIAL_VARS: [&str; 3] = [
    "SPOTIFY_CLIENT_ID",
    "SPOTIFY_CLIENT_SECRET",
    "SPOTIFY_REFRESH_TOKEN",
];

/// Loads environment variables from a `.env` file in the working directory.
///
/// A missing `.env` file is not an error: deployments usually inject real
/// environment variables, which always take precedence over the file.
pub fn load_env() {
    let _ = dotenv::dotenv();
}

/// How the bridge obtains its bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenSource {
    /// Ask the remote token broker for a ready-to-use token.
    #[default]
    Broker,
    /// Exchange a long-lived refresh token directly at the Spotify token endpoint.
    Refresh,
}

impl FromStr for TokenSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "broker" => Ok(TokenSource::Broker),
            "refresh" | "local" => Ok(TokenSource::Refresh),
            other => Err(format!(
                "Unknown token source '{}', expected 'broker' or 'refresh'",
                other
            )),
        }
    }
}

impl fmt::Display for TokenSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenSource::Broker => write!(f, "broker"),
            TokenSource::Refresh => write!(f, "refresh"),
        }
    }
}

/// Client credentials and refresh token used by the local refresh flow.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
}

// Secrets stay out of debug output.
impl fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .field("refresh_token", &"***")
            .finish()
    }
}

/// Read-only process configuration, built once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// TCP port the bridge listens on. Default: `10000`.
    pub port: u16,
    /// Host address the bridge binds to. Default: `0.0.0.0`.
    pub bind_address: String,
    /// Token acquisition strategy. Default: [`TokenSource::Broker`].
    pub token_source: TokenSource,
    /// Broker endpoint returning `{"access_token": ...}`.
    pub broker_url: String,
    /// Base URL of the Spotify Web API, without trailing slash.
    pub spotify_api_url: String,
    /// Spotify OAuth token endpoint.
    pub spotify_token_url: String,
    /// Refresh-flow credentials; required when `token_source` is [`TokenSource::Refresh`].
    pub credentials: Option<ClientCredentials>,
    /// Credential variables absent from the environment, reported by [`Config::validate`].
    pub missing_credentials: Vec<&'static str>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: DEFAULT_PORT,
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            token_source: TokenSource::Broker,
            broker_url: DEFAULT_BROKER_URL.to_string(),
            spotify_api_url: DEFAULT_SPOTIFY_API_URL.to_string(),
            spotify_token_url: DEFAULT_SPOTIFY_TOKEN_URL.to_string(),
            credentials: None,
            missing_credentials: CREDENTIAL_VARS.to_vec(),
        }
    }
}

impl Config {
    /// Builds the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error string if:
    /// - `PORT` is set but not a valid port number
    /// - `TOKEN_SOURCE` names an unknown strategy
    ///
    /// Missing refresh credentials are reported by [`Config::validate`].
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// [`Config::from_env`] delegates here with `std::env::var`; tests pass a
    /// map instead of touching the real process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| format!("Invalid PORT '{}': {}", raw, e))?,
            None => DEFAULT_PORT,
        };

        let token_source = match get("TOKEN_SOURCE") {
            Some(raw) => raw.parse::<TokenSource>()?,
            None => TokenSource::default(),
        };

        // Collected in every mode; `--token-source refresh` may select them later.
        let credentials = match (
            get("SPOTIFY_CLIENT_ID"),
            get("SPOTIFY_CLIENT_SECRET"),
            get("SPOTIFY_REFRESH_TOKEN"),
        ) {
            (Some(client_id), Some(client_secret), Some(refresh_token)) => {
                Some(ClientCredentials {
                    client_id,
                    client_secret,
                    refresh_token,
                })
            }
            _ => None,
        };

        let missing_credentials = CREDENTIAL_VARS
            .into_iter()
            .filter(|key| get(*key).is_none())
            .collect();

        Ok(Config {
            port,
            bind_address: get("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            token_source,
            broker_url: get("TOKEN_BROKER_URL").unwrap_or_else(|| DEFAULT_BROKER_URL.to_string()),
            spotify_api_url: get("SPOTIFY_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_SPOTIFY_API_URL.to_string()),
            spotify_token_url: get("SPOTIFY_API_TOKEN_URL")
                .unwrap_or_else(|| DEFAULT_SPOTIFY_TOKEN_URL.to_string()),
            credentials,
            missing_credentials,
        })
    }

    /// Override the listening port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Override the token acquisition strategy.
    pub fn with_token_source(mut self, token_source: TokenSource) -> Self {
        self.token_source = token_source;
        self
    }

    /// Override the broker URL.
    pub fn with_broker_url(mut self, url: impl Into<String>) -> Self {
        self.broker_url = url.into();
        self
    }

    /// Override the Spotify Web API base URL.
    pub fn with_spotify_api_url(mut self, url: impl Into<String>) -> Self {
        self.spotify_api_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Override the Spotify token endpoint.
    pub fn with_spotify_token_url(mut self, url: impl Into<String>) -> Self {
        self.spotify_token_url = url.into();
        self
    }

    /// Set the refresh-flow credentials and switch to [`TokenSource::Refresh`].
    pub fn with_credentials(mut self, credentials: ClientCredentials) -> Self {
        self.token_source = TokenSource::Refresh;
        self.credentials = Some(credentials);
        self.missing_credentials.clear();
        self
    }

    /// Checks that the selected strategy has what it needs.
    ///
    /// Runs after command-line overrides are applied, so `--token-source`
    /// decides whether refresh credentials are required.
    pub fn validate(&self) -> Result<(), String> {
        if self.token_source == TokenSource::Refresh && self.credentials.is_none() {
            return Err(match self.missing_credentials.first() {
                Some(key) => format!("{} must be set", key),
                None => "Token source 'refresh' requires SPOTIFY_CLIENT_ID, SPOTIFY_CLIENT_SECRET and SPOTIFY_REFRESH_TOKEN"
                    .to_string(),
            });
        }
        Ok(())
    }

    /// The `host:port` string the server binds to.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_environment_is_empty() {
        let config = Config::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.port, 10000);
        assert_eq!(config.token_source, TokenSource::Broker);
        assert_eq!(config.broker_url, DEFAULT_BROKER_URL);
        assert_eq!(config.spotify_api_url, DEFAULT_SPOTIFY_API_URL);
        assert_eq!(config.spotify_token_url, DEFAULT_SPOTIFY_TOKEN_URL);
        assert!(config.credentials.is_none());
        assert_eq!(config.server_addr(), "0.0.0.0:10000");
    }

    #[test]
    fn reads_port_and_urls() {
        let config = Config::from_lookup(lookup(&[
            ("PORT", "8080"),
            ("TOKEN_BROKER_URL", "http://broker.local/token"),
            ("SPOTIFY_API_URL", "http://api.local/v1/"),
        ]))
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.broker_url, "http://broker.local/token");
        assert_eq!(config.spotify_api_url, "http://api.local/v1");
    }

    #[test]
    fn rejects_invalid_port() {
        let err = Config::from_lookup(lookup(&[("PORT", "not-a-port")])).unwrap_err();
        assert!(err.contains("Invalid PORT"));
    }

    #[test]
    fn refresh_mode_requires_credentials() {
        let config = Config::from_lookup(lookup(&[
            ("TOKEN_SOURCE", "refresh"),
            ("SPOTIFY_CLIENT_ID", "id"),
            ("SPOTIFY_CLIENT_SECRET", "secret"),
        ]))
        .unwrap();

        assert_eq!(config.token_source, TokenSource::Refresh);
        assert_eq!(config.missing_credentials, vec!["SPOTIFY_REFRESH_TOKEN"]);
        assert_eq!(
            config.validate().unwrap_err(),
            "SPOTIFY_REFRESH_TOKEN must be set"
        );
    }

    #[test]
    fn token_source_override_beats_environment() {
        let config = Config::from_lookup(lookup(&[("TOKEN_SOURCE", "refresh")]))
            .unwrap()
            .with_token_source(TokenSource::Broker);

        assert_eq!(config.token_source, TokenSource::Broker);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn refresh_mode_collects_credentials() {
        let config = Config::from_lookup(lookup(&[
            ("TOKEN_SOURCE", "Refresh"),
            ("SPOTIFY_CLIENT_ID", "id"),
            ("SPOTIFY_CLIENT_SECRET", "secret"),
            ("SPOTIFY_REFRESH_TOKEN", "rt"),
        ]))
        .unwrap();

        assert_eq!(config.token_source, TokenSource::Refresh);
        let creds = config.credentials.unwrap();
        assert_eq!(creds.client_id, "id");
        assert_eq!(creds.client_secret, "secret");
        assert_eq!(creds.refresh_token, "rt");
    }

    #[test]
    fn broker_mode_keeps_credentials_when_present() {
        let config = Config::from_lookup(lookup(&[
            ("SPOTIFY_CLIENT_ID", "id"),
            ("SPOTIFY_CLIENT_SECRET", "secret"),
            ("SPOTIFY_REFRESH_TOKEN", "rt"),
        ]))
        .unwrap();

        assert_eq!(config.token_source, TokenSource::Broker);
        assert!(config.credentials.is_some());
        assert!(config.with_token_source(TokenSource::Refresh).validate().is_ok());
    }

    #[test]
    fn unknown_token_source_is_an_error() {
        assert!("carrier-pigeon".parse::<TokenSource>().is_err());
        assert_eq!("local".parse::<TokenSource>(), Ok(TokenSource::Refresh));
    }

    #[test]
    fn validate_catches_refresh_without_credentials() {
        let config = Config::default().with_token_source(TokenSource::Refresh);
        assert_eq!(
            config.validate().unwrap_err(),
            "SPOTIFY_CLIENT_ID must be set"
        );
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn debug_output_hides_secrets() {
        let creds = ClientCredentials {
            client_id: "id".into(),
            client_secret: "s3cr3t".into(),
            refresh_token: "r3fr3sh".into(),
        };
        let debug = format!("{:?}", creds);
        assert!(!debug.contains("s3cr3t"));
        assert!(!debug.contains("r3fr3sh"));
    }
}
