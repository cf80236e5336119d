use base64::{Engine as _, engine::general_purpose::STANDARD};
use reqwest::Url;
use serde_json::Value;

/// Builds the `Authorization` value for an upstream API call.
pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Builds an HTTP Basic `Authorization` value from client credentials.
///
/// The credential is `base64("<client_id>:<client_secret>")` using the
/// standard alphabet with padding, as required by the OAuth token endpoint.
///
/// # Example
///
/// ```
/// let header = basic_credentials("id", "secret");
/// assert_eq!(header, "Basic aWQ6c2VjcmV0");
/// ```
pub fn basic_credentials(client_id: &str, client_secret: &str) -> String {
    let raw = format!("{}:{}", client_id, client_secret);
    format!("Basic {}", STANDARD.encode(raw))
}

/// Extracts a non-empty string field from a JSON object.
///
/// Returns `None` when the field is absent, not a string, or empty.
pub fn non_empty_str<'a>(json: &'a Value, field: &str) -> Option<&'a str> {
    json.get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Parses an upstream body as JSON, treating an empty body as `null`.
pub fn parse_json_body(body: &str) -> Result<Value, serde_json::Error> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(body)
}

/// Appends path segments to a base URL.
///
/// Each segment is percent-encoded on its own, so an identifier containing
/// `/`, `?` or `#` stays a single segment instead of changing the endpoint.
///
/// # Example
///
/// ```
/// let url = endpoint_url("https://api.spotify.com/v1", &["playlists", "a/b", "tracks"])?;
/// assert_eq!(url.as_str(), "https://api.spotify.com/v1/playlists/a%2Fb/tracks");
/// ```
pub fn endpoint_url(base: &str, segments: &[&str]) -> Result<Url, String> {
    let mut url = Url::parse(base).map_err(|e| format!("Invalid base URL '{}': {}", base, e))?;
    url.path_segments_mut()
        .map_err(|_| format!("Base URL '{}' cannot have a path", base))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}
