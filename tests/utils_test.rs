use kora_bridge::utils::*;
use serde_json::json;

#[test]
fn test_bearer() {
    assert_eq!(bearer("abc"), "Bearer abc");
}

#[test]
fn test_basic_credentials() {
    // base64("id:secret")
    assert_eq!(basic_credentials("id", "secret"), "Basic aWQ6c2VjcmV0");

    // Standard alphabet keeps its padding
    let header = basic_credentials("a", "b");
    assert_eq!(header, "Basic YTpi");
    let header = basic_credentials("ab", "c");
    assert_eq!(header, "Basic YWI6Yw==");
}

#[test]
fn test_non_empty_str() {
    let body = json!({
        "access_token": "X",
        "empty": "",
        "number": 42
    });

    assert_eq!(non_empty_str(&body, "access_token"), Some("X"));
    assert_eq!(non_empty_str(&body, "empty"), None);
    assert_eq!(non_empty_str(&body, "number"), None);
    assert_eq!(non_empty_str(&body, "missing"), None);
    assert_eq!(non_empty_str(&json!(null), "access_token"), None);
}

#[test]
fn test_parse_json_body() {
    assert_eq!(parse_json_body("").unwrap(), json!(null));
    assert_eq!(parse_json_body("  \n").unwrap(), json!(null));
    assert_eq!(
        parse_json_body(r#"{"snapshot_id":"s1"}"#).unwrap(),
        json!({"snapshot_id": "s1"})
    );
    assert!(parse_json_body("<html>").is_err());
}

#[test]
fn test_endpoint_url() {
    let url = endpoint_url("https://api.spotify.com/v1", &["me"]).unwrap();
    assert_eq!(url.as_str(), "https://api.spotify.com/v1/me");

    // Trailing slash on the base is not doubled
    let url = endpoint_url("https://api.spotify.com/v1/", &["me", "player", "play"]).unwrap();
    assert_eq!(url.as_str(), "https://api.spotify.com/v1/me/player/play");
}

#[test]
fn test_endpoint_url_keeps_ids_in_one_segment() {
    let url = endpoint_url(
        "https://api.spotify.com/v1",
        &["playlists", "p1/../../me?x=1#frag", "tracks"],
    )
    .unwrap();

    assert_eq!(
        url.as_str(),
        "https://api.spotify.com/v1/playlists/p1%2F..%2F..%2Fme%3Fx=1%23frag/tracks"
    );
    assert_eq!(url.query(), None);
    assert_eq!(url.fragment(), None);
    assert_eq!(url.path_segments().unwrap().count(), 4);
}

#[test]
fn test_endpoint_url_rejects_invalid_base() {
    assert!(endpoint_url("not a url", &["me"]).is_err());
}
