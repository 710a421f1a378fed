use super::*;

#[test]
fn extracts_token_from_plain_fragment() {
    assert_eq!(session_id_from_fragment("#session_id=abc123"), Some("abc123"));
}

#[test]
fn extracts_token_without_hash_prefix() {
    assert_eq!(session_id_from_fragment("session_id=abc123"), Some("abc123"));
}

#[test]
fn token_value_stops_at_ampersand() {
    assert_eq!(
        session_id_from_fragment("#session_id=abc123&state=xyz"),
        Some("abc123")
    );
}

#[test]
fn finds_token_after_other_params() {
    assert_eq!(
        session_id_from_fragment("#foo=bar&session_id=tok-9"),
        Some("tok-9")
    );
}

#[test]
fn missing_token_is_none() {
    assert_eq!(session_id_from_fragment("#foo=bar"), None);
    assert_eq!(session_id_from_fragment(""), None);
}

#[test]
fn empty_token_value_is_none() {
    assert_eq!(session_id_from_fragment("#session_id="), None);
    assert_eq!(session_id_from_fragment("#session_id=&state=x"), None);
}
