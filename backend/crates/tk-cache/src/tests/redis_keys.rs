use crate::redis_cache::{clear_pattern, entry_key};
use crate::{CachedResponse, DEFAULT_KEY_PREFIX};

#[test]
fn given_request_key_when_prefixed_then_namespaced() {
    assert_eq!(
        entry_key(DEFAULT_KEY_PREFIX, "GET /tickets?page=2"),
        "tk:response:GET /tickets?page=2"
    );
}

#[test]
fn given_plain_prefix_when_building_pattern_then_appends_wildcard() {
    assert_eq!(clear_pattern(DEFAULT_KEY_PREFIX), "tk:response:*");
}

#[test]
fn given_prefix_with_glob_chars_when_building_pattern_then_escapes_them() {
    assert_eq!(clear_pattern("a*b?[c]:"), "a\\*b\\?\\[c\\]:*");
}

#[test]
fn given_cached_response_when_serialized_then_json_round_trips() {
    let response = CachedResponse::new(200, Some("application/json".into()), b"[1]".to_vec());

    let bytes = serde_json::to_vec(&response).unwrap();
    let decoded: CachedResponse = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(decoded, response);
}
