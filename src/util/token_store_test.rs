use super::*;

#[test]
fn memory_store_round_trips_token() {
    let store = MemoryTokenStore::default();
    assert_eq!(store.get_token(), None);
    store.set_token("abc.def");
    assert_eq!(store.get_token(), Some("abc.def".to_owned()));
}

#[test]
fn memory_store_clear_is_idempotent() {
    let store = MemoryTokenStore::default();
    store.set_token("abc");
    store.clear_token();
    store.clear_token();
    assert_eq!(store.get_token(), None);
}

#[test]
fn memory_store_treats_blank_token_as_absent() {
    let store = MemoryTokenStore::default();
    store.set_token("   ");
    assert_eq!(store.get_token(), None);
}

#[test]
fn cookie_value_finds_named_cookie() {
    let cookies = "theme=dark; token=eyJhbGciOi.payload.sig; lang=en";
    assert_eq!(cookie_value(cookies, "token"), Some("eyJhbGciOi.payload.sig".to_owned()));
}

#[test]
fn cookie_value_ignores_prefixed_names() {
    assert_eq!(cookie_value("xtoken=nope; refresh_token=also", "token"), None);
}

#[test]
fn cookie_value_skips_empty_values() {
    assert_eq!(cookie_value("token=; other=1", "token"), None);
    assert_eq!(cookie_value("", "token"), None);
}

#[test]
fn cookie_value_decodes_percent_escapes() {
    assert_eq!(cookie_value("token=a%2Bb%3D", "token"), Some("a+b=".to_owned()));
}

#[test]
fn expired_token_cookie_targets_root_path() {
    let cookie = expired_token_cookie();
    assert!(cookie.starts_with("token=;"));
    assert!(cookie.contains("path=/"));
    assert!(cookie.contains("max-age=0"));
}

#[test]
fn cookie_store_never_writes_client_side() {
    let store = CookieTokenStore;
    store.set_token("abc");
    assert_eq!(store.get_token(), None);
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_stores_read_absent_outside_the_browser() {
    for store in [token_store_for(AuthTransport::Cookie), token_store_for(AuthTransport::Bearer)] {
        store.set_token("ignored");
        assert_eq!(store.get_token(), None);
        store.clear_token();
    }
}
