use super::*;

#[test]
fn fresh_session_is_not_authenticated() {
    let session = SessionContext::in_memory();
    assert!(!session.is_authenticated());
    assert_eq!(session.token(), None);
}

#[test]
fn mark_active_authenticates_without_a_readable_token() {
    let session = SessionContext::in_memory();
    session.mark_active();
    assert!(session.is_authenticated());
    assert_eq!(session.token(), None);
}

#[test]
fn stored_token_alone_authenticates() {
    let store = Arc::new(MemoryTokenStore::default());
    store.set_token("persisted");
    let session = SessionContext::new(store);
    assert!(session.is_authenticated());
}

#[test]
fn mark_inactive_clears_flag_and_token() {
    let session = SessionContext::in_memory();
    session.store_token("abc");
    assert!(session.is_authenticated());

    session.mark_inactive();
    assert!(!session.is_authenticated());
    assert_eq!(session.token(), None);
}

#[test]
fn clones_share_session_state() {
    let session = SessionContext::in_memory();
    let other = session.clone();
    other.mark_active();
    assert!(session.is_authenticated());
    session.mark_inactive();
    assert!(!other.is_authenticated());
}

#[test]
fn debug_output_hides_token_value() {
    let session = SessionContext::in_memory();
    session.store_token("secret-value");
    let rendered = format!("{session:?}");
    assert!(rendered.contains("has_token: true"));
    assert!(!rendered.contains("secret-value"));
}
