use std::cell::Cell;

use futures::executor::block_on;

use super::*;
use crate::util::token_store::MemoryTokenStore;

fn user(name: &str) -> User {
    User { name: name.to_owned(), ..User::default() }
}

#[test]
fn pending_state_reflects_session() {
    let session = SessionContext::in_memory();
    let state = AuthState::pending(&session);
    assert!(state.verifying);
    assert!(!state.authenticated);

    session.store_token("t");
    assert!(AuthState::pending(&session).authenticated);
}

#[test]
fn sync_drops_user_when_session_ends() {
    let session = SessionContext::in_memory();
    session.mark_active();
    let mut state = AuthState::pending(&session);
    state.user = Some(user("Ada"));
    state.finish_verification(&session);
    assert!(!state.verifying);
    assert_eq!(state.display_name(), Some("Ada"));

    session.mark_inactive();
    state.sync(&session);
    assert!(!state.authenticated);
    assert_eq!(state.user, None);
}

#[test]
fn verify_success_marks_session_active() {
    let session = SessionContext::in_memory();
    let ok = block_on(verify_session(&session, || async { Ok::<_, ApiError>(user("Ada")) }));
    assert!(ok);
    assert!(session.is_authenticated());
    assert_eq!(session.token(), None);
}

#[test]
fn verify_failure_leaves_guest_session() {
    let session = SessionContext::in_memory();
    let ok = block_on(verify_session(&session, || async {
        Err::<User, _>(ApiError::rejected(401, r#"{"msg":"authentication invalid"}"#))
    }));
    assert!(!ok);
    assert!(!session.is_authenticated());
}

#[test]
fn verify_network_failure_is_silent() {
    let session = SessionContext::in_memory();
    let ok = block_on(verify_session(&session, || async { Err::<(), _>(ApiError::Network("offline".into())) }));
    assert!(!ok);
}

#[test]
fn restore_skips_probe_when_token_readable() {
    let store = std::sync::Arc::new(MemoryTokenStore::default());
    crate::util::token_store::TokenStore::set_token(store.as_ref(), "abc");
    let session = SessionContext::new(store);
    let probed = Cell::new(false);
    let ok = block_on(restore_session(&session, || async {
        probed.set(true);
        Ok::<_, ApiError>(())
    }));
    assert!(ok);
    assert!(!probed.get());
}

#[test]
fn restore_probes_without_token() {
    let session = SessionContext::in_memory();
    let probed = Cell::new(false);
    let ok = block_on(restore_session(&session, || async {
        probed.set(true);
        Ok::<_, ApiError>(())
    }));
    assert!(ok);
    assert!(probed.get());
    assert!(session.is_authenticated());
}
