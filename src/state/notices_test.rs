use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = NoticeState::default();
    let a = state.push(NoticeKind::Success, "Job created");
    let b = state.push(NoticeKind::Error, String::from("Delete failed"));
    assert!(b > a);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[1].kind, NoticeKind::Error);
}

#[test]
fn dismiss_removes_only_matching_notice() {
    let mut state = NoticeState::default();
    let a = state.push(NoticeKind::Info, "first");
    let b = state.push(NoticeKind::Info, "second");
    state.dismiss(a);
    assert_eq!(state.items.iter().map(|n| n.id).collect::<Vec<_>>(), vec![b]);
    state.dismiss(a);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = NoticeState::default();
    let a = state.push(NoticeKind::Info, "first");
    state.dismiss(a);
    assert_ne!(state.push(NoticeKind::Info, "second"), a);
}
