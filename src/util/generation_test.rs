use super::*;

#[test]
fn newest_ticket_is_current() {
    let generation = RequestGeneration::new();
    let first = generation.begin();
    assert!(generation.is_current(first));
    let second = generation.begin();
    assert!(!generation.is_current(first));
    assert!(generation.is_current(second));
}

#[test]
fn retire_invalidates_everything() {
    let generation = RequestGeneration::new();
    let ticket = generation.begin();
    generation.retire();
    assert!(!generation.is_current(ticket));
    let late = generation.begin();
    assert!(!generation.is_current(late));
}

#[test]
fn clones_share_the_counter() {
    let generation = RequestGeneration::new();
    let view = generation.clone();
    let ticket = generation.begin();
    let _newer = view.begin();
    assert!(!generation.is_current(ticket));
}
