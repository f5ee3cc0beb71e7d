use std::sync::Arc;

use crate::stack::{pop_frame_stack, push_frame_stack};
use crate::test_support::record;
use crate::tstate::{current_frame, reset_frame_state, with_frame_state};

#[test]
fn push_sets_top_and_links_back() {
    let outer = record("outer");
    let inner = record("inner");

    push_frame_stack(&outer);
    let top = current_frame().expect("stack has a top");
    assert!(Arc::ptr_eq(&top, &outer));
    assert!(outer.back().is_none());
    drop(top);

    // Linking takes exactly one claim on the old top.
    assert_eq!(Arc::strong_count(&outer), 1);
    push_frame_stack(&inner);
    assert_eq!(Arc::strong_count(&outer), 2);

    let top = current_frame().expect("stack has a top");
    assert!(Arc::ptr_eq(&top, &inner));
    let back = inner.back().expect("inner is linked");
    assert!(Arc::ptr_eq(&back, &outer));
}

#[test]
fn pop_restores_previous_top_without_touching_ownership() {
    let outer = record("outer");
    let inner = record("inner");
    push_frame_stack(&outer);
    push_frame_stack(&inner);

    pop_frame_stack();

    let top = current_frame().expect("outer is current again");
    assert!(Arc::ptr_eq(&top, &outer));
    drop(top);

    // Pop leaves the popped record's back-link and claims alone; they go
    // when the record itself does.
    assert!(inner.back().is_some());
    assert_eq!(Arc::strong_count(&outer), 2);
    drop(inner);
    assert_eq!(Arc::strong_count(&outer), 1);

    pop_frame_stack();
    assert!(current_frame().is_none());
}

#[test]
#[should_panic(expected = "already on top")]
fn pushing_the_current_top_again_is_fatal() {
    let frame = record("repeat");
    push_frame_stack(&frame);
    push_frame_stack(&frame);
}

#[test]
#[should_panic(expected = "still linked below another frame")]
fn pushing_a_still_linked_record_is_fatal() {
    let outer = record("outer");
    let inner = record("inner");
    push_frame_stack(&outer);
    push_frame_stack(&inner);
    pop_frame_stack();

    // `inner` never had its back-link cleared, so it may not be reused.
    push_frame_stack(&inner);
}

#[test]
#[should_panic(expected = "pop from an empty frame stack")]
fn popping_an_empty_stack_is_fatal() {
    pop_frame_stack();
}

#[test]
fn fresh_thread_has_no_current_frame() {
    assert!(current_frame().is_none());
    with_frame_state(|state| assert!(state.is_empty()));
}

#[test]
fn reset_clears_the_thread_slot() {
    let frame = record("stale");
    push_frame_stack(&frame);
    reset_frame_state();
    assert!(current_frame().is_none());
}
