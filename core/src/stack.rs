//! Push/pop of call-context records on the current thread's stack.
//!
//! These are the low-level mutators behind [`crate::guard::FrameGuard`];
//! they are public for the rare call sites that need manual, non-scoped
//! control. Every precondition violation here is a corrupted stack in the
//! making and aborts the process rather than returning an error.

use std::sync::Arc;

use crate::check;
use crate::frame::FrameRecord;
use crate::trace;
use crate::tstate::with_frame_state;

/// Link `record` as the new top of this thread's stack.
///
/// The record must be fresh: not the current top (re-entrant calls allocate
/// distinct records) and not linked anywhere, so its back-link is empty.
/// If the stack is non-empty the old top is validated and the new record
/// takes one claim on it through the back-link.
pub fn push_frame_stack(record: &Arc<FrameRecord>) {
    check::check_frame(record);

    with_frame_state(|state| {
        let old = state.top();

        if let Some(old) = &old {
            assert!(
                !Arc::ptr_eq(old, record),
                "frame {} pushed while already on top; re-entrant calls need a fresh record",
                record.code()
            );
        }
        assert!(
            record.back().is_none(),
            "frame {} pushed while still linked below another frame",
            record.code()
        );

        if let Some(old) = old {
            check::check_frame(&old);
            record.set_back(old);
        }
        state.set_top(Some(record));
    });

    if trace::frame_trace_enabled() {
        tracing::trace!(frame = %record.code(), "pushed frame");
    }
}

/// Unlink the current top, restoring the caller's record below it.
///
/// Ownership of the popped record is untouched; releasing its claims is the
/// caller's responsibility, normally the retiring guard's. Fatal on an empty
/// stack.
pub fn pop_frame_stack() {
    let popped = with_frame_state(|state| {
        let top = state.top().expect("pop from an empty frame stack");
        state.set_top(top.back().as_ref());
        top
    });

    if trace::frame_trace_enabled() {
        tracing::trace!(frame = %popped.code(), "popped frame");
    }
}
