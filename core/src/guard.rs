//! Scope-bound acquisition of a stack slot for one invocation.

use std::sync::Arc;

use crate::check;
use crate::frame::FrameRecord;
use crate::stack::{pop_frame_stack, push_frame_stack};
use crate::tstate::with_frame_state;

/// Ties one record's tenure on the stack to a lexical scope.
///
/// Construction pushes the record; dropping the guard pops it again, on
/// normal exit and during unwinding alike, so the thread's top always names
/// the innermost invocation that is actually executing. Guards retire in
/// strict reverse construction order; anything else is fatal.
///
/// A guard is single-use and not clonable, and at most one guard may be
/// active for a given record.
#[derive(Debug)]
pub struct FrameGuard {
    record: Arc<FrameRecord>,
}

impl FrameGuard {
    /// Push `record` and keep it on the stack for the guard's lifetime.
    ///
    /// The moved-in `Arc` is the guard's own claim on the record, independent
    /// of the claim the stack linkage takes below any frame pushed later.
    pub fn new(record: Arc<FrameRecord>) -> Self {
        check::check_frame(&record);

        // A cached record that is already on top must not be pushed twice.
        with_frame_state(|state| {
            if let Some(top) = state.top() {
                assert!(
                    !Arc::ptr_eq(&top, &record),
                    "frame {} is already the current top",
                    record.code()
                );
            }
        });

        push_frame_stack(&record);
        crate::snapshot::dump_frame_stack();

        Self { record }
    }

    /// Wrapped record, shared: the caller becomes a co-owner.
    pub fn frame(&self) -> Arc<FrameRecord> {
        Arc::clone(&self.record)
    }

    /// Wrapped record, borrowed for read-only use within the guard's scope.
    pub fn frame_ref(&self) -> &FrameRecord {
        check::check_frame(&self.record);
        &self.record
    }
}

impl Drop for FrameGuard {
    fn drop(&mut self) {
        // Our record must still be on top; otherwise guards were retired out
        // of construction order and the stack is corrupt.
        with_frame_state(|state| {
            let top = state
                .top()
                .expect("frame guard retired on an empty stack");
            assert!(
                Arc::ptr_eq(&top, &self.record),
                "frame guard for {} retired out of order",
                self.record.code()
            );
        });

        pop_frame_stack();

        with_frame_state(|state| {
            if let Some(top) = state.top() {
                assert!(
                    !Arc::ptr_eq(&top, &self.record),
                    "frame {} still on top after pop",
                    self.record.code()
                );
            }
        });

        check::check_frame(&self.record);

        // Release the caller's record now rather than when this record is
        // eventually reclaimed.
        drop(self.record.take_back());

        // The guard's own claim is the `record` field, dropped with `self`.
    }
}
