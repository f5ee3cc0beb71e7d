//! Per-thread execution state: the slot holding the innermost live record.

use std::cell::RefCell;
use std::sync::{Arc, Weak};

use crate::frame::FrameRecord;

/// Tracks the innermost currently executing record of one thread.
///
/// The slot holds a non-owning reference: a live record is kept alive by its
/// guard and by the linkage of any frame above it, never by this slot. The
/// slot starts empty, is mutated only by push/pop, and is discarded with the
/// thread.
#[derive(Debug, Default)]
pub struct ThreadFrameState {
    top: Option<Weak<FrameRecord>>,
}

impl ThreadFrameState {
    pub const fn new() -> Self {
        Self { top: None }
    }

    /// Innermost record, or `None` outside any traced invocation.
    pub fn top(&self) -> Option<Arc<FrameRecord>> {
        self.top.as_ref().map(|weak| {
            weak.upgrade()
                .expect("frame stack top reclaimed while still current")
        })
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    pub(crate) fn set_top(&mut self, record: Option<&Arc<FrameRecord>>) {
        self.top = record.map(Arc::downgrade);
    }

    /// Clear the slot. Every guard on this thread must already be retired.
    pub fn reset(&mut self) {
        self.top = None;
    }
}

thread_local! {
    static FRAME_STATE: RefCell<ThreadFrameState> =
        const { RefCell::new(ThreadFrameState::new()) };
}

/// Run `f` with mutable access to this thread's execution state.
pub fn with_frame_state<F, R>(f: F) -> R
where
    F: FnOnce(&mut ThreadFrameState) -> R,
{
    FRAME_STATE.with(|cell| f(&mut cell.borrow_mut()))
}

/// Innermost record of the current thread, shared with the caller.
///
/// This is the accessor traceback builders and exception handlers read the
/// stack through.
pub fn current_frame() -> Option<Arc<FrameRecord>> {
    with_frame_state(|state| state.top())
}

/// Clear the current thread's slot. Embedder/test hook; live guards on this
/// thread must already be retired.
pub fn reset_frame_state() {
    with_frame_state(|state| state.reset());
}
