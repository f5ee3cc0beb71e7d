//! Call-context records, one per traced invocation.

use std::sync::{Arc, Mutex};

use crate::code::CodeObject;

/// One record on the emulated call-stack.
///
/// A record owns its code descriptor and, while linked on a thread's stack,
/// one claim on the caller's record below it. The back-link is set by the
/// push operation and cleared again when the owning guard retires; outside
/// that window it is always empty. A record is reclaimed once the guard, the
/// linkage of any frame above it, and every external holder have released
/// their claims.
#[derive(Debug)]
pub struct FrameRecord {
    code: Arc<CodeObject>,
    back: Mutex<Option<Arc<FrameRecord>>>,
}

impl FrameRecord {
    /// Allocate a fresh, unlinked record for one invocation.
    ///
    /// Re-entrant calls into the same code each get their own record; a
    /// record still linked on some stack must not be pushed again.
    pub fn new(code: Arc<CodeObject>) -> Arc<Self> {
        Arc::new(Self {
            code,
            back: Mutex::new(None),
        })
    }

    #[inline]
    pub fn code(&self) -> &Arc<CodeObject> {
        &self.code
    }

    /// Caller's record, if any. Clones the link; the stack keeps its claim.
    pub fn back(&self) -> Option<Arc<FrameRecord>> {
        self.back.lock().expect("frame back-link poisoned").clone()
    }

    pub(crate) fn set_back(&self, parent: Arc<FrameRecord>) {
        debug_assert!(
            !std::ptr::eq(self, Arc::as_ptr(&parent)),
            "frame linked to itself"
        );
        let mut back = self.back.lock().expect("frame back-link poisoned");
        debug_assert!(back.is_none(), "frame relinked while still linked");
        *back = Some(parent);
    }

    /// Clear the back-link and hand the claim to the caller to release.
    pub(crate) fn take_back(&self) -> Option<Arc<FrameRecord>> {
        self.back.lock().expect("frame back-link poisoned").take()
    }
}
