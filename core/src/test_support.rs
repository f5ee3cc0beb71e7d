use std::sync::Arc;

use crate::code::{CodeFlags, CodeObject};
use crate::frame::FrameRecord;

pub(crate) fn code(name: &str) -> Arc<CodeObject> {
    CodeObject::new(name, "test.src", 7, CodeFlags::OPTIMIZED)
}

pub(crate) fn record(name: &str) -> Arc<FrameRecord> {
    FrameRecord::new(code(name))
}
