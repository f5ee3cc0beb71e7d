//! Assertion-style validation of records and descriptors.
//!
//! These catch defects in the compiled output, not data-dependent runtime
//! conditions, and are elided in optimized builds. The structural stack
//! invariants in `stack` and `guard` stay on in every build.

use crate::code::CodeObject;
use crate::frame::FrameRecord;

/// Fatal if the descriptor is malformed.
#[inline]
#[track_caller]
pub fn check_code(code: &CodeObject) {
    debug_assert!(!code.name().is_empty(), "code descriptor without a name");
    debug_assert!(!code.file().is_empty(), "code descriptor without a file");
}

/// Fatal if the record or its descriptor is malformed.
#[inline]
#[track_caller]
pub fn check_frame(record: &FrameRecord) {
    check_code(record.code());
}
