//! Emulated call-stack bookkeeping for compiled code.
//!
//! Code compiled out of its source language no longer gets one call record
//! per invocation from the execution environment, yet tracebacks and
//! introspection still need a live, correctly ordered stack of callers. This
//! crate provides the record type, the per-thread top-of-stack slot, the
//! push/pop primitives, and the scope guard that keeps them paired on every
//! exit path, including unwinding.

pub mod check;
pub mod code;
pub mod frame;
pub mod guard;
pub mod snapshot;
pub mod stack;
pub mod trace;
pub mod tstate;

pub use code::{CodeFlags, CodeObject};
pub use frame::FrameRecord;
pub use guard::FrameGuard;
pub use snapshot::{FrameSnapshot, capture_stack, dump_frame_stack, write_stack_json};
pub use stack::{pop_frame_stack, push_frame_stack};
pub use tstate::{ThreadFrameState, current_frame, reset_frame_state, with_frame_state};

#[cfg(test)]
mod stack_test;
#[cfg(test)]
mod test_support;
