//! Read-only views of the current thread's stack.
//!
//! Traceback builders capture the stack as owned snapshots; the dump walker
//! is the development-time counterpart. Both only follow back-links and never
//! change ownership, so they are safe whenever no push or pop is mid-flight
//! on this thread.

use std::io::Write;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::frame::FrameRecord;
use crate::trace;
use crate::tstate::current_frame;

/// Owned view of one stack entry, safe to keep or send across threads.
#[derive(Debug, Clone, Serialize)]
pub struct FrameSnapshot {
    pub name: Arc<str>,
    pub file: Arc<str>,
    pub line: u32,
    /// 1 is the outermost entry; the innermost has the largest depth.
    pub depth: usize,
}

/// Walk the current thread's stack, innermost entry first.
pub fn capture_stack() -> Vec<FrameSnapshot> {
    let mut records: Vec<Arc<FrameRecord>> = Vec::new();
    let mut cursor = current_frame();
    while let Some(record) = cursor {
        cursor = record.back();
        records.push(record);
    }

    let total = records.len();
    records
        .iter()
        .enumerate()
        .map(|(position, record)| {
            let code = record.code();
            FrameSnapshot {
                name: code.name_arc(),
                file: code.file_arc(),
                line: code.line(),
                depth: total - position,
            }
        })
        .collect()
}

/// Serialize the current stack as a JSON array, innermost entry first.
pub fn write_stack_json<W: Write>(writer: W) -> Result<()> {
    serde_json::to_writer_pretty(writer, &capture_stack())
        .context("failed to serialize frame stack")
}

/// Log one line per live frame via `tracing`, innermost first.
pub fn dump_frame_stack() {
    if !trace::frame_trace_enabled() {
        return;
    }
    for entry in capture_stack() {
        tracing::debug!(
            depth = entry.depth,
            "frame {} at {}:{}",
            entry.name,
            entry.file,
            entry.line
        );
    }
}
