//! Runtime gate for frame-stack diagnostics.

use once_cell::sync::Lazy;

static ENV_TRACE: Lazy<bool> = Lazy::new(|| {
    std::env::var_os("FRAMESTACK_TRACE").is_some_and(|value| value != "0")
});

/// Whether push/pop tracing and stack dumps are active.
///
/// Enabled by the `frame-trace` cargo feature or the `FRAMESTACK_TRACE`
/// environment variable, read once at first use. The traced code paths are
/// identical either way; only the emission is gated.
#[inline]
pub fn frame_trace_enabled() -> bool {
    cfg!(feature = "frame-trace") || *ENV_TRACE
}
