//! Tracing/logging setup for the browser app.
//!
//! The native subscriber serves host-side test runs (the client's black-box
//! HTTP tests install it).

/// Initialize process-wide tracing.
///
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init() {
    tracing::init();
}

/// Subscriber configuration (filters, writers).
pub mod tracing;

/// Browser console writer.
#[cfg(target_arch = "wasm32")]
pub mod console;
