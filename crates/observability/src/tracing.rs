//! Tracing/logging initialization.
//!
//! Natively: JSON lines with timestamps, filtered by `RUST_LOG` (default
//! `info`). In the browser: plain text to the developer console, `info` and up.

#[cfg(not(target_arch = "wasm32"))]
pub fn init() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}

#[cfg(target_arch = "wasm32")]
pub fn init() {
    // No system clock in wasm32-unknown-unknown; the console stamps entries.
    let _ = tracing_subscriber::fmt()
        .with_writer(crate::console::ConsoleMakeWriter)
        .with_max_level(::tracing::Level::INFO)
        .without_time()
        .with_ansi(false)
        .with_target(false)
        .try_init();
}
