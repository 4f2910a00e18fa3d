//! Tracing/logging setup shared by the binaries.

/// Tracing configuration (filters, layers).
pub mod tracing;

/// Initialize process-wide logging at `info` unless `RUST_LOG` says otherwise.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init("info");
}

/// Initialize logging with `default_filter` used when `RUST_LOG` is unset.
pub fn init_with_default(default_filter: &str) {
    tracing::init(default_filter);
}
