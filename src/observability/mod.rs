//! Structured logging and lightweight traversal metrics.
//!
//! This module provides:
//! - [`init_logging`] — One-time structured logging setup with `RUST_LOG` support
//! - [`TraversalStats`] — Per-walk counters, serializable to JSON

use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Initialize structured logging with `RUST_LOG` environment variable support.
///
/// Defaults to `typegraph=info` when `RUST_LOG` is not set. Call once at
/// program startup — subsequent calls are silently ignored by
/// `tracing_subscriber`.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("typegraph=info"));

    // try_init so double-init in tests doesn't panic
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();
}

/// Counters accumulated by one hierarchy walk.
///
/// `yielded` counts nodes handed to the caller, `discarded` counts nodes
/// visited but excluded by the scope, `deduplicated` counts interface
/// enqueue attempts swallowed by the diamond dedup set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TraversalStats {
    pub yielded: usize,
    pub discarded: usize,
    pub deduplicated: usize,
}

impl TraversalStats {
    /// Total nodes pulled off the frontier.
    pub fn visited(&self) -> usize {
        self.yielded + self.discarded
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
