//! Tracing setup for binaries embedding the crate.
//!
//! All stage diagnostics (template configured, applied, every skip reason,
//! final processed-count) are `tracing` events: a pure side channel that
//! never affects stage results or control flow.

use tracing_subscriber::EnvFilter;

/// Initializes a global env-filtered `tracing` subscriber.
///
/// Safe to call more than once; subsequent calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init_tracing();
        init_tracing();
    }
}
