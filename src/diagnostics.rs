//! Injected diagnostics sink for search internals.
//!
//! Search entry points report recoverable conditions (capture failures, size
//! mismatches) through this trait instead of only a process-global logger, so
//! tests can assert on them without capturing output streams.

/// Sink for debug and warning messages emitted during a search.
pub trait Diagnostics {
    fn debug(&self, message: &str);
    fn warn(&self, message: &str);
}

/// Forwards diagnostics to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn debug(&self, message: &str) {
        log::debug!("{message}");
    }

    fn warn(&self, message: &str) {
        log::warn!("{message}");
    }
}
