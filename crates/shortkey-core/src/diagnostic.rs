//! Diagnostic sink (§6): a write-only channel for registration warnings and
//! dispatch errors. No structured contract beyond "human-readable line".

use std::sync::Mutex;

/// Receives diagnostics the engine has no other way to surface, since
/// `process` and `register` never propagate per-item failures (§7).
pub trait DiagnosticSink: Send + Sync {
    /// A binding was skipped at registration (invalid selector, empty
    /// sequence, or an unrecognized stroke).
    fn warn(&self, message: &str);

    /// A handler returned `Err` during dispatch.
    fn error(&self, message: &str);
}

/// Default sink: forwards to `tracing` at `warn`/`error` level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn warn(&self, message: &str) {
        tracing::warn!("{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }
}

/// Test-capturing sink: records every diagnostic instead of emitting it.
#[derive(Debug, Default)]
pub struct CapturingSink {
    warnings: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
}

impl CapturingSink {
    /// Creates an empty capturing sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// All warnings recorded so far, in emission order.
    pub fn warnings(&self) -> Vec<String> {
        self.warnings.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// All errors recorded so far, in emission order.
    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl DiagnosticSink for CapturingSink {
    fn warn(&self, message: &str) {
        self.warnings
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capturing_sink_records_in_order() {
        let sink = CapturingSink::new();
        sink.warn("first");
        sink.warn("second");
        sink.error("boom");
        assert_eq!(sink.warnings(), vec!["first", "second"]);
        assert_eq!(sink.errors(), vec!["boom"]);
    }
}
