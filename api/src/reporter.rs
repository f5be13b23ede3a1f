//! Error reporting facade
//!
//! The processor itself never logs; this is where logging happens, gated by
//! the pure [`fd_core::should_log`] predicate so production telemetry only
//! sees server-side failures and severe client errors.

use tracing::error;

use fd_core::{process, should_log, ProcessedError, RawFailure};
use fd_shared::config::Environment;

/// Processes failures and emits diagnostics for the ones worth logging
#[derive(Debug, Clone, Copy)]
pub struct ErrorReporter {
    environment: Environment,
}

impl ErrorReporter {
    pub fn new(environment: Environment) -> Self {
        Self { environment }
    }

    /// Classify a failure, logging it when the gate allows
    pub fn report(&self, failure: &RawFailure) -> ProcessedError {
        let processed = process(failure);

        if should_log(&processed, self.environment) {
            error!(
                code = %processed.code,
                status = processed.status,
                technical = processed.technical_message.as_deref().unwrap_or("-"),
                "request failed: {}",
                processed.message
            );
        }

        processed
    }
}

/// Transient error holder for one UI action
///
/// The state analogue of the original error hook: a screen handles a
/// failure, renders the processed error until the user dismisses it or
/// retries, then clears it.
#[derive(Debug, Clone)]
pub struct ErrorState {
    reporter: ErrorReporter,
    current: Option<ProcessedError>,
}

impl ErrorState {
    pub fn new(environment: Environment) -> Self {
        Self {
            reporter: ErrorReporter::new(environment),
            current: None,
        }
    }

    /// Process a failure and keep it as the current error
    pub fn handle(&mut self, failure: &RawFailure) -> &ProcessedError {
        let processed = self.reporter.report(failure);
        self.current.insert(processed)
    }

    /// Dismiss the current error
    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&ProcessedError> {
        self.current.as_ref()
    }

    pub fn has_error(&self) -> bool {
        self.current.is_some()
    }
}
