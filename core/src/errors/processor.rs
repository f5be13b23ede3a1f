//! Error processor
//!
//! Single entry point converting any captured failure into a
//! [`ProcessedError`]. The processor runs inside failure-handling paths, so
//! it is total: every input variant produces a well-formed result and no
//! branch can panic. It performs no logging and no state mutation; callers
//! decide whether to log via [`should_log`].

use serde::Serialize;
use thiserror::Error;

use fd_shared::config::Environment;
use fd_shared::types::ApiErrorBody;

use super::catalog::{self, error_codes, Severity};
use super::extract::extract_error_code;

/// A failure captured at the transport boundary, already classified into
/// one of four shapes.
///
/// Constructing the variant happens exactly once, where the failure is
/// first caught; everything downstream matches on the variant instead of
/// probing properties.
#[derive(Debug, Clone, Error)]
pub enum RawFailure {
    /// The request never received a response (DNS, refused connection,
    /// timeout, TLS failure).
    #[error("network failure: {message}")]
    Network { message: String },

    /// A response arrived with an error status; the body was parsed
    /// leniently and may be partial or absent.
    #[error("http failure ({status}): {message}")]
    Http {
        status: u16,
        body: Option<ApiErrorBody>,
        message: String,
    },

    /// A non-HTTP library failure (serialization, invalid configuration,
    /// task join, ...).
    #[error("runtime failure: {message}")]
    Runtime { message: String },

    /// Anything that could not be classified.
    #[error("unknown failure")]
    Unknown,
}

impl RawFailure {
    /// Shorthand for a network-class failure
    pub fn network(message: impl Into<String>) -> Self {
        RawFailure::Network {
            message: message.into(),
        }
    }

    /// Shorthand for a runtime-class failure
    pub fn runtime(message: impl Into<String>) -> Self {
        RawFailure::Runtime {
            message: message.into(),
        }
    }
}

/// A failure processed into everything the presentation layer needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessedError {
    /// Resolved business code or a sentinel (`NETWORK_ERROR`,
    /// `RUNTIME_ERROR`, `UNKNOWN_ERROR`)
    pub code: String,
    /// User-facing message
    pub message: String,
    /// Severity of the error
    pub severity: Severity,
    /// Whether the error blocks the triggering action
    pub blocking: bool,
    /// Suggested remediation
    pub action_hint: Option<String>,
    /// HTTP status, or 0 when not applicable
    pub status: u16,
    /// Original raw message, for diagnostics only; never shown to the user
    pub technical_message: Option<String>,
}

/// Classify a captured failure into a [`ProcessedError`].
///
/// Classification follows first-matching-case precedence: network failure,
/// HTTP failure with response, runtime failure, unknown. Total and pure.
pub fn process(failure: &RawFailure) -> ProcessedError {
    match failure {
        RawFailure::Network { message } => {
            let mapping = catalog::network_error();
            ProcessedError {
                code: error_codes::NETWORK_ERROR.to_string(),
                message: mapping.message.to_string(),
                severity: mapping.severity,
                blocking: mapping.blocking,
                action_hint: mapping.action_hint.map(str::to_string),
                status: 0,
                technical_message: Some(message.clone()),
            }
        }

        RawFailure::Http {
            status,
            body,
            message,
        } => {
            let body_message = body.as_ref().and_then(|b| b.message.as_deref());
            let code = body
                .as_ref()
                .and_then(|b| b.code())
                .map(str::to_string)
                .or_else(|| {
                    extract_error_code(body_message.unwrap_or_default()).map(str::to_string)
                });

            let mapping = catalog::business_error(code.as_deref());
            let technical = body_message.unwrap_or(message.as_str());

            ProcessedError {
                code: code.unwrap_or_else(|| error_codes::UNKNOWN_ERROR.to_string()),
                message: mapping.message.to_string(),
                severity: mapping.severity,
                blocking: mapping.blocking,
                action_hint: mapping.action_hint.map(str::to_string),
                status: *status,
                technical_message: Some(technical.to_string()),
            }
        }

        RawFailure::Runtime { message } => ProcessedError {
            code: error_codes::RUNTIME_ERROR.to_string(),
            message: "Ocorreu um erro inesperado na aplicação.".to_string(),
            severity: Severity::Error,
            blocking: true,
            action_hint: Some(
                "Recarregue a aplicação e tente novamente. Se o problema persistir, entre em contato com o suporte."
                    .to_string(),
            ),
            status: 0,
            technical_message: Some(message.clone()),
        },

        RawFailure::Unknown => ProcessedError {
            code: error_codes::UNKNOWN_ERROR.to_string(),
            message: "Ocorreu um erro inesperado.".to_string(),
            severity: Severity::Error,
            blocking: true,
            action_hint: Some("Tente novamente em alguns instantes.".to_string()),
            status: 0,
            technical_message: None,
        },
    }
}

/// Decide whether a processed error should be logged.
///
/// Development logs everything; production logs only server-side failures
/// (status >= 500) and severe client errors, so expected business-rule
/// rejections do not flood telemetry.
pub fn should_log(processed: &ProcessedError, environment: Environment) -> bool {
    if environment.is_development() {
        return true;
    }

    processed.status >= 500 || processed.severity == Severity::Error
}
