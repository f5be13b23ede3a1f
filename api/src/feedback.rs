//! Thin presentation layer for processed errors
//!
//! Screens render a [`FeedbackView`] instead of interpreting
//! [`ProcessedError`] themselves, so error semantics stay in the core.

use fd_core::{extract_field_errors, select_surface, FeedbackSurface, ProcessedError, Severity};

/// Render model for one error, ready for any widget toolkit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackView {
    /// Where the error should be shown
    pub surface: FeedbackSurface,
    /// Heading by severity ("Erro", "Atenção", "Informação")
    pub title: &'static str,
    /// User-facing message
    pub message: String,
    /// Optional remediation line, rendered below the message
    pub action_hint: Option<String>,
    /// Inline field annotations are not individually dismissible
    pub dismissible: bool,
    pub severity: Severity,
}

impl FeedbackView {
    pub fn from_error(processed: &ProcessedError) -> Self {
        let surface = select_surface(processed);
        Self {
            surface,
            title: title_for(processed.severity),
            message: processed.message.clone(),
            action_hint: processed.action_hint.clone(),
            dismissible: surface != FeedbackSurface::Inline,
            severity: processed.severity,
        }
    }
}

fn title_for(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "Erro",
        Severity::Warning => "Atenção",
        Severity::Info => "Informação",
    }
}

/// Friendly message for one form field, extracted from a composite backend
/// message; `None` when the message carries nothing for that field.
pub fn field_error_for(message: &str, field: &str) -> Option<String> {
    extract_field_errors(message).get(field).map(str::to_string)
}
