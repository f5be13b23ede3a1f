//! Feedback surface selection
//!
//! Decides, from a [`ProcessedError`] alone, which presentation surface an
//! error should use, so components stay decoupled from error semantics.

use serde::{Deserialize, Serialize};

use super::catalog::{error_codes, Severity};
use super::processor::ProcessedError;

/// UI presentation mode for an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackSurface {
    /// Fixed at the top of the page; critical, affects the whole view
    Banner,
    /// Blocking dialog; requires acknowledgement
    Modal,
    /// Temporary notification; does not disturb the layout
    Toast,
    /// Next to the offending form field
    Inline,
}

/// Select the feedback surface for a processed error.
///
/// Rules are evaluated in priority order and the order is load-bearing:
/// a 422 with severity error still renders as a toast because the 422 rule
/// precedes the severity fallback.
pub fn select_surface(processed: &ProcessedError) -> FeedbackSurface {
    // Network errors always in a banner
    if processed.code == error_codes::NETWORK_ERROR {
        return FeedbackSurface::Banner;
    }

    // Field-level validation feedback next to the field
    if processed.status == 400 && processed.severity == Severity::Warning {
        return FeedbackSurface::Inline;
    }

    // Business-rule rejections as a toast
    if processed.status == 422 {
        return FeedbackSurface::Toast;
    }

    // Server-side failures in a banner
    if processed.status >= 500 {
        return FeedbackSurface::Banner;
    }

    // Authorization failures in a modal
    if processed.status == 401 || processed.status == 403 {
        return FeedbackSurface::Modal;
    }

    if processed.severity == Severity::Error {
        FeedbackSurface::Banner
    } else {
        FeedbackSurface::Toast
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn processed(code: &str, status: u16, severity: Severity) -> ProcessedError {
        ProcessedError {
            code: code.to_string(),
            message: String::new(),
            severity,
            blocking: true,
            action_hint: None,
            status,
            technical_message: None,
        }
    }

    #[test]
    fn test_network_error_is_banner() {
        let error = processed("NETWORK_ERROR", 0, Severity::Error);
        assert_eq!(select_surface(&error), FeedbackSurface::Banner);
    }

    #[test]
    fn test_validation_warning_is_inline() {
        let error = processed("ERRO_VALIDACAO", 400, Severity::Warning);
        assert_eq!(select_surface(&error), FeedbackSurface::Inline);
    }

    #[test]
    fn test_422_is_toast_even_when_severe() {
        // Regression guard for the rule ordering: 422 precedes the
        // severity fallback.
        let error = processed("ESTOQUE_INSUFICIENTE", 422, Severity::Error);
        assert_eq!(select_surface(&error), FeedbackSurface::Toast);
    }

    #[test]
    fn test_server_errors_are_banner() {
        let error = processed("UNKNOWN_ERROR", 500, Severity::Error);
        assert_eq!(select_surface(&error), FeedbackSurface::Banner);
        let error = processed("UNKNOWN_ERROR", 503, Severity::Warning);
        assert_eq!(select_surface(&error), FeedbackSurface::Banner);
    }

    #[test]
    fn test_auth_statuses_are_modal() {
        for status in [401, 403] {
            let error = processed("AUTH_NAO_AUTORIZADO", status, Severity::Error);
            assert_eq!(select_surface(&error), FeedbackSurface::Modal);
            let error = processed("AUTH_NAO_AUTORIZADO", status, Severity::Warning);
            assert_eq!(select_surface(&error), FeedbackSurface::Modal);
        }
    }

    #[test]
    fn test_fallback_by_severity() {
        let error = processed("CLIENTE_NAO_ENCONTRADO", 404, Severity::Error);
        assert_eq!(select_surface(&error), FeedbackSurface::Banner);
        let error = processed("VIOLACAO_REGRA_NEGOCIO", 409, Severity::Warning);
        assert_eq!(select_surface(&error), FeedbackSurface::Toast);
    }

    #[test]
    fn test_400_with_error_severity_falls_through() {
        // 400 + error severity is not field-level feedback; it reaches the
        // severity fallback and renders as a banner.
        let error = processed("ERRO_INTERNO", 400, Severity::Error);
        assert_eq!(select_surface(&error), FeedbackSurface::Banner);
    }
}
