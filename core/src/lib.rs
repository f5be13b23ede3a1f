//! # FarmaDesk Core
//!
//! Error-classification pipeline for the FarmaDesk back-office client.
//! Every failed backend call is converted into exactly one [`ProcessedError`]
//! carrying a user-facing message, a severity, and enough information for the
//! presentation layer to pick a feedback surface. All operations in this
//! crate are pure, synchronous, and total.

pub mod errors;

// Re-export commonly used types for convenience
pub use errors::{
    business_error, extract_error_code, extract_field_errors, friendly_message, process,
    select_surface, should_log, BusinessErrorMapping, FeedbackSurface, FieldErrors,
    FriendlyMessage, ProcessedError, RawFailure, Severity,
};
