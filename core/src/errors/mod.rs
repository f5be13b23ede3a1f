//! Error classification and presentation pipeline
//!
//! The flow is: a failed backend call is captured at the transport boundary
//! as a [`RawFailure`], classified by [`process`] into a [`ProcessedError`],
//! routed to a presentation surface by [`select_surface`], and optionally
//! decomposed into per-field messages by [`extract_field_errors`]. Whether a
//! processed error is worth logging is a separate pure predicate,
//! [`should_log`], so the pipeline itself stays side-effect free.

mod catalog;
mod extract;
mod feedback;
mod fields;
mod messages;
mod processor;

pub use catalog::{business_error, error_codes, BusinessErrorMapping, Severity};
pub use extract::extract_error_code;
pub use feedback::{select_surface, FeedbackSurface};
pub use fields::{extract_field_errors, FieldErrors};
pub use messages::{friendly_message, FriendlyMessage};
pub use processor::{process, should_log, ProcessedError, RawFailure};
