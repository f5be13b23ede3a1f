//! Wire types for backend responses

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Error body returned by the backend on failed requests
///
/// The backend contract is `{ timestamp, status, error, message, path }`,
/// but legacy endpoints may omit any subset of fields, so deserialization
/// is lenient: every field is optional and unknown fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Timestamp of when the error occurred
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,

    /// HTTP status echoed in the body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,

    /// Stable machine code (e.g., "ESTOQUE_INSUFICIENTE")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Human-readable message; may embed `[field]: detail` segments
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Request path that produced the error
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl ApiErrorBody {
    /// The machine code, if present and non-empty
    pub fn code(&self) -> Option<&str> {
        self.error.as_deref().filter(|c| !c.trim().is_empty())
    }
}
