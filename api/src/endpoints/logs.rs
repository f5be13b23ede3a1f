//! Audit log endpoints

use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};

use fd_core::RawFailure;
use fd_infra::ApiTransport;

use crate::dto::{LogEntry, LogLevel};

#[derive(Debug, Clone)]
pub struct LogsApi {
    transport: Arc<ApiTransport>,
}

impl LogsApi {
    pub(crate) fn new(transport: Arc<ApiTransport>) -> Self {
        Self { transport }
    }

    pub async fn get_all(&self) -> Result<Vec<LogEntry>, RawFailure> {
        self.transport.get("/api/logs").await
    }

    pub async fn get_by_level(&self, level: LogLevel) -> Result<Vec<LogEntry>, RawFailure> {
        self.transport
            .get_with_query("/api/logs", &[("level", level.as_str().to_string())])
            .await
    }

    /// Entries within an inclusive window; the backend expects ISO-8601
    pub async fn get_by_date_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<LogEntry>, RawFailure> {
        self.transport
            .get_with_query(
                "/api/logs",
                &[
                    ("startDate", start.to_rfc3339_opts(SecondsFormat::Millis, true)),
                    ("endDate", end.to_rfc3339_opts(SecondsFormat::Millis, true)),
                ],
            )
            .await
    }
}
