//! Monitoring configuration
//!
//! A JSON snapshot of the API model for an external monitor that replays
//! the documented endpoints every `timeInterval` seconds.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::model::ApiDoc;

/// Version of the monitoring configuration format
pub const MONITOR_CONFIG_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorConfig<'a> {
    pub app_id: u64,
    pub version: u32,
    /// ISO-8601 UTC timestamp with millisecond precision
    pub created_at: String,
    pub time_interval: u64,
    pub host: String,
    pub apis: &'a [ApiDoc],
}

impl<'a> MonitorConfig<'a> {
    /// Stamp a configuration with the current time
    pub fn new(app_id: u64, host: impl Into<String>, time_interval: u64, apis: &'a [ApiDoc]) -> Self {
        Self::stamped_at(app_id, host, time_interval, apis, Utc::now())
    }

    pub fn stamped_at(
        app_id: u64,
        host: impl Into<String>,
        time_interval: u64,
        apis: &'a [ApiDoc],
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            app_id,
            version: MONITOR_CONFIG_VERSION,
            created_at: at.to_rfc3339_opts(SecondsFormat::Millis, true),
            time_interval,
            host: host.into(),
            apis,
        }
    }

    /// Compact JSON, the form written to disk
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
