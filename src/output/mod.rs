//! Output formatting for command results

use chrono::Utc;
use serde::Serialize;

/// Envelope for JSON output: the command result plus when it was produced
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonOutput<'a, T: Serialize + ?Sized> {
    pub data: &'a T,
    pub generated_at: String,
    pub version: &'static str,
}

/// Format data as pretty-printed JSON inside the output envelope
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_json::Error> {
    let output = JsonOutput {
        data,
        generated_at: Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION"),
    };
    serde_json::to_string_pretty(&output)
}

/// "2h 5m" style rendering of a remaining duration
pub fn format_remaining(remaining: chrono::Duration) -> String {
    let hours = remaining.num_hours();
    let mins = remaining.num_minutes() % 60;
    if hours > 0 {
        format!("{}h {}m", hours, mins)
    } else if mins > 0 {
        format!("{}m", mins)
    } else {
        format!("{}s", remaining.num_seconds().max(0))
    }
}
