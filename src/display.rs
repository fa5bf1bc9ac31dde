//! Human-readable rendering of the interaction log.
//!
//! The listing is a debugging surface, not a machine-readable contract:
//! one indexed line per record between banner lines, with a duration
//! suffix on resolved screen-disappear records.

use crate::store::record::LogRecord;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Medium date + short time, e.g. "Nov 3, 2024 at 2:45 PM".
const TIME_FORMAT: &str = "%b %-d, %Y at %-I:%M %p";

/// Format a timestamp for display in the given timezone.
pub fn format_timestamp(timestamp: DateTime<Utc>, tz: &Tz) -> String {
    timestamp.with_timezone(tz).format(TIME_FORMAT).to_string()
}

/// Render all records as a banner-framed listing in the given timezone.
pub fn render_with_timezone(records: &[LogRecord], tz: &Tz) -> String {
    let mut out = String::new();
    out.push_str("--- User Interaction Logs ---\n\n");

    if records.is_empty() {
        out.push_str("No logs available.\n");
    } else {
        for (index, record) in records.iter().enumerate() {
            let time = format_timestamp(record.timestamp, tz);
            let duration = match record.duration_secs {
                Some(secs) => format!(" | Duration: {secs:.2} seconds"),
                None => String::new(),
            };
            out.push_str(&format!(
                "{}. [{}] {}: {}{}\n",
                index + 1,
                time,
                record.element_type,
                record.action,
                duration
            ));
        }
    }

    out.push_str("\n--- End of Logs ---\n");
    out
}
