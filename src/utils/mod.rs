//! Small shared helpers for identifiers and timestamps.

use chrono::Utc;
use uuid::Uuid;

/// Returns the current UTC time as an ISO 8601 formatted string.
#[must_use]
pub fn iso_timestamp() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%S%.6f+00:00").to_string()
}

/// Generates a fresh opaque message identifier.
#[must_use]
pub fn new_message_id() -> String {
    Uuid::new_v4().to_string()
}
