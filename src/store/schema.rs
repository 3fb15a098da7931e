use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::session::result::ResultRecord;

/// File name of the persisted history inside the data directory.
pub const HISTORY_FILE: &str = "typing_results.json";

/// Timestamps are written as RFC 3339 but older data may carry epoch millis.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredDate {
    Rfc3339(DateTime<Utc>),
    EpochMillis(i64),
}

#[derive(Deserialize)]
struct StoredRecord {
    date: StoredDate,
    wpm: u32,
}

impl StoredRecord {
    fn into_record(self) -> Option<ResultRecord> {
        let date = match self.date {
            StoredDate::Rfc3339(date) => date,
            StoredDate::EpochMillis(ms) => DateTime::from_timestamp_millis(ms)?,
        };
        Some(ResultRecord::new(date, self.wpm))
    }
}

/// Decode a persisted history document.
///
/// Never fails: a document that is not a JSON array yields an empty history,
/// and individual entries that don't look like a record are skipped.
pub fn decode_history(content: &str) -> Vec<ResultRecord> {
    let entries = match serde_json::from_str::<serde_json::Value>(content) {
        Ok(serde_json::Value::Array(entries)) => entries,
        Ok(_) => {
            tracing::warn!("result history is not a list, starting with an empty history");
            return Vec::new();
        }
        Err(err) => {
            tracing::warn!(error = %err, "result history is not valid JSON, starting with an empty history");
            return Vec::new();
        }
    };

    let total = entries.len();
    let records: Vec<ResultRecord> = entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value::<StoredRecord>(entry).ok())
        .filter_map(StoredRecord::into_record)
        .collect();

    let skipped = total - records.len();
    if skipped > 0 {
        tracing::warn!(skipped, "skipped malformed result history entries");
    }
    records
}

pub fn encode_history(records: &[ResultRecord]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(records)
}
