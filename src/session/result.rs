use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of one completed timed test. Created once when the countdown
/// runs out and never modified afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub date: DateTime<Utc>,
    pub wpm: u32,
}

impl ResultRecord {
    pub fn new(date: DateTime<Utc>, wpm: u32) -> Self {
        Self { date, wpm }
    }

    pub fn now(wpm: u32) -> Self {
        Self::new(Utc::now(), wpm)
    }
}
