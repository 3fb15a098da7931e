//! Read-only summaries over the result history.

use crate::session::result::ResultRecord;

/// Highest-wpm record. Ties go to the earliest one.
pub fn personal_best(history: &[ResultRecord]) -> Option<&ResultRecord> {
    history.iter().fold(None, |best, record| match best {
        Some(b) if b.wpm >= record.wpm => Some(b),
        _ => Some(record),
    })
}

pub fn best_wpm(history: &[ResultRecord]) -> u32 {
    personal_best(history).map_or(0, |r| r.wpm)
}

pub fn average_wpm(history: &[ResultRecord]) -> u32 {
    if history.is_empty() {
        return 0;
    }
    let sum: u64 = history.iter().map(|r| u64::from(r.wpm)).sum();
    (sum as f64 / history.len() as f64).round() as u32
}

/// Up to `n` records ordered by wpm descending; equal wpm keeps history order.
pub fn top(history: &[ResultRecord], n: usize) -> Vec<ResultRecord> {
    let mut sorted = history.to_vec();
    sorted.sort_by(|a, b| b.wpm.cmp(&a.wpm));
    sorted.truncate(n);
    sorted
}
