use chrono::Duration;

use crate::constants::{MS_PER_DAY, REVIEW_INTERVALS_DAYS};
use crate::progress::operations::words::Word;

/// Review interval for a proficiency level. Out-of-range levels are clamped
/// onto the table instead of failing.
pub fn next_review_interval(level: i64) -> Duration {
    let last = (REVIEW_INTERVALS_DAYS.len() - 1) as i64;
    let index = level.clamp(0, last) as usize;
    Duration::milliseconds(REVIEW_INTERVALS_DAYS[index] * MS_PER_DAY)
}

/// Timestamp (ms) at which the word becomes due again.
pub fn due_at(word: &Word) -> i64 {
    word.last_reviewed
        .saturating_add(next_review_interval(i64::from(word.level)).num_milliseconds())
}

pub fn is_due(word: &Word, now_ms: i64) -> bool {
    due_at(word) <= now_ms
}
