use crate::constants::MAX_LEVEL;
use crate::progress::operations::words::Word;

/// Result of showing a card to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Remember,
    Repeat,
}

pub fn on_remember(word: &Word, now_ms: i64) -> Word {
    with_level(word, word.level.saturating_add(1), now_ms)
}

pub fn on_repeat(word: &Word, now_ms: i64) -> Word {
    with_level(word, word.level.saturating_sub(1), now_ms)
}

pub fn apply(word: &Word, outcome: Outcome, now_ms: i64) -> Word {
    match outcome {
        Outcome::Remember => on_remember(word, now_ms),
        Outcome::Repeat => on_repeat(word, now_ms),
    }
}

/// Copy of `word` at `level` (capped at the top level), stamped as reviewed at `now_ms`.
pub fn with_level(word: &Word, level: u8, now_ms: i64) -> Word {
    Word {
        level: level.min(MAX_LEVEL),
        last_reviewed: now_ms,
        ..word.clone()
    }
}
