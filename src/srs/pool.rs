use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::ANSWER_DISTRACTORS;
use crate::progress::operations::words::Word;

use super::interval::is_due;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    New,
    Review,
    #[default]
    Mixed,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::New => "new",
            Mode::Review => "review",
            Mode::Mixed => "mixed",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown learning mode: {0}")]
pub struct ParseModeError(String);

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "new" => Ok(Mode::New),
            "review" => Ok(Mode::Review),
            "mixed" => Ok(Mode::Mixed),
            other => Err(ParseModeError(other.to_string())),
        }
    }
}

fn in_selection<'a>(
    words: &'a [Word],
    selected_category_ids: &'a [String],
) -> impl Iterator<Item = &'a Word> + 'a {
    words
        .iter()
        .filter(move |w| selected_category_ids.contains(&w.category_id))
}

fn new_words(words: &[Word], selected_category_ids: &[String]) -> Vec<Word> {
    in_selection(words, selected_category_ids)
        .filter(|w| w.is_new())
        .cloned()
        .collect()
}

fn review_words(words: &[Word], selected_category_ids: &[String], now_ms: i64) -> Vec<Word> {
    in_selection(words, selected_category_ids)
        .filter(|w| !w.is_new() && is_due(w, now_ms))
        .cloned()
        .collect()
}

/// Candidate words for a session. Mixed mode lists new words first, then due reviews.
pub fn select_pool(
    words: &[Word],
    selected_category_ids: &[String],
    mode: Mode,
    now_ms: i64,
) -> Vec<Word> {
    match mode {
        Mode::New => new_words(words, selected_category_ids),
        Mode::Review => review_words(words, selected_category_ids, now_ms),
        Mode::Mixed => {
            let mut pool = new_words(words, selected_category_ids);
            pool.extend(review_words(words, selected_category_ids, now_ms));
            pool
        }
    }
}

/// 从候选池中均匀随机选取下一个单词；池为空时返回 `None`。
pub fn pick_next<'a, R: Rng + ?Sized>(pool: &'a [Word], rng: &mut R) -> Option<&'a Word> {
    pool.choose(rng)
}

/// Multiple-choice options: the correct answer plus up to three distinct
/// originals taken from the rest of the word list, in random order.
pub fn answer_options<R: Rng + ?Sized>(words: &[Word], correct: &str, rng: &mut R) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut distractors: Vec<&str> = words
        .iter()
        .map(|w| w.original.as_str())
        .filter(|original| *original != correct && seen.insert(*original))
        .collect();

    distractors.shuffle(rng);
    distractors.truncate(ANSWER_DISTRACTORS);

    let mut options = Vec::with_capacity(distractors.len() + 1);
    options.push(correct.to_string());
    options.extend(distractors.into_iter().map(str::to_string));
    options.shuffle(rng);
    options
}

/// Free-text answer check: surrounding whitespace and case are ignored.
pub fn check_answer(word: &Word, answer: &str) -> bool {
    answer.trim().to_lowercase() == word.original.to_lowercase()
}
