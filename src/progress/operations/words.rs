use serde::{Deserialize, Serialize};

use crate::constants::MAX_LEVEL;
use crate::progress::ProgressStore;
use crate::srs::level::{self, Outcome};
use crate::store::{self, keys, Persistence, StoreError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    pub id: String,
    pub original: String,
    pub translation: String,
    pub category_id: String,
    pub level: u8,
    /// Epoch ms of the last review, 0 when never reviewed.
    pub last_reviewed: i64,
    pub created_at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWord {
    pub original: String,
    pub translation: String,
    pub category_id: String,
}

impl Word {
    pub fn create(input: NewWord, now_ms: i64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            original: input.original,
            translation: input.translation,
            category_id: input.category_id,
            level: 0,
            last_reviewed: 0,
            created_at: now_ms,
        }
    }

    pub fn is_new(&self) -> bool {
        self.level == 0
    }
}

impl<P: Persistence> ProgressStore<P> {
    pub fn word(&self, word_id: &str) -> Option<&Word> {
        self.words.iter().find(|w| w.id == word_id)
    }

    /// 按分类列出单词（以 `Word.category_id` 为准，不依赖分类里的 `word_ids`）
    pub fn words_in_category<'a>(&'a self, category_id: &'a str) -> impl Iterator<Item = &'a Word> {
        self.words.iter().filter(move |w| w.category_id == category_id)
    }

    pub fn add_word(&mut self, input: NewWord, now_ms: i64) -> Result<Word, StoreError> {
        let word = Word::create(input, now_ms);
        let mut words = self.words.clone();
        words.push(word.clone());
        self.commit_words(words)?;
        tracing::debug!(word_id = %word.id, category_id = %word.category_id, "Word added");
        Ok(word)
    }

    /// Sets a word's level (capped at the top level) and stamps it as reviewed.
    /// Unknown IDs leave the collection untouched.
    pub fn update_word_level(
        &mut self,
        word_id: &str,
        level: u8,
        now_ms: i64,
    ) -> Result<Option<Word>, StoreError> {
        self.replace_word(word_id, |w| level::with_level(w, level.min(MAX_LEVEL), now_ms))
    }

    pub fn record_outcome(
        &mut self,
        word_id: &str,
        outcome: Outcome,
        now_ms: i64,
    ) -> Result<Option<Word>, StoreError> {
        self.replace_word(word_id, |w| level::apply(w, outcome, now_ms))
    }

    pub fn remember_word(&mut self, word_id: &str, now_ms: i64) -> Result<Option<Word>, StoreError> {
        self.record_outcome(word_id, Outcome::Remember, now_ms)
    }

    pub fn repeat_word(&mut self, word_id: &str, now_ms: i64) -> Result<Option<Word>, StoreError> {
        self.record_outcome(word_id, Outcome::Repeat, now_ms)
    }

    fn replace_word<F>(&mut self, word_id: &str, update: F) -> Result<Option<Word>, StoreError>
    where
        F: FnOnce(&Word) -> Word,
    {
        let Some(index) = self.words.iter().position(|w| w.id == word_id) else {
            tracing::debug!(word_id, "Level update for unknown word ignored");
            return Ok(None);
        };
        let updated = update(&self.words[index]);
        let mut words = self.words.clone();
        words[index] = updated.clone();
        self.commit_words(words)?;
        tracing::debug!(word_id, level = updated.level, "Word level updated");
        Ok(Some(updated))
    }

    /// Saves `words` first; memory only changes once the backend accepted them.
    fn commit_words(&mut self, words: Vec<Word>) -> Result<(), StoreError> {
        store::save_value(&mut self.backend, keys::WORDS, &words)?;
        self.words = words;
        Ok(())
    }
}
