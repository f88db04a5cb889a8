//! 学习会话状态：分类筛选、模式、当前单词以及今日进度。

use rand::Rng;

use crate::progress::operations::words::Word;
use crate::progress::ProgressStore;
use crate::srs::level::Outcome;
use crate::srs::pool::{self, Mode};
use crate::store::{Persistence, StoreError};

/// State for one learning session. The consumer owns it and drives it
/// explicitly; nothing recomputes behind its back.
#[derive(Debug, Clone, Default)]
pub struct LearnSession {
    selected_category_ids: Vec<String>,
    mode: Mode,
    current_word: Option<Word>,
    today_learned: u32,
    answer_correct: bool,
}

impl LearnSession {
    /// Starts with every known category selected and mixed mode.
    pub fn new<P: Persistence>(store: &ProgressStore<P>) -> Self {
        Self {
            selected_category_ids: store.categories().iter().map(|c| c.id.clone()).collect(),
            ..Self::default()
        }
    }

    pub fn selected_category_ids(&self) -> &[String] {
        &self.selected_category_ids
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn current_word(&self) -> Option<&Word> {
        self.current_word.as_ref()
    }

    pub fn today_learned(&self) -> u32 {
        self.today_learned
    }

    pub fn answer_correct(&self) -> bool {
        self.answer_correct
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub fn toggle_category(&mut self, category_id: &str, selected: bool) {
        if selected {
            if !self.selected_category_ids.iter().any(|id| id == category_id) {
                self.selected_category_ids.push(category_id.to_string());
            }
        } else {
            self.selected_category_ids.retain(|id| id != category_id);
        }
    }

    /// Picks the next card from the current pool. `None` means there is
    /// nothing left to study with this filter and mode.
    pub fn load_next_word<P, R>(
        &mut self,
        store: &ProgressStore<P>,
        rng: &mut R,
        now_ms: i64,
    ) -> Option<&Word>
    where
        P: Persistence,
        R: Rng + ?Sized,
    {
        let candidates =
            pool::select_pool(store.words(), &self.selected_category_ids, self.mode, now_ms);
        self.current_word = pool::pick_next(&candidates, rng).cloned();
        self.answer_correct = false;
        tracing::debug!(
            mode = %self.mode,
            pool_size = candidates.len(),
            word_id = self.current_word.as_ref().map(|w| w.id.as_str()),
            "Next word loaded"
        );
        self.current_word.as_ref()
    }

    pub fn check_answer(&mut self, answer: &str) -> bool {
        let Some(word) = &self.current_word else {
            return false;
        };
        self.answer_correct = pool::check_answer(word, answer);
        self.answer_correct
    }

    pub fn remember<P, R>(
        &mut self,
        store: &mut ProgressStore<P>,
        rng: &mut R,
        now_ms: i64,
    ) -> Result<(), StoreError>
    where
        P: Persistence,
        R: Rng + ?Sized,
    {
        self.finish_card(store, Outcome::Remember, rng, now_ms)
    }

    pub fn repeat<P, R>(
        &mut self,
        store: &mut ProgressStore<P>,
        rng: &mut R,
        now_ms: i64,
    ) -> Result<(), StoreError>
    where
        P: Persistence,
        R: Rng + ?Sized,
    {
        self.finish_card(store, Outcome::Repeat, rng, now_ms)
    }

    fn finish_card<P, R>(
        &mut self,
        store: &mut ProgressStore<P>,
        outcome: Outcome,
        rng: &mut R,
        now_ms: i64,
    ) -> Result<(), StoreError>
    where
        P: Persistence,
        R: Rng + ?Sized,
    {
        let Some(word_id) = self.current_word.as_ref().map(|w| w.id.clone()) else {
            return Ok(());
        };
        // The card stays current if the save fails.
        store.record_outcome(&word_id, outcome, now_ms)?;
        if outcome == Outcome::Remember {
            self.today_learned += 1;
        }
        self.load_next_word(store, rng, now_ms);
        Ok(())
    }

    /// Multiple-choice options for the current card, empty when there is none.
    pub fn answer_options<P, R>(&self, store: &ProgressStore<P>, rng: &mut R) -> Vec<String>
    where
        P: Persistence,
        R: Rng + ?Sized,
    {
        match &self.current_word {
            Some(word) => pool::answer_options(store.words(), &word.original, rng),
            None => Vec::new(),
        }
    }

    /// `(learned today, daily goal)`
    pub fn goal_progress<P: Persistence>(&self, store: &ProgressStore<P>) -> (u32, u32) {
        (self.today_learned, store.user().daily_goal)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::progress::ProgressOptions;
    use crate::store::MemoryStore;

    const NOW: i64 = 1_700_000_000_000;

    fn seeded_store() -> ProgressStore<MemoryStore> {
        ProgressStore::open_at(MemoryStore::new(), &ProgressOptions::default(), NOW).unwrap()
    }

    #[test]
    fn new_session_selects_all_categories_in_mixed_mode() {
        let store = seeded_store();
        let session = LearnSession::new(&store);
        assert_eq!(session.selected_category_ids(), &["1", "2", "3"]);
        assert_eq!(session.mode(), Mode::Mixed);
        assert!(session.current_word().is_none());
    }

    #[test]
    fn actions_without_current_word_are_noops() {
        let mut store = seeded_store();
        let before = store.words().to_vec();
        let mut session = LearnSession::new(&store);
        let mut rng = StdRng::seed_from_u64(11);

        assert!(!session.check_answer("apple"));
        session.remember(&mut store, &mut rng, NOW).unwrap();
        session.repeat(&mut store, &mut rng, NOW).unwrap();

        assert_eq!(session.today_learned(), 0);
        assert_eq!(store.words(), before.as_slice());
        assert!(session.answer_options(&store, &mut rng).is_empty());
    }

    #[test]
    fn remember_promotes_word_and_counts_progress() {
        let mut store = seeded_store();
        let mut session = LearnSession::new(&store);
        session.set_mode(Mode::New);
        let mut rng = StdRng::seed_from_u64(5);

        let id = session
            .load_next_word(&store, &mut rng, NOW)
            .map(|w| w.id.clone())
            .unwrap();
        session.remember(&mut store, &mut rng, NOW).unwrap();

        let word = store.word(&id).unwrap();
        assert_eq!(word.level, 1);
        assert_eq!(word.last_reviewed, NOW);
        assert_eq!(session.goal_progress(&store), (1, 20));
        if let Some(next) = session.current_word() {
            assert_ne!(next.id, id);
            assert_eq!(next.level, 0);
        }
    }

    #[test]
    fn repeat_does_not_count_progress() {
        let mut store = seeded_store();
        let mut session = LearnSession::new(&store);
        session.set_mode(Mode::Review);
        let mut rng = StdRng::seed_from_u64(9);

        let word = session.load_next_word(&store, &mut rng, NOW).cloned().unwrap();
        session.repeat(&mut store, &mut rng, NOW).unwrap();

        assert_eq!(store.word(&word.id).unwrap().level, word.level - 1);
        assert_eq!(session.today_learned(), 0);
    }

    #[test]
    fn deselecting_everything_empties_the_session() {
        let store = seeded_store();
        let mut session = LearnSession::new(&store);
        for id in ["1", "2", "3"] {
            session.toggle_category(id, false);
        }
        let mut rng = StdRng::seed_from_u64(2);
        assert!(session.load_next_word(&store, &mut rng, NOW).is_none());

        session.toggle_category("2", true);
        session.toggle_category("2", true);
        assert_eq!(session.selected_category_ids(), &["2"]);
        assert!(session.load_next_word(&store, &mut rng, NOW).is_some());
    }

    #[test]
    fn check_answer_against_current_word() {
        let store = seeded_store();
        let mut session = LearnSession::new(&store);
        let mut rng = StdRng::seed_from_u64(4);
        let original = session
            .load_next_word(&store, &mut rng, NOW)
            .map(|w| w.original.clone())
            .unwrap();

        assert!(session.check_answer(&format!("  {} ", original.to_uppercase())));
        assert!(session.answer_correct());
        assert!(!session.check_answer("definitely wrong"));

        let options = session.answer_options(&store, &mut rng);
        assert_eq!(options.len(), 4);
        assert!(options.contains(&original));
    }
}
