pub mod operations;
pub mod seed;

use chrono::Utc;

use crate::constants::{DEFAULT_DAILY_GOAL, MAX_LEVEL};
use crate::srs::streak::reconcile_streak;
use crate::store::{self, keys, Persistence, StoreError};

use operations::categories::Category;
use operations::users::User;
use operations::words::Word;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressOptions {
    /// Install the starter words/categories when a collection loads empty.
    pub seed_on_empty: bool,
    /// Daily goal given to a freshly created guest profile.
    pub default_daily_goal: u32,
}

impl Default for ProgressOptions {
    fn default() -> Self {
        Self {
            seed_on_empty: true,
            default_daily_goal: DEFAULT_DAILY_GOAL,
        }
    }
}

/// Holds the word list, categories and user profile for one device and
/// writes every mutation straight through to the backend.
#[derive(Debug)]
pub struct ProgressStore<P: Persistence> {
    backend: P,
    words: Vec<Word>,
    categories: Vec<Category>,
    user: User,
}

impl<P: Persistence> ProgressStore<P> {
    pub fn open(backend: P, options: &ProgressOptions) -> Result<Self, StoreError> {
        Self::open_at(backend, options, Utc::now().timestamp_millis())
    }

    /// 加载数据并开始新会话：缺失或损坏的集合使用默认值，连续打卡在此重新计算一次。
    pub fn open_at(
        mut backend: P,
        options: &ProgressOptions,
        now_ms: i64,
    ) -> Result<Self, StoreError> {
        let mut words: Vec<Word> = store::load_or(&backend, keys::WORDS, Vec::new())?;
        if words.is_empty() && options.seed_on_empty {
            words = seed::initial_words(now_ms);
            store::save_value(&mut backend, keys::WORDS, &words)?;
            tracing::info!(count = words.len(), "Seeded starter words");
        }
        for word in words.iter_mut().filter(|w| w.level > MAX_LEVEL) {
            tracing::warn!(
                word_id = %word.id,
                level = word.level,
                "Stored level above maximum, clamping"
            );
            word.level = MAX_LEVEL;
        }

        let mut categories: Vec<Category> =
            store::load_or(&backend, keys::CATEGORIES, Vec::new())?;
        if categories.is_empty() && options.seed_on_empty {
            categories = seed::initial_categories();
            store::save_value(&mut backend, keys::CATEGORIES, &categories)?;
            tracing::info!(count = categories.len(), "Seeded starter categories");
        }

        let user = match store::load_value::<User, _>(&backend, keys::USER)? {
            Some(saved) => reconcile_streak(&saved, now_ms),
            None => {
                tracing::info!("No saved profile, creating guest user");
                User::guest(options.default_daily_goal, now_ms)
            }
        };

        let mut progress = Self {
            backend,
            words,
            categories,
            user,
        };
        progress.persist_user()?;

        tracing::info!(
            words = progress.words.len(),
            categories = progress.categories.len(),
            current_streak = progress.user.current_streak,
            "Progress store loaded"
        );
        Ok(progress)
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn backend(&self) -> &P {
        &self.backend
    }

    pub fn into_backend(self) -> P {
        self.backend
    }
}
