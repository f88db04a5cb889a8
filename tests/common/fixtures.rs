use flashcard_progress::store::{self, keys};
use flashcard_progress::{MemoryStore, ProgressOptions, ProgressStore, Store, User, Word};
use tempfile::TempDir;

pub const NOW: i64 = 1_700_000_000_000;
pub const DAY: i64 = 86_400_000;

pub fn word(id: &str, original: &str, category_id: &str, level: u8, last_reviewed: i64) -> Word {
    Word {
        id: id.to_string(),
        original: original.to_string(),
        translation: format!("{original}-tr"),
        category_id: category_id.to_string(),
        level,
        last_reviewed,
        created_at: NOW - 30 * DAY,
    }
}

pub fn user(current_streak: u32, best_streak: u32, last_active: i64) -> User {
    User {
        id: "u1".to_string(),
        name: "Learner".to_string(),
        daily_goal: 15,
        current_streak,
        best_streak,
        last_active,
    }
}

pub fn unseeded() -> ProgressOptions {
    ProgressOptions {
        seed_on_empty: false,
        ..ProgressOptions::default()
    }
}

pub fn memory_with_user(saved: &User) -> MemoryStore {
    let mut backend = MemoryStore::new();
    store::save_value(&mut backend, keys::USER, saved).expect("save user");
    backend
}

pub fn open_sled(dir: &TempDir, now_ms: i64) -> ProgressStore<Store> {
    let path = dir.path().join("progress-db");
    let backend = Store::open(path.to_str().expect("utf-8 path")).expect("open sled store");
    ProgressStore::open_at(backend, &ProgressOptions::default(), now_ms).expect("load progress")
}
