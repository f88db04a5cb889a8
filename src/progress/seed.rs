//! Starter vocabulary installed when storage holds no words or no categories.

use crate::constants::MS_PER_DAY;

use super::operations::categories::Category;
use super::operations::words::Word;

// (id, original, translation, category, level, days since review, days since creation)
const STARTER_WORDS: &[(&str, &str, &str, &str, u8, i64, i64)] = &[
    ("w1", "apple", "яблоко", "1", 0, -1, 2),
    ("w2", "book", "книга", "1", 1, 1, 5),
    ("w3", "water", "вода", "1", 0, -1, 0),
    ("w4", "house", "дом", "1", 2, 3, 10),
    ("w5", "friend", "друг", "1", 0, -1, 0),
    ("w6", "airport", "аэропорт", "2", 0, -1, 0),
    ("w7", "ticket", "билет", "2", 3, 7, 15),
    ("w8", "passport", "паспорт", "2", 0, -1, 0),
    ("w9", "hotel", "отель", "2", 1, 1, 3),
    ("w10", "luggage", "багаж", "2", 0, -1, 0),
    ("w11", "pizza", "пицца", "3", 0, -1, 0),
    ("w12", "coffee", "кофе", "3", 2, 2, 8),
    ("w13", "bread", "хлеб", "3", 0, -1, 0),
    ("w14", "milk", "молоко", "3", 1, 1, 4),
    ("w15", "cheese", "сыр", "3", 0, -1, 0),
];

const STARTER_CATEGORIES: &[(&str, &str, &str)] = &[
    ("1", "Everyday words", "🍎"),
    ("2", "Travel", "✈️"),
    ("3", "Food", "🍕"),
];

pub fn initial_words(now_ms: i64) -> Vec<Word> {
    STARTER_WORDS
        .iter()
        .map(
            |&(id, original, translation, category_id, level, reviewed_days_ago, created_days_ago)| {
                Word {
                    id: id.to_string(),
                    original: original.to_string(),
                    translation: translation.to_string(),
                    category_id: category_id.to_string(),
                    level,
                    last_reviewed: if reviewed_days_ago < 0 {
                        0
                    } else {
                        now_ms - reviewed_days_ago * MS_PER_DAY
                    },
                    created_at: now_ms - created_days_ago * MS_PER_DAY,
                }
            },
        )
        .collect()
}

pub fn initial_categories() -> Vec<Category> {
    STARTER_CATEGORIES
        .iter()
        .map(|&(id, name, icon)| Category {
            id: id.to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
            word_ids: STARTER_WORDS
                .iter()
                .filter(|entry| entry.3 == id)
                .map(|entry| entry.0.to_string())
                .collect(),
        })
        .collect()
}
