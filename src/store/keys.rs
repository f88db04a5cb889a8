pub const WORDS: &str = "words";
pub const CATEGORIES: &str = "categories";
pub const USER: &str = "user";

pub fn all() -> [&'static str; 3] {
    [WORDS, CATEGORIES, USER]
}
