pub mod categories;
pub mod users;
pub mod words;
