pub mod config;
pub mod constants;
pub mod logging;
pub mod progress;
pub mod session;
pub mod srs;
pub mod store;

pub use progress::operations::categories::{Category, CategoryUpdate, NewCategory};
pub use progress::operations::users::{User, UserUpdate};
pub use progress::operations::words::{NewWord, Word};
pub use progress::{ProgressOptions, ProgressStore};
pub use session::LearnSession;
pub use srs::{Mode, ParseModeError};
pub use store::{MemoryStore, Persistence, Store, StoreError};
