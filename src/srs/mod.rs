//! 间隔重复调度：复习间隔、候选池选择、等级变化与连续打卡计算。
//!
//! Everything here is pure and operates on borrowed snapshots; persistence
//! happens in [`crate::progress::ProgressStore`].

pub mod interval;
pub mod level;
pub mod pool;
pub mod streak;

pub use interval::{is_due, next_review_interval};
pub use level::{on_remember, on_repeat, Outcome};
pub use pool::{answer_options, check_answer, pick_next, select_pool, Mode, ParseModeError};
pub use streak::{raise_best_streak, reconcile_streak};
