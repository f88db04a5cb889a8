use crate::constants::{MS_PER_DAY, STREAK_TOLERANCE_MS};
use crate::progress::operations::users::User;

/// True when `last_active` falls within the jitter window around exactly one day before `now_ms`.
pub fn was_active_yesterday(last_active: i64, now_ms: i64) -> bool {
    let yesterday = now_ms - MS_PER_DAY;
    (yesterday - STREAK_TOLERANCE_MS..=yesterday + STREAK_TOLERANCE_MS).contains(&last_active)
}

/// 会话开始时重新计算连续打卡天数，并把 `last_active` 更新为 `now_ms`。
///
/// - 昨天未活跃且已有连续记录：重置为 1（本次访问算第一天）
/// - 昨天活跃：保持不变
/// - 其他情况（首次活跃）：至少为 1
pub fn reconcile_streak(user: &User, now_ms: i64) -> User {
    let mut updated = user.clone();
    let active_yesterday = was_active_yesterday(user.last_active, now_ms);

    if !active_yesterday && user.current_streak > 0 {
        updated.current_streak = 1;
    } else if !active_yesterday {
        updated.current_streak = user.current_streak.max(1);
    }

    updated.last_active = now_ms;
    raise_best_streak(&mut updated);
    updated
}

pub fn raise_best_streak(user: &mut User) {
    if user.current_streak > user.best_streak {
        user.best_streak = user.current_streak;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000_000;

    fn user(current_streak: u32, best_streak: u32, last_active: i64) -> User {
        User {
            id: "guest".to_string(),
            name: "Guest".to_string(),
            daily_goal: 20,
            current_streak,
            best_streak,
            last_active,
        }
    }

    #[test]
    fn missed_day_resets_to_one() {
        let updated = reconcile_streak(&user(5, 8, NOW - 2 * MS_PER_DAY), NOW);
        assert_eq!(updated.current_streak, 1);
        assert_eq!(updated.best_streak, 8);
        assert_eq!(updated.last_active, NOW);
    }

    #[test]
    fn active_yesterday_keeps_streak() {
        let updated = reconcile_streak(&user(5, 5, NOW - MS_PER_DAY), NOW);
        assert_eq!(updated.current_streak, 5);
        assert_eq!(updated.last_active, NOW);
    }

    #[test]
    fn tolerance_window_is_inclusive() {
        let yesterday = NOW - MS_PER_DAY;
        assert!(was_active_yesterday(yesterday - STREAK_TOLERANCE_MS, NOW));
        assert!(was_active_yesterday(yesterday + STREAK_TOLERANCE_MS, NOW));
        assert!(!was_active_yesterday(yesterday + STREAK_TOLERANCE_MS + 1, NOW));
        assert!(!was_active_yesterday(yesterday - STREAK_TOLERANCE_MS - 1, NOW));
    }

    #[test]
    fn zero_streak_becomes_one_and_raises_best() {
        let updated = reconcile_streak(&user(0, 0, 0), NOW);
        assert_eq!(updated.current_streak, 1);
        assert_eq!(updated.best_streak, 1);
    }

    #[test]
    fn same_day_reentry_with_streak_counts_as_day_one() {
        let updated = reconcile_streak(&user(4, 4, NOW - 60_000), NOW);
        assert_eq!(updated.current_streak, 1);
        assert_eq!(updated.best_streak, 4);
    }

    #[test]
    fn best_streak_follows_current() {
        let mut u = user(7, 3, NOW);
        raise_best_streak(&mut u);
        assert_eq!(u.best_streak, 7);

        let mut lower = user(2, 9, NOW);
        raise_best_streak(&mut lower);
        assert_eq!(lower.best_streak, 9);
    }
}
