/// 每天毫秒数
pub const MS_PER_DAY: i64 = 86_400_000;

/// 复习间隔表（天），按熟练度等级索引
pub const REVIEW_INTERVALS_DAYS: [i64; 6] = [0, 1, 3, 7, 16, 30];

/// 最高熟练度等级
pub const MAX_LEVEL: u8 = 5;

/// 判断"昨天是否活跃"时允许的时钟抖动（毫秒）
pub const STREAK_TOLERANCE_MS: i64 = 10_000;

/// 选择题中干扰项的最大数量
pub const ANSWER_DISTRACTORS: usize = 3;

/// 默认每日学习目标
pub const DEFAULT_DAILY_GOAL: u32 = 20;

pub const GUEST_USER_ID: &str = "guest";
pub const GUEST_USER_NAME: &str = "Guest";
