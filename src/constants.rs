/// SM-2 简易度下限
pub const MIN_EASE: f64 = 1.3;

/// 新卡片初始简易度
pub const DEFAULT_EASE: f64 = 2.5;

/// 首次复习成功后的间隔（天）
pub const FIRST_INTERVAL_DAYS: i64 = 1;

/// 第二次连续成功后的间隔（天）
pub const SECOND_INTERVAL_DAYS: i64 = 6;

/// 复习失败后的重学间隔（分钟）
pub const RELEARN_MINUTES: i64 = 10;

/// 默认每日新卡片上限
pub const DEFAULT_NEW_PER_DAY: usize = 20;

/// 默认单次队列复习上限
pub const DEFAULT_MAX_REVIEWS: usize = 100;

/// 间隔达到该天数视为成熟卡片
pub const MATURE_INTERVAL_DAYS: i64 = 21;

/// 连续成功达到该次数视为已掌握
pub const LEARNED_REPETITIONS: u32 = 5;

/// 每天毫秒数
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// 每分钟毫秒数
pub const MILLIS_PER_MINUTE: i64 = 60_000;

/// 每天分钟数
pub const MINUTES_PER_DAY: i64 = 1_440;
