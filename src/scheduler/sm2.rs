use crate::card::{LearningState, ReviewInterval};
use crate::config::SchedulerConfig;

use super::{Grade, ReviewDecision};

/// SM-2 简易度增量，使用原始评分计算
fn ease_delta(grade: Grade) -> f64 {
    let q = grade.value() as f64;
    0.1 - (5.0 - q) * (0.08 + (5.0 - q) * 0.02)
}

/// 对单张卡片应用一次评分，更新学习状态并返回状态转移。
///
/// 失败（grade < 3）重置连续成功计数并进入短重学间隔；成功按
/// 1 天 / 6 天 / round(上次间隔 × 简易度) 阶梯推进。两个分支都
/// 应用完整的 SM-2 简易度公式，下限夹紧在 `config.min_ease`。
pub fn grade(
    state: &mut LearningState,
    grade: Grade,
    now_ms: i64,
    config: &SchedulerConfig,
) -> ReviewDecision {
    state.normalize(config.min_ease);

    // 间隔阶梯使用更新前的简易度与归一化为整天的上次间隔
    let previous_days = state.interval.as_days();
    let previous_ease = state.ease;

    if grade.is_success() {
        state.repetitions += 1;
        state.interval = match state.repetitions {
            1 => ReviewInterval::Days(config.first_interval_days),
            2 => ReviewInterval::Days(config.second_interval_days),
            _ => ReviewInterval::Days((previous_days as f64 * previous_ease).round() as i64),
        };
    } else {
        state.repetitions = 0;
        state.interval = ReviewInterval::Minutes(config.relearn_minutes);
    }

    state.ease = (previous_ease + ease_delta(grade)).max(config.min_ease);
    state.due_at = now_ms.saturating_add(state.interval.as_millis());
    state.last_reviewed_at = Some(now_ms);

    let decision = ReviewDecision {
        ease: state.ease,
        interval: state.interval,
        repetitions: state.repetitions,
        due_at: state.due_at,
        lapse: !grade.is_success(),
    };

    tracing::debug!(
        grade = grade.as_str(),
        ease = decision.ease,
        repetitions = decision.repetitions,
        interval = ?decision.interval,
        due_at = decision.due_at,
        "Graded card"
    );

    decision
}
