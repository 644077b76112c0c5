use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::card::{Card, CardPhase};
use crate::config::SchedulerConfig;

/// 集合级 KPI 统计，单次遍历计算
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckStats {
    pub total: u64,
    pub due_now: u64,
    pub new_count: u64,
    pub learning: u64,
    pub mature: u64,
    pub learned: u64,
}

pub fn deck_stats(cards: &[Card], now_ms: i64, config: &SchedulerConfig) -> DeckStats {
    let mut stats = DeckStats::default();
    for card in cards {
        stats.total += 1;
        if card.is_due(now_ms) {
            stats.due_now += 1;
        }
        match card.phase(config) {
            CardPhase::New => stats.new_count += 1,
            CardPhase::Learning => stats.learning += 1,
            CardPhase::Mature => stats.mature += 1,
        }
        if card.state.repetitions >= config.learned_repetitions {
            stats.learned += 1;
        }
    }
    stats
}

/// 连续学习天数。按 UTC 日历日计算：同日重复学习不变，
/// 连续日 +1，间断后重置为 1。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakState {
    pub streak: u32,
    pub last_study_day: Option<NaiveDate>,
}

impl StreakState {
    pub fn record_study(&mut self, now_ms: i64) -> u32 {
        let today = day_of(now_ms);
        match self.last_study_day {
            Some(last) if last == today => {}
            Some(last) if last.succ_opt() == Some(today) => {
                self.streak += 1;
                self.last_study_day = Some(today);
            }
            _ => {
                self.streak = 1;
                self.last_study_day = Some(today);
            }
        }
        self.streak
    }
}

fn day_of(now_ms: i64) -> NaiveDate {
    DateTime::from_timestamp_millis(now_ms)
        .unwrap_or(DateTime::UNIX_EPOCH)
        .date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{CardContent, LearningState, ReviewInterval};
    use crate::constants::MILLIS_PER_DAY;

    fn card_with_state(id: &str, state: LearningState) -> Card {
        let mut card = Card::new(id, CardContent::default(), 0);
        card.state = state;
        card
    }

    fn reviewed(interval_days: i64, repetitions: u32, due_at: i64) -> LearningState {
        LearningState {
            ease: 2.5,
            interval: ReviewInterval::Days(interval_days),
            repetitions,
            due_at,
            last_reviewed_at: Some(0),
        }
    }

    #[test]
    fn stats_count_each_bucket_once() {
        let config = SchedulerConfig::default();
        let cards = vec![
            card_with_state("new", LearningState::fresh(0)),
            card_with_state("learning-due", reviewed(6, 2, 100)),
            card_with_state("mature", reviewed(30, 6, 5_000)),
        ];

        let stats = deck_stats(&cards, 1_000, &config);

        assert_eq!(stats.total, 3);
        assert_eq!(stats.new_count, 1);
        assert_eq!(stats.learning, 1);
        assert_eq!(stats.mature, 1);
        assert_eq!(stats.due_now, 1);
        assert_eq!(stats.learned, 1);
    }

    #[test]
    fn empty_collection_yields_zeroes() {
        let config = SchedulerConfig::default();
        assert_eq!(deck_stats(&[], 0, &config), DeckStats::default());
    }

    #[test]
    fn streak_increments_on_consecutive_days_only() {
        let mut streak = StreakState::default();

        assert_eq!(streak.record_study(0), 1);
        // 同日重复学习不变
        assert_eq!(streak.record_study(MILLIS_PER_DAY / 2), 1);
        // 连续日 +1
        assert_eq!(streak.record_study(MILLIS_PER_DAY), 2);
        assert_eq!(streak.record_study(2 * MILLIS_PER_DAY), 3);
        // 间断后重置
        assert_eq!(streak.record_study(10 * MILLIS_PER_DAY), 1);
    }

    #[test]
    fn streak_serializes_camel_case() {
        let mut streak = StreakState::default();
        streak.record_study(0);
        let json = serde_json::to_value(&streak).unwrap();
        assert!(json.get("lastStudyDay").is_some());
        assert_eq!(json["streak"], 1);
    }
}
