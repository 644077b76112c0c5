use serde::{Deserialize, Serialize};

use crate::config::SchedulerConfig;
use crate::constants::{DEFAULT_EASE, MILLIS_PER_DAY, MILLIS_PER_MINUTE, MINUTES_PER_DAY};

/// 复习间隔：显式标注单位，避免分钟/天混用
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "unit", content = "value", rename_all = "camelCase")]
pub enum ReviewInterval {
    Minutes(i64),
    Days(i64),
}

impl ReviewInterval {
    pub fn as_millis(self) -> i64 {
        match self {
            Self::Minutes(m) => m.max(0).saturating_mul(MILLIS_PER_MINUTE),
            Self::Days(d) => d.max(0).saturating_mul(MILLIS_PER_DAY),
        }
    }

    /// 归一化为整天数，分钟间隔不足一天时向下取整为 0
    pub fn as_days(self) -> i64 {
        match self {
            Self::Minutes(m) => m.max(0) / MINUTES_PER_DAY,
            Self::Days(d) => d.max(0),
        }
    }

    pub fn is_negative(self) -> bool {
        match self {
            Self::Minutes(v) | Self::Days(v) => v < 0,
        }
    }

    pub fn clamped(self) -> Self {
        match self {
            Self::Minutes(v) => Self::Minutes(v.max(0)),
            Self::Days(v) => Self::Days(v.max(0)),
        }
    }
}

impl Default for ReviewInterval {
    fn default() -> Self {
        Self::Days(0)
    }
}

/// 卡片学习状态：仅由调度器的评分操作修改
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningState {
    pub ease: f64,
    pub interval: ReviewInterval,
    pub repetitions: u32,
    pub due_at: i64,
    pub last_reviewed_at: Option<i64>,
}

impl LearningState {
    pub fn fresh(now_ms: i64) -> Self {
        Self {
            ease: DEFAULT_EASE,
            interval: ReviewInterval::default(),
            repetitions: 0,
            due_at: now_ms,
            last_reviewed_at: None,
        }
    }

    /// 持久层可能带回越界字段，参与调度前先夹紧
    pub fn normalize(&mut self, min_ease: f64) {
        if !self.ease.is_finite() || self.ease < min_ease {
            tracing::warn!(ease = self.ease, min_ease, "Clamping out-of-range ease");
            self.ease = min_ease;
        }
        if self.interval.is_negative() {
            tracing::warn!(interval = ?self.interval, "Clamping negative interval to zero");
            self.interval = self.interval.clamped();
        }
    }

    pub fn is_new(&self) -> bool {
        self.last_reviewed_at.is_none()
    }

    pub fn is_due(&self, now_ms: i64) -> bool {
        !self.is_new() && self.due_at <= now_ms
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardPhase {
    New,
    Learning,
    Mature,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardContent {
    pub prompt: String,
    pub answer: String,
    pub example: Option<String>,
    pub notes: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub content: CardContent,
    pub created_at: i64,
    pub state: LearningState,
}

impl Card {
    pub fn new(id: impl Into<String>, content: CardContent, now_ms: i64) -> Self {
        Self {
            id: id.into(),
            content,
            created_at: now_ms,
            state: LearningState::fresh(now_ms),
        }
    }

    pub fn is_due(&self, now_ms: i64) -> bool {
        self.state.is_due(now_ms)
    }

    pub fn phase(&self, config: &SchedulerConfig) -> CardPhase {
        if self.state.is_new() {
            CardPhase::New
        } else if self.state.interval.as_days() >= config.mature_interval_days {
            CardPhase::Mature
        } else {
            CardPhase::Learning
        }
    }
}
