pub mod queue;
pub mod sm2;

use serde::{Deserialize, Serialize};

use crate::card::ReviewInterval;
use crate::error::SchedulerError;

/// 0-5 回忆质量评分；>= 3 视为成功
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grade {
    Again = 0,
    Wrong = 1,
    Difficult = 2,
    Hard = 3,
    Good = 4,
    Easy = 5,
}

impl Grade {
    pub const fn value(self) -> u8 {
        self as u8
    }

    pub const fn is_success(self) -> bool {
        self.value() >= 3
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Again => "again",
            Self::Wrong => "wrong",
            Self::Difficult => "difficult",
            Self::Hard => "hard",
            Self::Good => "good",
            Self::Easy => "easy",
        }
    }
}

impl TryFrom<u8> for Grade {
    type Error = SchedulerError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Again),
            1 => Ok(Self::Wrong),
            2 => Ok(Self::Difficult),
            3 => Ok(Self::Hard),
            4 => Ok(Self::Good),
            5 => Ok(Self::Easy),
            other => Err(SchedulerError::InvalidGrade(other)),
        }
    }
}

/// 一次评分产生的完整状态转移，可直接持久化
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDecision {
    pub ease: f64,
    pub interval: ReviewInterval,
    pub repetitions: u32,
    pub due_at: i64,
    pub lapse: bool,
}
