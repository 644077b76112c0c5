use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_EASE, DEFAULT_MAX_REVIEWS, DEFAULT_NEW_PER_DAY, FIRST_INTERVAL_DAYS,
    LEARNED_REPETITIONS, MATURE_INTERVAL_DAYS, MIN_EASE, RELEARN_MINUTES, SECOND_INTERVAL_DAYS,
};

/// 每日学习配额，由调用方按用户保存
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StudyConfig {
    pub new_per_day: usize,
    pub max_reviews: usize,
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            new_per_day: DEFAULT_NEW_PER_DAY,
            max_reviews: DEFAULT_MAX_REVIEWS,
        }
    }
}

impl StudyConfig {
    pub fn from_env() -> Self {
        Self {
            new_per_day: env_or_parse("STUDY_NEW_PER_DAY", DEFAULT_NEW_PER_DAY),
            max_reviews: env_or_parse("STUDY_MAX_REVIEWS", DEFAULT_MAX_REVIEWS),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SchedulerConfig {
    pub min_ease: f64,
    pub initial_ease: f64,
    pub first_interval_days: i64,
    pub second_interval_days: i64,
    pub relearn_minutes: i64,
    #[serde(default = "default_mature_interval_days")]
    pub mature_interval_days: i64,
    #[serde(default = "default_learned_repetitions")]
    pub learned_repetitions: u32,
}

fn default_mature_interval_days() -> i64 {
    MATURE_INTERVAL_DAYS
}
fn default_learned_repetitions() -> u32 {
    LEARNED_REPETITIONS
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            min_ease: MIN_EASE,
            initial_ease: DEFAULT_EASE,
            first_interval_days: FIRST_INTERVAL_DAYS,
            second_interval_days: SECOND_INTERVAL_DAYS,
            relearn_minutes: RELEARN_MINUTES,
            mature_interval_days: MATURE_INTERVAL_DAYS,
            learned_repetitions: LEARNED_REPETITIONS,
        }
    }
}

impl SchedulerConfig {
    pub fn from_env() -> Self {
        Self {
            min_ease: env_or_parse("SRS_MIN_EASE", MIN_EASE),
            initial_ease: env_or_parse("SRS_INITIAL_EASE", DEFAULT_EASE),
            first_interval_days: env_or_parse("SRS_FIRST_INTERVAL_DAYS", FIRST_INTERVAL_DAYS),
            second_interval_days: env_or_parse("SRS_SECOND_INTERVAL_DAYS", SECOND_INTERVAL_DAYS),
            relearn_minutes: env_or_parse("SRS_RELEARN_MINUTES", RELEARN_MINUTES),
            mature_interval_days: env_or_parse("SRS_MATURE_INTERVAL_DAYS", MATURE_INTERVAL_DAYS),
            learned_repetitions: env_or_parse("SRS_LEARNED_REPETITIONS", LEARNED_REPETITIONS),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.min_ease <= 0.0 {
            return Err("min_ease must be > 0".to_string());
        }
        if self.initial_ease < self.min_ease {
            return Err("initial_ease must be >= min_ease".to_string());
        }
        if self.first_interval_days < 1 {
            return Err("first_interval_days must be >= 1".to_string());
        }
        if self.second_interval_days < self.first_interval_days {
            return Err("second_interval_days must be >= first_interval_days".to_string());
        }
        if self.relearn_minutes < 1 {
            return Err("relearn_minutes must be >= 1".to_string());
        }
        if self.learned_repetitions == 0 {
            return Err("learned_repetitions must be > 0".to_string());
        }
        Ok(())
    }
}

pub fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

pub fn env_or_parse<T>(key: &str, default: T) -> T
where
    T: FromStr + Copy,
{
    match env::var(key) {
        Ok(raw) => match raw.parse::<T>() {
            Ok(v) => v,
            Err(_) => {
                tracing::warn!(
                    key,
                    value = %raw,
                    "Failed to parse env var, using default"
                );
                default
            }
        },
        Err(_) => default,
    }
}
