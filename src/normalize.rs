use serde::Deserialize;
use uuid::Uuid;

use crate::card::{Card, CardContent, LearningState, ReviewInterval};
use crate::config::SchedulerConfig;
use crate::error::SchedulerError;
use crate::validation::{validate_answer, validate_prompt};

/// 外部导入记录。同一字段在不同导出格式中有多种拼写，
/// 由 serde 别名统一吸收；归一化通过后才允许进入调度器。
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCardRecord {
    pub id: Option<String>,
    #[serde(alias = "word", alias = "term", alias = "front")]
    pub prompt: Option<String>,
    #[serde(
        alias = "def",
        alias = "definition",
        alias = "meaning",
        alias = "back"
    )]
    pub answer: Option<String>,
    #[serde(alias = "sentence")]
    pub example: Option<String>,
    #[serde(alias = "syn", alias = "synonyms")]
    pub notes: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(alias = "ef", alias = "easeFactor")]
    pub ease: Option<f64>,
    #[serde(alias = "interval")]
    pub interval_days: Option<i64>,
    #[serde(alias = "reps")]
    pub repetitions: Option<u32>,
    #[serde(alias = "due")]
    pub due_at: Option<i64>,
    #[serde(alias = "seen", alias = "lastReviewed")]
    pub last_reviewed_at: Option<i64>,
    #[serde(alias = "created")]
    pub created_at: Option<i64>,
}

/// 将导入记录归一化为合法卡片。
///
/// 文本字段去除首尾空白并校验非空；学习状态字段缺失时取默认值，
/// 越界值（简易度低于下限、负间隔）直接夹紧而不是拒绝导入。
pub fn normalize_record(
    raw: RawCardRecord,
    now_ms: i64,
    config: &SchedulerConfig,
) -> Result<Card, SchedulerError> {
    let prompt = raw.prompt.as_deref().unwrap_or("").trim().to_string();
    validate_prompt(&prompt).map_err(|msg| SchedulerError::Validation(msg.to_string()))?;
    let answer = raw.answer.as_deref().unwrap_or("").trim().to_string();
    validate_answer(&answer).map_err(|msg| SchedulerError::Validation(msg.to_string()))?;

    let id = match raw.id {
        Some(id) if !id.trim().is_empty() => id,
        _ => Uuid::new_v4().to_string(),
    };

    let created_at = raw.created_at.unwrap_or(now_ms).max(0);
    let mut state = LearningState {
        ease: raw.ease.unwrap_or(config.initial_ease),
        interval: ReviewInterval::Days(raw.interval_days.unwrap_or(0)),
        repetitions: raw.repetitions.unwrap_or(0),
        due_at: raw.due_at.unwrap_or(now_ms).max(0),
        last_reviewed_at: raw.last_reviewed_at,
    };
    state.normalize(config.min_ease);

    Ok(Card {
        id,
        content: CardContent {
            prompt,
            answer,
            example: raw.example.filter(|s| !s.trim().is_empty()),
            notes: raw.notes.filter(|s| !s.trim().is_empty()),
            tags: raw.tags,
        },
        created_at,
        state,
    })
}

/// 直接从 JSON 值归一化，解析失败归类为验证错误
pub fn normalize_value(
    value: serde_json::Value,
    now_ms: i64,
    config: &SchedulerConfig,
) -> Result<Card, SchedulerError> {
    let raw: RawCardRecord = serde_json::from_value(value)
        .map_err(|e| SchedulerError::Validation(e.to_string()))?;
    normalize_record(raw, now_ms, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn alternate_field_names_are_accepted() {
        let config = SchedulerConfig::default();
        let card = normalize_value(
            json!({
                "word": "ephemeral",
                "def": "lasting a very short time",
                "ef": 2.1,
                "reps": 3,
                "interval": 6,
                "due": 1_000,
                "seen": 500
            }),
            2_000,
            &config,
        )
        .unwrap();

        assert_eq!(card.content.prompt, "ephemeral");
        assert_eq!(card.content.answer, "lasting a very short time");
        assert_eq!(card.state.ease, 2.1);
        assert_eq!(card.state.repetitions, 3);
        assert_eq!(card.state.interval, ReviewInterval::Days(6));
        assert_eq!(card.state.due_at, 1_000);
        assert_eq!(card.state.last_reviewed_at, Some(500));
    }

    #[test]
    fn canonical_field_names_also_work() {
        let config = SchedulerConfig::default();
        let card = normalize_value(
            json!({
                "prompt": "serendipity",
                "answer": "a pleasant chance discovery",
                "ease": 2.4
            }),
            100,
            &config,
        )
        .unwrap();
        assert_eq!(card.state.ease, 2.4);
        assert_eq!(card.created_at, 100);
    }

    #[test]
    fn missing_learning_state_takes_defaults() {
        let config = SchedulerConfig::default();
        let card = normalize_value(
            json!({"term": "laconic", "meaning": "using few words"}),
            5_000,
            &config,
        )
        .unwrap();

        assert_eq!(card.state.ease, config.initial_ease);
        assert_eq!(card.state.repetitions, 0);
        assert_eq!(card.state.due_at, 5_000);
        assert!(card.state.is_new());
        assert!(!card.id.is_empty());
    }

    #[test]
    fn corrupted_learning_state_is_clamped() {
        let config = SchedulerConfig::default();
        let card = normalize_value(
            json!({
                "front": "ubiquitous",
                "back": "found everywhere",
                "ef": 0.9,
                "interval": -4,
                "due": -10
            }),
            1_000,
            &config,
        )
        .unwrap();

        assert_eq!(card.state.ease, config.min_ease);
        assert_eq!(card.state.interval, ReviewInterval::Days(0));
        assert_eq!(card.state.due_at, 0);
    }

    #[test]
    fn missing_prompt_or_answer_is_rejected() {
        let config = SchedulerConfig::default();
        assert!(matches!(
            normalize_value(json!({"def": "no word"}), 0, &config),
            Err(SchedulerError::Validation(_))
        ));
        assert!(matches!(
            normalize_value(json!({"word": "  ", "def": "blank word"}), 0, &config),
            Err(SchedulerError::Validation(_))
        ));
        assert!(matches!(
            normalize_value(json!({"word": "orphan"}), 0, &config),
            Err(SchedulerError::Validation(_))
        ));
    }

    #[test]
    fn blank_auxiliary_fields_become_none() {
        let config = SchedulerConfig::default();
        let card = normalize_value(
            json!({"word": "terse", "def": "brief", "example": "  ", "syn": "curt"}),
            0,
            &config,
        )
        .unwrap();
        assert_eq!(card.content.example, None);
        assert_eq!(card.content.notes.as_deref(), Some("curt"));
    }
}
