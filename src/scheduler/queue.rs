use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::config::StudyConfig;

/// 队列快照条目；时间推进或评分后由调用方重新计算
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QueueEntry {
    pub card_id: String,
    pub due_at: Option<i64>,
    pub is_new: bool,
}

/// 从卡片集合选出当前可学习队列。
///
/// 到期卡片在前，按到期时间升序（同刻按 id），随后最多
/// `new_per_day` 张新卡片按创建顺序补位；总长不超过
/// `max_reviews`，到期卡片优先占用配额。
pub fn select_due_queue(cards: &[Card], now_ms: i64, limits: &StudyConfig) -> Vec<QueueEntry> {
    let mut due: Vec<&Card> = cards.iter().filter(|c| c.state.is_due(now_ms)).collect();
    due.sort_by(|a, b| {
        (a.state.due_at, a.id.as_str()).cmp(&(b.state.due_at, b.id.as_str()))
    });

    let mut fresh: Vec<&Card> = cards.iter().filter(|c| c.state.is_new()).collect();
    fresh.sort_by(|a, b| (a.created_at, a.id.as_str()).cmp(&(b.created_at, b.id.as_str())));

    let mut queue: Vec<QueueEntry> = Vec::with_capacity(limits.max_reviews.min(cards.len()));

    for card in due.into_iter().take(limits.max_reviews) {
        queue.push(QueueEntry {
            card_id: card.id.clone(),
            due_at: Some(card.state.due_at),
            is_new: false,
        });
    }

    let new_budget = limits.new_per_day.min(limits.max_reviews.saturating_sub(queue.len()));
    for card in fresh.into_iter().take(new_budget) {
        queue.push(QueueEntry {
            card_id: card.id.clone(),
            due_at: None,
            is_new: true,
        });
    }

    tracing::debug!(
        total = queue.len(),
        new_count = queue.iter().filter(|e| e.is_new).count(),
        "Selected due queue"
    );

    queue
}
