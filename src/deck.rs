use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::card::{Card, CardContent};
use crate::config::{SchedulerConfig, StudyConfig};
use crate::error::SchedulerError;
use crate::scheduler::queue::{self, QueueEntry};
use crate::scheduler::{sm2, Grade, ReviewDecision};
use crate::validation::{validate_answer, validate_prompt};

/// 卡片集合：普通拥有型数据，由调用方读入、修改后写回。
/// 集合自身不做并发保护，多写方场景需要外部事务。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从已持久化的卡片列表重建集合，拒绝重复 id
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, SchedulerError> {
        let mut deck = Self::new();
        for card in cards {
            deck.insert(card)?;
        }
        Ok(deck)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }

    pub fn get(&self, card_id: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == card_id)
    }

    /// 新建卡片：生成 uuid，学习状态取默认值，due 为当前时刻
    pub fn add_card(
        &mut self,
        content: CardContent,
        now_ms: i64,
    ) -> Result<&Card, SchedulerError> {
        validate_content(&content)?;
        let card = Card::new(Uuid::new_v4().to_string(), content, now_ms);
        tracing::debug!(card_id = %card.id, "Adding card");
        self.cards.push(card);
        Ok(self.cards.last().expect("card was just pushed"))
    }

    pub fn insert(&mut self, card: Card) -> Result<(), SchedulerError> {
        if self.get(&card.id).is_some() {
            return Err(SchedulerError::DuplicateCard(card.id));
        }
        self.cards.push(card);
        Ok(())
    }

    pub fn remove(&mut self, card_id: &str) -> Result<Card, SchedulerError> {
        match self.cards.iter().position(|c| c.id == card_id) {
            Some(index) => Ok(self.cards.remove(index)),
            None => Err(SchedulerError::CardNotFound(card_id.to_string())),
        }
    }

    /// 仅更新内容字段，学习状态不受影响
    pub fn edit_content(
        &mut self,
        card_id: &str,
        content: CardContent,
    ) -> Result<(), SchedulerError> {
        validate_content(&content)?;
        let card = self
            .cards
            .iter_mut()
            .find(|c| c.id == card_id)
            .ok_or_else(|| SchedulerError::CardNotFound(card_id.to_string()))?;
        card.content = content;
        Ok(())
    }

    /// 对指定卡片应用一次评分并就地更新其学习状态
    pub fn grade(
        &mut self,
        card_id: &str,
        grade: Grade,
        now_ms: i64,
        config: &SchedulerConfig,
    ) -> Result<ReviewDecision, SchedulerError> {
        let card = self
            .cards
            .iter_mut()
            .find(|c| c.id == card_id)
            .ok_or_else(|| SchedulerError::CardNotFound(card_id.to_string()))?;
        Ok(sm2::grade(&mut card.state, grade, now_ms, config))
    }

    pub fn due_queue(&self, now_ms: i64, limits: &StudyConfig) -> Vec<QueueEntry> {
        queue::select_due_queue(&self.cards, now_ms, limits)
    }
}

fn validate_content(content: &CardContent) -> Result<(), SchedulerError> {
    validate_prompt(&content.prompt)
        .map_err(|msg| SchedulerError::Validation(msg.to_string()))?;
    validate_answer(&content.answer)
        .map_err(|msg| SchedulerError::Validation(msg.to_string()))?;
    Ok(())
}
