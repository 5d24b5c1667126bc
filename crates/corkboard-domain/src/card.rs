use chrono::{DateTime, Utc};
use uuid::Uuid;

pub type CardId = Uuid;

/// A single card on the board.
///
/// `id` is assigned once at creation and is the sole key used to address
/// the card afterwards. It is deliberately not serializable: the persisted
/// snapshot carries only text fields, and a restore synthesizes fresh ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: CardId,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Card {
    pub fn new(title: String, description: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update_text(&mut self, title: String, description: String) {
        self.title = title;
        self.description = description;
        self.updated_at = Utc::now();
    }
}
