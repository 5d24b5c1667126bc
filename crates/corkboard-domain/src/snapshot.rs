//! Point-in-time capture of the board for persistence.
//!
//! A `Snapshot` records, per column in board order, the ordered
//! `(title, description)` pairs of every live card. Card ids and
//! timestamps are intentionally dropped: restoring a snapshot replays
//! card creation in recorded order, which synthesizes fresh identities.

use serde::{Deserialize, Serialize};

use crate::card::Card;

/// Persisted form of a single card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    pub title: String,
    pub description: String,
}

impl From<&Card> for CardRecord {
    fn from(card: &Card) -> Self {
        Self {
            title: card.title.clone(),
            description: card.description.clone(),
        }
    }
}

/// Persisted form of the whole board, indexed by column position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub columns: Vec<Vec<CardRecord>>,
}

impl Snapshot {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the snapshot holds no cards in any column.
    pub fn is_empty(&self) -> bool {
        self.columns.iter().all(|records| records.is_empty())
    }
}
