//! Presentation-side card filtering.
//!
//! Searching only decides which rendered cards stay visible; it never
//! touches card order or persisted state.

use crate::card::Card;

pub trait CardSearcher {
    fn matches(&self, card: &Card) -> bool;
}

/// Case-insensitive substring match over title and description.
pub struct TextSearcher {
    query: String,
}

impl TextSearcher {
    pub fn new(query: &str) -> Self {
        Self {
            query: query.to_lowercase(),
        }
    }
}

impl CardSearcher for TextSearcher {
    fn matches(&self, card: &Card) -> bool {
        if self.query.is_empty() {
            return true;
        }
        card.title.to_lowercase().contains(&self.query)
            || card.description.to_lowercase().contains(&self.query)
    }
}
