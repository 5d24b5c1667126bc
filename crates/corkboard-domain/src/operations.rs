use async_trait::async_trait;
use corkboard_core::CorkboardResult;

use crate::card::{Card, CardId};

/// Trait ensuring every front end drives the board through the same
/// mutating operations. Implementors are expected to persist after each
/// successful call, so the methods are async.
#[async_trait]
pub trait BoardOperations {
    async fn create_card(
        &mut self,
        column: usize,
        title: String,
        description: String,
    ) -> CorkboardResult<Card>;

    async fn update_card(
        &mut self,
        id: CardId,
        title: String,
        description: String,
    ) -> CorkboardResult<()>;

    async fn remove_card(&mut self, id: CardId) -> CorkboardResult<()>;

    async fn move_card(
        &mut self,
        id: CardId,
        target_column: usize,
        target_index: usize,
    ) -> CorkboardResult<()>;
}
