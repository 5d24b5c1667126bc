use async_trait::async_trait;
use corkboard_core::{AppConfig, CorkboardError, CorkboardResult};
use corkboard_domain::{
    insertion_index, Board, BoardOperations, Card, CardId, SiblingExtent,
};
use corkboard_persistence::SnapshotStore;
use tokio::sync::broadcast;

use crate::drag::DragState;
use crate::events::BoardChanged;

const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Translates UI events into board operations and keeps the persisted
/// snapshot in step with the in-memory board.
///
/// Board and store are injected rather than process-global; the lifecycle
/// is `init` (restore-from-snapshot-or-empty), mutations with a flush
/// after each commit, and `shutdown` (final flush). All mutation runs to
/// completion on the caller's task, so commits are observed in call order.
pub struct Controller<S: SnapshotStore> {
    board: Board,
    store: S,
    drag: DragState,
    events: broadcast::Sender<BoardChanged>,
}

impl<S: SnapshotStore> Controller<S> {
    /// Build a board from the configured columns and restore its contents
    /// from the store. A missing or unreadable snapshot starts empty.
    pub async fn init(config: &AppConfig, store: S) -> Self {
        let mut board = Board::new(config.columns.clone());
        board.restore(store.load_or_empty().await);
        tracing::info!(
            "Initialized board with {} columns, {} cards from {}",
            board.column_count(),
            board.card_count(),
            store.path().display()
        );
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            board,
            store,
            drag: DragState::Idle,
            events,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Subscribe to change notifications. Renderers subscribe once at
    /// startup and redraw from `board()` on each event.
    pub fn subscribe(&self) -> broadcast::Receiver<BoardChanged> {
        self.events.subscribe()
    }

    /// Flush the final snapshot before the surrounding UI goes away.
    pub async fn shutdown(self) -> CorkboardResult<()> {
        self.store.save(&self.board.snapshot()).await
    }

    async fn commit(&mut self, event: BoardChanged) -> CorkboardResult<()> {
        self.store.save(&self.board.snapshot()).await?;
        // Nobody listening is fine; the board state is already current
        let _ = self.events.send(event);
        Ok(())
    }

    /// Begin a drag gesture for the given card. The renderer excludes the
    /// card from the sibling layouts it reports until the gesture ends.
    pub fn drag_start(&mut self, id: CardId) -> CorkboardResult<()> {
        self.board.locate(id)?;
        tracing::debug!("Drag started for card {}", id);
        self.drag = DragState::Dragging { card_id: id };
        Ok(())
    }

    /// Recompute the insertion index while the pointer moves over a
    /// column. Visual feedback only: the board is not mutated.
    pub fn drag_hover(
        &self,
        siblings: &[SiblingExtent],
        pointer_y: f64,
    ) -> CorkboardResult<usize> {
        if !self.drag.is_dragging() {
            return Err(CorkboardError::NoActiveDrag);
        }
        Ok(insertion_index(siblings, pointer_y))
    }

    /// End the gesture over `target_column`, committing exactly one move
    /// at the index the engine computes from the final pointer position.
    pub async fn drag_drop(
        &mut self,
        target_column: usize,
        siblings: &[SiblingExtent],
        pointer_y: f64,
    ) -> CorkboardResult<usize> {
        let DragState::Dragging { card_id } = self.drag else {
            return Err(CorkboardError::NoActiveDrag);
        };
        self.drag = DragState::Idle;
        let index = insertion_index(siblings, pointer_y);
        self.board.move_card(card_id, target_column, index)?;
        self.commit(BoardChanged::CardMoved(card_id)).await?;
        tracing::debug!(
            "Drag dropped card {} at column {} index {}",
            card_id,
            target_column,
            index
        );
        Ok(index)
    }

    /// Abandon the gesture. Neither the board nor the snapshot changes.
    pub fn drag_cancel(&mut self) {
        if self.drag.is_dragging() {
            tracing::debug!("Drag cancelled");
        }
        self.drag = DragState::Idle;
    }
}

#[async_trait]
impl<S: SnapshotStore> BoardOperations for Controller<S> {
    async fn create_card(
        &mut self,
        column: usize,
        title: String,
        description: String,
    ) -> CorkboardResult<Card> {
        let card = self.board.create_card(column, title, description)?;
        self.commit(BoardChanged::CardCreated(card.id)).await?;
        Ok(card)
    }

    async fn update_card(
        &mut self,
        id: CardId,
        title: String,
        description: String,
    ) -> CorkboardResult<()> {
        self.board.update_card(id, title, description)?;
        self.commit(BoardChanged::CardUpdated(id)).await
    }

    async fn remove_card(&mut self, id: CardId) -> CorkboardResult<()> {
        self.board.remove_card(id)?;
        self.commit(BoardChanged::CardRemoved(id)).await
    }

    async fn move_card(
        &mut self,
        id: CardId,
        target_column: usize,
        target_index: usize,
    ) -> CorkboardResult<()> {
        self.board.move_card(id, target_column, target_index)?;
        self.commit(BoardChanged::CardMoved(id)).await
    }
}
