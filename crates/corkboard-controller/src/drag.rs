use corkboard_domain::CardId;

/// Lifecycle of a drag gesture.
///
/// Only the terminal drop commits a store mutation; hovering recomputes
/// the insertion index for visual feedback and a cancelled gesture leaves
/// both the board and the persisted snapshot untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        card_id: CardId,
    },
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }
}
