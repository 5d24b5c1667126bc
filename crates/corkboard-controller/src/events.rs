use corkboard_domain::CardId;

/// Notification that a mutation committed.
///
/// The rendering collaborator subscribes once and redraws from current
/// board state on each event; there is no per-card handler bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardChanged {
    CardCreated(CardId),
    CardUpdated(CardId),
    CardRemoved(CardId),
    CardMoved(CardId),
}
