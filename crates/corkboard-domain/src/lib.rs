pub mod board;
pub mod card;
pub mod operations;
pub mod reorder;
pub mod search;
pub mod snapshot;

pub use board::{Board, Column};
pub use card::{Card, CardId};
pub use operations::BoardOperations;
pub use reorder::{insertion_index, SiblingExtent};
pub use search::{CardSearcher, TextSearcher};
pub use snapshot::{CardRecord, Snapshot};
