use corkboard_core::{CorkboardError, CorkboardResult};

use crate::card::{Card, CardId};
use crate::snapshot::{CardRecord, Snapshot};

/// An ordered sequence of cards under a fixed heading.
#[derive(Debug, Clone)]
pub struct Column {
    pub name: String,
    pub cards: Vec<Card>,
}

impl Column {
    pub fn new(name: String) -> Self {
        Self {
            name,
            cards: Vec::new(),
        }
    }
}

/// The board: a fixed set of columns, each an ordered card sequence.
///
/// Columns are static configuration supplied at construction; the board
/// never creates or destroys them, and column identity is positional.
/// Every card lives in exactly one column at a time.
#[derive(Debug, Clone)]
pub struct Board {
    columns: Vec<Column>,
}

impl Board {
    pub fn new(column_names: impl IntoIterator<Item = String>) -> Self {
        Self {
            columns: column_names.into_iter().map(Column::new).collect(),
        }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn card_count(&self) -> usize {
        self.columns.iter().map(|column| column.cards.len()).sum()
    }

    /// Allocate a fresh card and append it to the end of `column`.
    pub fn create_card(
        &mut self,
        column: usize,
        title: String,
        description: String,
    ) -> CorkboardResult<Card> {
        let columns = self.columns.len();
        let target = self
            .columns
            .get_mut(column)
            .ok_or(CorkboardError::InvalidColumn { column, columns })?;
        let card = Card::new(title, description);
        target.cards.push(card.clone());
        Ok(card)
    }

    /// Replace a card's text fields in place; its position is unchanged.
    pub fn update_card(
        &mut self,
        id: CardId,
        title: String,
        description: String,
    ) -> CorkboardResult<()> {
        let card = self
            .columns
            .iter_mut()
            .flat_map(|column| column.cards.iter_mut())
            .find(|card| card.id == id)
            .ok_or(CorkboardError::NotFound(id))?;
        card.update_text(title, description);
        Ok(())
    }

    /// Remove a card from its column, shifting followers down by one.
    pub fn remove_card(&mut self, id: CardId) -> CorkboardResult<Card> {
        let (column, index) = self.locate(id)?;
        Ok(self.columns[column].cards.remove(index))
    }

    /// Move a card to `target_index` (clamped to the column length after
    /// removal) in `target_column`. Removal and insertion are a single
    /// step from the caller's perspective: the card is never in zero or
    /// two columns. A move to the card's current position is a no-op.
    pub fn move_card(
        &mut self,
        id: CardId,
        target_column: usize,
        target_index: usize,
    ) -> CorkboardResult<()> {
        let columns = self.columns.len();
        if target_column >= columns {
            return Err(CorkboardError::InvalidColumn {
                column: target_column,
                columns,
            });
        }
        let (source_column, source_index) = self.locate(id)?;
        if source_column == target_column && source_index == target_index {
            return Ok(());
        }
        let card = self.columns[source_column].cards.remove(source_index);
        let cards = &mut self.columns[target_column].cards;
        let index = target_index.min(cards.len());
        cards.insert(index, card);
        Ok(())
    }

    pub fn find_card(&self, id: CardId) -> Option<&Card> {
        self.columns
            .iter()
            .flat_map(|column| column.cards.iter())
            .find(|card| card.id == id)
    }

    /// Locate a card's `(column, index)` position.
    pub fn locate(&self, id: CardId) -> CorkboardResult<(usize, usize)> {
        for (column, col) in self.columns.iter().enumerate() {
            if let Some(index) = col.cards.iter().position(|card| card.id == id) {
                return Ok((column, index));
            }
        }
        Err(CorkboardError::NotFound(id))
    }

    /// Export the board as an ordered projection of text fields.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            columns: self
                .columns
                .iter()
                .map(|column| column.cards.iter().map(CardRecord::from).collect())
                .collect(),
        }
    }

    /// Rebuild board contents from a snapshot, replaying card creation per
    /// record in recorded order. Snapshot columns beyond the board's fixed
    /// set are dropped; columns the snapshot lacks come back empty.
    pub fn restore(&mut self, snapshot: Snapshot) {
        let mut records = snapshot.columns.into_iter();
        for column in &mut self.columns {
            column.cards = records
                .next()
                .unwrap_or_default()
                .into_iter()
                .map(|record| Card::new(record.title, record.description))
                .collect();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        Board::new(["To-Do", "Doing", "Done"].map(String::from))
    }

    #[test]
    fn test_create_appends_to_column_end() {
        let mut board = board();
        let a = board.create_card(0, "A".to_string(), "x".to_string()).unwrap();
        let b = board.create_card(0, "B".to_string(), "y".to_string()).unwrap();

        let titles: Vec<_> = board.columns()[0]
            .cards
            .iter()
            .map(|c| c.title.as_str())
            .collect();
        assert_eq!(titles, ["A", "B"]);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_create_rejects_unknown_column() {
        let mut board = board();
        let err = board
            .create_card(3, "A".to_string(), "x".to_string())
            .unwrap_err();
        assert!(matches!(
            err,
            CorkboardError::InvalidColumn { column: 3, columns: 3 }
        ));
    }

    #[test]
    fn test_update_keeps_position() {
        let mut board = board();
        let a = board.create_card(0, "A".to_string(), "x".to_string()).unwrap();
        board.create_card(0, "B".to_string(), "y".to_string()).unwrap();

        board
            .update_card(a.id, "A2".to_string(), "x2".to_string())
            .unwrap();

        assert_eq!(board.locate(a.id).unwrap(), (0, 0));
        let card = board.find_card(a.id).unwrap();
        assert_eq!(card.title, "A2");
        assert_eq!(card.description, "x2");
    }

    #[test]
    fn test_remove_shifts_followers() {
        let mut board = board();
        let a = board.create_card(0, "A".to_string(), "x".to_string()).unwrap();
        let b = board.create_card(0, "B".to_string(), "y".to_string()).unwrap();

        board.remove_card(a.id).unwrap();

        assert_eq!(board.locate(b.id).unwrap(), (0, 0));
        assert_eq!(board.card_count(), 1);
    }

    #[test]
    fn test_remove_unknown_id_leaves_columns_unchanged() {
        let mut board = board();
        board.create_card(0, "A".to_string(), "x".to_string()).unwrap();

        let err = board.remove_card(uuid::Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, CorkboardError::NotFound(_)));
        assert_eq!(board.card_count(), 1);
        assert_eq!(board.columns()[0].cards[0].title, "A");
    }

    #[test]
    fn test_move_within_column_reorders() {
        let mut board = board();
        board.create_card(0, "A".to_string(), "x".to_string()).unwrap();
        let b = board.create_card(0, "B".to_string(), "y".to_string()).unwrap();

        board.move_card(b.id, 0, 0).unwrap();

        let titles: Vec<_> = board.columns()[0]
            .cards
            .iter()
            .map(|c| c.title.as_str())
            .collect();
        assert_eq!(titles, ["B", "A"]);
    }

    #[test]
    fn test_move_across_columns_is_atomic() {
        let mut board = board();
        let a = board.create_card(0, "A".to_string(), "x".to_string()).unwrap();
        board.create_card(2, "C".to_string(), "z".to_string()).unwrap();

        board.move_card(a.id, 2, 0).unwrap();

        assert_eq!(board.locate(a.id).unwrap(), (2, 0));
        assert!(board.columns()[0].cards.is_empty());
        assert_eq!(board.card_count(), 2);
    }

    #[test]
    fn test_move_clamps_index_to_column_length() {
        let mut board = board();
        let a = board.create_card(0, "A".to_string(), "x".to_string()).unwrap();

        board.move_card(a.id, 1, 99).unwrap();

        assert_eq!(board.locate(a.id).unwrap(), (1, 0));
    }

    #[test]
    fn test_move_to_current_position_is_noop() {
        let mut board = board();
        let a = board.create_card(0, "A".to_string(), "x".to_string()).unwrap();
        board.create_card(0, "B".to_string(), "y".to_string()).unwrap();

        board.move_card(a.id, 0, 0).unwrap();

        let titles: Vec<_> = board.columns()[0]
            .cards
            .iter()
            .map(|c| c.title.as_str())
            .collect();
        assert_eq!(titles, ["A", "B"]);
    }

    #[test]
    fn test_move_rejects_unknown_column() {
        let mut board = board();
        let a = board.create_card(0, "A".to_string(), "x".to_string()).unwrap();
        assert!(matches!(
            board.move_card(a.id, 7, 0).unwrap_err(),
            CorkboardError::InvalidColumn { column: 7, columns: 3 }
        ));
    }

    #[test]
    fn test_snapshot_restore_roundtrip() {
        let mut board = board();
        board.create_card(0, "A".to_string(), "x".to_string()).unwrap();
        board.create_card(2, "C".to_string(), "z".to_string()).unwrap();

        let snapshot = board.snapshot();
        let mut restored = Board::new(["To-Do", "Doing", "Done"].map(String::from));
        restored.restore(snapshot);

        assert_eq!(restored.columns()[0].cards.len(), 1);
        assert!(restored.columns()[1].cards.is_empty());
        assert_eq!(restored.columns()[2].cards.len(), 1);
        assert_eq!(restored.columns()[0].cards[0].title, "A");
        assert_eq!(restored.columns()[2].cards[0].title, "C");

        // Restore synthesizes fresh, distinct identities
        let a = restored.columns()[0].cards[0].id;
        let c = restored.columns()[2].cards[0].id;
        assert_ne!(a, c);
        assert!(board.find_card(a).is_none());
    }

    #[test]
    fn test_restore_drops_surplus_snapshot_columns() {
        let snapshot = Snapshot {
            columns: vec![
                vec![CardRecord {
                    title: "A".to_string(),
                    description: "x".to_string(),
                }],
                vec![],
                vec![],
                vec![CardRecord {
                    title: "ghost".to_string(),
                    description: String::new(),
                }],
            ],
        };
        let mut board = board();
        board.restore(snapshot);

        assert_eq!(board.card_count(), 1);
        assert_eq!(board.columns()[0].cards[0].title, "A");
    }

    #[test]
    fn test_restore_replaces_existing_contents() {
        let mut board = board();
        board.create_card(1, "stale".to_string(), String::new()).unwrap();

        board.restore(Snapshot::new());

        assert_eq!(board.card_count(), 0);
        assert_eq!(board.column_count(), 3);
    }
}
