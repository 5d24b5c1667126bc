//! Drag-reorder engine.
//!
//! Pure geometry: given the rendered layout of a destination column and a
//! pointer coordinate, decide where the dragged card should be inserted.
//! The engine holds no state of its own, so gestures can be tested without
//! simulating pointer events.

/// Vertical extent of one rendered sibling, in the coordinate space of its
/// column. The sibling list never includes the card being dragged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiblingExtent {
    pub top: f64,
    pub height: f64,
}

impl SiblingExtent {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    fn midpoint(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Compute the insertion index for a dragged card.
///
/// A sibling is an eligible insertion point when the pointer sits above its
/// vertical midpoint (`pointer_y - midpoint < 0`). The dragged card goes in
/// front of the eligible sibling whose midpoint is nearest above the
/// pointer, i.e. the one with the greatest negative offset. Equal offsets
/// (degenerate zero-height layouts) keep the sibling encountered first, so
/// the result is stable. When no sibling is eligible, or the column is
/// empty, the card goes to the end.
pub fn insertion_index(siblings: &[SiblingExtent], pointer_y: f64) -> usize {
    let mut nearest: Option<(usize, f64)> = None;
    for (index, sibling) in siblings.iter().enumerate() {
        let offset = pointer_y - sibling.midpoint();
        if offset < 0.0 {
            match nearest {
                Some((_, best)) if offset <= best => {}
                _ => nearest = Some((index, offset)),
            }
        }
    }
    nearest.map_or(siblings.len(), |(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Three siblings with midpoints at 50, 150, and 250
    fn stack_of_three() -> Vec<SiblingExtent> {
        vec![
            SiblingExtent::new(30.0, 40.0),
            SiblingExtent::new(130.0, 40.0),
            SiblingExtent::new(230.0, 40.0),
        ]
    }

    #[test]
    fn test_pointer_between_siblings_inserts_before_next() {
        assert_eq!(insertion_index(&stack_of_three(), 120.0), 1);
    }

    #[test]
    fn test_pointer_below_all_midpoints_inserts_at_end() {
        assert_eq!(insertion_index(&stack_of_three(), 400.0), 3);
    }

    #[test]
    fn test_pointer_above_all_midpoints_inserts_at_start() {
        assert_eq!(insertion_index(&stack_of_three(), 0.0), 0);
    }

    #[test]
    fn test_empty_column_inserts_at_zero() {
        assert_eq!(insertion_index(&[], 12345.0), 0);
        assert_eq!(insertion_index(&[], -12345.0), 0);
    }

    #[test]
    fn test_pointer_on_midpoint_is_not_eligible() {
        // offset == 0 means the pointer is not above the midpoint
        assert_eq!(insertion_index(&stack_of_three(), 250.0), 3);
        assert_eq!(insertion_index(&stack_of_three(), 150.0), 2);
    }

    #[test]
    fn test_equal_offsets_keep_first_sibling() {
        let collapsed = vec![
            SiblingExtent::new(100.0, 0.0),
            SiblingExtent::new(100.0, 0.0),
        ];
        assert_eq!(insertion_index(&collapsed, 50.0), 0);
    }

    #[test]
    fn test_deterministic_for_fixed_input() {
        let siblings = stack_of_three();
        let first = insertion_index(&siblings, 120.0);
        for _ in 0..10 {
            assert_eq!(insertion_index(&siblings, 120.0), first);
        }
    }
}
