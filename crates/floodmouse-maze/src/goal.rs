//! The fixed set of cells that end a run.

use floodmouse_core::Cell;
use smallvec::SmallVec;

/// The goal region: reaching any of its cells ends the run.
///
/// Read-only after construction. Cells are kept sorted and deduplicated
/// so iteration order, and hence distance-field seeding, is stable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GoalSet {
    cells: SmallVec<[Cell; 4]>,
}

impl GoalSet {
    /// The centre of a `size × size` maze: the 2 × 2 block for even sizes,
    /// the single middle cell for odd sizes.
    ///
    /// # Examples
    ///
    /// ```
    /// use floodmouse_core::Cell;
    /// use floodmouse_maze::GoalSet;
    ///
    /// let goals = GoalSet::center(16);
    /// assert_eq!(goals.len(), 4);
    /// assert!(goals.contains(Cell::new(7, 8)));
    /// ```
    pub fn center(size: usize) -> Self {
        let hi = size / 2;
        let lo = if size % 2 == 0 { hi.saturating_sub(1) } else { hi };
        Self::from_cells([
            Cell::new(lo, lo),
            Cell::new(lo, hi),
            Cell::new(hi, lo),
            Cell::new(hi, hi),
        ])
    }

    /// A goal set of arbitrary cells.
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Self {
        let mut cells: SmallVec<[Cell; 4]> = cells.into_iter().collect();
        cells.sort_unstable();
        cells.dedup();
        Self { cells }
    }

    /// Whether `cell` is a goal.
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.binary_search(&cell).is_ok()
    }

    /// Goal cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Number of goal cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the set has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_of_classic_maze() {
        let goals = GoalSet::center(16);
        let cells: Vec<_> = goals.iter().collect();
        assert_eq!(
            cells,
            vec![
                Cell::new(7, 7),
                Cell::new(7, 8),
                Cell::new(8, 7),
                Cell::new(8, 8)
            ]
        );
    }

    #[test]
    fn center_of_odd_maze_is_single_cell() {
        let goals = GoalSet::center(5);
        assert_eq!(goals.len(), 1);
        assert!(goals.contains(Cell::new(2, 2)));
    }

    #[test]
    fn from_cells_dedups() {
        let goals = GoalSet::from_cells([Cell::new(1, 1), Cell::new(0, 0), Cell::new(1, 1)]);
        assert_eq!(goals.len(), 2);
        assert!(goals.contains(Cell::new(0, 0)));
        assert!(!goals.contains(Cell::new(0, 1)));
    }
}
