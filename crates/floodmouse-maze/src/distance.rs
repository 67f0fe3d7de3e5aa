//! Flood-fill distance field over a partially known maze.
//!
//! The field is rebuilt from scratch on every call to
//! [`DistanceField::compute`]. Nothing carries over between ticks, so the
//! result depends only on the current walls and goals.

use crate::goal::GoalSet;
use crate::grid::Grid;
use floodmouse_core::Cell;
use std::collections::VecDeque;

/// Shortest hop distance from every cell to the nearest goal cell.
///
/// Computed by multi-source breadth-first propagation: every goal is
/// seeded at distance 0, and a neighbour is reachable only if no wall is
/// known between it and the current cell. A cell is re-queued only when a
/// strictly smaller distance arrives, so the result is the true shortest
/// hop count regardless of visiting order. Cells with no path to a goal
/// hold [`DistanceField::UNREACHABLE`].
///
/// # Examples
///
/// ```
/// use floodmouse_core::{Cell, Direction};
/// use floodmouse_maze::{DistanceField, GoalSet, Grid};
///
/// let grid = Grid::classic();
/// let field = DistanceField::compute(&grid, &GoalSet::center(16));
/// assert_eq!(field.distance(Cell::new(8, 8)), Some(0));
/// assert_eq!(field.distance(Cell::new(15, 0)), Some(14));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistanceField {
    size: usize,
    distances: Vec<u16>,
    relaxations: usize,
}

impl DistanceField {
    /// Sentinel stored for cells with no known path to a goal.
    pub const UNREACHABLE: u16 = u16::MAX;

    /// Propagate distances outward from `goals` through the open edges of `grid`.
    ///
    /// Goal cells outside the grid are ignored.
    pub fn compute(grid: &Grid, goals: &GoalSet) -> Self {
        let size = grid.size();
        let mut distances = vec![Self::UNREACHABLE; grid.cell_count()];
        let mut relaxations = 0;
        let mut queue = VecDeque::with_capacity(grid.cell_count());

        for goal in goals.iter().filter(|&g| grid.contains(g)) {
            let idx = grid.index(goal);
            if distances[idx] != 0 {
                distances[idx] = 0;
                relaxations += 1;
                queue.push_back(goal);
            }
        }

        while let Some(cell) = queue.pop_front() {
            let next = distances[grid.index(cell)] + 1;
            for (_, neighbour) in grid.open_neighbours(cell) {
                let idx = grid.index(neighbour);
                if distances[idx] <= next {
                    continue;
                }
                distances[idx] = next;
                relaxations += 1;
                queue.push_back(neighbour);
            }
        }

        Self {
            size,
            distances,
            relaxations,
        }
    }

    /// Side length of the maze the field was computed for.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Distance of `cell` to the nearest goal, or `None` if it is
    /// unreachable or outside the maze.
    pub fn distance(&self, cell: Cell) -> Option<u16> {
        if !cell.in_bounds(self.size) {
            return None;
        }
        let d = self.distances[cell.row * self.size + cell.col];
        (d != Self::UNREACHABLE).then_some(d)
    }

    /// Whether `cell` has a known path to a goal.
    pub fn is_reachable(&self, cell: Cell) -> bool {
        self.distance(cell).is_some()
    }

    /// Raw distances in row-major order, including the sentinel.
    pub fn as_slice(&self) -> &[u16] {
        &self.distances
    }

    /// Number of cells with a known path to a goal.
    pub fn reachable_count(&self) -> usize {
        self.distances
            .iter()
            .filter(|&&d| d != Self::UNREACHABLE)
            .count()
    }

    /// How many times a cell's distance was lowered during propagation.
    ///
    /// Includes the goal seeds. With breadth-first ordering every
    /// reachable cell is settled exactly once, so this equals
    /// [`reachable_count`](Self::reachable_count).
    pub fn relaxations(&self) -> usize {
        self.relaxations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use floodmouse_core::Direction;

    fn c(row: usize, col: usize) -> Cell {
        Cell::new(row, col)
    }

    fn manhattan_to_center(cell: Cell) -> u16 {
        let dr = if cell.row < 7 { 7 - cell.row } else { cell.row.saturating_sub(8) };
        let dc = if cell.col < 7 { 7 - cell.col } else { cell.col.saturating_sub(8) };
        (dr + dc) as u16
    }

    #[test]
    fn open_maze_is_manhattan_to_center() {
        let grid = Grid::classic();
        let field = DistanceField::compute(&grid, &GoalSet::center(16));
        for cell in grid.cells() {
            assert_eq!(field.distance(cell), Some(manhattan_to_center(cell)), "cell {cell}");
        }
        assert_eq!(field.reachable_count(), 256);
        assert_eq!(field.relaxations(), 256);
    }

    #[test]
    fn walls_force_detour() {
        // 3x3 maze, goal top-left, wall between (0,0) and (1,0).
        let mut grid = Grid::new(3).unwrap();
        grid.add_wall(c(0, 0), Direction::Down);
        let field = DistanceField::compute(&grid, &GoalSet::from_cells([c(0, 0)]));
        assert_eq!(field.distance(c(0, 1)), Some(1));
        assert_eq!(field.distance(c(1, 1)), Some(2));
        assert_eq!(field.distance(c(1, 0)), Some(3));
    }

    #[test]
    fn enclosed_cell_is_unreachable() {
        let mut grid = Grid::classic();
        for dir in Direction::ALL {
            grid.add_wall(c(2, 2), dir);
        }
        let field = DistanceField::compute(&grid, &GoalSet::center(16));
        assert_eq!(field.distance(c(2, 2)), None);
        assert!(!field.is_reachable(c(2, 2)));
        assert_eq!(field.as_slice()[2 * 16 + 2], DistanceField::UNREACHABLE);
        assert_eq!(field.reachable_count(), 255);
    }

    #[test]
    fn sealed_goal_leaves_everything_else_unreachable() {
        let mut grid = Grid::new(4).unwrap();
        grid.add_wall(c(0, 0), Direction::Right);
        grid.add_wall(c(0, 0), Direction::Down);
        let field = DistanceField::compute(&grid, &GoalSet::from_cells([c(0, 0)]));
        assert_eq!(field.reachable_count(), 1);
        assert_eq!(field.distance(c(3, 3)), None);
    }

    #[test]
    fn out_of_bounds_queries_and_goals() {
        let grid = Grid::new(4).unwrap();
        let field = DistanceField::compute(&grid, &GoalSet::from_cells([c(9, 9), c(3, 3)]));
        assert_eq!(field.distance(c(4, 0)), None);
        assert_eq!(field.distance(c(0, 0)), Some(6));
    }
}
