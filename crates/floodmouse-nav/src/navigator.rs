//! Direction selection from the distance field.

use floodmouse_core::{Cell, Direction, NavError};
use floodmouse_maze::{DistanceField, Grid};

/// Order in which equally good neighbours are preferred.
///
/// The first entry wins every tie.
pub const TIE_BREAK: [Direction; 4] = [
    Direction::Up,
    Direction::Left,
    Direction::Right,
    Direction::Down,
];

/// Distance of the neighbour of `cell` in `dir`, or `None` if that
/// neighbour is outside the maze, behind a known wall, or unreachable.
pub fn candidate(grid: &Grid, field: &DistanceField, cell: Cell, dir: Direction) -> Option<u16> {
    if grid.has_wall(cell, dir) {
        return None;
    }
    let next = cell.neighbour(dir, grid.size())?;
    field.distance(next)
}

/// Pick the neighbour of `cell` with the smallest distance to the goal.
///
/// Ties resolve in [`TIE_BREAK`] order. Fails with
/// [`NavError::BoxedIn`] when no neighbour has a finite distance.
///
/// # Examples
///
/// ```
/// use floodmouse_core::{Cell, Direction};
/// use floodmouse_maze::{DistanceField, GoalSet, Grid};
/// use floodmouse_nav::navigator::choose_direction;
///
/// let grid = Grid::classic();
/// let field = DistanceField::compute(&grid, &GoalSet::center(16));
/// // Up and Right both lead one step closer; Up wins the tie.
/// let dir = choose_direction(&grid, &field, Cell::new(15, 0)).unwrap();
/// assert_eq!(dir, Direction::Up);
/// ```
pub fn choose_direction(
    grid: &Grid,
    field: &DistanceField,
    cell: Cell,
) -> Result<Direction, NavError> {
    let mut best: Option<(Direction, u16)> = None;
    for dir in TIE_BREAK {
        let Some(d) = candidate(grid, field, cell, dir) else {
            continue;
        };
        if best.is_none_or(|(_, b)| d < b) {
            best = Some((dir, d));
        }
    }
    best.map(|(dir, _)| dir).ok_or(NavError::BoxedIn { cell })
}
