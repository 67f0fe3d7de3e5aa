//! Reusable maze fixtures.
//!
//! - [`open_maze`]: perimeter only.
//! - [`boxed_start`]: the classic start cell closed on every side.
//! - [`sealed_center`]: the classic goal block walled off from the rest.
//! - [`random_perfect_maze`]: a seeded spanning-tree maze, every cell
//!   reachable from every other by exactly one path.

use std::collections::HashSet;

use floodmouse_core::{Cell, Direction};
use floodmouse_maze::Grid;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A `size × size` maze with no interior walls.
///
/// # Panics
///
/// If `size` is not a valid grid size.
pub fn open_maze(size: usize) -> Grid {
    Grid::new(size).expect("fixture size must be valid")
}

/// The classic 16×16 maze with the start cell (15, 0) fully enclosed.
pub fn boxed_start() -> Grid {
    let mut grid = Grid::classic();
    grid.add_wall(Cell::new(15, 0), Direction::Up);
    grid.add_wall(Cell::new(15, 0), Direction::Right);
    grid
}

/// The classic 16×16 maze with a closed ring around the four centre cells.
pub fn sealed_center() -> Grid {
    let mut grid = Grid::classic();
    for col in 7..=8 {
        grid.add_wall(Cell::new(7, col), Direction::Up);
        grid.add_wall(Cell::new(8, col), Direction::Down);
    }
    for row in 7..=8 {
        grid.add_wall(Cell::new(row, 7), Direction::Left);
        grid.add_wall(Cell::new(row, 8), Direction::Right);
    }
    grid
}

/// A perfect maze carved by randomized depth-first search from the
/// bottom-left corner. The same `seed` always yields the same maze.
///
/// # Panics
///
/// If `size` is not a valid grid size.
pub fn random_perfect_maze(size: usize, seed: u64) -> Grid {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut grid = open_maze(size);

    let start = Cell::new(size - 1, 0);
    let mut seen = HashSet::from([start]);
    let mut carved: HashSet<(Cell, Direction)> = HashSet::new();
    let mut stack = vec![start];

    while let Some(&cell) = stack.last() {
        let fresh: Vec<(Direction, Cell)> = Direction::ALL
            .iter()
            .filter_map(|&dir| cell.neighbour(dir, size).map(|n| (dir, n)))
            .filter(|(_, n)| !seen.contains(n))
            .collect();
        if fresh.is_empty() {
            stack.pop();
            continue;
        }
        let (dir, next) = fresh[rng.random_range(0..fresh.len())];
        carved.insert((cell, dir));
        carved.insert((next, dir.reversed()));
        seen.insert(next);
        stack.push(next);
    }

    for row in 0..size {
        for col in 0..size {
            let cell = Cell::new(row, col);
            for dir in [Direction::Right, Direction::Down] {
                if !carved.contains(&(cell, dir)) {
                    grid.add_wall(cell, dir);
                }
            }
        }
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use floodmouse_maze::{DistanceField, GoalSet};

    #[test]
    fn perfect_maze_is_a_spanning_tree() {
        let grid = random_perfect_maze(16, 7);
        // A spanning tree over 256 cells has 255 open edges out of 480.
        assert_eq!(grid.wall_count(), 480 - 255);
        let field = DistanceField::compute(&grid, &GoalSet::center(16));
        assert_eq!(field.reachable_count(), 256);
    }

    #[test]
    fn seed_is_reproducible() {
        assert_eq!(random_perfect_maze(8, 3), random_perfect_maze(8, 3));
        assert_ne!(random_perfect_maze(8, 3), random_perfect_maze(8, 4));
    }

    #[test]
    fn boxed_start_has_no_exit() {
        let grid = boxed_start();
        assert!(grid.open_neighbours(Cell::new(15, 0)).is_empty());
    }

    #[test]
    fn sealed_center_cuts_off_goal() {
        let grid = sealed_center();
        let field = DistanceField::compute(&grid, &GoalSet::center(16));
        assert_eq!(field.reachable_count(), 4);
    }
}
