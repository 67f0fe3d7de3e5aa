//! Distance field correctness against a brute-force reference.
//!
//! For random wall layouts, every cell's flood-fill distance must equal the
//! length of the shortest path found by an independent single-source BFS
//! started from that cell, or be unreachable when no such path exists.

use floodmouse_core::{Cell, Direction};
use floodmouse_maze::{DistanceField, GoalSet, Grid};
use proptest::prelude::*;
use std::collections::{HashSet, VecDeque};

/// Shortest number of open edges from `start` to any goal, searching
/// outward from `start` only.
fn reference_distance(grid: &Grid, goals: &GoalSet, start: Cell) -> Option<u16> {
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([(start, 0u16)]);
    while let Some((cell, depth)) = queue.pop_front() {
        if goals.contains(cell) {
            return Some(depth);
        }
        for dir in Direction::ALL {
            if grid.has_wall(cell, dir) {
                continue;
            }
            if let Some(next) = cell.neighbour(dir, grid.size()) {
                if seen.insert(next) {
                    queue.push_back((next, depth + 1));
                }
            }
        }
    }
    None
}

fn arb_grid(size: usize, max_walls: usize) -> impl Strategy<Value = Grid> {
    prop::collection::vec((0..size, 0..size, any::<bool>()), 0..max_walls).prop_map(move |walls| {
        let mut grid = Grid::new(size).expect("valid size");
        for (row, col, east) in walls {
            let dir = if east { Direction::Right } else { Direction::Down };
            grid.add_wall(Cell::new(row, col), dir);
        }
        grid
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn classic_maze_matches_reference(grid in arb_grid(16, 400)) {
        let goals = GoalSet::center(16);
        let field = DistanceField::compute(&grid, &goals);
        for cell in grid.cells() {
            prop_assert_eq!(
                field.distance(cell),
                reference_distance(&grid, &goals, cell),
                "cell {}", cell
            );
        }
    }

    #[test]
    fn small_dense_mazes_match_reference(grid in arb_grid(6, 60), goal_row in 0usize..6, goal_col in 0usize..6) {
        let goals = GoalSet::from_cells([Cell::new(goal_row, goal_col)]);
        let field = DistanceField::compute(&grid, &goals);
        for cell in grid.cells() {
            prop_assert_eq!(field.distance(cell), reference_distance(&grid, &goals, cell));
        }
        prop_assert_eq!(field.relaxations(), field.reachable_count());
    }

    #[test]
    fn recompute_is_deterministic(grid in arb_grid(16, 300)) {
        let goals = GoalSet::center(16);
        let a = DistanceField::compute(&grid, &goals);
        let b = DistanceField::compute(&grid.clone(), &goals);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn adding_walls_never_shortens_paths(
        grid in arb_grid(16, 200),
        extra in prop::collection::vec((0usize..16, 0usize..16, 0usize..4), 1..20),
    ) {
        let goals = GoalSet::center(16);
        let before = DistanceField::compute(&grid, &goals);
        let mut more = grid.clone();
        for (row, col, d) in extra {
            more.add_wall(Cell::new(row, col), Direction::from_index(d));
        }
        let after = DistanceField::compute(&more, &goals);
        for cell in grid.cells() {
            match (before.distance(cell), after.distance(cell)) {
                (Some(b), Some(a)) => prop_assert!(a >= b),
                (None, Some(_)) => prop_assert!(false, "cell {} became reachable", cell),
                _ => {}
            }
        }
    }
}
