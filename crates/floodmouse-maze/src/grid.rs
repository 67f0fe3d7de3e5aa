//! Square wall grid with one bit per shared edge.

use crate::error::MazeError;
use floodmouse_core::{Cell, Direction};
use smallvec::SmallVec;

/// Bit recording a wall on the east edge of a cell.
const EAST: u8 = 0b0100;
/// Bit recording a wall on the south edge of a cell.
const SOUTH: u8 = 0b0010;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

/// The known wall layout of a `size × size` maze.
///
/// Each interior edge is stored exactly once: a cell owns the bits for
/// its east and south edges, and its west and north edges are read from
/// the neighbouring cells. Two adjacent cells therefore always agree on
/// the wall between them.
///
/// Walls are only ever added. The outer perimeter is implicit: queries
/// toward the outside of the maze report a wall, and additions toward the
/// outside are ignored.
///
/// # Examples
///
/// ```
/// use floodmouse_core::{Cell, Direction};
/// use floodmouse_maze::Grid;
///
/// let mut grid = Grid::classic();
/// assert!(grid.add_wall(Cell::new(3, 3), Direction::Right));
/// // The same edge, seen from the other side.
/// assert!(grid.has_wall(Cell::new(3, 4), Direction::Left));
/// // Perimeter edges are always closed.
/// assert!(grid.has_wall(Cell::new(0, 0), Direction::Up));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    walls: Vec<u8>,
}

impl Grid {
    /// Side length of a standard competition maze.
    pub const CLASSIC_SIZE: usize = 16;

    /// Largest supported side length; every hop distance fits in a `u16`.
    pub const MAX_SIZE: usize = 255;

    /// Create an empty `size × size` grid with no interior walls known.
    ///
    /// Returns `Err(MazeError::EmptyMaze)` if `size` is 0, or
    /// `Err(MazeError::MazeTooLarge)` if it exceeds [`Grid::MAX_SIZE`].
    pub fn new(size: usize) -> Result<Self, MazeError> {
        if size == 0 {
            return Err(MazeError::EmptyMaze);
        }
        if size > Self::MAX_SIZE {
            return Err(MazeError::MazeTooLarge {
                size,
                max: Self::MAX_SIZE,
            });
        }
        Ok(Self {
            size,
            walls: vec![0; size * size],
        })
    }

    /// An empty 16 × 16 grid.
    pub fn classic() -> Self {
        Self {
            size: Self::CLASSIC_SIZE,
            walls: vec![0; Self::CLASSIC_SIZE * Self::CLASSIC_SIZE],
        }
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells.
    pub fn cell_count(&self) -> usize {
        self.walls.len()
    }

    /// Whether `cell` lies inside the grid.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.in_bounds(self.size)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.size).flat_map(move |row| (0..self.size).map(move |col| Cell::new(row, col)))
    }

    /// Row-major index of an in-bounds cell.
    pub fn index(&self, cell: Cell) -> usize {
        debug_assert!(self.contains(cell), "cell {cell} outside {0}x{0} grid", self.size);
        cell.row * self.size + cell.col
    }

    /// Storage slot `(owner index, bit)` of the edge on side `dir` of `cell`,
    /// or `None` for perimeter edges.
    fn edge_slot(&self, cell: Cell, dir: Direction) -> Option<(usize, u8)> {
        let neighbour = cell.neighbour(dir, self.size)?;
        let slot = match dir {
            Direction::Up => (self.index(neighbour), SOUTH),
            Direction::Right => (self.index(cell), EAST),
            Direction::Down => (self.index(cell), SOUTH),
            Direction::Left => (self.index(neighbour), EAST),
        };
        Some(slot)
    }

    /// Whether a wall is known on side `dir` of `cell`.
    ///
    /// Perimeter edges always report `true`.
    pub fn has_wall(&self, cell: Cell, dir: Direction) -> bool {
        match self.edge_slot(cell, dir) {
            Some((idx, bit)) => self.walls[idx] & bit != 0,
            None => true,
        }
    }

    /// Record a wall on side `dir` of `cell`.
    ///
    /// Idempotent. Returns `true` only if the wall was not known before.
    /// Perimeter edges are ignored and return `false`.
    pub fn add_wall(&mut self, cell: Cell, dir: Direction) -> bool {
        let Some((idx, bit)) = self.edge_slot(cell, dir) else {
            return false;
        };
        let fresh = self.walls[idx] & bit == 0;
        self.walls[idx] |= bit;
        fresh
    }

    /// The in-bounds neighbours of `cell` with no known wall between them,
    /// in `Up, Right, Down, Left` order.
    pub fn open_neighbours(&self, cell: Cell) -> SmallVec<[(Direction, Cell); 4]> {
        Direction::ALL
            .iter()
            .filter(|&&dir| !self.has_wall(cell, dir))
            .filter_map(|&dir| cell.neighbour(dir, self.size).map(|n| (dir, n)))
            .collect()
    }

    /// Every known interior wall, each reported once as the east or south
    /// edge of its owning cell, in row-major order.
    pub fn walls(&self) -> impl Iterator<Item = (Cell, Direction)> + '_ {
        self.cells().flat_map(move |cell| {
            let bits = self.walls[self.index(cell)];
            let east = (bits & EAST != 0).then_some((cell, Direction::Right));
            let south = (bits & SOUTH != 0).then_some((cell, Direction::Down));
            east.into_iter().chain(south)
        })
    }

    /// Number of known interior walls.
    pub fn wall_count(&self) -> usize {
        self.walls
            .iter()
            .map(|&bits| (bits & EAST != 0) as usize + (bits & SOUTH != 0) as usize)
            .sum()
    }

    /// Whether every wall known to `other` is also known here.
    ///
    /// Grids of different sizes are never comparable.
    pub fn is_superset_of(&self, other: &Grid) -> bool {
        self.size == other.size
            && self
                .walls
                .iter()
                .zip(&other.walls)
                .all(|(&mine, &theirs)| mine & theirs == theirs)
    }

    /// FNV-1a hash of the size and wall bits, for cheap run comparison.
    pub fn fingerprint(&self) -> u64 {
        let mut hash = FNV_OFFSET;
        for &b in (self.size as u64).to_le_bytes().iter().chain(&self.walls) {
            hash = (hash ^ b as u64).wrapping_mul(FNV_PRIME);
        }
        hash
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn c(row: usize, col: usize) -> Cell {
        Cell::new(row, col)
    }

    // ── Constructor tests ───────────────────────────────────────

    #[test]
    fn new_zero_size_returns_error() {
        assert_eq!(Grid::new(0), Err(MazeError::EmptyMaze));
    }

    #[test]
    fn new_rejects_oversized() {
        assert!(matches!(
            Grid::new(256),
            Err(MazeError::MazeTooLarge { size: 256, max: 255 })
        ));
        assert!(Grid::new(255).is_ok());
    }

    #[test]
    fn classic_is_empty_16() {
        let g = Grid::classic();
        assert_eq!(g.size(), 16);
        assert_eq!(g.cell_count(), 256);
        assert_eq!(g.wall_count(), 0);
    }

    // ── Wall tests ──────────────────────────────────────────────

    #[test]
    fn walls_are_shared_between_neighbours() {
        let mut g = Grid::classic();
        g.add_wall(c(4, 4), Direction::Up);
        assert!(g.has_wall(c(3, 4), Direction::Down));
        g.add_wall(c(4, 4), Direction::Left);
        assert!(g.has_wall(c(4, 3), Direction::Right));
        assert_eq!(g.wall_count(), 2);
    }

    #[test]
    fn add_wall_is_idempotent() {
        let mut g = Grid::classic();
        assert!(g.add_wall(c(2, 2), Direction::Down));
        assert!(!g.add_wall(c(2, 2), Direction::Down));
        assert!(!g.add_wall(c(3, 2), Direction::Up));
        assert_eq!(g.wall_count(), 1);
    }

    #[test]
    fn perimeter_is_closed_and_never_stored() {
        let mut g = Grid::classic();
        assert!(g.has_wall(c(0, 5), Direction::Up));
        assert!(g.has_wall(c(15, 5), Direction::Down));
        assert!(g.has_wall(c(5, 0), Direction::Left));
        assert!(g.has_wall(c(5, 15), Direction::Right));
        assert!(!g.add_wall(c(0, 5), Direction::Up));
        assert!(!g.add_wall(c(5, 15), Direction::Right));
        assert_eq!(g.wall_count(), 0);
    }

    #[test]
    fn open_neighbours_skip_walls_and_perimeter() {
        let mut g = Grid::classic();
        let n = g.open_neighbours(c(0, 0));
        assert_eq!(n.as_slice(), &[(Direction::Right, c(0, 1)), (Direction::Down, c(1, 0))]);
        g.add_wall(c(0, 0), Direction::Right);
        let n = g.open_neighbours(c(0, 0));
        assert_eq!(n.as_slice(), &[(Direction::Down, c(1, 0))]);
    }

    #[test]
    fn walls_iterator_reports_owner_edges() {
        let mut g = Grid::classic();
        g.add_wall(c(1, 1), Direction::Up);
        g.add_wall(c(1, 1), Direction::Right);
        let walls: Vec<_> = g.walls().collect();
        assert_eq!(walls, vec![(c(0, 1), Direction::Down), (c(1, 1), Direction::Right)]);
    }

    #[test]
    fn superset_and_fingerprint() {
        let mut a = Grid::classic();
        let b = a.clone();
        a.add_wall(c(7, 7), Direction::Right);
        assert!(a.is_superset_of(&b));
        assert!(!b.is_superset_of(&a));
        assert_ne!(a.fingerprint(), b.fingerprint());
        assert!(!a.is_superset_of(&Grid::new(8).unwrap()));
    }

    // ── Property tests ──────────────────────────────────────────

    fn arb_wall() -> impl Strategy<Value = (Cell, Direction)> {
        (0usize..16, 0usize..16, 0usize..4).prop_map(|(r, col, d)| (c(r, col), Direction::from_index(d)))
    }

    proptest! {
        #[test]
        fn adding_walls_is_monotonic(walls in prop::collection::vec(arb_wall(), 0..64)) {
            let mut g = Grid::classic();
            for (cell, dir) in walls {
                let before = g.clone();
                g.add_wall(cell, dir);
                prop_assert!(g.is_superset_of(&before));
                prop_assert!(g.has_wall(cell, dir));
                if let Some(n) = cell.neighbour(dir, 16) {
                    prop_assert!(g.has_wall(n, dir.reversed()));
                }
            }
        }

        #[test]
        fn wall_count_matches_iterator(walls in prop::collection::vec(arb_wall(), 0..64)) {
            let mut g = Grid::classic();
            for (cell, dir) in walls {
                g.add_wall(cell, dir);
            }
            prop_assert_eq!(g.walls().count(), g.wall_count());
        }
    }
}
