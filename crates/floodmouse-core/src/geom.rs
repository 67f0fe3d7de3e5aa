//! Cell coordinates, headings and the simulator display coordinate system.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell of the maze, addressed as `(row, col)`.
///
/// Row 0 is the top row and rows grow downward; column 0 is the left
/// column. A `Cell` carries no size information, so bounds are checked
/// against the maze size at every step (see [`Cell::neighbour`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    /// Row index, `0` at the top.
    pub row: usize,
    /// Column index, `0` at the left.
    pub col: usize,
}

impl Cell {
    /// Construct a cell from its row and column.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether the cell lies inside a `size × size` maze.
    pub fn in_bounds(self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// The adjacent cell in `dir`, or `None` if it would leave a
    /// `size × size` maze.
    pub fn neighbour(self, dir: Direction, size: usize) -> Option<Cell> {
        let (dr, dc) = dir.offset();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        let next = Cell::new(row, col);
        next.in_bounds(size).then_some(next)
    }

    /// Convert to the simulator's coordinate system for a `size × size` maze.
    ///
    /// The column is passed through; the row is inverted because the
    /// display's vertical axis grows upward.
    pub fn display(self, size: usize) -> DisplayCoord {
        DisplayCoord {
            x: self.col,
            y: size - 1 - self.row,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// A position in the simulator's display coordinates.
///
/// `x` is the column; `y` counts rows from the bottom of the maze.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DisplayCoord {
    /// Column, left to right.
    pub x: usize,
    /// Row, bottom to top.
    pub y: usize,
}

impl fmt::Display for DisplayCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

/// An absolute heading on the grid.
///
/// Discriminants follow the clockwise cycle `Up → Right → Down → Left`,
/// so the number of right turns from `a` to `b` is
/// `(b.index() + 4 - a.index()) % 4`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Direction {
    /// Toward row 0.
    Up = 0,
    /// Toward increasing column.
    Right = 1,
    /// Toward increasing row.
    Down = 2,
    /// Toward column 0.
    Left = 3,
}

impl Direction {
    /// All headings in clockwise order starting at `Up`.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Position in the clockwise cycle, `0..4`.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Heading at position `i % 4` of the clockwise cycle.
    pub const fn from_index(i: usize) -> Direction {
        Self::ALL[i % 4]
    }

    /// Returns the `(row_offset, col_offset)` of one step in this heading.
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }

    /// The heading after a 90° clockwise turn.
    pub const fn turned_right(self) -> Direction {
        Self::from_index(self.index() + 1)
    }

    /// The heading after a 90° counter-clockwise turn.
    pub const fn turned_left(self) -> Direction {
        Self::from_index(self.index() + 3)
    }

    /// The opposite heading.
    pub const fn reversed(self) -> Direction {
        Self::from_index(self.index() + 2)
    }

    /// Absolute heading of a side given relative to this heading.
    pub const fn rotate(self, side: Relative) -> Direction {
        match side {
            Relative::Left => self.turned_left(),
            Relative::Front => self,
            Relative::Right => self.turned_right(),
        }
    }

    /// Single-letter compass tag used by the simulator's wall marker.
    pub const fn compass(self) -> char {
        match self {
            Direction::Up => 'n',
            Direction::Right => 'e',
            Direction::Down => 's',
            Direction::Left => 'w',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
        };
        f.write_str(name)
    }
}

/// A side of the robot relative to its current heading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Relative {
    /// 90° counter-clockwise of the heading.
    Left,
    /// The heading itself.
    Front,
    /// 90° clockwise of the heading.
    Right,
}

impl Relative {
    /// The three sensed sides, in sensing order.
    pub const SENSED: [Relative; 3] = [Relative::Left, Relative::Front, Relative::Right];
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn neighbour_interior() {
        let c = Cell::new(5, 5);
        assert_eq!(c.neighbour(Direction::Up, 16), Some(Cell::new(4, 5)));
        assert_eq!(c.neighbour(Direction::Right, 16), Some(Cell::new(5, 6)));
        assert_eq!(c.neighbour(Direction::Down, 16), Some(Cell::new(6, 5)));
        assert_eq!(c.neighbour(Direction::Left, 16), Some(Cell::new(5, 4)));
    }

    #[test]
    fn neighbour_outside_is_none() {
        assert_eq!(Cell::new(0, 0).neighbour(Direction::Up, 16), None);
        assert_eq!(Cell::new(0, 0).neighbour(Direction::Left, 16), None);
        assert_eq!(Cell::new(15, 15).neighbour(Direction::Down, 16), None);
        assert_eq!(Cell::new(15, 15).neighbour(Direction::Right, 16), None);
    }

    #[test]
    fn display_inverts_rows() {
        assert_eq!(Cell::new(15, 0).display(16), DisplayCoord { x: 0, y: 0 });
        assert_eq!(Cell::new(0, 15).display(16), DisplayCoord { x: 15, y: 15 });
        assert_eq!(Cell::new(7, 8).display(16), DisplayCoord { x: 8, y: 8 });
    }

    #[test]
    fn rotate_relative_sides() {
        assert_eq!(Direction::Up.rotate(Relative::Left), Direction::Left);
        assert_eq!(Direction::Up.rotate(Relative::Right), Direction::Right);
        assert_eq!(Direction::Right.rotate(Relative::Left), Direction::Up);
        assert_eq!(Direction::Down.rotate(Relative::Right), Direction::Left);
        assert_eq!(Direction::Left.rotate(Relative::Front), Direction::Left);
    }

    #[test]
    fn compass_tags() {
        let tags: String = Direction::ALL.iter().map(|d| d.compass()).collect();
        assert_eq!(tags, "nesw");
    }

    fn arb_direction() -> impl Strategy<Value = Direction> {
        (0usize..4).prop_map(Direction::from_index)
    }

    proptest! {
        #[test]
        fn turns_are_inverse(d in arb_direction()) {
            prop_assert_eq!(d.turned_left().turned_right(), d);
            prop_assert_eq!(d.turned_right().turned_right(), d.reversed());
            prop_assert_eq!(d.reversed().reversed(), d);
        }

        #[test]
        fn neighbour_round_trips(row in 0usize..16, col in 0usize..16, d in arb_direction()) {
            let c = Cell::new(row, col);
            if let Some(n) = c.neighbour(d, 16) {
                prop_assert_eq!(n.neighbour(d.reversed(), 16), Some(c));
            }
        }
    }
}
