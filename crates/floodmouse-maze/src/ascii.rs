//! Text maze format.
//!
//! Each cell is three characters wide and one line tall, framed by
//! corner posts:
//!
//! ```text
//! +---+---+
//! |   |   |
//! +   +---+
//! |       |
//! +---+---+
//! ```
//!
//! Row 0 is the top line. A `|` after a cell marks its east wall and a
//! `---` below it marks its south wall. Corner characters are not
//! checked, so the `o---o` variant parses too. Perimeter walls are
//! implied and need not be drawn.

use crate::distance::DistanceField;
use crate::error::MazeError;
use crate::grid::Grid;
use floodmouse_core::{Cell, Direction};

impl Grid {
    /// Parse a maze from its text drawing.
    ///
    /// Blank lines are skipped. The side length is inferred from the
    /// number of remaining lines, which must be odd and at least 3.
    ///
    /// # Examples
    ///
    /// ```
    /// use floodmouse_core::{Cell, Direction};
    /// use floodmouse_maze::Grid;
    ///
    /// let grid = Grid::parse_ascii(
    ///     "+---+---+\n\
    ///      |   |   |\n\
    ///      +   +---+\n\
    ///      |       |\n\
    ///      +---+---+",
    /// )
    /// .unwrap();
    /// assert_eq!(grid.size(), 2);
    /// assert!(grid.has_wall(Cell::new(0, 0), Direction::Right));
    /// assert!(grid.has_wall(Cell::new(0, 1), Direction::Down));
    /// assert!(!grid.has_wall(Cell::new(0, 0), Direction::Down));
    /// ```
    pub fn parse_ascii(text: &str) -> Result<Self, MazeError> {
        let lines: Vec<(usize, Vec<char>)> = text
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim().chars().collect::<Vec<_>>()))
            .filter(|(_, chars)| !chars.is_empty())
            .collect();

        if lines.len() < 3 || lines.len() % 2 == 0 {
            return Err(MazeError::Parse {
                line: lines.last().map_or(1, |(n, _)| *n),
                reason: format!("expected an odd number (>= 3) of lines, got {}", lines.len()),
            });
        }
        let size = (lines.len() - 1) / 2;
        let mut grid = Grid::new(size)?;
        let width = 4 * size + 1;

        for (n, chars) in &lines {
            if chars.len() != width {
                return Err(MazeError::Parse {
                    line: *n,
                    reason: format!("expected {width} characters for a {size}-cell row, got {}", chars.len()),
                });
            }
        }

        for row in 0..size {
            let (_, cells_line) = &lines[2 * row + 1];
            let (_, floor_line) = &lines[2 * row + 2];
            for col in 0..size {
                let cell = Cell::new(row, col);
                if cells_line[4 * col + 4] == '|' {
                    grid.add_wall(cell, Direction::Right);
                }
                if floor_line[4 * col + 2] == '-' {
                    grid.add_wall(cell, Direction::Down);
                }
            }
        }

        Ok(grid)
    }

    /// Draw the maze, optionally writing each cell's distance inside it.
    ///
    /// Unreachable cells are left blank. Distances wider than three
    /// characters are shown as `###`.
    pub fn render_ascii(&self, overlay: Option<&DistanceField>) -> String {
        let size = self.size();
        let mut out = String::with_capacity((2 * size + 1) * (4 * size + 2));

        out.push('+');
        for _ in 0..size {
            out.push_str("---+");
        }
        out.push('\n');

        for row in 0..size {
            out.push('|');
            for col in 0..size {
                let cell = Cell::new(row, col);
                match overlay.and_then(|f| f.distance(cell)) {
                    Some(d) if d < 1000 => out.push_str(&format!("{d:^3}")),
                    Some(_) => out.push_str("###"),
                    None => out.push_str("   "),
                }
                out.push(if self.has_wall(cell, Direction::Right) { '|' } else { ' ' });
            }
            out.push('\n');

            out.push('+');
            for col in 0..size {
                let cell = Cell::new(row, col);
                out.push_str(if self.has_wall(cell, Direction::Down) { "---" } else { "   " });
                out.push('+');
            }
            out.push('\n');
        }

        out
    }
}
