//! ASCII drawing of a maze layout

use itertools::Itertools;

use crate::cell::{Direction, Point};
use crate::error::MazeError;
use crate::Maze;

/// Parse a persisted layout and draw it.
pub fn draw(layout: &str) -> Result<String, MazeError> {
    Ok(Maze::parse_layout(layout)?.render())
}

impl Maze {
    /// Draw the maze as ASCII art
    ///
    /// Each cell is four characters wide: its left wall and its label (or
    /// blanks). The outer top and bottom borders are always solid.
    ///
    /// # Examples
    /// ```
    /// use amaze::Maze;
    ///
    /// let maze = Maze::parse_layout("1 2\n0 0 1 1 0\n").unwrap();
    /// assert_eq!(maze.render(), "---------\n  0 | 1  \n---------\n");
    /// ```
    pub fn render(&self) -> String {
        let border = format!("{}-", "----".repeat(self.cols()));

        let interior = (0..self.rows()).map(|row| {
            let mut line = (0..self.cols())
                .map(|col| {
                    let at = Point { row, col };
                    let wall = if self.has_wall(at, Direction::Left) { '|' } else { ' ' };
                    match self.cell(at).and_then(|cell| cell.label()) {
                        Some(label) => format!("{} {} ", wall, label),
                        None => format!("{}   ", wall),
                    }
                })
                .join("");
            let last = Point {
                row,
                col: self.cols() - 1,
            };
            line.push(if self.has_wall(last, Direction::Right) { '|' } else { ' ' });

            if row + 1 < self.rows() {
                let floor = (0..self.cols())
                    .map(|col| {
                        if self.has_wall(Point { row, col }, Direction::Bottom) {
                            "----"
                        } else {
                            "   -"
                        }
                    })
                    .join("");
                line = format!("{}\n-{}", line, floor);
            }
            line
        });

        format!("{}\n{}\n{}\n", border, interior.format("\n"), border)
    }
}
