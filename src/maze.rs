//! Maze grid and its persisted text layout
//!
//! The layout stores each shared wall once:
//!
//! ```text
//! <rows> <cols>
//! <left_0> <label_0> ... <left_{cols-1}> <label_{cols-1}> <right_{cols-1}>
//! <bottom_0> ... <bottom_{cols-1}>            (not after the final row)
//! ```
//!
//! Walls are `1` (present) or `0` (absent), labels are `-1` (unset) or a
//! digit.

use std::fmt;
use std::str::{FromStr, SplitWhitespace};

use itertools::Itertools;

use crate::cell::{Cell, Direction, Point};
use crate::error::MazeError;

/// Rectangular grid of cells with fixed dimensions
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Maze {
    rows: usize,
    cols: usize,
    /// Cells indexed by `[row][col]`
    cells: Vec<Vec<Cell>>,
}

impl Maze {
    /// Largest number of cells a maze may hold
    pub const MAX_CELLS: usize = 1 << 24;

    /// Create a fully walled, unvisited maze.
    ///
    /// Returns error, if either dimension is zero or the grid would hold
    /// more than [Self::MAX_CELLS] cells.
    pub fn new(rows: usize, cols: usize) -> Result<Self, MazeError> {
        let size = rows.checked_mul(cols).unwrap_or(usize::MAX);
        if rows == 0 || cols == 0 || size > Self::MAX_CELLS {
            return Err(MazeError::InvalidDimensions { rows, cols });
        }
        let cells = (0..rows)
            .map(|row| (0..cols).map(|col| Cell::new(Point { row, col })).collect())
            .collect();
        Ok(Maze { rows, cols, cells })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Top-left cell, where generation and solving start
    pub fn entrance(&self) -> Point {
        Point { row: 0, col: 0 }
    }

    /// Bottom-right cell
    pub fn exit(&self) -> Point {
        Point {
            row: self.rows - 1,
            col: self.cols - 1,
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        point.row < self.rows && point.col < self.cols
    }

    pub fn cell(&self, point: Point) -> Option<&Cell> {
        self.cells.get(point.row).and_then(|row| row.get(point.col))
    }

    pub(crate) fn cell_mut(&mut self, point: Point) -> Option<&mut Cell> {
        self.cells
            .get_mut(point.row)
            .and_then(|row| row.get_mut(point.col))
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().flatten()
    }

    /// Neighbouring location inside the grid
    pub fn neighbor(&self, point: Point, direction: Direction) -> Option<Point> {
        point.step(direction).filter(|&p| self.contains(p))
    }

    /// Whether `point` has a wall on its `direction` side
    ///
    /// Locations outside the grid are treated as solid.
    pub fn has_wall(&self, point: Point, direction: Direction) -> bool {
        self.cell(point).map_or(true, |cell| cell.has_wall(direction))
    }

    /// Remove the wall on `direction` side of `point`.
    ///
    /// When the wall is shared with a neighbour, the neighbour's matching
    /// wall is removed too.
    pub fn remove_wall(&mut self, point: Point, direction: Direction) {
        if let Some(cell) = self.cell_mut(point) {
            cell.remove_wall(direction);
        }
        if let Some(other) = self.neighbor(point, direction) {
            if let Some(cell) = self.cell_mut(other) {
                cell.remove_wall(direction.opposite());
            }
        }
    }

    /// Number of removed walls between pairs of cells
    pub fn passages(&self) -> usize {
        self.cells()
            .map(|cell| {
                [Direction::Right, Direction::Bottom]
                    .into_iter()
                    .filter(|&d| {
                        self.neighbor(cell.position(), d).is_some() && !cell.has_wall(d)
                    })
                    .count()
            })
            .sum()
    }

    pub(crate) fn mark_visited(&mut self, point: Point) {
        if let Some(cell) = self.cell_mut(point) {
            cell.visited = true;
        }
    }

    pub(crate) fn set_label(&mut self, point: Point, label: Option<u8>) {
        if let Some(cell) = self.cell_mut(point) {
            cell.label = label;
        }
    }

    /// Clear visited flags and labels of every cell.
    pub(crate) fn reset_marks(&mut self) {
        for cell in self.cells.iter_mut().flatten() {
            cell.visited = false;
            cell.label = None;
        }
    }

    /// Parse the persisted text layout.
    ///
    /// Both sides of each shared wall are rebuilt from its single stored
    /// flag. Returns error, if the text does not describe exactly one
    /// `rows x cols` grid.
    ///
    /// # Examples
    /// ```
    /// use amaze::{Direction, Maze, Point};
    ///
    /// let maze = Maze::parse_layout("1 2\n0 -1 1 -1 1\n").unwrap();
    /// assert!(!maze.has_wall(Point::new(0, 0), Direction::Left));
    /// assert!(maze.has_wall(Point::new(0, 1), Direction::Left));
    /// ```
    pub fn parse_layout(layout: &str) -> Result<Self, MazeError> {
        let mut fields = Fields {
            tokens: layout.split_whitespace(),
        };
        let rows = fields.dimension("row count")?;
        let cols = fields.dimension("column count")?;
        if rows == 0 || cols == 0 {
            return Err(MazeError::InvalidDimensions { rows, cols });
        }

        // Check the field count before allocating anything
        let found = fields.tokens.clone().count();
        match Self::layout_fields(rows, cols) {
            Some(expected) if expected == found => {}
            Some(expected) => {
                return Err(MazeError::MalformedLayout(format!(
                    "a {}x{} maze needs {} fields after the dimensions, found {}",
                    rows, cols, expected, found
                )))
            }
            None => {
                return Err(MazeError::MalformedLayout(format!(
                    "a {}x{} maze cannot be described by {} fields",
                    rows, cols, found
                )))
            }
        }
        let mut maze = Maze::new(rows, cols)?;

        for row in 0..rows {
            for col in 0..cols {
                let at = Point { row, col };
                if !fields.wall("left wall", at)? {
                    maze.remove_wall(at, Direction::Left);
                }
                let label = fields.label(at)?;
                maze.set_label(at, label);
            }
            let last = Point { row, col: cols - 1 };
            if !fields.wall("right wall", last)? {
                maze.remove_wall(last, Direction::Right);
            }
            if row + 1 < rows {
                for col in 0..cols {
                    let at = Point { row, col };
                    if !fields.wall("bottom wall", at)? {
                        maze.remove_wall(at, Direction::Bottom);
                    }
                }
            }
        }

        Ok(maze)
    }

    /// Fields following the dimensions: a left wall and label per cell and
    /// one right wall per row, plus a bottom wall per cell above the last row.
    fn layout_fields(rows: usize, cols: usize) -> Option<usize> {
        let per_row = cols.checked_mul(2)?.checked_add(1)?;
        let floors = rows.checked_sub(1)?.checked_mul(cols)?;
        rows.checked_mul(per_row)?.checked_add(floors)
    }
}

impl FromStr for Maze {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Maze::parse_layout(s)
    }
}

/// Writes the persisted text layout.
impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn flag(wall: bool) -> u8 {
            u8::from(wall)
        }

        writeln!(f, "{} {}", self.rows, self.cols)?;
        for (i, row) in self.cells.iter().enumerate() {
            for cell in row {
                let label = cell.label().map_or(-1, i32::from);
                write!(f, "{} {} ", flag(cell.has_wall(Direction::Left)), label)?;
            }
            let right = row.last().map_or(true, |c| c.has_wall(Direction::Right));
            writeln!(f, "{}", flag(right))?;

            if i + 1 < self.rows {
                let bottoms = row
                    .iter()
                    .map(|cell| flag(cell.has_wall(Direction::Bottom)))
                    .join(" ");
                writeln!(f, "{}", bottoms)?;
            }
        }
        Ok(())
    }
}

/// Whitespace separated integer fields of a layout
struct Fields<'a> {
    tokens: SplitWhitespace<'a>,
}

impl Fields<'_> {
    fn next_int(&mut self, what: &dyn Fn() -> String) -> Result<i64, MazeError> {
        let token = self
            .tokens
            .next()
            .ok_or_else(|| MazeError::MalformedLayout(format!("missing {}", what())))?;
        token.parse().map_err(|_| {
            MazeError::MalformedLayout(format!("expected integer {}, found `{}`", what(), token))
        })
    }

    fn dimension(&mut self, name: &str) -> Result<usize, MazeError> {
        let value = self.next_int(&|| name.to_string())?;
        usize::try_from(value).map_err(|_| {
            MazeError::MalformedLayout(format!("{} must not be negative, found {}", name, value))
        })
    }

    fn wall(&mut self, name: &str, at: Point) -> Result<bool, MazeError> {
        let what = || format!("{} at row {}, column {}", name, at.row, at.col);
        match self.next_int(&what)? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(MazeError::MalformedLayout(format!(
                "{} must be 0 or 1, found {}",
                what(),
                other
            ))),
        }
    }

    fn label(&mut self, at: Point) -> Result<Option<u8>, MazeError> {
        let what = || format!("label at row {}, column {}", at.row, at.col);
        match self.next_int(&what)? {
            -1 => Ok(None),
            value @ 0..=9 => Ok(u8::try_from(value).ok()),
            other => Err(MazeError::MalformedLayout(format!(
                "{} must be -1 or a digit, found {}",
                what(),
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::cell::{Direction, Point};
    use crate::error::MazeError;
    use crate::Maze;

    const OPEN_2X2: &str = "2 2\n0 -1 0 -1 0\n0 0\n0 -1 0 -1 0\n";

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(
            Maze::new(0, 3),
            Err(MazeError::InvalidDimensions { rows: 0, cols: 3 })
        );
        assert!(Maze::new(3, 0).is_err());
    }

    #[test]
    fn oversized_dimensions_are_rejected() {
        assert_eq!(
            Maze::new(1, 9223372036854775807),
            Err(MazeError::InvalidDimensions {
                rows: 1,
                cols: 9223372036854775807
            })
        );
        assert!(Maze::new(usize::MAX, 2).is_err());
        assert!(Maze::new(Maze::MAX_CELLS + 1, 1).is_err());
        assert!(Maze::new(1, Maze::MAX_CELLS).is_ok());
    }

    #[test]
    fn removing_a_wall_clears_both_sides() {
        let mut maze = Maze::new(2, 2).unwrap();
        maze.remove_wall(Point::new(0, 0), Direction::Right);
        assert!(!maze.has_wall(Point::new(0, 0), Direction::Right));
        assert!(!maze.has_wall(Point::new(0, 1), Direction::Left));

        maze.remove_wall(Point::new(1, 1), Direction::Top);
        assert!(!maze.has_wall(Point::new(0, 1), Direction::Bottom));
        assert_eq!(maze.passages(), 2);
    }

    #[test]
    fn boundary_walls_belong_to_one_cell() {
        let mut maze = Maze::new(1, 2).unwrap();
        maze.remove_wall(Point::new(0, 0), Direction::Left);
        maze.remove_wall(Point::new(0, 1), Direction::Right);
        assert!(!maze.has_wall(Point::new(0, 0), Direction::Left));
        assert!(!maze.has_wall(Point::new(0, 1), Direction::Right));
        assert_eq!(maze.passages(), 0);
    }

    #[test]
    fn serialize_fresh_maze() {
        let maze = Maze::new(2, 3).unwrap();
        assert_eq!(
            maze.to_string(),
            "2 3\n1 -1 1 -1 1 -1 1\n1 1 1\n1 -1 1 -1 1 -1 1\n"
        );
    }

    #[test]
    fn parse_open_layout() {
        let maze: Maze = OPEN_2X2.parse().unwrap();
        assert_eq!((maze.rows(), maze.cols()), (2, 2));
        assert_eq!(maze.passages(), 4);
        assert!(!maze.has_wall(Point::new(0, 1), Direction::Left));
        assert!(!maze.has_wall(Point::new(1, 0), Direction::Top));
        assert!(!maze.has_wall(Point::new(0, 1), Direction::Right));
        assert!(maze.has_wall(Point::new(0, 0), Direction::Top));
        assert!(maze.has_wall(Point::new(1, 1), Direction::Bottom));
        assert_eq!(maze.to_string(), OPEN_2X2);
    }

    #[test]
    fn layout_round_trip_keeps_labels() {
        let layout = "2 3\n0 0 0 1 1 2 1\n1 0 1\n1 -1 0 4 0 3 0\n";
        let maze = Maze::parse_layout(layout).unwrap();
        assert_eq!(maze.cell(Point::new(1, 1)).unwrap().label(), Some(4));
        assert_eq!(maze.cell(Point::new(1, 0)).unwrap().label(), None);
        assert_eq!(maze.to_string(), layout);
    }

    #[test]
    fn layout_whitespace_is_free_form() {
        let maze = Maze::parse_layout("  1 1   0\n-1\t0").unwrap();
        assert_eq!(maze.to_string(), "1 1\n0 -1 0\n");
    }

    #[test]
    fn malformed_layouts_are_rejected() {
        for layout in [
            "",
            "2",
            "-1 2",
            "1 1\n0 -1",
            "1 1\n0 -1 0 0",
            "1 1\n2 -1 0",
            "1 1\n0 10 0",
            "1 1\n0 x 0",
            "2 1\n0 -1 0\n0 -1 0",
            "1 9223372036854775807\n0 -1 0\n",
            "18446744073709551615 18446744073709551615\n0 -1 0\n",
        ] {
            assert!(
                matches!(Maze::parse_layout(layout), Err(MazeError::MalformedLayout(_))),
                "layout {:?} should be rejected",
                layout
            );
        }
        assert!(matches!(
            Maze::parse_layout("0 4"),
            Err(MazeError::InvalidDimensions { .. })
        ));
    }
}
