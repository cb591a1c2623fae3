//! Maze cells and the directions between them

/// Location in the maze
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Adjacent location in `direction`, if it does not underflow
    ///
    /// Upper bounds are left to the caller, which knows the grid shape.
    pub fn step(self, direction: Direction) -> Option<Point> {
        let Point { row, col } = self;
        match direction {
            Direction::Top => row.checked_sub(1).map(|row| Point { row, col }),
            Direction::Left => col.checked_sub(1).map(|col| Point { row, col }),
            Direction::Right => Some(Point { row, col: col + 1 }),
            Direction::Bottom => Some(Point { row: row + 1, col }),
        }
    }
}

/// Side of a cell
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Direction {
    Top,
    Left,
    Right,
    Bottom,
}

impl Direction {
    /// Fixed enumeration order for neighbour candidates
    pub const ALL: [Direction; 4] = [
        Direction::Top,
        Direction::Left,
        Direction::Right,
        Direction::Bottom,
    ];

    pub fn opposite(self) -> Self {
        match self {
            Direction::Top => Direction::Bottom,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Bottom => Direction::Top,
        }
    }

    fn bit(self) -> u8 {
        match self {
            Direction::Top => 0b0001,
            Direction::Right => 0b0010,
            Direction::Bottom => 0b0100,
            Direction::Left => 0b1000,
        }
    }
}

/// Single square of the maze
///
/// Walls are a bitmask, one bit per [Direction]. The owning
/// [Maze](crate::Maze) keeps the walls shared with neighbours consistent.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Cell {
    position: Point,
    walls: u8,
    /// Set during carving and, independently, during solving
    pub(crate) visited: bool,
    /// Breadth-first distance from the entrance modulo 10
    pub(crate) label: Option<u8>,
}

impl Cell {
    const ALL_WALLS: u8 = 0b1111;

    /// New cell with all four walls, unvisited and unlabelled
    pub fn new(position: Point) -> Self {
        Self {
            position,
            walls: Self::ALL_WALLS,
            visited: false,
            label: None,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn has_wall(&self, direction: Direction) -> bool {
        self.walls & direction.bit() != 0
    }

    pub(crate) fn remove_wall(&mut self, direction: Direction) {
        self.walls &= !direction.bit();
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub fn label(&self) -> Option<u8> {
        self.label
    }
}
