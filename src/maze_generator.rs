//! Maze generation

use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, trace};

use crate::cell::{Direction, Point};
use crate::containers::{DynamicArray, Stack};
use crate::error::MazeError;
use crate::Maze;

/// Parameters of a single generation run
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct GeneratorConfig {
    pub rows: usize,
    pub cols: usize,
    pub seed: u64,
}

impl GeneratorConfig {
    pub const DEFAULT_SEED: u64 = 1;

    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            seed: Self::DEFAULT_SEED,
        }
    }

    pub fn with_seed(self, seed: u64) -> Self {
        Self { seed, ..self }
    }

    /// Generate the maze described by this configuration.
    pub fn generate(&self) -> Result<Maze, MazeError> {
        MazeGenerator::new(self.seed).generate_maze(self.rows, self.cols)
    }
}

/// Perfect maze generator
pub struct MazeGenerator {
    random: StdRng,
}

impl MazeGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            random: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate perfect maze (exactly one path between any two cells)
    ///
    /// Randomized depth-first carving: from the cell on top of the stack,
    /// knock down the wall to a random unvisited neighbour and continue
    /// from there. Cells without unvisited neighbours are popped until one
    /// that still has some surfaces, or the stack runs out.
    ///
    /// The entrance is the left wall of the top-left cell, the exit the
    /// right wall of the bottom-right cell.
    ///
    /// Returns error, if either dimension is zero or the grid exceeds
    /// [Maze::MAX_CELLS].
    pub fn generate_maze(&mut self, rows: usize, cols: usize) -> Result<Maze, MazeError> {
        let mut maze = Maze::new(rows, cols)?;
        debug!(rows, cols, "carving maze");

        let entrance = maze.entrance();
        maze.remove_wall(entrance, Direction::Left);
        maze.mark_visited(entrance);

        let mut stack = Stack::new();
        stack.push(entrance);

        // The cursor is always the top of the stack
        while let Ok(&cursor) = stack.peek() {
            let candidates = Self::carving_candidates(&maze, cursor);
            if candidates.is_empty() {
                stack.pop()?;
                continue;
            }

            let index = self.random.gen_range(0..candidates.len());
            let &(direction, next) = candidates.get(index)?;
            trace!(?cursor, ?next, "carve");
            maze.remove_wall(cursor, direction);
            maze.mark_visited(next);
            stack.push(next);
        }

        let exit = maze.exit();
        maze.remove_wall(exit, Direction::Right);
        debug!(passages = maze.passages(), "maze carved");
        Ok(maze)
    }

    /// Unvisited neighbours of `from`, in [Direction::ALL] order
    ///
    /// Existing walls are not consulted: walls only come down while
    /// carving, so every unvisited neighbour is still walled off.
    fn carving_candidates(maze: &Maze, from: Point) -> DynamicArray<(Direction, Point)> {
        Direction::ALL
            .into_iter()
            .filter_map(|direction| maze.neighbor(from, direction).map(|p| (direction, p)))
            .filter(|&(_, p)| maze.cell(p).is_some_and(|cell| !cell.is_visited()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::{GeneratorConfig, MazeGenerator};
    use crate::cell::{Direction, Point};
    use crate::error::MazeError;
    use crate::Maze;

    /// Number of cells reachable from the entrance through open walls
    fn reachable_cells(maze: &Maze) -> usize {
        let mut seen = vec![vec![false; maze.cols()]; maze.rows()];
        let mut pending = VecDeque::from([maze.entrance()]);
        seen[0][0] = true;
        let mut count = 0;
        while let Some(point) = pending.pop_front() {
            count += 1;
            for direction in Direction::ALL {
                if maze.has_wall(point, direction) {
                    continue;
                }
                if let Some(next) = maze.neighbor(point, direction) {
                    if !seen[next.row][next.col] {
                        seen[next.row][next.col] = true;
                        pending.push_back(next);
                    }
                }
            }
        }
        count
    }

    #[test]
    fn generated_mazes_are_spanning_trees() {
        for (rows, cols) in [(1, 1), (1, 7), (6, 1), (2, 2), (5, 8), (13, 9)] {
            for seed in 0..10 {
                let maze = GeneratorConfig::new(rows, cols)
                    .with_seed(seed)
                    .generate()
                    .unwrap();
                assert_eq!(maze.passages(), rows * cols - 1, "{rows}x{cols} seed {seed}");
                assert_eq!(reachable_cells(&maze), rows * cols);
            }
        }
    }

    #[test]
    fn two_by_two_with_default_seed() {
        let maze = GeneratorConfig::new(2, 2).generate().unwrap();
        assert!(!maze.has_wall(Point::new(0, 0), Direction::Left));
        assert!(!maze.has_wall(Point::new(1, 1), Direction::Right));
        assert!(maze.has_wall(Point::new(0, 0), Direction::Top));
        assert!(maze.has_wall(Point::new(1, 1), Direction::Bottom));
        assert_eq!(maze.passages(), 3);
    }

    #[test]
    fn same_seed_same_layout() {
        let first = MazeGenerator::new(42).generate_maze(12, 17).unwrap();
        let second = MazeGenerator::new(42).generate_maze(12, 17).unwrap();
        assert_eq!(first.to_string(), second.to_string());

        let other = MazeGenerator::new(43).generate_maze(12, 17).unwrap();
        assert_ne!(first.to_string(), other.to_string());
    }

    #[test]
    fn generated_layout_has_no_labels() {
        let maze = GeneratorConfig::new(4, 4).generate().unwrap();
        assert!(maze.cells().all(|cell| cell.label().is_none()));
        let layout = maze.to_string();
        assert_eq!(Maze::parse_layout(&layout).unwrap().to_string(), layout);
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(
            GeneratorConfig::new(0, 5).generate(),
            Err(MazeError::InvalidDimensions { rows: 0, cols: 5 })
        );
    }

    #[test]
    fn oversized_dimensions_are_rejected() {
        assert_eq!(
            GeneratorConfig::new(1, 9223372036854775807).generate(),
            Err(MazeError::InvalidDimensions {
                rows: 1,
                cols: 9223372036854775807
            })
        );
        assert!(MazeGenerator::new(1).generate_maze(usize::MAX, usize::MAX).is_err());
    }
}
