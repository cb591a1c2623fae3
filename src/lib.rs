//! Create, solve and draw rectangular mazes
//!
//! Mazes are carved with a randomized depth-first search, which yields a
//! perfect maze: exactly one path between any two cells. The entrance is on
//! the left of the top-left cell and the exit on the right of the
//! bottom-right cell. Solving labels every explored cell with its
//! breadth-first distance from the entrance, modulo 10.
//!
//! # Examples
//! ## Generate, solve and draw
//! ```
//! use amaze::{GeneratorConfig, Maze};
//!
//! let layout = GeneratorConfig::new(4, 6).with_seed(7).generate().unwrap().to_string();
//!
//! let mut maze = Maze::parse_layout(&layout).unwrap();
//! let solution = maze.solve().unwrap();
//! assert!(solution.shortest_path >= 8);
//! println!("{}", maze.render());
//! ```
//!
//! ## Solve a stored layout
//! ```
//! use amaze::Maze;
//!
//! let mut maze: Maze = "2 2\n0 -1 0 -1 0\n0 0\n0 -1 0 -1 0\n".parse().unwrap();
//! maze.solve().unwrap();
//! assert_eq!(maze.to_string(), "2 2\n0 0 0 1 0\n0 0\n0 1 0 2 0\n");
//! ```

pub mod cell;
pub mod containers;
pub mod error;
pub mod maze;
pub mod maze_generator;
pub mod render;
pub mod solver;

pub use cell::{Cell, Direction, Point};
pub use error::{ContainerError, MazeError};
pub use maze::Maze;
pub use maze_generator::{GeneratorConfig, MazeGenerator};
pub use solver::Solution;
