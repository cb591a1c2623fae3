//! Breadth-first distance labelling

use tracing::{debug, trace};

use crate::cell::{Direction, Point};
use crate::containers::Queue;
use crate::error::MazeError;
use crate::Maze;

/// Solution to the maze
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Solution {
    /// Steps from the entrance to the exit
    pub shortest_path: usize,
    /// Cells taken off the queue, the exit included
    pub processed: usize,
    /// Queued cells whose labels were cleared once the exit was reached
    pub discarded: usize,
}

impl Maze {
    /// Label cells with their breadth-first distance from the entrance
    ///
    /// Labels are distances modulo 10. The search stops as soon as the exit
    /// is taken off the queue; cells still queued at that point and never
    /// processed lose their labels, so only the explored region is
    /// numbered. Earlier labels and visited flags are cleared first.
    ///
    /// Returns error, if the queue runs dry before the exit is reached.
    ///
    /// # Examples
    /// ```
    /// use amaze::{Maze, Point};
    ///
    /// let mut maze = Maze::parse_layout("1 3\n0 -1 0 -1 0 -1 0\n").unwrap();
    /// let solution = maze.solve().unwrap();
    /// assert_eq!(solution.shortest_path, 2);
    /// assert_eq!(maze.cell(Point::new(0, 2)).unwrap().label(), Some(2));
    /// ```
    pub fn solve(&mut self) -> Result<Solution, MazeError> {
        self.reset_marks();
        let entrance = self.entrance();
        let exit = self.exit();

        let mut queue: Queue<(Point, usize)> = Queue::new();
        self.set_label(entrance, Some(0));
        queue.enqueue((entrance, 0));

        let mut processed = 0;
        let shortest_path = loop {
            let (current, distance) = queue.dequeue().map_err(|_| MazeError::Unreachable {
                row: exit.row,
                col: exit.col,
            })?;
            self.mark_visited(current);
            processed += 1;
            if current == exit {
                break distance;
            }

            let label = ((distance + 1) % 10) as u8;
            for direction in Direction::ALL {
                if let Some(next) = self.open_unvisited(current, direction) {
                    trace!(?current, ?next, label, "enqueue");
                    queue.enqueue((next, distance + 1));
                    self.set_label(next, Some(label));
                }
            }
        };

        let mut discarded = 0;
        while let Ok((pending, _)) = queue.dequeue() {
            if self.cell(pending).is_some_and(|cell| !cell.is_visited()) {
                self.set_label(pending, None);
                discarded += 1;
            }
        }

        debug!(shortest_path, processed, discarded, "maze solved");
        Ok(Solution {
            shortest_path,
            processed,
            discarded,
        })
    }

    /// Neighbour reachable through an open wall that is not yet visited
    fn open_unvisited(&self, from: Point, direction: Direction) -> Option<Point> {
        if self.has_wall(from, direction) {
            return None;
        }
        self.neighbor(from, direction)
            .filter(|&p| self.cell(p).is_some_and(|cell| !cell.is_visited()))
    }
}
