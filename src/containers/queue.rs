//! FIFO adapter over [CircularArray]

use std::fmt;

use itertools::Itertools;

use super::CircularArray;
use crate::error::ContainerError;

/// Unbounded queue; enqueue at the back, dequeue from the front
#[derive(Clone, Debug)]
pub struct Queue<T> {
    items: CircularArray<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            items: CircularArray::new(),
        }
    }

    pub fn enqueue(&mut self, value: T) {
        self.items.push_back(value);
    }

    pub fn dequeue(&mut self) -> Result<T, ContainerError> {
        if self.items.is_empty() {
            return Err(ContainerError::Empty("queue"));
        }
        self.items.pop_front()
    }

    pub fn peek(&self) -> Result<&T, ContainerError> {
        if self.items.is_empty() {
            return Err(ContainerError::Empty("queue"));
        }
        self.items.get(0)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// `<front,...,back>`; the alternate form shows the backing sequence.
impl<T: fmt::Display> fmt::Display for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return write!(f, "{:#}", self.items);
        }
        write!(f, "<{}>", self.items.iter().join(","))
    }
}
