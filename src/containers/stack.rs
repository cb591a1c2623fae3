//! LIFO adapter over [DynamicArray]

use std::fmt;

use itertools::Itertools;

use super::DynamicArray;
use crate::error::ContainerError;

/// Unbounded stack; the top is the tail of the backing sequence
#[derive(Clone, Debug)]
pub struct Stack<T> {
    items: DynamicArray<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self {
            items: DynamicArray::new(),
        }
    }

    pub fn push(&mut self, value: T) {
        self.items.push_back(value);
    }

    pub fn pop(&mut self) -> Result<T, ContainerError> {
        if self.items.is_empty() {
            return Err(ContainerError::Empty("stack"));
        }
        self.items.pop_back()
    }

    pub fn peek(&self) -> Result<&T, ContainerError> {
        match self.items.len().checked_sub(1) {
            Some(top) => self.items.get(top),
            None => Err(ContainerError::Empty("stack")),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// `|top,...,bottom|`; the alternate form shows the backing sequence.
impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return write!(f, "{:#}", self.items);
        }
        let top_down = self.items.iter().collect::<Vec<_>>();
        write!(f, "|{}|", top_down.into_iter().rev().join(","))
    }
}
