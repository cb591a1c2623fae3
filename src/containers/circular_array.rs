//! Resizable ring buffer with amortized constant-time operations at both ends

use std::fmt;

use itertools::Itertools;

use super::dynamic_array::vacant_slots;
use crate::error::ContainerError;

/// Growable sequence stored in a ring buffer
///
/// Logical index `i` lives in physical slot `(start + i) % capacity`.
/// Insertions and removals shift whichever side of `index` is shorter, so
/// both ends are amortized O(1). Growth and shrinkage follow
/// [DynamicArray](super::DynamicArray), and every reallocation lays the
/// elements out from slot 0 again.
///
/// # Examples
/// ```
/// use amaze::containers::CircularArray;
///
/// let mut items = CircularArray::new();
/// items.push_back(2);
/// items.push_front(1);
/// items.push_back(3);
/// assert_eq!(items.pop_front(), Ok(1));
/// assert_eq!(items.to_string(), "(2,3)");
/// ```
#[derive(Clone, Debug)]
pub struct CircularArray<T> {
    slots: Box<[Option<T>]>,
    start: usize,
    size: usize,
}

impl<T> CircularArray<T> {
    pub fn new() -> Self {
        Self {
            slots: vacant_slots(1),
            start: 0,
            size: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Physical slot holding the element at logical `index`
    fn physical(&self, index: usize) -> usize {
        (self.start + index) % self.capacity()
    }

    pub fn get(&self, index: usize) -> Result<&T, ContainerError> {
        if index >= self.size {
            return Err(self.out_of_range(index));
        }
        self.slots[self.physical(index)]
            .as_ref()
            .ok_or_else(|| self.out_of_range(index))
    }

    /// Replace the element at `index` and return the previous one.
    ///
    /// Setting at `index == len()` appends and returns `None`.
    pub fn set(&mut self, index: usize, value: T) -> Result<Option<T>, ContainerError> {
        match index.cmp(&self.size) {
            std::cmp::Ordering::Less => {
                let slot = self.physical(index);
                Ok(self.slots[slot].replace(value))
            }
            std::cmp::Ordering::Equal => {
                self.push_back(value);
                Ok(None)
            }
            std::cmp::Ordering::Greater => Err(self.out_of_range(index)),
        }
    }

    /// Insert `value` at logical `index`, `index <= len()`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), ContainerError> {
        if index > self.size {
            return Err(self.out_of_range(index));
        }
        self.insert_within(index, value);
        Ok(())
    }

    /// Insert at an `index` already known to be at most `len()`.
    fn insert_within(&mut self, index: usize, value: T) {
        if self.size == self.capacity() {
            self.reallocate(self.capacity() * 2);
        }
        self.size += 1;

        if index <= self.size / 2 {
            // Open a slot in front and move the prefix one step left
            self.start = (self.start + self.capacity() - 1) % self.capacity();
            for i in 1..=index {
                self.shift(i, i - 1);
            }
        } else {
            for i in (index + 1..self.size).rev() {
                self.shift(i - 1, i);
            }
        }
        let slot = self.physical(index);
        self.slots[slot] = Some(value);
    }

    /// Remove and return the element at logical `index`.
    pub fn remove(&mut self, index: usize) -> Result<T, ContainerError> {
        if index >= self.size {
            return Err(self.out_of_range(index));
        }
        let slot = self.physical(index);
        let removed = self.slots[slot].take();

        if index <= self.size / 2 {
            for i in (1..=index).rev() {
                self.shift(i - 1, i);
            }
            self.start = (self.start + 1) % self.capacity();
        } else {
            for i in index..self.size - 1 {
                self.shift(i + 1, i);
            }
        }
        self.size -= 1;

        if self.size == 0 {
            if self.capacity() > 1 {
                self.reallocate(1);
            } else {
                self.start = 0;
            }
        } else if self.size < self.capacity() / 4 {
            self.reallocate(self.capacity() / 2);
        }
        removed.ok_or_else(|| self.out_of_range(index))
    }

    pub fn push_front(&mut self, value: T) {
        self.insert_within(0, value);
    }

    pub fn push_back(&mut self, value: T) {
        self.insert_within(self.size, value);
    }

    pub fn pop_front(&mut self) -> Result<T, ContainerError> {
        self.remove(0)
    }

    pub fn pop_back(&mut self) -> Result<T, ContainerError> {
        match self.size.checked_sub(1) {
            Some(last) => self.remove(last),
            None => Err(self.out_of_range(0)),
        }
    }

    /// Move every element of `donor` to the back of `self`, in order.
    pub fn concatenate(&mut self, donor: &mut Self) {
        while let Ok(value) = donor.pop_front() {
            self.push_back(value);
        }
    }

    pub fn clear(&mut self) {
        self.slots = vacant_slots(1);
        self.start = 0;
        self.size = 0;
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        (0..self.size).filter_map(move |i| self.slots[self.physical(i)].as_ref())
    }

    /// Move the element at logical `from` into logical `to`.
    fn shift(&mut self, from: usize, to: usize) {
        let from = self.physical(from);
        let to = self.physical(to);
        self.slots[to] = self.slots[from].take();
    }

    /// Copy live elements out in logical order into `capacity` fresh slots.
    fn reallocate(&mut self, capacity: usize) {
        let mut slots = vacant_slots(capacity);
        for (i, dst) in slots.iter_mut().take(self.size).enumerate() {
            let src = self.physical(i);
            *dst = self.slots[src].take();
        }
        self.slots = slots;
        self.start = 0;
    }

    fn out_of_range(&self, index: usize) -> ContainerError {
        ContainerError::Index {
            index,
            size: self.size,
        }
    }
}

impl<T> Default for CircularArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for CircularArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut items = Self::new();
        for value in iter {
            items.push_back(value);
        }
        items
    }
}

/// `(a,b,c)`; the alternate form appends the number of vacant slots.
impl<T: fmt::Display> fmt::Display for CircularArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}", self.iter().join(","))?;
        if f.alternate() {
            if !self.is_empty() {
                f.write_str(",")?;
            }
            write!(f, "({})", self.capacity() - self.size)?;
        }
        f.write_str(")")
    }
}
