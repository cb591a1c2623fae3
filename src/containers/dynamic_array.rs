//! Resizable sequence with amortized tail operations

use std::fmt;

use itertools::Itertools;

use crate::error::ContainerError;

/// Growable indexable sequence
///
/// The backing buffer doubles when an insertion finds it full and halves
/// once occupancy drops below a quarter of the capacity (or to zero). The
/// capacity never goes below one slot.
///
/// # Examples
/// ```
/// use amaze::containers::DynamicArray;
///
/// let mut items = DynamicArray::new();
/// items.push_back('b');
/// items.insert(0, 'a').unwrap();
/// assert_eq!(items.get(1), Ok(&'b'));
/// assert_eq!(format!("{items:#}"), "[a,b,[0]]");
/// ```
#[derive(Clone, Debug)]
pub struct DynamicArray<T> {
    /// Backing buffer; `slots[..size]` are always occupied
    slots: Box<[Option<T>]>,
    size: usize,
}

/// Allocate a buffer of `capacity` vacant slots.
pub(crate) fn vacant_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}

impl<T> DynamicArray<T> {
    pub fn new() -> Self {
        Self {
            slots: vacant_slots(1),
            size: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of slots in the backing buffer
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Get a reference to the element at `index`, `index < len()`.
    pub fn get(&self, index: usize) -> Result<&T, ContainerError> {
        self.slots[..self.size]
            .get(index)
            .and_then(Option::as_ref)
            .ok_or_else(|| self.out_of_range(index))
    }

    /// Replace the element at `index` and return the previous one.
    ///
    /// Setting at `index == len()` appends and returns `None`.
    pub fn set(&mut self, index: usize, value: T) -> Result<Option<T>, ContainerError> {
        match index.cmp(&self.size) {
            std::cmp::Ordering::Less => Ok(self.slots[index].replace(value)),
            std::cmp::Ordering::Equal => {
                self.push_back(value);
                Ok(None)
            }
            std::cmp::Ordering::Greater => Err(self.out_of_range(index)),
        }
    }

    /// Insert `value` at `index`, shifting the tail one slot to the right.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), ContainerError> {
        if index > self.size {
            return Err(self.out_of_range(index));
        }
        self.push_back(value);
        // New value sits at the tail; rotate it into place
        self.slots[index..self.size].rotate_right(1);
        Ok(())
    }

    /// Remove and return the element at `index`, shifting the tail left.
    pub fn remove(&mut self, index: usize) -> Result<T, ContainerError> {
        if index >= self.size {
            return Err(self.out_of_range(index));
        }
        let removed = self.slots[index].take();
        self.slots[index..self.size].rotate_left(1);
        self.size -= 1;
        self.shrink_if_sparse();
        removed.ok_or_else(|| self.out_of_range(index))
    }

    pub fn push_back(&mut self, value: T) {
        if self.size == self.capacity() {
            self.reallocate(self.capacity() * 2);
        }
        self.slots[self.size] = Some(value);
        self.size += 1;
    }

    pub fn pop_back(&mut self) -> Result<T, ContainerError> {
        match self.size.checked_sub(1) {
            Some(last) => self.remove(last),
            None => Err(self.out_of_range(0)),
        }
    }

    /// Move every element of `donor` to the end of `self`, in order.
    ///
    /// Runs in linear time; `donor` is left empty with a single slot.
    pub fn concatenate(&mut self, donor: &mut Self) {
        for value in donor.slots[..donor.size].iter_mut().filter_map(Option::take) {
            self.push_back(value);
        }
        donor.size = 0;
        donor.reallocate(1);
    }

    /// Drop all elements and release the buffer down to one slot.
    pub fn clear(&mut self) {
        self.size = 0;
        self.slots = vacant_slots(1);
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.slots[..self.size].iter().flatten()
    }

    fn shrink_if_sparse(&mut self) {
        if self.size == 0 {
            if self.capacity() > 1 {
                self.reallocate(1);
            }
        } else if self.size < self.capacity() / 4 {
            self.reallocate(self.capacity() / 2);
        }
    }

    /// Move live elements into a fresh buffer of `capacity` slots.
    fn reallocate(&mut self, capacity: usize) {
        let mut slots = vacant_slots(capacity);
        for (dst, src) in slots.iter_mut().zip(self.slots[..self.size].iter_mut()) {
            *dst = src.take();
        }
        self.slots = slots;
    }

    fn out_of_range(&self, index: usize) -> ContainerError {
        ContainerError::Index {
            index,
            size: self.size,
        }
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut items = Self::new();
        for value in iter {
            items.push_back(value);
        }
        items
    }
}

/// `[a,b,c]`; the alternate form appends the number of vacant slots.
impl<T: fmt::Display> fmt::Display for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}", self.iter().join(","))?;
        if f.alternate() {
            if !self.is_empty() {
                f.write_str(",")?;
            }
            write!(f, "[{}]", self.capacity() - self.size)?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::DynamicArray;
    use crate::error::ContainerError;

    fn contents(items: &DynamicArray<i32>) -> Vec<i32> {
        items.iter().copied().collect()
    }

    #[test]
    fn insert_shifts_tail_right() {
        let mut items: DynamicArray<i32> = [1, 2, 4].into_iter().collect();
        items.insert(2, 3).unwrap();
        items.insert(0, 0).unwrap();
        items.insert(5, 5).unwrap();
        assert_eq!(contents(&items), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn remove_shifts_tail_left() {
        let mut items: DynamicArray<i32> = (0..6).collect();
        assert_eq!(items.remove(2), Ok(2));
        assert_eq!(items.remove(0), Ok(0));
        assert_eq!(contents(&items), vec![1, 3, 4, 5]);
    }

    #[test]
    fn capacity_doubles_when_full() {
        let mut items = DynamicArray::new();
        assert_eq!(items.capacity(), 1);
        let mut seen = vec![];
        for i in 0..9 {
            items.push_back(i);
            seen.push(items.capacity());
        }
        assert_eq!(seen, vec![1, 2, 4, 4, 8, 8, 8, 8, 16]);
    }

    #[test]
    fn capacity_halves_below_a_quarter() {
        let mut items: DynamicArray<i32> = (0..16).collect();
        assert_eq!(items.capacity(), 16);
        while items.len() > 4 {
            items.pop_back().unwrap();
        }
        assert_eq!(items.capacity(), 16);
        items.pop_back().unwrap();
        assert_eq!(items.capacity(), 8);
        while !items.is_empty() {
            items.pop_back().unwrap();
        }
        assert_eq!(items.capacity(), 1);
    }

    #[test]
    fn set_replaces_or_appends() {
        let mut items: DynamicArray<i32> = (0..3).collect();
        assert_eq!(items.set(1, 10), Ok(Some(1)));
        assert_eq!(items.set(3, 3), Ok(None));
        assert_eq!(contents(&items), vec![0, 10, 2, 3]);
        assert_eq!(
            items.set(5, 5),
            Err(ContainerError::Index { index: 5, size: 4 })
        );
    }

    #[test]
    fn out_of_range_access_fails() {
        let mut items: DynamicArray<i32> = (0..2).collect();
        assert_eq!(items.get(2), Err(ContainerError::Index { index: 2, size: 2 }));
        assert!(items.insert(3, 0).is_err());
        assert!(items.remove(2).is_err());
        let mut empty: DynamicArray<i32> = DynamicArray::new();
        assert!(empty.pop_back().is_err());
    }

    #[test]
    fn concatenate_moves_donor_in_order() {
        let mut recipient: DynamicArray<i32> = (0..3).collect();
        let mut donor: DynamicArray<i32> = (3..10).collect();
        recipient.concatenate(&mut donor);
        assert_eq!(contents(&recipient), (0..10).collect::<Vec<_>>());
        assert!(donor.is_empty());
        assert_eq!(donor.capacity(), 1);
    }

    #[test]
    fn occupancy_invariant_holds_under_random_edits() {
        let mut random = StdRng::seed_from_u64(7);
        let mut items = DynamicArray::new();
        let mut model = Vec::new();
        for step in 0..2000 {
            let grow = items.is_empty() || random.gen_bool(if step < 1000 { 0.6 } else { 0.4 });
            if grow {
                let index = random.gen_range(0..=items.len());
                items.insert(index, step).unwrap();
                model.insert(index, step);
            } else {
                let index = random.gen_range(0..items.len());
                assert_eq!(items.remove(index), Ok(model.remove(index)));
            }
            assert!(items.len() <= items.capacity());
            assert!(items.capacity() == 1 || items.len() >= items.capacity() / 4);
        }
        assert_eq!(contents(&items), model);
    }

    #[test]
    fn display_lists_elements() {
        let mut items: DynamicArray<i32> = (1..4).collect();
        assert_eq!(items.to_string(), "[1,2,3]");
        assert_eq!(format!("{items:#}"), "[1,2,3,[1]]");
        items.clear();
        assert_eq!(format!("{items:#}"), "[[1]]");
    }
}
