//! Fixed-capacity array with front insertion.

use crate::error::AlgoError;

/// A buffer with a fixed capacity and a logical length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedArray<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> FixedArray<T> {
    /// Create an empty array that holds at most `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Create an array from existing elements.
    pub fn from_slice(values: &[T], capacity: usize) -> Result<Self, AlgoError>
    where
        T: Clone,
    {
        if values.len() > capacity {
            return Err(AlgoError::CapacityExceeded(capacity));
        }
        let mut array = Self::with_capacity(capacity);
        array.items.extend_from_slice(values);
        Ok(array)
    }

    /// Direct access by index. O(1).
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Insert at index 0, shifting every element one slot right. O(n).
    pub fn insert_front(&mut self, value: T) -> Result<(), AlgoError> {
        if self.is_full() {
            return Err(AlgoError::CapacityExceeded(self.capacity));
        }
        self.items.insert(0, value);
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Mutable view of the occupied prefix, e.g. for sorting in place.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }
}
