//! Min-heap
//!
//! The default priority queue: a [`BinaryHeap`] under the element type's
//! natural order, or under an injected comparator.
//!
//! # Example
//!
//! ```rust
//! use binary_heaps::{Heap, MinHeap};
//!
//! let mut heap = MinHeap::from_vec(vec![5, 1, 4, 2, 8]);
//! assert_eq!(heap.pop(), Ok(1));
//! assert_eq!(heap.pop(), Ok(2));
//! assert_eq!(format!("{heap:?}"), "MinHeap([4, 5, 8])");
//! ```

use std::fmt;
use std::ops::Index;

use crate::binary::BinaryHeap;
use crate::compare::{Compare, Natural};
use crate::select;
use crate::traits::{Count, Heap, HeapError};

/// A priority queue whose root is its minimum element
#[derive(Clone)]
pub struct MinHeap<T, C = Natural> {
    inner: BinaryHeap<T, C>,
}

impl<T: Ord> MinHeap<T> {
    /// Creates an empty min-heap
    pub fn new() -> Self {
        Self {
            inner: BinaryHeap::new(),
        }
    }

    /// Builds a min-heap from `items` in O(n), taking ownership of the vector
    pub fn from_vec(items: Vec<T>) -> Self {
        Self {
            inner: BinaryHeap::from_vec(items),
        }
    }
}

impl<T, C: Compare<T>> MinHeap<T, C> {
    /// Creates an empty min-heap ordered by `cmp`
    pub fn new_by(cmp: C) -> Self {
        Self {
            inner: BinaryHeap::new_by(cmp),
        }
    }

    /// Builds a min-heap from `items` in O(n), ordered by `cmp`
    pub fn from_vec_by(items: Vec<T>, cmp: C) -> Self {
        Self {
            inner: BinaryHeap::from_vec_by(items, cmp),
        }
    }

    /// Returns the element at storage position `index`
    pub fn get(&self, index: usize) -> Option<&T> {
        self.inner.get(index)
    }

    /// Iterates over the elements in storage order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.inner.iter()
    }

    /// Removes all elements
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Consumes the heap, returning its elements in ascending order
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.inner.into_sorted_vec()
    }

    /// Consumes the heap, returning its storage
    pub fn into_vec(self) -> Vec<T> {
        self.inner.into_vec()
    }

    /// See [`BinaryHeap::validate`]
    pub fn validate(&self) -> Result<(), HeapError> {
        self.inner.validate()
    }
}

impl<T, C: Compare<T>> Heap<T> for MinHeap<T, C> {
    fn len(&self) -> usize {
        self.inner.len()
    }

    fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    fn peek(&self) -> Option<&T> {
        self.inner.peek()
    }

    fn push(&mut self, item: T) {
        self.inner.push(item)
    }

    fn pop(&mut self) -> Result<T, HeapError> {
        self.inner.pop()
    }

    fn pushpop(&mut self, item: T) -> T {
        self.inner.pushpop(item)
    }

    fn replace(&mut self, item: T) -> Result<T, HeapError> {
        self.inner.replace(item)
    }

    fn n_smallest<N: Count>(&self, n: N) -> Result<Vec<&T>, HeapError> {
        self.inner.n_smallest(n)
    }

    fn n_largest<N: Count>(&self, n: N) -> Result<Vec<&T>, HeapError> {
        self.inner.n_largest(n)
    }
}

impl<T: Ord> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> From<Vec<T>> for MinHeap<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_vec(items)
    }
}

impl<T: Ord> FromIterator<T> for MinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T, C: Compare<T>> Extend<T> for MinHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.extend(iter)
    }
}

impl<T, C> Index<usize> for MinHeap<T, C> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.inner[index]
    }
}

/// Lists the elements in pop order
impl<T: fmt::Debug, C: Compare<T>> fmt::Debug for MinHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ordered = select::smallest_by(
            self.inner.as_slice(),
            self.inner.len(),
            self.inner.comparator(),
        );
        f.debug_tuple("MinHeap").field(&ordered).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::FnCompare;

    #[test]
    fn test_pop_order() {
        let mut heap = MinHeap::from_vec(vec![5, 1, 4, 2, 8]);
        assert_eq!(heap.len(), 5);
        assert_eq!(heap.pop(), Ok(1));
        assert_eq!(heap.pop(), Ok(2));
        assert_eq!(heap.pop(), Ok(4));
        assert_eq!(heap.pop(), Ok(5));
        assert_eq!(heap.pop(), Ok(8));
        assert_eq!(heap.pop(), Err(HeapError::Empty));
    }

    #[test]
    fn test_top_k() {
        let heap = MinHeap::from_vec(vec![3, 1, 2]);
        assert_eq!(heap.n_largest(2), Ok(vec![&3, &2]));
        assert_eq!(heap.n_smallest(2), Ok(vec![&1, &2]));
    }

    #[test]
    fn test_oversized_count_takes_everything() {
        let heap = MinHeap::from_vec(vec![3, 1, 2]);
        assert_eq!(heap.n_smallest(u128::MAX), Ok(vec![&1, &2, &3]));
        assert_eq!(heap.n_largest(i128::MAX), Ok(vec![&3, &2, &1]));
        assert_eq!(heap.n_smallest(-1i128), Err(HeapError::InvalidArgument { name: "n" }));
    }

    #[test]
    fn test_index_is_storage_order() {
        let heap = MinHeap::from_vec(vec![5, 1, 4, 2, 8]);
        assert_eq!(heap[0], 1);
        assert_eq!(heap.get(1), Some(&2));
        assert_eq!(heap.iter().copied().collect::<Vec<_>>(), vec![1, 2, 4, 5, 8]);
    }

    #[test]
    fn test_custom_comparator() {
        let by_len = FnCompare(|a: &String, b: &String| a.len().cmp(&b.len()));
        let mut heap = MinHeap::new_by(by_len);
        heap.push("ccc".to_string());
        heap.push("a".to_string());
        heap.push("bb".to_string());

        assert_eq!(heap.pop().as_deref(), Ok("a"));
        assert_eq!(heap.pop().as_deref(), Ok("bb"));
    }

    #[test]
    fn test_debug_lists_pop_order() {
        let heap: MinHeap<i32> = vec![3, 9, 1, 7].into();
        assert_eq!(format!("{heap:?}"), "MinHeap([1, 3, 7, 9])");
        assert_eq!(format!("{:?}", MinHeap::<i32>::default()), "MinHeap([])");
    }
}
