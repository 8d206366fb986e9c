//! Binary heap engine
//!
//! An array-backed binary heap ordered by an explicit [`Compare`] value. The
//! element at index `i` has children at `2i + 1` and `2i + 2`; the root at
//! index 0 always orders first under the comparator.
//!
//! [`MinHeap`](crate::MinHeap) and [`MaxHeap`](crate::MaxHeap) are both
//! configurations of this one type.
//!
//! # Time Complexity
//!
//! | Operation        | Complexity   |
//! |------------------|--------------|
//! | `from_vec`       | O(n)         |
//! | `push`           | O(log n)     |
//! | `pop`            | O(log n)     |
//! | `pushpop`        | O(log n)     |
//! | `replace`        | O(log n)     |
//! | `peek`           | O(1)         |
//! | `n_smallest(k)`  | O(n log k)   |
//!
//! # Example
//!
//! ```rust
//! use binary_heaps::{BinaryHeap, Heap};
//! use binary_heaps::compare::FnCompare;
//!
//! let by_len = FnCompare(|a: &&str, b: &&str| a.len().cmp(&b.len()));
//! let mut heap = BinaryHeap::from_vec_by(vec!["three", "one", "four"], by_len);
//!
//! assert_eq!(heap.pop(), Ok("one"));
//! assert_eq!(heap.pop(), Ok("four"));
//! assert_eq!(heap.pop(), Ok("three"));
//! assert!(heap.pop().is_err());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;
use std::ops::Index;

use log::{trace, warn};

use crate::compare::{Compare, Flipped, Natural};
use crate::select;
use crate::traits::{Count, Heap, HeapError};

/// A binary heap ordered by the comparator `C`
///
/// The heap takes ownership of any vector it is built from and reorders it
/// in place.
#[derive(Clone)]
pub struct BinaryHeap<T, C = Natural> {
    /// The heap data, in tree order
    data: Vec<T>,
    cmp: C,
}

impl<T: Ord> BinaryHeap<T> {
    /// Creates an empty heap ordered by `T`'s natural order
    pub fn new() -> Self {
        Self::new_by(Natural)
    }

    /// Builds a heap from `data` in O(n), ordered by `T`'s natural order
    pub fn from_vec(data: Vec<T>) -> Self {
        Self::from_vec_by(data, Natural)
    }
}

impl<T, C: Compare<T>> BinaryHeap<T, C> {
    /// Creates an empty heap ordered by `cmp`
    pub fn new_by(cmp: C) -> Self {
        Self {
            data: Vec::new(),
            cmp,
        }
    }

    /// Builds a heap from `data` in O(n), ordered by `cmp`
    pub fn from_vec_by(data: Vec<T>, cmp: C) -> Self {
        let mut heap = Self { data, cmp };
        heap.rebuild();
        heap
    }

    /// Returns the comparator
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Returns the element at storage position `index`
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// Returns the elements in storage (tree) order
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterates over the elements in storage (tree) order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Removes all elements
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Consumes the heap, returning its storage in tree order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the heap, returning its elements in ascending order
    pub fn into_sorted_vec(self) -> Vec<T> {
        let Self { mut data, cmp } = self;
        data.sort_by(|a, b| cmp.compare(a, b));
        data
    }

    /// Checks every parent/child pair
    ///
    /// # Errors
    /// - [`HeapError::ComparatorViolation`] if the comparator disagrees with
    ///   itself when its operands are swapped
    /// - [`HeapError::InvariantViolation`] if a child orders strictly before
    ///   its parent (possible only if elements were mutated in place)
    pub fn validate(&self) -> Result<(), HeapError> {
        for child in 1..self.data.len() {
            let parent = (child - 1) / 2;
            let forward = self.cmp.compare(&self.data[parent], &self.data[child]);
            let backward = self.cmp.compare(&self.data[child], &self.data[parent]);

            if forward != backward.reverse() {
                warn!("comparator inconsistent for heap positions {parent} and {child}");
                return Err(HeapError::ComparatorViolation { parent, child });
            }
            if forward == Ordering::Greater {
                warn!("heap order broken between positions {parent} and {child}");
                return Err(HeapError::InvariantViolation { parent, child });
            }
        }
        Ok(())
    }

    /// Restores the heap property over the whole vector, bottom-up
    fn rebuild(&mut self) {
        let len = self.data.len();
        if len > 1 {
            trace!("heapifying {len} elements");
        }
        for index in (0..len / 2).rev() {
            self.sift_down(index);
        }
        self.check();
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.cmp.lt(&self.data[index], &self.data[parent]) {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down to maintain heap property
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < len && self.cmp.lt(&self.data[left], &self.data[smallest]) {
                smallest = left;
            }
            if right < len && self.cmp.lt(&self.data[right], &self.data[smallest]) {
                smallest = right;
            }

            if smallest != index {
                self.data.swap(index, smallest);
                index = smallest;
            } else {
                break;
            }
        }
    }

    #[inline]
    fn check(&self) {
        #[cfg(feature = "strict-invariants")]
        if let Err(err) = self.validate() {
            log::error!("heap invariant check failed: {err}");
            panic!("heap invariant check failed: {err}");
        }
    }
}

impl<T, C: Compare<T>> Heap<T> for BinaryHeap<T, C> {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    fn push(&mut self, item: T) {
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
        self.check();
    }

    fn pop(&mut self) -> Result<T, HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::Empty);
        }

        let last_idx = self.data.len() - 1;
        self.data.swap(0, last_idx);
        let result = self.data.pop().ok_or(HeapError::Empty)?;

        if !self.data.is_empty() {
            self.sift_down(0);
        }
        self.check();

        Ok(result)
    }

    fn pushpop(&mut self, item: T) -> T {
        match self.data.first_mut() {
            Some(root) if self.cmp.lt(root, &item) => {
                let top = mem::replace(root, item);
                self.sift_down(0);
                self.check();
                top
            }
            _ => item,
        }
    }

    fn replace(&mut self, item: T) -> Result<T, HeapError> {
        let root = self.data.first_mut().ok_or(HeapError::Empty)?;
        let top = mem::replace(root, item);
        self.sift_down(0);
        self.check();
        Ok(top)
    }

    fn n_smallest<N: Count>(&self, n: N) -> Result<Vec<&T>, HeapError> {
        let n = select::count(n)?;
        Ok(select::smallest_by(&self.data, n, &self.cmp))
    }

    fn n_largest<N: Count>(&self, n: N) -> Result<Vec<&T>, HeapError> {
        let n = select::count(n)?;
        Ok(select::smallest_by(&self.data, n, &Flipped(&self.cmp)))
    }
}

impl<T: Ord> Default for BinaryHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> From<Vec<T>> for BinaryHeap<T> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec(data)
    }
}

impl<T: Ord> FromIterator<T> for BinaryHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T, C: Compare<T>> Extend<T> for BinaryHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T, C> Index<usize> for BinaryHeap<T, C> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T: fmt::Debug, C> fmt::Debug for BinaryHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BinaryHeap").field(&self.data).finish()
    }
}
