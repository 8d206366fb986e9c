//! Max-heap
//!
//! A [`BinaryHeap`] over [`Reversed`] elements. Wrapping each element in the
//! reversal adapter turns the min-heap engine's "first" into the largest
//! value, so no sift routine is duplicated. Elements are wrapped on the way
//! in and unwrapped at every point a caller can observe them.
//!
//! The top-k queries cross over: the largest values are the smallest in
//! adapter order, so [`n_largest`](Heap::n_largest) reads the engine's
//! `n_smallest` and vice versa.
//!
//! # Example
//!
//! ```rust
//! use binary_heaps::{Heap, MaxHeap};
//!
//! let mut heap = MaxHeap::from_vec(vec![5, 1, 4, 2, 8]);
//! assert_eq!(heap.pop(), Ok(8));
//! assert_eq!(heap.pop(), Ok(5));
//! assert_eq!(heap.n_largest(2).unwrap(), vec![&4, &2]);
//! ```

use std::fmt;
use std::ops::Index;

use log::debug;

use crate::binary::BinaryHeap;
use crate::compare::{Compare, Natural, Reversed};
use crate::select;
use crate::traits::{Count, Heap, HeapError};

/// A priority queue whose root is its maximum element
#[derive(Clone)]
pub struct MaxHeap<T, C = Natural> {
    inner: BinaryHeap<Reversed<T>, Reversed<C>>,
}

impl<T: Ord> MaxHeap<T> {
    /// Creates an empty max-heap
    pub fn new() -> Self {
        Self::new_by(Natural)
    }

    /// Builds a max-heap from `items` in O(n), taking ownership of the vector
    pub fn from_vec(items: Vec<T>) -> Self {
        Self::from_vec_by(items, Natural)
    }
}

impl<T, C: Compare<T>> MaxHeap<T, C> {
    /// Creates an empty max-heap; `cmp` is reversed internally
    pub fn new_by(cmp: C) -> Self {
        Self {
            inner: BinaryHeap::new_by(Reversed(cmp)),
        }
    }

    /// Builds a max-heap from `items` in O(n); `cmp` is reversed internally
    pub fn from_vec_by(items: Vec<T>, cmp: C) -> Self {
        if !items.is_empty() {
            debug!("wrapping {} elements in reversal adapter for max-heap", items.len());
        }
        let wrapped = items.into_iter().map(Reversed).collect();
        Self {
            inner: BinaryHeap::from_vec_by(wrapped, Reversed(cmp)),
        }
    }

    /// Returns the element at storage position `index`
    pub fn get(&self, index: usize) -> Option<&T> {
        self.inner.get(index).map(Reversed::get)
    }

    /// Iterates over the elements in storage order
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.inner.iter().map(Reversed::get)
    }

    /// Removes all elements
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Consumes the heap, returning its elements in descending order
    pub fn into_sorted_vec(self) -> Vec<T> {
        unwrap_all(self.inner.into_sorted_vec())
    }

    /// Consumes the heap, returning its storage
    pub fn into_vec(self) -> Vec<T> {
        unwrap_all(self.inner.into_vec())
    }

    /// See [`BinaryHeap::validate`]; positions refer to storage order
    pub fn validate(&self) -> Result<(), HeapError> {
        self.inner.validate()
    }
}

fn unwrap_all<T>(items: Vec<Reversed<T>>) -> Vec<T> {
    items.into_iter().map(Reversed::into_inner).collect()
}

fn unwrap_refs<T>(items: Vec<&Reversed<T>>) -> Vec<&T> {
    items.into_iter().map(Reversed::get).collect()
}

impl<T, C: Compare<T>> Heap<T> for MaxHeap<T, C> {
    fn len(&self) -> usize {
        self.inner.len()
    }

    fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    fn peek(&self) -> Option<&T> {
        self.inner.peek().map(Reversed::get)
    }

    fn push(&mut self, item: T) {
        self.inner.push(Reversed(item))
    }

    fn pop(&mut self) -> Result<T, HeapError> {
        self.inner.pop().map(Reversed::into_inner)
    }

    fn pushpop(&mut self, item: T) -> T {
        self.inner.pushpop(Reversed(item)).into_inner()
    }

    fn replace(&mut self, item: T) -> Result<T, HeapError> {
        self.inner.replace(Reversed(item)).map(Reversed::into_inner)
    }

    fn n_smallest<N: Count>(&self, n: N) -> Result<Vec<&T>, HeapError> {
        self.inner.n_largest(n).map(unwrap_refs)
    }

    fn n_largest<N: Count>(&self, n: N) -> Result<Vec<&T>, HeapError> {
        self.inner.n_smallest(n).map(unwrap_refs)
    }
}

impl<T: Ord> Default for MaxHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> From<Vec<T>> for MaxHeap<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_vec(items)
    }
}

impl<T: Ord> FromIterator<T> for MaxHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T, C: Compare<T>> Extend<T> for MaxHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.extend(iter.into_iter().map(Reversed))
    }
}

impl<T, C> Index<usize> for MaxHeap<T, C> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        self.inner[index].get()
    }
}

/// Lists the unwrapped elements in pop order
impl<T: fmt::Debug, C: Compare<T>> fmt::Debug for MaxHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ordered = select::smallest_by(
            self.inner.as_slice(),
            self.inner.len(),
            self.inner.comparator(),
        );
        f.debug_tuple("MaxHeap").field(&unwrap_refs(ordered)).finish()
    }
}
