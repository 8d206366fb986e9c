//! Common traits for heap data structures
//!
//! This module provides the operation set shared by every heap in the crate:
//!
//! - [`Heap`]: push/pop/peek plus the combined `pushpop` and `replace`
//!   operations and the non-mutating top-k queries
//! - [`HeapError`]: the error type returned by fallible operations
//! - [`Count`]: integer types accepted as a top-k count
//!
//! Unlike `std::collections::BinaryHeap`, popping an empty heap is an error
//! rather than `None`, so callers cannot confuse "nothing left" with a
//! successful pop of an optional element type.

use std::fmt;

/// An integer usable as a top-k count
///
/// Signed types are accepted so that a negative count can be reported as
/// [`HeapError::InvalidArgument`]. Positive counts too large for a `usize`
/// saturate, which selects every element.
pub trait Count: TryInto<usize> + Default + PartialOrd {}

impl<N: TryInto<usize> + Default + PartialOrd> Count for N {}

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// `pop` or `replace` was called on a heap with no elements
    Empty,
    /// An argument was outside the accepted domain (e.g. a negative count)
    InvalidArgument {
        /// Name of the offending parameter
        name: &'static str,
    },
    /// The comparator is not a consistent total order for a stored pair
    ComparatorViolation {
        /// Storage index of the parent element
        parent: usize,
        /// Storage index of the child element
        child: usize,
    },
    /// A child orders strictly before its parent
    InvariantViolation {
        /// Storage index of the parent element
        parent: usize,
        /// Storage index of the child element
        child: usize,
    },
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::Empty => write!(f, "heap is empty"),
            HeapError::InvalidArgument { name } => {
                write!(f, "invalid argument `{name}`: expected a non-negative count")
            }
            HeapError::ComparatorViolation { parent, child } => write!(
                f,
                "comparator is not a total order for elements at {parent} and {child}"
            ),
            HeapError::InvariantViolation { parent, child } => write!(
                f,
                "heap order violated: element at {child} orders before its parent at {parent}"
            ),
        }
    }
}

impl std::error::Error for HeapError {}

/// Base trait for heap/priority queue data structures
///
/// The element at the root is the one that orders first under the heap's
/// comparator: the minimum for [`MinHeap`](crate::MinHeap), the maximum for
/// [`MaxHeap`](crate::MaxHeap).
///
/// # Example
///
/// ```rust
/// use binary_heaps::{Heap, HeapError, MinHeap};
///
/// let mut heap = MinHeap::from_vec(vec![5, 1, 4]);
/// heap.push(2);
///
/// assert_eq!(heap.peek(), Some(&1));
/// assert_eq!(heap.pop(), Ok(1));
/// assert_eq!(heap.pushpop(0), 0);
/// assert_eq!(heap.replace(9), Ok(2));
/// assert_eq!(heap.n_smallest(2)?, vec![&4, &5]);
/// # Ok::<(), HeapError>(())
/// ```
pub trait Heap<T> {
    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the root element without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<&T>;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n)
    fn push(&mut self, item: T);

    /// Removes and returns the root element
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap has no elements.
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Result<T, HeapError>;

    /// Pushes `item` and then pops the root, in a single sift pass
    ///
    /// Returns `item` itself without touching the heap when the heap is empty
    /// or when the root does not order strictly before `item`.
    ///
    /// # Time Complexity
    /// O(log n)
    fn pushpop(&mut self, item: T) -> T;

    /// Pops the root and then pushes `item`, in a single sift pass
    ///
    /// Unlike [`pushpop`](Heap::pushpop), the returned value is always the old
    /// root, even when `item` would order before it.
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if there is no root to replace.
    ///
    /// # Time Complexity
    /// O(log n)
    fn replace(&mut self, item: T) -> Result<T, HeapError>;

    /// Returns up to `n` elements in ascending order without mutating the heap
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidArgument`] if `n` is negative.
    fn n_smallest<N: Count>(&self, n: N) -> Result<Vec<&T>, HeapError>;

    /// Returns up to `n` elements in descending order without mutating the heap
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidArgument`] if `n` is negative.
    fn n_largest<N: Count>(&self, n: N) -> Result<Vec<&T>, HeapError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(HeapError::Empty.to_string(), "heap is empty");
        assert_eq!(
            HeapError::InvalidArgument { name: "n" }.to_string(),
            "invalid argument `n`: expected a non-negative count"
        );
        assert!(HeapError::ComparatorViolation {
            parent: 0,
            child: 2
        }
        .to_string()
        .contains("at 0 and 2"));
    }

    #[test]
    fn test_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(HeapError::Empty);
        assert_eq!(err.to_string(), "heap is empty");
    }
}
