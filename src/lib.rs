//! Binary Heaps for Rust
//!
//! This crate provides an object-style priority queue built on a single
//! array-backed binary heap engine that is parameterised by an explicit
//! comparator.
//!
//! # Features
//!
//! - **BinaryHeap**: the engine; O(n) heapify, O(log n) push/pop/pushpop/replace
//! - **MinHeap**: natural (or injected) order, smallest element first
//! - **MaxHeap**: the same engine over reversal-adapted elements, largest first
//! - **Top-k queries**: `n_smallest`/`n_largest` without mutating the heap
//!
//! The heaps are plain single-threaded values. To share one between threads,
//! put it behind a lock and take every operation, queries included, under
//! that lock.
//!
//! # Example
//!
//! ```rust
//! use binary_heaps::{Heap, MaxHeap, MinHeap};
//!
//! let mut min = MinHeap::from_vec(vec![5, 1, 4, 2, 8]);
//! let mut max = MaxHeap::from_vec(vec![5, 1, 4, 2, 8]);
//!
//! assert_eq!(min.pop(), Ok(1));
//! assert_eq!(max.pop(), Ok(8));
//! assert_eq!(min.n_largest(2).unwrap(), vec![&8, &5]);
//! assert_eq!(max.n_smallest(2).unwrap(), vec![&1, &2]);
//! ```

pub mod binary;
pub mod compare;
pub mod max_heap;
pub mod min_heap;
mod select;
pub mod traits;

// Re-export the main types for convenience
pub use binary::BinaryHeap;
pub use compare::{Compare, FnCompare, Natural, Reversed};
pub use max_heap::MaxHeap;
pub use min_heap::MinHeap;
pub use traits::{Count, Heap, HeapError};
