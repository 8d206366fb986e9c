//! Comparators and the reversal adapter
//!
//! Every heap in this crate is ordered by a value implementing [`Compare`]
//! rather than by `Ord` directly, so the same sift routines serve any order:
//!
//! - [`Natural`]: the element type's own `Ord`
//! - [`FnCompare`]: a caller-supplied closure
//! - [`Flipped`]: any comparator, reversed, over the same element type
//! - [`Reversed`]: a value wrapper whose order is the inverse of its payload's.
//!   `Reversed(cmp)` is also a comparator over `Reversed<T>` values, which is
//!   how [`MaxHeap`](crate::MaxHeap) reuses the min-heap engine.
//!
//! # Example
//!
//! ```rust
//! use std::cmp::Ordering;
//! use binary_heaps::compare::{Compare, Natural, Reversed};
//!
//! assert_eq!(Natural.compare(&1, &2), Ordering::Less);
//! assert!(Reversed(1) > Reversed(2));
//! assert_eq!(
//!     Reversed(Natural).compare(&Reversed(1), &Reversed(2)),
//!     Ordering::Greater
//! );
//! ```

use std::cmp::Ordering;
use std::fmt;

/// A total order over `T`
///
/// Implementations must be consistent: antisymmetric and transitive. A heap
/// built on an inconsistent comparator keeps its memory safety but loses any
/// ordering guarantee; [`BinaryHeap::validate`](crate::BinaryHeap::validate)
/// reports such comparators.
pub trait Compare<T: ?Sized> {
    /// Compares `a` with `b`
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Returns true if `a` orders strictly before `b`
    #[inline]
    fn lt(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Less
    }
}

impl<T: ?Sized, C: Compare<T> + ?Sized> Compare<T> for &C {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (**self).compare(a, b)
    }
}

/// The element type's natural order (`Ord`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Natural;

impl<T: Ord + ?Sized> Compare<T> for Natural {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// A comparator backed by a closure
///
/// ```rust
/// use binary_heaps::compare::{Compare, FnCompare};
///
/// let by_len = FnCompare(|a: &&str, b: &&str| a.len().cmp(&b.len()));
/// assert!(by_len.lt(&"ab", &"abc"));
/// ```
#[derive(Clone, Copy)]
pub struct FnCompare<F>(pub F);

impl<F> fmt::Debug for FnCompare<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnCompare(..)")
    }
}

impl<T: ?Sized, F> Compare<T> for FnCompare<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a, b)
    }
}

/// A comparator reversed over the same element type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Flipped<C>(pub C);

impl<T: ?Sized, C: Compare<T>> Compare<T> for Flipped<C> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

/// Reversal adapter
///
/// Holds one value and orders it opposite to the payload's natural order.
/// Equality delegates to the payload. Wrapping a comparator instead,
/// `Reversed(cmp)` compares `Reversed<T>` values by `cmp` with the operands
/// swapped.
#[derive(Debug, Clone, Copy, Default, Hash)]
#[repr(transparent)]
pub struct Reversed<T>(pub T);

impl<T> Reversed<T> {
    /// Returns a reference to the wrapped value
    #[inline]
    pub fn get(&self) -> &T {
        &self.0
    }

    /// Unwraps the value
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: PartialEq> PartialEq for Reversed<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: Eq> Eq for Reversed<T> {}

impl<T: PartialOrd> PartialOrd for Reversed<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        other.0.partial_cmp(&self.0)
    }
}

impl<T: Ord> Ord for Reversed<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        other.0.cmp(&self.0)
    }
}

impl<T, C: Compare<T>> Compare<Reversed<T>> for Reversed<C> {
    #[inline]
    fn compare(&self, a: &Reversed<T>, b: &Reversed<T>) -> Ordering {
        self.0.compare(&b.0, &a.0)
    }
}
