//! Top-k selection
//!
//! Picks the `n` first elements of a slice under a comparator, in order,
//! without touching the slice. Small `n` against a large slice uses a bounded
//! heap of capacity `n` (this crate's own engine, holding references through
//! the reversal adapter so its root is the worst element kept so far);
//! otherwise the references are sorted outright.

use std::cmp::Ordering;

use crate::binary::BinaryHeap;
use crate::compare::{Compare, Reversed};
use crate::traits::{Count, Heap, HeapError};

/// Converts a caller-supplied count, rejecting negative values
///
/// Counts past `usize::MAX` saturate; no slice is that long anyway.
pub(crate) fn count<N: Count>(n: N) -> Result<usize, HeapError> {
    if n < N::default() {
        return Err(HeapError::InvalidArgument { name: "n" });
    }
    Ok(n.try_into().unwrap_or(usize::MAX))
}

/// Orders `(position, &element)` pairs by element, then by position
struct Ranked<C>(C);

impl<'a, T, C: Compare<T>> Compare<(usize, &'a T)> for Ranked<C> {
    #[inline]
    fn compare(&self, a: &(usize, &'a T), b: &(usize, &'a T)) -> Ordering {
        self.0.compare(a.1, b.1).then(a.0.cmp(&b.0))
    }
}

/// Returns up to `n` elements of `items` in ascending order under `cmp`
///
/// Equal elements keep their slice order.
pub(crate) fn smallest_by<'a, T, C: Compare<T>>(items: &'a [T], n: usize, cmp: &C) -> Vec<&'a T> {
    if n == 0 || items.is_empty() {
        return Vec::new();
    }

    if n == 1 {
        return items
            .iter()
            .min_by(|a, b| cmp.compare(a, b))
            .into_iter()
            .collect();
    }

    if n >= items.len() {
        let mut all: Vec<&T> = items.iter().collect();
        all.sort_by(|a, b| cmp.compare(a, b));
        return all;
    }

    let ranked = Ranked(cmp);
    let (head, tail) = items.split_at(n);
    let mut kept = BinaryHeap::from_vec_by(
        head.iter().enumerate().map(Reversed).collect(),
        Reversed(&ranked),
    );
    for (offset, item) in tail.iter().enumerate() {
        // Drops whichever of `item` and the current worst orders last
        kept.pushpop(Reversed((n + offset, item)));
    }

    let mut result: Vec<(usize, &T)> = kept
        .into_vec()
        .into_iter()
        .map(Reversed::into_inner)
        .collect();
    result.sort_by(|a, b| ranked.compare(a, b));
    result.into_iter().map(|(_, item)| item).collect()
}
