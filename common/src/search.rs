use num_traits::PrimInt;
use std::cmp::Ordering;
use thiserror::Error;

/// Returned when no combination of entries adds up to the requested target.
///
/// The wrapped value is the target that was searched for.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum NotFound<T> {
    #[error("no pair found that sums to provided value ({0})")]
    Pair(T),
    #[error("no triplet found that sums to provided value ({0})")]
    Triplet(T),
}

impl<T: Copy> NotFound<T> {
    #[must_use]
    pub fn target(&self) -> T {
        match *self {
            NotFound::Pair(t) | NotFound::Triplet(t) => t,
        }
    }
}

fn overflow_direction<T: PrimInt>(addend: T) -> Ordering {
    if addend > T::zero() {
        Ordering::Greater
    } else {
        Ordering::Less
    }
}

/// Compare the sum of `values` against `target` without overflowing.
///
/// The smallest and largest values are added first: with opposite signs that
/// can't overflow, and with equal signs an overflow already puts the sum out
/// of range on that side. The same holds when the middle value is added.
fn compare_sum<T: PrimInt>(values: [T; 3], target: T) -> Ordering {
    let mut values = values;
    values.sort_unstable();
    let [low, mid, high] = values;

    let outer = match low.checked_add(&high) {
        Some(sum) => sum,
        None => return overflow_direction(high),
    };
    match outer.checked_add(&mid) {
        Some(sum) => sum.cmp(&target),
        None => overflow_direction(mid),
    }
}

fn is_sorted<T: Ord>(entries: &[T]) -> bool {
    entries.windows(2).all(|w| w[0] <= w[1])
}

/// Find two positions in `sorted` whose values sum to `target`.
///
/// `sorted` must be in non-decreasing order; this is only checked in debug
/// builds. Two cursors start at either end and move inward, so the search is
/// linear. The returned positions satisfy `i < j`, and equal values at
/// different positions are distinct entries.
///
/// Fewer than two entries can never form a pair and yield `NotFound`.
///
/// # Examples
///
/// ```
/// use common::search::{find_pair, NotFound};
///
/// let entries = [299, 366, 675, 979, 1456, 1721];
/// assert_eq!(find_pair(&entries, 2020), Ok((0, 5)));
/// assert_eq!(find_pair(&[10, 20], 2020), Err(NotFound::Pair(2020)));
/// ```
pub fn find_pair<T: PrimInt>(
    sorted: &[T],
    target: T,
) -> Result<(usize, usize), NotFound<T>> {
    two_pointer(sorted, T::zero(), target).ok_or(NotFound::Pair(target))
}

/// Two cursors moving inward until `anchor + sorted[low] + sorted[high]`
/// equals `target`.
fn two_pointer<T: PrimInt>(
    sorted: &[T],
    anchor: T,
    target: T,
) -> Option<(usize, usize)> {
    debug_assert!(is_sorted(sorted), "entries must be sorted");

    let (mut low, mut high) = (0, sorted.len().saturating_sub(1));

    while low < high {
        match compare_sum([anchor, sorted[low], sorted[high]], target) {
            Ordering::Equal => return Some((low, high)),
            Ordering::Greater => high -= 1,
            Ordering::Less => low += 1,
        }
    }

    None
}

/// Anchor each entry in turn and look for a pair completing the sum in the
/// suffix starting `skip` positions after the anchor.
fn anchored_search<T: PrimInt>(
    sorted: &[T],
    target: T,
    skip: usize,
) -> Result<(usize, usize, usize), NotFound<T>> {
    (0..sorted.len())
        .find_map(|i| {
            let offset = i + skip;
            let suffix = sorted.get(offset..)?;

            two_pointer(suffix, sorted[i], target)
                .map(|(a, b)| (i, offset + a, offset + b))
        })
        .ok_or(NotFound::Triplet(target))
}

/// Find three positions in `sorted` whose values sum to `target`.
///
/// Anchors are tried in ascending order and the first success wins. For
/// anchor `i` the pair search runs over the suffix starting *at* `i`, so the
/// anchor itself may be picked again as the first pair endpoint: the result
/// `(i, j, k)` only guarantees `i <= j < k`. Use [`find_distinct_triplet`]
/// when three separate entries are required.
///
/// # Examples
///
/// ```
/// use common::search::find_triplet;
///
/// let entries = [299, 366, 675, 979, 1456, 1721];
/// assert_eq!(find_triplet(&entries, 2020), Ok((1, 2, 3)));
///
/// // 2 + 2 + 3: the anchor is reused
/// assert_eq!(find_triplet(&[2, 3, 100], 7), Ok((0, 0, 1)));
/// ```
pub fn find_triplet<T: PrimInt>(
    sorted: &[T],
    target: T,
) -> Result<(usize, usize, usize), NotFound<T>> {
    anchored_search(sorted, target, 0)
}

/// Like [`find_triplet`], but the pair search starts after the anchor so the
/// result always satisfies `i < j < k`.
///
/// ```
/// use common::search::{find_distinct_triplet, NotFound};
///
/// assert_eq!(find_distinct_triplet(&[2, 3, 100], 7), Err(NotFound::Triplet(7)));
/// assert_eq!(find_distinct_triplet(&[1, 2, 3, 4], 9), Ok((1, 2, 3)));
/// ```
pub fn find_distinct_triplet<T: PrimInt>(
    sorted: &[T],
    target: T,
) -> Result<(usize, usize, usize), NotFound<T>> {
    anchored_search(sorted, target, 1)
}
