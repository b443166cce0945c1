use std::cmp::Ordering;

use crate::error::{BisectError, Result};

/// `f(index)` reports how the element at `index` compares to the target
pub fn bisect_left_by<F>(mut left: usize, mut right: usize, mut f: F) -> usize
where
    F: FnMut(usize) -> Ordering,
{
    while left < right {
        let center = left + (right - left) / 2;
        match f(center) {
            Ordering::Less => left = center + 1,
            _ => right = center,
        }
    }
    left
}

pub fn bisect_right_by<F>(mut left: usize, mut right: usize, mut f: F) -> usize
where
    F: FnMut(usize) -> Ordering,
{
    while left < right {
        let center = left + (right - left) / 2;
        match f(center) {
            Ordering::Less | Ordering::Equal => left = center + 1,
            _ => right = center,
        }
    }
    left
}

pub(crate) fn resolve_bounds(len: usize, lo: usize, hi: Option<usize>) -> Result<(usize, usize)> {
    let hi = hi.unwrap_or(len);
    if hi > len {
        return Err(BisectError::InvalidArgument("hi cannot exceed slice length"));
    }
    if lo > hi {
        return Err(BisectError::InvalidArgument("lo cannot exceed hi"));
    }
    Ok((lo, hi))
}

pub fn try_bisect_right<T, F>(
    a: &[T],
    x: &T,
    lo: usize,
    hi: Option<usize>,
    mut compare: F,
) -> Result<usize>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let (lo, hi) = resolve_bounds(a.len(), lo, hi)?;
    // x < a[mid] moves the upper bound down, anything else moves lo past mid
    Ok(bisect_right_by(lo, hi, |mid| compare(x, &a[mid]).reverse()))
}

pub fn try_bisect_left<T, F>(
    a: &[T],
    x: &T,
    lo: usize,
    hi: Option<usize>,
    mut compare: F,
) -> Result<usize>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let (lo, hi) = resolve_bounds(a.len(), lo, hi)?;
    Ok(bisect_left_by(lo, hi, |mid| compare(&a[mid], x)))
}

/// Insertion point for `x` in `a[lo..hi]`, after any elements equal to `x`.
/// `hi = None` searches to the end; panics if `lo <= hi <= a.len()` fails.
///
/// ```
/// # use bisect::{binary_search::bisect_right, comparator::compare_int};
/// let a = vec![1, 2, 4, 4, 5];
/// assert_eq!(bisect_right(&a, &4, 0, None, compare_int), 4);
/// ```
pub fn bisect_right<T, F>(a: &[T], x: &T, lo: usize, hi: Option<usize>, compare: F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    match try_bisect_right(a, x, lo, hi, compare) {
        Ok(index) => index,
        Err(error) => panic!("{error}"),
    }
}

/// Like [`bisect_right`], but before any elements equal to `x`.
pub fn bisect_left<T, F>(a: &[T], x: &T, lo: usize, hi: Option<usize>, compare: F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    match try_bisect_left(a, x, lo, hi, compare) {
        Ok(index) => index,
        Err(error) => panic!("{error}"),
    }
}

/// An alias for [`bisect_right`]
pub fn bisect<T, F>(a: &[T], x: &T, lo: usize, hi: Option<usize>, compare: F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    bisect_right(a, x, lo, hi, compare)
}

/// An alias for [`try_bisect_right`]
pub fn try_bisect<T, F>(a: &[T], x: &T, lo: usize, hi: Option<usize>, compare: F) -> Result<usize>
where
    F: FnMut(&T, &T) -> Ordering,
{
    try_bisect_right(a, x, lo, hi, compare)
}
