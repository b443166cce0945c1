use std::cmp::Ordering;

use crate::{
    binary_search::{try_bisect_left, try_bisect_right},
    error::Result,
};

/// The vector is left untouched when the bounds are invalid.
pub fn try_insort_right<T, F>(
    a: &mut Vec<T>,
    x: T,
    lo: usize,
    hi: Option<usize>,
    compare: F,
) -> Result<()>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let index = try_bisect_right(a.as_slice(), &x, lo, hi, compare)?;
    a.insert(index, x);
    Ok(())
}

pub fn try_insort_left<T, F>(
    a: &mut Vec<T>,
    x: T,
    lo: usize,
    hi: Option<usize>,
    compare: F,
) -> Result<()>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let index = try_bisect_left(a.as_slice(), &x, lo, hi, compare)?;
    a.insert(index, x);
    Ok(())
}

/// Insert `x` into `a`, keeping it sorted assuming `a[lo..hi]` is sorted.
/// If `x` is already present it goes to the right of the rightmost `x`.
pub fn insort_right<T, F>(a: &mut Vec<T>, x: T, lo: usize, hi: Option<usize>, compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if let Err(error) = try_insort_right(a, x, lo, hi, compare) {
        panic!("{error}");
    }
}

pub fn insort_left<T, F>(a: &mut Vec<T>, x: T, lo: usize, hi: Option<usize>, compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if let Err(error) = try_insort_left(a, x, lo, hi, compare) {
        panic!("{error}");
    }
}

/// An alias for [`insort_right`]
pub fn insort<T, F>(a: &mut Vec<T>, x: T, lo: usize, hi: Option<usize>, compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    insort_right(a, x, lo, hi, compare)
}

/// An alias for [`try_insort_right`]
pub fn try_insort<T, F>(
    a: &mut Vec<T>,
    x: T,
    lo: usize,
    hi: Option<usize>,
    compare: F,
) -> Result<()>
where
    F: FnMut(&T, &T) -> Ordering,
{
    try_insort_right(a, x, lo, hi, compare)
}
