//! Bisection and sorted insertion over sequences ordered by a caller-supplied
//! three-way comparator.
//!
//! ```
//! use bisect::{bisect, bisect_left, compare_int, insort};
//!
//! let mut a = vec![1, 2, 4, 4, 5];
//! assert_eq!(bisect(&a, &4, 0, None, compare_int), 4);
//! assert_eq!(bisect_left(&a, &4, 0, None, compare_int), 2);
//!
//! insort(&mut a, 3, 0, None, compare_int);
//! assert_eq!(a, vec![1, 2, 3, 4, 4, 5]);
//! ```
pub mod binary_search;
pub mod cli;
pub mod comparator;
pub mod error;
pub mod experiment;
pub mod insort;

pub use binary_search::{
    bisect, bisect_left, bisect_right, try_bisect, try_bisect_left, try_bisect_right,
};
pub use comparator::*;
pub use error::{BisectError, Result};
pub use insort::{insort, insort_left, insort_right, try_insort, try_insort_left, try_insort_right};
