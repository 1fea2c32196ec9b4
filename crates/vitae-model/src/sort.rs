//! Sort-key comparators shared by the collections.
//!
//! Missing values sort AFTER present values regardless of direction, so a
//! publication with no date never floats above dated ones in a descending
//! sort.

use std::cmp::Ordering;

/// Descending comparison.
pub(crate) fn descending<T: Ord>(a: &T, b: &T) -> Ordering {
    b.cmp(a)
}

/// Descending comparison over optional keys; `None` always sorts last.
pub(crate) fn descending_missing_last<T: Ord>(a: &Option<T>, b: &Option<T>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => y.cmp(x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
