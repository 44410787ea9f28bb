//! Slice helpers: bounds-checked element swap and tuple sorting

use std::cmp::Ordering;

use crate::error::{Error, Result};

/// Swap two elements of a slice
///
/// Both indices are checked before anything moves. Swapping an index with
/// itself is a no-op.
pub fn swap_elements<T>(items: &mut [T], first: usize, second: usize) -> Result<()> {
    let len = items.len();
    for index in [first, second] {
        if index >= len {
            return Err(Error::index_out_of_range(index, len));
        }
    }
    items.swap(first, second);
    Ok(())
}

/// Column of a 3-tuple to sort by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    First,
    Second,
    Third,
}

impl TryFrom<usize> for Column {
    type Error = Error;

    fn try_from(column: usize) -> Result<Self> {
        match column {
            0 => Ok(Column::First),
            1 => Ok(Column::Second),
            2 => Ok(Column::Third),
            other => Err(Error::column_out_of_range(other)),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

/// Sort rows of 3-tuples in place by one column
///
/// The sort is stable in both directions: rows with equal keys keep their
/// relative order.
///
/// ```rust
/// use thrice_core::slice::{sort_tuples, Column, SortOrder};
///
/// let mut rows = [(1, "a", false), (3, "b", false), (2, "c", true)];
/// sort_tuples(&mut rows, Column::Second, SortOrder::Descending);
/// assert_eq!(rows, [(2, "c", true), (3, "b", false), (1, "a", false)]);
/// ```
pub fn sort_tuples<A, B, C>(rows: &mut [(A, B, C)], column: Column, order: SortOrder)
where
    A: Ord,
    B: Ord,
    C: Ord,
{
    match column {
        Column::First => rows.sort_by(|x, y| order.apply(x.0.cmp(&y.0))),
        Column::Second => rows.sort_by(|x, y| order.apply(x.1.cmp(&y.1))),
        Column::Third => rows.sort_by(|x, y| order.apply(x.2.cmp(&y.2))),
    }
}

/// Sort by a numeric column index, rejecting indices above 2
pub fn sort_tuples_by_index<A, B, C>(
    rows: &mut [(A, B, C)],
    column: usize,
    order: SortOrder,
) -> Result<()>
where
    A: Ord,
    B: Ord,
    C: Ord,
{
    let column = Column::try_from(column)?;
    sort_tuples(rows, column, order);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<(i32, &'static str, bool)> {
        vec![(1, "a", false), (3, "b", false), (2, "c", true)]
    }

    #[test]
    fn test_swap_elements() {
        let mut items = vec!["a", "b", "c"];
        swap_elements(&mut items, 0, 2).unwrap();
        assert_eq!(items, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_swap_same_index_is_noop() {
        let mut items = [1, 2, 3];
        swap_elements(&mut items, 1, 1).unwrap();
        assert_eq!(items, [1, 2, 3]);
    }

    #[test]
    fn test_swap_out_of_range_leaves_slice_untouched() {
        let mut items = [1, 2, 3];
        let err = swap_elements(&mut items, 0, 3).unwrap_err();
        assert!(matches!(err, Error::IndexOutOfRange { index: 3, len: 3 }));
        assert_eq!(items, [1, 2, 3]);

        let mut empty: [u8; 0] = [];
        assert!(swap_elements(&mut empty, 0, 0).is_err());
    }

    #[test]
    fn test_sort_first_column_ascending() {
        let mut rows = sample();
        sort_tuples(&mut rows, Column::First, SortOrder::Ascending);
        assert_eq!(rows, vec![(1, "a", false), (2, "c", true), (3, "b", false)]);
    }

    #[test]
    fn test_sort_second_column_descending() {
        let mut rows = sample();
        sort_tuples(&mut rows, Column::Second, SortOrder::Descending);
        assert_eq!(rows, vec![(2, "c", true), (3, "b", false), (1, "a", false)]);
    }

    #[test]
    fn test_sort_is_stable_descending() {
        let mut rows = vec![(1, "x", true), (2, "y", false), (3, "z", true)];
        sort_tuples(&mut rows, Column::Third, SortOrder::Descending);
        assert_eq!(rows, vec![(1, "x", true), (3, "z", true), (2, "y", false)]);
    }

    #[test]
    fn test_sort_by_index_rejects_bad_column() {
        let mut rows = sample();
        let err = sort_tuples_by_index(&mut rows, 3, SortOrder::Ascending).unwrap_err();
        assert!(matches!(err, Error::ColumnOutOfRange { column: 3 }));
        assert_eq!(rows, sample());
    }

    #[test]
    fn test_sort_by_index() {
        let mut rows = sample();
        sort_tuples_by_index(&mut rows, 0, SortOrder::Descending).unwrap();
        assert_eq!(rows[0].0, 3);
    }
}
