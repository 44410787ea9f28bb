//! Delimited list conversion
//!
//! Turns sequences of `Display` values into a single separated string and
//! parses such strings back through `FromStr`.
//!
//! ```rust
//! use thrice_core::convert::{parse_delimited, to_delimited};
//!
//! assert_eq!(to_delimited([1, 2, 3]), "1,2,3");
//! assert_eq!(parse_delimited::<u8>("1,2,3").unwrap(), vec![1, 2, 3]);
//! ```

use std::fmt::{Display, Write};
use std::str::FromStr;

use crate::error::{Error, Result};

/// Separator used when none is given
pub const LIST_SEPARATOR: char = ',';

/// Join items with the default separator
pub fn to_delimited<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    to_delimited_with(items, LIST_SEPARATOR)
}

/// Join items with an explicit separator
pub fn to_delimited_with<I>(items: I, separator: char) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut out = String::new();
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push(separator);
        }
        // Writing into a String cannot fail
        let _ = write!(out, "{}", item);
    }
    out
}

/// Join the present items with the default separator, skipping `None`
pub fn to_delimited_present<I, T>(items: I) -> String
where
    I: IntoIterator<Item = Option<T>>,
    T: Display,
{
    to_delimited(items.into_iter().flatten())
}

/// Parse a list written with the default separator
///
/// Empty entries are dropped, so `""` and `",,"` both give an empty list.
pub fn parse_delimited<T>(list: &str) -> Result<Vec<T>>
where
    T: FromStr,
    T::Err: Display,
{
    parse_delimited_with(list, LIST_SEPARATOR)
}

/// Parse a list written with an explicit separator
pub fn parse_delimited_with<T>(list: &str, separator: char) -> Result<Vec<T>>
where
    T: FromStr,
    T::Err: Display,
{
    list.split(separator)
        .filter(|item| !item.is_empty())
        .map(|item| item.parse::<T>().map_err(|e| Error::parse_item(item, e)))
        .collect()
}
