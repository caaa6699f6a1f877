//! Natural-order string comparison for mixed Latin and Japanese labels.
//!
//! Numerals compare by value whatever their notation: Arabic digits (ASCII
//! or fullwidth, with thousands separators), Roman numerals in letters or
//! the U+2160 block, circled and parenthesized symbols, and kanji numerals
//! in positional or multiplicative form.
//!
//! ```
//! use natural_sort_order::Comparer;
//!
//! let mut names = vec!["file10", "file2", "file1"];
//! Comparer::default().sort(&mut names);
//! assert_eq!(names, ["file1", "file2", "file10"]);
//! ```

pub mod classify;
pub mod comparer;
pub mod convert;
pub mod errors;
pub mod normalize;
pub mod options;

use std::cmp::Ordering;

pub use classify::{classify, CharKind};
pub use comparer::{compare_char, Comparer};
pub use convert::{read_run, read_run_str, Converter, NumeralConverter, NumeralRun};
pub use errors::{NaturalSortError, Result};
pub use normalize::normalize;
pub use options::{ComparerConfig, ComparerOptions, SortOrder};

/// Compare with the default comparer.
pub fn compare(a: &str, b: &str) -> Ordering {
    Comparer::default().compare(a, b)
}

/// Sort in place with the default comparer.
pub fn sort<S: AsRef<str>>(items: &mut [S]) {
    Comparer::default().sort(items);
}

/// Sorted copy with the default comparer.
pub fn sorted<I>(items: I) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    Comparer::default().sorted(items)
}
