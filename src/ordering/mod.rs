//! Structural transforms with ordering guarantees.
//!
//! - [`sort_by`] / [`sort_by_field`]: stable ascending sort by a derived
//!   key, with missing keys last
//! - [`zip`]: transpose sequences of uneven length
//! - [`flatten`]: depth-first flattening of nested sequences
//! - [`shuffle`] / [`shuffle_with`]: random permutation that never returns
//!   the input order
//!
//! # Examples
//!
//! ```rust
//! use underbar::ordering::{flatten, sort_by, zip};
//! use underbar::value::Value;
//!
//! let words = vec!["pear", "fig", "apple"];
//! assert_eq!(sort_by(&words, |word| Some(word.len())), vec!["fig", "pear", "apple"]);
//!
//! assert_eq!(zip(&[vec![1, 2], vec![3]]), vec![vec![Some(1), Some(3)], vec![Some(2), None]]);
//!
//! let nested = Value::from(serde_json::json!([1, [2, [3]]]));
//! assert_eq!(flatten(&nested), underbar::values![1, 2, 3]);
//! ```

mod flatten;
mod shuffle;
mod sort;
mod zip;

pub use flatten::{Nest, Nested, Nesting, flatten};
pub use shuffle::{shuffle, shuffle_with};
pub use sort::{sort_by, sort_by_field};
pub use zip::zip;
