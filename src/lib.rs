//! # underbar
//!
//! A functional utility belt for Rust: iteration over sequences and
//! mappings, set and ordering operations, and stateful function
//! decorators.
//!
//! ## Overview
//!
//! - **Values**: [`value::Value`], a dynamic value for loosely typed data,
//!   and the identity traits that decide when `1` and `"1"` are "the same"
//! - **Collections**: `each`, `map`, `filter`, `reduce` and their
//!   derivatives over any [`collection::Collection`]
//! - **Sets**: `uniq`, `intersection`, `difference`
//! - **Ordering**: stable `sort_by`, `zip`, `flatten`, `shuffle`
//! - **Decorators**: `once`, `memoize`, `delay`, `throttle`
//! - **Scheduling**: the deferred-execution seam used by `delay` and
//!   `throttle`
//!
//! Nothing here validates input shape. A missing field or a missing
//! element is an "undefined" result (`None` or [`value::Value::Undefined`]),
//! never an error.
//!
//! ## Feature Flags
//!
//! - `collection`: Iteration core
//! - `sets`: Set operations (implies `collection`)
//! - `ordering`: Sorting, zipping, flattening and shuffling (implies `collection`)
//! - `decorators`: Function decorators and schedulers
//! - `async`: Tokio-backed scheduler (implies `decorators`)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use underbar::prelude::*;
//!
//! let numbers = vec![3, 1, 2, 3];
//! let doubled = map(&numbers, |number| number * 2);
//! assert_eq!(doubled, vec![6, 2, 4, 6]);
//!
//! assert_eq!(uniq(&numbers), vec![3, 1, 2]);
//! assert_eq!(sort_by(&numbers, |number| Some(*number)), vec![1, 2, 3, 3]);
//!
//! let total = reduce(&numbers, |sum, number| sum + number, None);
//! assert_eq!(total, Some(9));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the public operations of every enabled module.
///
/// # Usage
///
/// ```rust
/// use underbar::prelude::*;
/// ```
pub mod prelude {
    pub use crate::helpers::*;
    pub use crate::value::{Coercible, Kind, Mapping, TypedKey, Value};
    pub use crate::values;

    #[cfg(feature = "collection")]
    pub use crate::collection::*;

    #[cfg(feature = "sets")]
    pub use crate::set::*;

    #[cfg(feature = "ordering")]
    pub use crate::ordering::*;

    #[cfg(feature = "decorators")]
    pub use crate::decorator::*;

    #[cfg(feature = "decorators")]
    pub use crate::schedule::{ManualScheduler, ScheduleError, Scheduler, Task, ThreadScheduler};

    #[cfg(feature = "async")]
    pub use crate::schedule::TokioScheduler;
}

pub mod helpers;
pub mod value;

#[cfg(feature = "collection")]
pub mod collection;

#[cfg(feature = "sets")]
pub mod set;

#[cfg(feature = "ordering")]
pub mod ordering;

#[cfg(feature = "decorators")]
pub mod decorator;

#[cfg(feature = "decorators")]
pub mod schedule;
