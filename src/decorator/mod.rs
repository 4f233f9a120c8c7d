//! Stateful function wrappers.
//!
//! Each wrapper owns its state privately and exposes a single `call`
//! method. Functions of several arguments take a tuple.
//!
//! - [`Once`] / [`once`]: run the first call only, then replay its result
//! - [`Memoize`] / [`memoize`]: cache results keyed by the encoded arguments
//! - [`delay`]: run a call later through a [`Scheduler`](crate::schedule::Scheduler)
//! - [`Throttle`] / [`throttle`]: run at most once per time window, dropping
//!   the calls in between
//!
//! `Once` and `Memoize` keep their state in a `RefCell` and are meant for a
//! single thread. `Throttle` is driven by a scheduler that may run on
//! another thread, so its state sits behind a mutex.
//!
//! # Examples
//!
//! ```rust
//! use std::time::Duration;
//! use underbar::decorator::{memoize, once, throttle};
//! use underbar::schedule::ManualScheduler;
//!
//! let setup = once(|name: &str| format!("configured {name}"));
//! assert_eq!(setup.call("db"), "configured db");
//! assert_eq!(setup.call("cache"), "configured db");
//!
//! let double = memoize(|value: u64| value * 2);
//! assert_eq!(double.call(21), 42);
//! assert_eq!(double.len(), 1);
//!
//! let clock = ManualScheduler::new();
//! let ping = throttle(|(): ()| "pong", Duration::from_millis(50), clock.clone());
//! assert_eq!(ping.call(()), "pong");
//! assert!(ping.is_blocked());
//! clock.advance(Duration::from_millis(50));
//! assert!(!ping.is_blocked());
//! ```

mod delay;
mod key;
mod memoize;
mod once;
mod throttle;

pub use delay::delay;
pub use memoize::{Memoize, memoize};
pub use once::{Once, once};
pub use throttle::{Throttle, throttle};
