//! Async-ease: asynchronous control-flow helpers.
//!
//! # Overview
//!
//! This crate is a small toolbox for composing asynchronous work: a timer
//! delay, sequential composition, sequential map/filter/reduce over async
//! transforms, an error-catching wrapper, and a bounded-concurrency task
//! runner. Every helper is a plain `async fn` over caller-supplied task
//! closures; the crate owns no runtime and spawns nothing.
//!
//! # Core Guarantees
//!
//! - **Order stability**: every collection-producing helper returns results
//!   in input index order, regardless of completion order
//! - **Fail-fast propagation**: the first error encountered is returned
//!   verbatim; sequential helpers never invoke later tasks after a failure
//! - **Bounded admission**: [`concurrent()`] never holds more than `limit`
//!   tasks in the admitted-but-unsettled state
//! - **No hidden recovery**: [`catch_error()`] is the only place an error
//!   can be converted into a substitute success
//!
//! # Module Structure
//!
//! - [`delay`](mod@delay): timer-based suspend
//! - [`compose`](mod@compose): sequential composition, list and tuple forms
//! - [`run`](mod@run): pass-through awaiter
//! - [`map`](mod@map), [`filter`](mod@filter), [`reduce`](mod@reduce):
//!   sequential iteration over async transforms
//! - [`concurrent`](mod@concurrent): bounded-concurrency executor
//! - [`catch_error`](mod@catch_error): try/recover wrapper
//!
//! # Task Shape
//!
//! A task is a zero-argument closure producing a future of `Result<T, E>`:
//! invoking the closure admits the task and begins its side effects. The
//! error type `E` is always the caller's own; this crate defines no error
//! kinds of its own and never wraps one.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod catch_error;
pub mod compose;
pub mod concurrent;
pub mod delay;
pub mod filter;
pub mod map;
pub mod reduce;
pub mod run;

pub use catch_error::catch_error;
pub use compose::compose;
pub use concurrent::concurrent;
pub use delay::delay;
pub use filter::filter;
pub use map::map;
pub use reduce::reduce;
pub use run::run;
