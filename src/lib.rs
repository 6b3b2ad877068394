//! # Outcome: Composable Fallible Computations
//!
//! Represent fallible operations as two-variant [`Outcome`] values instead of
//! raised faults, compose them with a small combinator algebra, and write
//! chains of fallible steps as straight-line sequences that short-circuit on
//! the first failure.
//!
//! ## Core Pieces
//!
//! - **[`Outcome<S, F>`]**: an immutable success-or-failure container
//! - **Combinators**: `map`, `and_then`, `or`, [`all`], [`capture`], …
//! - **[`OneShot`]**: the one-shot suspension a sequence pauses through
//! - **[`handle`] / [`handle_async`]**: drivers that run a step-sequence,
//!   feeding each unwrapped success back in and aborting on the first failure
//!
//! ## Example
//!
//! ```rust
//! use outcome::{done, failure, handle, pause, success, Outcome};
//!
//! fn parse(input: &str) -> Outcome<i32, String> {
//!     match input.parse() {
//!         Ok(n) => success(n),
//!         Err(e) => failure(e.to_string()),
//!     }
//! }
//!
//! // Two fallible steps written as a straight line; the first failure
//! // aborts the rest of the run and comes back unchanged.
//! let run = handle(|| pause(parse("20"), |a| pause(parse("22"), move |b| done(a + b))));
//! assert_eq!(run, success(42));
//! ```
//!
//! ## Common Functions
//!
//! **Building Outcomes:**
//! - [`success(v)`](success) / [`failure(e)`](failure) - the two constructors
//! - [`capture(f)`](capture) - run a panicking call onto the failure channel
//! - [`all(tuple)`](all) - aggregate a tuple of outcomes, first failure wins
//!
//! **Execution:**
//! - [`handle(seq)`](handle) - drive a step-sequence synchronously
//! - [`handle_async(seq)`](handle_async) - same, awaiting pending steps
//! - [`handle_with`] / [`handle_async_with`] - bind a receiver for the run

mod capture;
mod combinator;
mod outcome;
mod sequence;
mod step;
mod suspend;

pub mod prelude;

pub use capture::*;
pub use combinator::*;
pub use outcome::*;
pub use sequence::*;
pub use step::*;
pub use suspend::*;
