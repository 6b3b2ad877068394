//! Commonly used imports
//!
//! Use `use outcome::prelude::*;` for quick access to the most common types
//! and functions.

// Core types
pub use crate::outcome::{failure, success, Outcome};
pub use crate::step::Step;
pub use crate::suspend::OneShot;

// Combinators that aren't methods on `Outcome`
pub use crate::capture::{capture, capture_future, Caught};
pub use crate::combinator::all;

// Sequencing
pub use crate::sequence::{
    done, done_async, handle, handle_async, handle_async_with, handle_with, pause, pause_async,
    AsyncFlow, Flow,
};
