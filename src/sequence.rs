//! The sequencing protocol: chains of fallible steps as straight-line code.
//!
//! A step-sequence is written in continuation-passing style: each suspension
//! point is a [`pause`] node carrying one [`Outcome`] and the closure to run
//! with its unwrapped success value, and the sequence terminates with a
//! [`done`] node carrying a plain return value. [`handle`] drives the
//! sequence: each pause surfaces its outcome through a [`OneShot`]; a
//! success resumes the sequence with the extracted value, the first failure
//! aborts the whole run and is returned unchanged, and completion wraps the
//! return value as a success.
//!
//! The driver itself never panics. Panics raised by combinators invoked
//! inside the sequence body (an [`unwrap`](Outcome::unwrap), say) propagate
//! out of the run unmodified; use [`capture`](crate::capture()) when they
//! should land on the failure channel instead.
//!
//! # Examples
//!
//! ```rust
//! use outcome::{done, handle, pause, success, Outcome};
//!
//! fn first() -> Outcome<i32, &'static str> {
//!     success(1)
//! }
//!
//! fn second(n: i32) -> Outcome<i32, &'static str> {
//!     success(n + 1)
//! }
//!
//! let run = handle(|| pause(first(), |a| pause(second(a), move |b| done(a + b))));
//! assert_eq!(run, success(3));
//! ```
//!
//! The async variant differs only in that advancing the sequence may first
//! await a pending computation; [`handle_async`] awaits each settlement
//! before inspecting it, with the same short-circuit rule. Effects follow
//! the textual order of the sequence, never the arrival order of a future.

use std::future::Future;

use futures::future::LocalBoxFuture;
use futures::FutureExt;

use crate::outcome::{failure, success, Outcome};
use crate::step::Step;
use crate::suspend::OneShot;

/// State of a step-sequence between driver interventions: finished with a
/// plain value, or paused on an outcome.
pub enum Flow<T: 'static, E: 'static> {
    /// The sequence returned normally.
    Done(T),
    /// The sequence paused on an outcome, waiting for the driver.
    Pause(Box<dyn Suspended<T, E>>),
}

/// A paused position in a step-sequence: one held outcome plus the
/// resumption that consumes its success value.
pub trait Suspended<T: 'static, E: 'static> {
    /// Drives the held suspension once and inspects the surfaced outcome.
    fn advance(self: Box<Self>) -> Advanced<T, E>;
}

/// What advancing a paused sequence produced.
pub enum Advanced<T: 'static, E: 'static> {
    /// The outcome was a success; the sequence moved to its next state.
    Resumed(Flow<T, E>),
    /// The outcome was a failure; the run is over.
    Aborted(E),
}

struct PauseSite<Y, E, K> {
    gate: OneShot<Outcome<Y, E>>,
    resume: K,
}

impl<Y, T: 'static, E: 'static, K> Suspended<T, E> for PauseSite<Y, E, K>
where
    K: FnOnce(Y) -> Flow<T, E>,
{
    fn advance(self: Box<Self>) -> Advanced<T, E> {
        let PauseSite { mut gate, resume } = *self;
        match gate.resume(()) {
            Step::Yielded(Outcome::Success(value)) => Advanced::Resumed(resume(value)),
            Step::Yielded(Outcome::Failure(error)) => Advanced::Aborted(error),
            // The gate is built fresh by `pause`, so its first drive yields.
            Step::Complete(()) => unreachable!("pause site driven twice"),
        }
    }
}

/// Terminates a step-sequence with a plain return value.
#[inline]
pub fn done<T: 'static, E: 'static>(value: T) -> Flow<T, E> {
    Flow::Done(value)
}

/// Pauses a step-sequence on `outcome`.
///
/// If the outcome is a success, the driver feeds its value to `resume`; a
/// failure aborts the run and the closure never executes.
pub fn pause<Y, T, E, K>(outcome: Outcome<Y, E>, resume: K) -> Flow<T, E>
where
    Y: 'static,
    T: 'static,
    E: 'static,
    K: FnOnce(Y) -> Flow<T, E> + 'static,
{
    Flow::Pause(Box::new(PauseSite {
        gate: outcome.suspend(),
        resume,
    }))
}

/// Runs a step-sequence to completion or first failure, synchronously.
///
/// The return value of a sequence that never fails comes back as
/// `success(value)`; the first failure comes back exactly as it was paused
/// on, error value and type preserved, and no later step executes.
pub fn handle<T, E, S>(sequence: S) -> Outcome<T, E>
where
    T: 'static,
    E: 'static,
    S: FnOnce() -> Flow<T, E>,
{
    let mut state = sequence();
    loop {
        match state {
            Flow::Done(value) => return success(value),
            Flow::Pause(site) => match site.advance() {
                Advanced::Resumed(next) => state = next,
                Advanced::Aborted(error) => return failure(error),
            },
        }
    }
}

/// Like [`handle`], with a receiver the sequence resolves against for the
/// whole run.
///
/// The receiver is passed to the sequence constructor as a first-class
/// argument rather than through any ambient binding.
///
/// # Examples
///
/// ```rust
/// use outcome::{done, handle_with, pause, success, Outcome};
///
/// struct Counter {
///     base: i32,
/// }
///
/// impl Counter {
///     fn bump(&self, n: i32) -> Outcome<i32, &'static str> {
///         success(self.base + n)
///     }
/// }
///
/// let run = handle_with(Counter { base: 10 }, |counter| {
///     pause(counter.bump(1), move |a| done(a))
/// });
/// assert_eq!(run, success(11));
/// ```
pub fn handle_with<C, T, E, S>(receiver: C, sequence: S) -> Outcome<T, E>
where
    T: 'static,
    E: 'static,
    S: FnOnce(C) -> Flow<T, E>,
{
    handle(move || sequence(receiver))
}

/// State of an asynchronous step-sequence between driver interventions.
pub enum AsyncFlow<T: 'static, E: 'static> {
    /// The sequence returned normally.
    Done(T),
    /// The sequence paused on an outcome, waiting for the driver.
    Pause(Box<dyn AsyncSuspended<T, E>>),
}

/// A paused position in an asynchronous step-sequence.
pub trait AsyncSuspended<T: 'static, E: 'static> {
    /// Drives the held suspension once and inspects the surfaced outcome.
    fn advance(self: Box<Self>) -> AsyncAdvanced<T, E>;
}

/// What advancing a paused asynchronous sequence produced.
pub enum AsyncAdvanced<T: 'static, E: 'static> {
    /// The outcome was a success; awaiting the future settles the sequence's
    /// next state.
    Resumed(LocalBoxFuture<'static, AsyncFlow<T, E>>),
    /// The outcome was a failure; the run is over.
    Aborted(E),
}

struct AsyncPauseSite<Y, E, K> {
    gate: OneShot<Outcome<Y, E>>,
    resume: K,
}

impl<Y, T: 'static, E: 'static, K> AsyncSuspended<T, E> for AsyncPauseSite<Y, E, K>
where
    K: FnOnce(Y) -> LocalBoxFuture<'static, AsyncFlow<T, E>>,
{
    fn advance(self: Box<Self>) -> AsyncAdvanced<T, E> {
        let AsyncPauseSite { mut gate, resume } = *self;
        match gate.resume(()) {
            Step::Yielded(Outcome::Success(value)) => AsyncAdvanced::Resumed(resume(value)),
            Step::Yielded(Outcome::Failure(error)) => AsyncAdvanced::Aborted(error),
            Step::Complete(()) => unreachable!("pause site driven twice"),
        }
    }
}

/// Terminates an asynchronous step-sequence with a plain return value.
#[inline]
pub fn done_async<T: 'static, E: 'static>(value: T) -> AsyncFlow<T, E> {
    AsyncFlow::Done(value)
}

/// Pauses an asynchronous step-sequence on `outcome`.
///
/// The resumption returns a future; the driver awaits it before the next
/// inspection, so a step may await pending computations of its own before
/// pausing again.
pub fn pause_async<Y, T, E, K, Fut>(outcome: Outcome<Y, E>, resume: K) -> AsyncFlow<T, E>
where
    Y: 'static,
    T: 'static,
    E: 'static,
    K: FnOnce(Y) -> Fut + 'static,
    Fut: Future<Output = AsyncFlow<T, E>> + 'static,
{
    let resume = move |value: Y| resume(value).boxed_local();
    AsyncFlow::Pause(Box::new(AsyncPauseSite {
        gate: outcome.suspend(),
        resume,
    }))
}

/// Runs an asynchronous step-sequence to completion or first failure.
///
/// Identical short-circuit rule to [`handle`]; the only difference is that
/// obtaining each next state may require awaiting a pending computation
/// first. No two resumptions of one run are ever concurrent.
pub async fn handle_async<T, E, S, Fut>(sequence: S) -> Outcome<T, E>
where
    T: 'static,
    E: 'static,
    S: FnOnce() -> Fut,
    Fut: Future<Output = AsyncFlow<T, E>>,
{
    let mut state = sequence().await;
    loop {
        match state {
            AsyncFlow::Done(value) => return success(value),
            AsyncFlow::Pause(site) => match site.advance() {
                AsyncAdvanced::Resumed(next) => state = next.await,
                AsyncAdvanced::Aborted(error) => return failure(error),
            },
        }
    }
}

/// Like [`handle_async`], with a receiver passed to the sequence constructor
/// for the whole run.
pub async fn handle_async_with<C, T, E, S, Fut>(receiver: C, sequence: S) -> Outcome<T, E>
where
    T: 'static,
    E: 'static,
    S: FnOnce(C) -> Fut,
    Fut: Future<Output = AsyncFlow<T, E>>,
{
    handle_async(move || sequence(receiver)).await
}
