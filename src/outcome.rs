//! The two-variant outcome value produced by a fallible operation.
//!
//! [`Outcome`] is a closed success-or-failure container, similar to how
//! `Option` represents optional values. Combinators never mutate: they
//! consume an outcome and produce a new one, and none of them panic on the
//! "wrong" variant; they transform or pass through unchanged. The only
//! panicking operations are the terminal/assertion ones ([`Outcome::unwrap`],
//! [`Outcome::assert_success`], [`Outcome::assert_failure`]), which signal
//! programmer errors rather than domain failures.
//!
//! # Examples
//!
//! ```rust
//! use outcome::{success, failure, Outcome};
//!
//! fn parse(input: &str) -> Outcome<i32, String> {
//!     match input.parse() {
//!         Ok(n) => success(n),
//!         Err(e) => failure(e.to_string()),
//!     }
//! }
//!
//! let doubled = parse("21").map(|n| n * 2);
//! assert_eq!(doubled, success(42));
//! ```

use std::convert::Infallible;
use std::fmt;

use either::Either;

use crate::suspend::OneShot;

/// A fallible operation's result: either a success value or a failure error.
///
/// Exactly one variant is active; construction always succeeds and the value
/// is immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome<S, F> {
    /// The operation succeeded with a value.
    Success(S),
    /// The operation failed with an error.
    Failure(F),
}

/// Construct a successful outcome.
///
/// # Examples
///
/// ```rust
/// use outcome::{success, Outcome};
///
/// let v: Outcome<i32, &str> = success(3);
/// assert!(v.is_success());
/// ```
#[inline]
pub const fn success<S, F>(value: S) -> Outcome<S, F> {
    Outcome::Success(value)
}

/// Construct a failed outcome.
///
/// # Examples
///
/// ```rust
/// use outcome::{failure, Outcome};
///
/// let v: Outcome<i32, &str> = failure("nope");
/// assert!(v.is_failure());
/// ```
#[inline]
pub const fn failure<S, F>(error: F) -> Outcome<S, F> {
    Outcome::Failure(error)
}

impl<S, F> Outcome<S, F> {
    /// Returns `true` if the outcome is `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Returns `true` if the outcome is `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// Converts into an `Option` of the success value, discarding any error.
    #[inline]
    pub fn success_value(self) -> Option<S> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    /// Converts into an `Option` of the error, discarding any success value.
    #[inline]
    pub fn failure_value(self) -> Option<F> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(error) => Some(error),
        }
    }

    /// Transforms the success value, passing a failure through unchanged.
    ///
    /// The closure is never invoked on the failure variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::{success, failure, Outcome};
    ///
    /// let v: Outcome<i32, &str> = success(3);
    /// assert_eq!(v.map(|n| n + 1), success(4));
    ///
    /// let e: Outcome<i32, &str> = failure("bad");
    /// assert_eq!(e.map(|n| n + 1), failure("bad"));
    /// ```
    #[inline]
    pub fn map<S2, M>(self, f: M) -> Outcome<S2, F>
    where
        M: FnOnce(S) -> S2,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Transforms the error, passing a success through unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::{failure, Outcome};
    ///
    /// let e: Outcome<i32, i32> = failure(3);
    /// assert_eq!(e.map_err(|n| n + 1), failure(4));
    /// ```
    #[inline]
    pub fn map_err<F2, M>(self, f: M) -> Outcome<S, F2>
    where
        M: FnOnce(F) -> F2,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    /// Chains a fallible step: on success, runs `f` on the value (which may
    /// itself fail); on failure, passes the error through unchanged.
    ///
    /// The callee's error type must match `F`; re-type with
    /// [`map_err`](Outcome::map_err) first when chaining across error types.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::{success, failure, Outcome};
    ///
    /// fn halve(n: i32) -> Outcome<i32, &'static str> {
    ///     if n % 2 == 0 { success(n / 2) } else { failure("odd") }
    /// }
    ///
    /// assert_eq!(success(6).and_then(halve), success(3));
    /// assert_eq!(success(3).and_then(halve), failure("odd"));
    /// assert_eq!(failure("early").and_then(halve), failure("early"));
    /// ```
    #[inline]
    pub fn and_then<S2, M>(self, f: M) -> Outcome<S2, F>
    where
        M: FnOnce(S) -> Outcome<S2, F>,
    {
        match self {
            Outcome::Success(value) => f(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Replaces a failure with a default success value.
    ///
    /// The failure channel is eliminated by construction, which the
    /// [`Infallible`] error type makes visible.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::{success, failure, Outcome};
    ///
    /// let e: Outcome<i32, &str> = failure("bad");
    /// assert_eq!(e.or(4), success(4));
    ///
    /// let v: Outcome<i32, &str> = success(3);
    /// assert_eq!(v.or(4), success(3));
    /// ```
    #[inline]
    pub fn or(self, default: S) -> Outcome<S, Infallible> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(_) => Outcome::Success(default),
        }
    }

    /// Replaces a failure with a success value computed from the error.
    ///
    /// Like [`or`](Outcome::or), the result can never fail.
    #[inline]
    pub fn or_else<M>(self, f: M) -> Outcome<S, Infallible>
    where
        M: FnOnce(F) -> S,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Success(f(error)),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics on a failure, with the error's debug form in the message.
    ///
    /// ```should_panic
    /// use outcome::{failure, Outcome};
    ///
    /// let e: Outcome<i32, i32> = failure(-1);
    /// e.unwrap(); // panics with "Tried to unwrap failure: -1"
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> S
    where
        F: fmt::Debug,
    {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => panic!("Tried to unwrap failure: {error:?}"),
        }
    }

    /// Returns the success value, panicking with `msg` on a failure.
    #[inline]
    #[track_caller]
    pub fn expect(self, msg: &str) -> S {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => panic!("{msg}"),
        }
    }

    /// Returns the error.
    ///
    /// # Panics
    ///
    /// Panics on a success, with the value's debug form in the message.
    #[inline]
    #[track_caller]
    pub fn unwrap_failure(self) -> F
    where
        S: fmt::Debug,
    {
        match self {
            Outcome::Success(value) => {
                panic!("Tried to unwrap failure on success: {value:?}")
            }
            Outcome::Failure(error) => error,
        }
    }

    /// Returns the success value or a default. Never panics.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::{success, failure, Outcome};
    ///
    /// let v: Outcome<i32, &str> = success(3);
    /// assert_eq!(v.unwrap_or(4), 3);
    ///
    /// let e: Outcome<i32, &str> = failure("bad");
    /// assert_eq!(e.unwrap_or(4), 4);
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: S) -> S {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => default,
        }
    }

    /// Returns the success value or computes one from the error. Never panics.
    #[inline]
    pub fn unwrap_or_else<M>(self, f: M) -> S
    where
        M: FnOnce(F) -> S,
    {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => f(error),
        }
    }

    /// The universal eliminator: invokes exactly one of the two handlers on
    /// the active variant's payload and returns its result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::{success, failure, Outcome};
    ///
    /// let v: Outcome<i32, &str> = success(3);
    /// assert_eq!(v.fold(|n| n * 10, |_| 0), 30);
    ///
    /// let e: Outcome<i32, &str> = failure("bad");
    /// assert_eq!(e.fold(|n| n * 10, |err| err.len() as i32), 3);
    /// ```
    #[inline]
    pub fn fold<R, MS, MF>(self, on_success: MS, on_failure: MF) -> R
    where
        MS: FnOnce(S) -> R,
        MF: FnOnce(F) -> R,
    {
        match self {
            Outcome::Success(value) => on_success(value),
            Outcome::Failure(error) => on_failure(error),
        }
    }

    /// Asserts the outcome is a success, for callers that have already
    /// established the invariant by other means.
    ///
    /// # Panics
    ///
    /// Panics on a failure, with the error's debug form in the message.
    #[inline]
    #[track_caller]
    pub fn assert_success(&self)
    where
        F: fmt::Debug,
    {
        if let Outcome::Failure(error) = self {
            panic!("Expected success, got failure: {error:?}");
        }
    }

    /// Asserts the outcome is a failure.
    ///
    /// # Panics
    ///
    /// Panics on a success, with the value's debug form in the message.
    #[inline]
    #[track_caller]
    pub fn assert_failure(&self)
    where
        S: fmt::Debug,
    {
        if let Outcome::Success(value) = self {
            panic!("Expected failure, got success: {value:?}");
        }
    }

    /// Converts from `&Outcome<S, F>` to `Outcome<&S, &F>`.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&S, &F> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Converts into a standard [`Result`].
    #[inline]
    pub fn into_result(self) -> Result<S, F> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }

    /// Converts into an [`Either`], success on the left.
    #[inline]
    pub fn into_either(self) -> Either<S, F> {
        match self {
            Outcome::Success(value) => Either::Left(value),
            Outcome::Failure(error) => Either::Right(error),
        }
    }

    /// Wraps this outcome in a [`OneShot`] suspension, the conduit that lets
    /// it be consumed by a step-sequence driver.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::{success, Outcome, Step};
    ///
    /// let v: Outcome<i32, &str> = success(3);
    /// let mut gate = v.suspend();
    /// assert_eq!(gate.resume(()), Step::Yielded(success(3)));
    /// assert_eq!(gate.resume(()), Step::Complete(()));
    /// ```
    #[inline]
    pub fn suspend(self) -> OneShot<Outcome<S, F>> {
        OneShot::new(self)
    }
}

impl<S, F> From<Result<S, F>> for Outcome<S, F> {
    #[inline]
    fn from(result: Result<S, F>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error),
        }
    }
}

impl<S, F> From<Outcome<S, F>> for Result<S, F> {
    #[inline]
    fn from(outcome: Outcome<S, F>) -> Self {
        outcome.into_result()
    }
}

impl<S, F> From<Outcome<S, F>> for Either<S, F> {
    #[inline]
    fn from(outcome: Outcome<S, F>) -> Self {
        outcome.into_either()
    }
}
