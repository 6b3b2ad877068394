//! Point-free combinator forms and multi-outcome aggregation.
//!
//! Every transforming combinator on [`Outcome`] is also exposed as a curried
//! free function returning a closure, so a left-to-right pipeline helper can
//! compose them without lambda noise. The pipeline helper itself lives
//! outside this crate; these are the forms it consumes.
//!
//! ```rust
//! use outcome::{success, Outcome};
//!
//! let v: Outcome<i32, &str> = success(3);
//! let mapped = outcome::map(|n: i32| n + 1)(v);
//! assert_eq!(mapped, success(4));
//! ```
//!
//! [`all`] aggregates a fixed-arity tuple of outcomes into one outcome of the
//! tuple of their success values, short-circuiting on the lowest-index
//! failure.

use std::convert::Infallible;
use std::fmt;

use crate::outcome::Outcome;

/// Curried form of [`Outcome::map`].
pub fn map<S, S2, F, M>(f: M) -> impl FnOnce(Outcome<S, F>) -> Outcome<S2, F>
where
    M: FnOnce(S) -> S2,
{
    move |outcome| outcome.map(f)
}

/// Curried form of [`Outcome::map_err`].
pub fn map_err<S, F, F2, M>(f: M) -> impl FnOnce(Outcome<S, F>) -> Outcome<S, F2>
where
    M: FnOnce(F) -> F2,
{
    move |outcome| outcome.map_err(f)
}

/// Curried form of [`Outcome::and_then`].
pub fn and_then<S, S2, F, M>(f: M) -> impl FnOnce(Outcome<S, F>) -> Outcome<S2, F>
where
    M: FnOnce(S) -> Outcome<S2, F>,
{
    move |outcome| outcome.and_then(f)
}

/// Curried form of [`Outcome::or`].
pub fn or<S, F>(default: S) -> impl FnOnce(Outcome<S, F>) -> Outcome<S, Infallible> {
    move |outcome| outcome.or(default)
}

/// Curried form of [`Outcome::or_else`].
pub fn or_else<S, F, M>(f: M) -> impl FnOnce(Outcome<S, F>) -> Outcome<S, Infallible>
where
    M: FnOnce(F) -> S,
{
    move |outcome| outcome.or_else(f)
}

/// Free-function form of [`Outcome::unwrap`], for pipeline tails.
#[track_caller]
pub fn unwrap<S, F>(outcome: Outcome<S, F>) -> S
where
    F: fmt::Debug,
{
    outcome.unwrap()
}

/// Curried form of [`Outcome::unwrap_or`].
pub fn unwrap_or<S, F>(default: S) -> impl FnOnce(Outcome<S, F>) -> S {
    move |outcome| outcome.unwrap_or(default)
}

/// Curried form of [`Outcome::unwrap_or_else`].
pub fn unwrap_or_else<S, F, M>(f: M) -> impl FnOnce(Outcome<S, F>) -> S
where
    M: FnOnce(F) -> S,
{
    move |outcome| outcome.unwrap_or_else(f)
}

/// Curried form of [`Outcome::fold`].
pub fn fold<S, F, R, MS, MF>(on_success: MS, on_failure: MF) -> impl FnOnce(Outcome<S, F>) -> R
where
    MS: FnOnce(S) -> R,
    MF: FnOnce(F) -> R,
{
    move |outcome| outcome.fold(on_success, on_failure)
}

/// Tuples of outcomes that aggregate into one outcome.
///
/// Success types may differ per position; the error type is shared across
/// the tuple. Implemented for arities 0 through 8.
pub trait Aggregate<F> {
    /// The tuple of extracted success values, positionally aligned.
    type Values;

    /// Scans in positional order, returning the lowest-index failure as-is
    /// or the success tuple when every element succeeded.
    fn all(self) -> Outcome<Self::Values, F>;
}

/// Aggregates a fixed-arity tuple of outcomes.
///
/// The first failure (lowest index) is returned unchanged, error value
/// preserved, and later elements are never inspected. An empty tuple is
/// success of the empty tuple.
///
/// # Examples
///
/// ```rust
/// use outcome::{all, success, failure, Outcome};
///
/// let a: Outcome<i32, &str> = success(1);
/// let b: Outcome<&str, &str> = success("two");
/// assert_eq!(all((a, b)), success((1, "two")));
///
/// let a: Outcome<i32, &str> = success(1);
/// let b: Outcome<&str, &str> = failure("first");
/// let c: Outcome<i32, &str> = failure("second");
/// assert_eq!(all((a, b, c)), failure("first"));
/// ```
pub fn all<F, T>(outcomes: T) -> Outcome<T::Values, F>
where
    T: Aggregate<F>,
{
    outcomes.all()
}

impl<F> Aggregate<F> for () {
    type Values = ();

    fn all(self) -> Outcome<(), F> {
        Outcome::Success(())
    }
}

macro_rules! impl_aggregate {
    ($(($idx:tt, $ty:ident, $value:ident)),+) => {
        impl<F, $($ty),+> Aggregate<F> for ($(Outcome<$ty, F>,)+) {
            type Values = ($($ty,)+);

            fn all(self) -> Outcome<Self::Values, F> {
                $(
                    let $value = match self.$idx {
                        Outcome::Success(value) => value,
                        Outcome::Failure(error) => return Outcome::Failure(error),
                    };
                )+
                Outcome::Success(($($value,)+))
            }
        }
    };
}

impl_aggregate!((0, S0, v0));
impl_aggregate!((0, S0, v0), (1, S1, v1));
impl_aggregate!((0, S0, v0), (1, S1, v1), (2, S2, v2));
impl_aggregate!((0, S0, v0), (1, S1, v1), (2, S2, v2), (3, S3, v3));
impl_aggregate!((0, S0, v0), (1, S1, v1), (2, S2, v2), (3, S3, v3), (4, S4, v4));
impl_aggregate!(
    (0, S0, v0),
    (1, S1, v1),
    (2, S2, v2),
    (3, S3, v3),
    (4, S4, v4),
    (5, S5, v5)
);
impl_aggregate!(
    (0, S0, v0),
    (1, S1, v1),
    (2, S2, v2),
    (3, S3, v3),
    (4, S4, v4),
    (5, S5, v5),
    (6, S6, v6)
);
impl_aggregate!(
    (0, S0, v0),
    (1, S1, v1),
    (2, S2, v2),
    (3, S3, v3),
    (4, S4, v4),
    (5, S5, v5),
    (6, S6, v6),
    (7, S7, v7)
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::{failure, success};

    #[test]
    fn test_curried_map_and_map_err() {
        let v: Outcome<i32, i32> = success(3);
        assert_eq!(map(|n: i32| n + 1)(v), success(4));

        let e: Outcome<i32, i32> = failure(3);
        assert_eq!(map_err(|n: i32| n + 1)(e), failure(4));
    }

    #[test]
    fn test_curried_forms_compose_as_a_pipeline() {
        // map then map_err on a failure: only the error channel moves.
        let e: Outcome<i32, i32> = failure(3);
        let piped = map_err(|n: i32| n + 1)(map(|n: i32| n + 1)(e));
        assert_eq!(piped, failure(4));

        let v: Outcome<i32, i32> = success(3);
        let piped = map_err(|n: i32| n + 1)(map(|n: i32| n + 1)(v));
        assert_eq!(piped, success(4));
    }

    #[test]
    fn test_curried_and_then() {
        let v: Outcome<i32, i32> = success(3);
        let step1 = and_then(|n: i32| success::<i32, i32>(n + 1));
        let step2 = and_then(|n: i32| failure::<i32, i32>(n + 2));
        assert_eq!(step2(step1(v)), failure(6));

        let e: Outcome<i32, i32> = failure(2);
        assert_eq!(and_then(|n: i32| success::<i32, i32>(n + 1))(e), failure(2));
    }

    #[test]
    fn test_curried_or_and_or_else() {
        let e: Outcome<i32, &str> = failure("x");
        assert_eq!(or(4)(e), success(4));

        let v: Outcome<i32, &str> = success(3);
        assert_eq!(or(4)(v), success(3));

        let e: Outcome<i32, i32> = failure(3);
        assert_eq!(or_else(|n: i32| n + 1)(e), success(4));
    }

    #[test]
    fn test_curried_unwraps_and_fold() {
        let v: Outcome<i32, &str> = success(3);
        assert_eq!(unwrap(v), 3);

        let e: Outcome<i32, &str> = failure("x");
        assert_eq!(unwrap_or(4)(e), 4);

        let e: Outcome<i32, i32> = failure(3);
        assert_eq!(unwrap_or_else(|n: i32| n + 1)(e), 4);

        let v: Outcome<i32, i32> = success(3);
        assert_eq!(fold(|_: i32| 2, |_: i32| 4)(v), 2);
        let e: Outcome<i32, i32> = failure(3);
        assert_eq!(fold(|_: i32| 2, |_: i32| 4)(e), 4);
    }

    #[test]
    fn test_all_success_preserves_positions() {
        let a: Outcome<i32, &str> = success(1);
        let b: Outcome<&str, &str> = success("2");
        let c: Outcome<i32, &str> = success(3);
        assert_eq!(all((a, b, c)), success((1, "2", 3)));
    }

    #[test]
    fn test_all_returns_lowest_index_failure() {
        let a: Outcome<i32, i32> = success(1);
        let b: Outcome<i32, i32> = failure(2);
        let c: Outcome<i32, i32> = failure(3);
        assert_eq!(all((a, b, c)), failure(2));
    }

    #[test]
    fn test_all_single_element() {
        let a: Outcome<i32, &str> = failure("only");
        assert_eq!(all((a,)), failure("only"));

        let a: Outcome<i32, &str> = success(9);
        assert_eq!(all((a,)), success((9,)));
    }

    #[test]
    fn test_all_empty_tuple_is_success() {
        let empty: Outcome<(), &str> = all(());
        assert_eq!(empty, success(()));
    }

    #[test]
    fn test_all_result_maps_like_any_outcome() {
        let a: Outcome<i32, &str> = success(1);
        let b: Outcome<i32, &str> = success(2);
        let summed = all((a, b)).map(|(x, y)| x + y);
        assert_eq!(summed, success(3));
    }
}
