//! The one-shot suspension primitive.
//!
//! A [`OneShot`] models exactly one meaningful pause: the first
//! [`resume`](OneShot::resume) surfaces the held payload and consumes it;
//! every later resume completes immediately with whatever value the caller
//! supplied instead of re-emitting the payload. This
//! single-pause contract is what lets an [`Outcome`](crate::Outcome) act as a
//! one-time "suspend here" marker inside a step-sequence; driving the same
//! suspension twice is a programmer error, not a race.

use crate::step::Step;

/// A suspension that pauses exactly once.
///
/// The consumed flag is the `Option`: `Some` is pending, `None` is spent.
///
/// # Examples
///
/// ```rust
/// use outcome::{OneShot, Step};
///
/// let mut gate = OneShot::new("payload");
/// assert_eq!(gate.resume(0), Step::Yielded("payload"));
/// assert_eq!(gate.resume(7), Step::Complete(7));
/// assert_eq!(gate.resume(9), Step::Complete(9));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneShot<Y> {
    payload: Option<Y>,
}

impl<Y> OneShot<Y> {
    /// Creates a pending suspension holding `payload`.
    #[inline]
    pub const fn new(payload: Y) -> Self {
        OneShot {
            payload: Some(payload),
        }
    }

    /// Drives the suspension once.
    ///
    /// The first call yields the held payload, discarding `input`; every
    /// later call completes with `input` as the run's completion value.
    #[inline]
    pub fn resume<R>(&mut self, input: R) -> Step<Y, R> {
        match self.payload.take() {
            Some(payload) => Step::Yielded(payload),
            None => Step::Complete(input),
        }
    }

    /// Terminates the suspension early, completing with `value` immediately.
    ///
    /// The payload, if still pending, is dropped.
    #[inline]
    pub fn finish<R>(&mut self, value: R) -> Step<Y, R> {
        self.payload = None;
        Step::Complete(value)
    }

    /// Returns `true` once the payload has been surfaced or dropped.
    #[inline]
    pub const fn is_consumed(&self) -> bool {
        self.payload.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::{failure, success, Outcome};

    #[test]
    fn test_first_resume_yields_payload() {
        let mut gate = OneShot::new(3);
        assert!(!gate.is_consumed());
        assert_eq!(gate.resume("ignored"), Step::Yielded(3));
        assert!(gate.is_consumed());
    }

    #[test]
    fn test_later_resumes_echo_supplied_value() {
        let mut gate = OneShot::new(3);
        let _ = gate.resume(0);
        assert_eq!(gate.resume(7), Step::Complete(7));
        assert_eq!(gate.resume(9), Step::Complete(9));
    }

    #[test]
    fn test_finish_completes_immediately() {
        let mut gate = OneShot::new(3);
        assert_eq!(gate.finish("early"), Step::Complete("early"));
        assert!(gate.is_consumed());
        // The payload is gone; a resume after finish echoes as well.
        assert_eq!(gate.resume("later"), Step::Complete("later"));
    }

    #[test]
    fn test_outcome_suspend_carries_the_outcome() {
        let v: Outcome<i32, &str> = success(3);
        let mut gate = v.suspend();
        assert_eq!(gate.resume(()), Step::Yielded(success(3)));

        let e: Outcome<i32, &str> = failure("bad");
        let mut gate = e.suspend();
        assert_eq!(gate.resume(()), Step::Yielded(failure("bad")));
        assert_eq!(gate.resume(()), Step::Complete(()));
    }
}
