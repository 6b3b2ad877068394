//! Converting raised faults into domain failures.
//!
//! [`capture`] and [`capture_future`] are the sanctioned boundary between
//! panicking code and the failure channel: any panic raised inside the
//! wrapped call becomes a [`failure`] carrying a [`Caught`] payload, and a
//! normal return becomes a [`success`]. Code outside the wrapped call never
//! sees the panic.
//!
//! # Examples
//!
//! ```rust
//! use outcome::{capture, success};
//!
//! let v = capture(|| 1 + 1);
//! assert_eq!(v.success_value(), Some(2));
//!
//! let e = capture(|| -> i32 { panic!("boom") });
//! assert_eq!(e.failure_value().unwrap().message(), Some("boom"));
//! ```

use std::any::Any;
use std::fmt;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};

use futures::FutureExt;

use crate::outcome::{failure, success, Outcome};

/// A captured panic payload.
///
/// Panic payloads are type-erased; [`message`](Caught::message) recovers the
/// text for the common `&str`/`String` payloads, and
/// [`into_payload`](Caught::into_payload) hands back the raw box for
/// downcasting anything else.
pub struct Caught {
    payload: Box<dyn Any + Send + 'static>,
}

impl Caught {
    fn new(payload: Box<dyn Any + Send + 'static>) -> Self {
        Caught { payload }
    }

    /// The panic message, when the payload was a string.
    pub fn message(&self) -> Option<&str> {
        if let Some(s) = self.payload.downcast_ref::<&'static str>() {
            Some(s)
        } else if let Some(s) = self.payload.downcast_ref::<String>() {
            Some(s.as_str())
        } else {
            None
        }
    }

    /// Borrows the raw payload.
    pub fn payload(&self) -> &(dyn Any + Send + 'static) {
        self.payload.as_ref()
    }

    /// Consumes the capture, returning the raw payload.
    pub fn into_payload(self) -> Box<dyn Any + Send + 'static> {
        self.payload
    }
}

impl fmt::Debug for Caught {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Caught")
            .field(&self.message().unwrap_or("<opaque panic payload>"))
            .finish()
    }
}

impl fmt::Display for Caught {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => write!(f, "{message}"),
            None => write!(f, "<opaque panic payload>"),
        }
    }
}

impl std::error::Error for Caught {}

/// Invokes `f`, capturing any panic as a failure.
///
/// The closure is wrapped in [`AssertUnwindSafe`]: it is consumed by the
/// call, so there is no captured state to observe after a failure.
pub fn capture<T, M>(f: M) -> Outcome<T, Caught>
where
    M: FnOnce() -> T,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => success(value),
        Err(payload) => failure(Caught::new(payload)),
    }
}

/// Same capture discipline for an asynchronous computation.
///
/// Both a panic while constructing the future and a panic while polling it
/// settle as a failure; a normal settlement becomes a success.
///
/// # Examples
///
/// ```rust
/// use futures::executor::block_on;
/// use outcome::capture_future;
///
/// let v = block_on(capture_future(|| async { 3 }));
/// assert_eq!(v.success_value(), Some(3));
/// ```
pub async fn capture_future<T, M, Fut>(f: M) -> Outcome<T, Caught>
where
    M: FnOnce() -> Fut,
    Fut: Future<Output = T>,
{
    let fut = match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(fut) => fut,
        Err(payload) => return failure(Caught::new(payload)),
    };
    match AssertUnwindSafe(fut).catch_unwind().await {
        Ok(value) => success(value),
        Err(payload) => failure(Caught::new(payload)),
    }
}
