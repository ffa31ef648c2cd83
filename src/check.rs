//! Shape checking for values that are supposed to be outcomes
//!
//! Inside the crate an `Outcome` can never be malformed. The check matters at
//! the edges, where a caller-supplied handler hands back something that only
//! claims to be an outcome: a value/error pair, an optional outcome, a
//! `Result`. [`check`] accepts anything implementing [`IntoOutcome`] and
//! either produces a proper `Outcome` or a [`TypeError`] carrying the
//! offending value.
//!
//! [`Outcome::catch_error`] and [`Outcome::catch_all_errors`] run their
//! handler's return value through [`check`].
//!
//! # Examples
//!
//! ```
//! use outcome::{check, Outcome};
//!
//! assert_eq!(check(Outcome::<_, &str>::success(1)), Ok(Outcome::Success(1)));
//!
//! // A pair with both sides populated is not an outcome
//! let err = check::<i32, &str, _>((Some(1), Some("e"))).unwrap_err();
//! assert_eq!(err.into_value(), (Some(1), Some("e")));
//! ```

use std::error::Error as StdError;
use std::fmt;

use crate::Outcome;

/// Conversion into an [`Outcome`] that can fail on malformed input.
///
/// On failure the original value is handed back unchanged so it can be
/// reported.
pub trait IntoOutcome<T, E>: Sized {
    /// Convert into an outcome, or return `self` if it has no valid shape.
    fn into_outcome(self) -> Result<Outcome<T, E>, Self>;
}

impl<T, E> IntoOutcome<T, E> for Outcome<T, E> {
    #[inline]
    fn into_outcome(self) -> Result<Outcome<T, E>, Self> {
        Ok(self)
    }
}

impl<T, E> IntoOutcome<T, E> for Result<T, E> {
    #[inline]
    fn into_outcome(self) -> Result<Outcome<T, E>, Self> {
        Ok(Outcome::from_result(self))
    }
}

/// `None` carries no variant at all.
impl<T, E> IntoOutcome<T, E> for Option<Outcome<T, E>> {
    fn into_outcome(self) -> Result<Outcome<T, E>, Self> {
        match self {
            Some(outcome) => Ok(outcome),
            None => Err(None),
        }
    }
}

/// A value/error pair is well-formed only when exactly one side is present.
impl<T, E> IntoOutcome<T, E> for (Option<T>, Option<E>) {
    fn into_outcome(self) -> Result<Outcome<T, E>, Self> {
        match self {
            (Some(value), None) => Ok(Outcome::Success(value)),
            (None, Some(error)) => Ok(Outcome::Failure(error)),
            malformed => Err(malformed),
        }
    }
}

/// Error returned when a value is not a well-formed outcome.
///
/// This signals a programming error (a handler returned the wrong shape),
/// not a domain failure, so it travels on the `Err` side of a `Result`
/// instead of inside an `Outcome`.
///
/// # Examples
///
/// ```
/// use outcome::{check, TypeError};
///
/// let err: TypeError<Option<outcome::Outcome<i32, String>>> =
///     check(None::<outcome::Outcome<i32, String>>).unwrap_err();
/// assert!(err.to_string().contains("not a well-formed outcome"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct TypeError<V> {
    value: V,
}

impl<V> TypeError<V> {
    /// Create a new TypeError for the offending value.
    pub fn new(value: V) -> Self {
        Self { value }
    }

    /// Get a reference to the offending value.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Extract the offending value.
    pub fn into_value(self) -> V {
        self.value
    }
}

impl<V: fmt::Debug> fmt::Display for TypeError<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not a well-formed outcome: {:?}", self.value)
    }
}

impl<V: fmt::Debug> StdError for TypeError<V> {}

/// Check that `value` is a well-formed outcome.
///
/// Returns the outcome on success, or a [`TypeError`] holding `value`.
///
/// ```
/// use outcome::{check, Outcome};
///
/// assert_eq!(check(Ok::<_, String>(5)), Ok(Outcome::Success(5)));
/// assert_eq!(check((None::<i32>, Some("e"))), Ok(Outcome::Failure("e")));
/// assert!(check::<i32, &str, _>((None, None)).is_err());
/// ```
pub fn check<T, E, V>(value: V) -> Result<Outcome<T, E>, TypeError<V>>
where
    V: IntoOutcome<T, E>,
{
    value.into_outcome().map_err(TypeError::new)
}

impl<T, E> Outcome<T, E> {
    /// Recover from one specific failure.
    ///
    /// When this is a `Failure` equal to `expected`, `f` receives the error and
    /// its return value becomes the new outcome after passing through
    /// [`check`]. Any other failure, and every success, is returned unchanged
    /// without calling `f`.
    ///
    /// # Errors
    ///
    /// Returns [`TypeError`] when `f` hands back something that is not a
    /// well-formed outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// #[derive(Debug, PartialEq)]
    /// enum Fetch { NotFound, Timeout }
    ///
    /// let recovered = Outcome::<&str, _>::failure(Fetch::NotFound)
    ///     .catch_error(&Fetch::NotFound, |_| Outcome::<_, Fetch>::success("fallback"));
    /// assert_eq!(recovered, Ok(Outcome::Success("fallback")));
    ///
    /// let untouched = Outcome::<&str, _>::failure(Fetch::Timeout)
    ///     .catch_error(&Fetch::NotFound, |_| Outcome::<_, Fetch>::success("fallback"));
    /// assert_eq!(untouched, Ok(Outcome::Failure(Fetch::Timeout)));
    /// ```
    pub fn catch_error<H, F>(self, expected: &E, f: F) -> Result<Outcome<T, E>, TypeError<H>>
    where
        E: PartialEq,
        F: FnOnce(E) -> H,
        H: IntoOutcome<T, E>,
    {
        match self {
            Outcome::Failure(error) if error == *expected => check(f(error)),
            other => Ok(other),
        }
    }

    /// Recover from any failure.
    ///
    /// Like [`catch_error`](Outcome::catch_error) but matches every failure.
    ///
    /// # Errors
    ///
    /// Returns [`TypeError`] when `f` hands back something that is not a
    /// well-formed outcome.
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let o = Outcome::<usize, &str>::failure("oops")
    ///     .catch_all_errors(|e| Ok::<_, &str>(e.len()));
    /// assert_eq!(o, Ok(Outcome::Success(4)));
    /// ```
    pub fn catch_all_errors<H, F>(self, f: F) -> Result<Outcome<T, E>, TypeError<H>>
    where
        F: FnOnce(E) -> H,
        H: IntoOutcome<T, E>,
    {
        match self {
            Outcome::Failure(error) => check(f(error)),
            success => Ok(success),
        }
    }
}
