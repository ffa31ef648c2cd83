//! Associative combination of values
//!
//! The aggregation layer in [`calc`](crate::calc) accumulates success values
//! and error payloads into lists. It does that through `Semigroup::combine`,
//! so the same folding code works for any payload that knows how to merge
//! with another of its kind.
//!
//! For a type to be a valid Semigroup, `combine` must be associative:
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use outcome::{Outcome, Semigroup};
//!
//! assert_eq!(vec![1, 2].combine(vec![3]), vec![1, 2, 3]);
//!
//! // Outcomes combine like a logical AND that keeps what it can
//! let both = Outcome::<Vec<i32>, Vec<&str>>::success(vec![1])
//!     .combine(Outcome::success(vec![2]));
//! assert_eq!(both, Outcome::Success(vec![1, 2]));
//!
//! let errors = Outcome::<Vec<i32>, Vec<&str>>::failure(vec!["a"])
//!     .combine(Outcome::failure(vec!["b"]));
//! assert_eq!(errors, Outcome::Failure(vec!["a", "b"]));
//! ```

use crate::Outcome;

/// A type with an associative binary operation.
///
/// `combine` takes both operands by value; clone first if you need to keep
/// them.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl Semigroup for String {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

/// Conjunctive combination.
///
/// Two successes merge their values and two failures merge their errors. A
/// success meeting a failure yields that failure alone; the success value is
/// dropped.
impl<T: Semigroup, E: Semigroup> Semigroup for Outcome<T, E> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Outcome::Success(a), Outcome::Success(b)) => Outcome::Success(a.combine(b)),
            (Outcome::Failure(a), Outcome::Failure(b)) => Outcome::Failure(a.combine(b)),
            (Outcome::Failure(e), Outcome::Success(_))
            | (Outcome::Success(_), Outcome::Failure(e)) => Outcome::Failure(e),
        }
    }
}
