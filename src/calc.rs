//! Aggregating outcomes into lists
//!
//! Unlike [`Outcome::fold`], which stops at the first failure, these
//! operations look at every input and collect payloads into `Vec`s:
//!
//! | operation    | shape                 | succeeds when        |
//! |--------------|-----------------------|----------------------|
//! | [`and`]      | two outcomes          | both succeed         |
//! | [`or`]       | two outcomes          | at least one does    |
//! | [`product`]  | sequence, seed `S([])`| all succeed          |
//! | [`sum`]      | sequence, seed `F([])`| at least one does    |
//!
//! Every input is first lifted into a singleton list (`Success(v)` becomes
//! `Success(vec![v])`, `Failure(e)` becomes `Failure(vec![e])`) and the
//! lifted outcomes are folded left to right.
//!
//! `and` and `product` use the conjunctive [`Semigroup`] on `Outcome`: once
//! the accumulator has failed, later successes are dropped and later
//! failures are appended. `or` and `sum` are the mirror image: once the
//! accumulator has succeeded, later failures are dropped and later
//! successes are appended.
//!
//! # Examples
//!
//! ```
//! use outcome::{calc, Outcome};
//!
//! let checks = vec![
//!     Outcome::failure("no digit"),
//!     Outcome::success(8),
//!     Outcome::failure("no symbol"),
//! ];
//!
//! assert_eq!(
//!     calc::product(checks.clone()),
//!     Outcome::Failure(vec!["no digit", "no symbol"])
//! );
//! assert_eq!(calc::sum(checks), Outcome::Success(vec![8]));
//! ```

use crate::{Outcome, Semigroup};

/// Outcome whose payloads are lists on both sides.
pub type Collected<T, E> = Outcome<Vec<T>, Vec<E>>;

#[inline]
fn lift<T, E>(outcome: Outcome<T, E>) -> Collected<T, E> {
    match outcome {
        Outcome::Success(value) => Outcome::Success(vec![value]),
        Outcome::Failure(error) => Outcome::Failure(vec![error]),
    }
}

/// Disjunctive counterpart of `Outcome::combine`.
fn combine_any<T: Semigroup, E: Semigroup>(acc: Outcome<T, E>, next: Outcome<T, E>) -> Outcome<T, E> {
    match (acc, next) {
        (Outcome::Success(a), Outcome::Success(b)) => Outcome::Success(a.combine(b)),
        (Outcome::Failure(a), Outcome::Failure(b)) => Outcome::Failure(a.combine(b)),
        (Outcome::Success(value), Outcome::Failure(_))
        | (Outcome::Failure(_), Outcome::Success(value)) => Outcome::Success(value),
    }
}

/// Both outcomes must succeed.
///
/// ```
/// use outcome::{calc, Outcome};
///
/// assert_eq!(
///     calc::and(Outcome::<_, i32>::success(1), Outcome::success(2)),
///     Outcome::Success(vec![1, 2])
/// );
/// assert_eq!(
///     calc::and(Outcome::success(1), Outcome::failure(2)),
///     Outcome::Failure(vec![2])
/// );
/// assert_eq!(
///     calc::and(Outcome::<i32, _>::failure(1), Outcome::failure(2)),
///     Outcome::Failure(vec![1, 2])
/// );
/// ```
pub fn and<T, E>(first: Outcome<T, E>, second: Outcome<T, E>) -> Collected<T, E> {
    lift(first).combine(lift(second))
}

/// At least one outcome must succeed.
///
/// ```
/// use outcome::{calc, Outcome};
///
/// assert_eq!(
///     calc::or(Outcome::failure(1), Outcome::success(2)),
///     Outcome::Success(vec![2])
/// );
/// assert_eq!(
///     calc::or(Outcome::<i32, _>::failure(1), Outcome::failure(2)),
///     Outcome::Failure(vec![1, 2])
/// );
/// ```
pub fn or<T, E>(first: Outcome<T, E>, second: Outcome<T, E>) -> Collected<T, E> {
    combine_any(lift(first), lift(second))
}

/// Conjunction over a sequence. An empty sequence is `Success(vec![])`.
pub fn product<T, E, I>(outcomes: I) -> Collected<T, E>
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    outcomes
        .into_iter()
        .map(lift)
        .fold(Outcome::Success(Vec::new()), Semigroup::combine)
}

/// Disjunction over a sequence. An empty sequence is `Failure(vec![])`.
pub fn sum<T, E, I>(outcomes: I) -> Collected<T, E>
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    outcomes
        .into_iter()
        .map(lift)
        .fold(Outcome::Failure(Vec::new()), combine_any)
}
