//! Folding collections of outcomes into a single outcome
//!
//! All operations here are fail-fast: the first `Failure` in sequence order
//! is returned and nothing after it is looked at.
//!
//! - [`Outcome::fold`]: `Vec<Outcome<T, E>>` → `Outcome<Vec<T>, E>`
//! - [`Outcome::and_then_all`]: fold, then hand the values to a function
//! - [`FoldAll`]: the same two operations for tuples of differently typed
//!   outcomes
//! - `FromIterator`: `collect()` into an `Outcome` of any collection
//!
//! # Examples
//!
//! ```
//! use outcome::{Outcome, traverse::FoldAll};
//!
//! let sum = Outcome::and_then_all(
//!     vec![Outcome::<_, &str>::success(1), Outcome::success(2), Outcome::success(3)],
//!     |values| Outcome::success(values.iter().sum::<i32>()),
//! );
//! assert_eq!(sum, Outcome::Success(6));
//!
//! let greeting = (
//!     Outcome::<_, String>::success("Ada"),
//!     Outcome::<_, String>::success(36),
//! )
//!     .and_then_all(|(name, age)| Outcome::success(format!("{} is {}", name, age)));
//! assert_eq!(greeting, Outcome::Success("Ada is 36".to_string()));
//! ```

use crate::Outcome;

impl<T, E> Outcome<T, E> {
    /// Collect a sequence of outcomes into one.
    ///
    /// Returns every value, in order, when all elements succeed. Otherwise
    /// returns the first failure; elements after it are not consumed.
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let empty: Vec<Outcome<i32, &str>> = vec![];
    /// assert_eq!(Outcome::fold(empty), Outcome::Success(vec![]));
    ///
    /// let mixed = vec![
    ///     Outcome::success(1),
    ///     Outcome::failure("x"),
    ///     Outcome::success(2),
    ///     Outcome::failure("y"),
    /// ];
    /// assert_eq!(Outcome::fold(mixed), Outcome::Failure("x"));
    /// ```
    pub fn fold<I>(outcomes: I) -> Outcome<Vec<T>, E>
    where
        I: IntoIterator<Item = Outcome<T, E>>,
    {
        outcomes.into_iter().collect()
    }

    /// Fold a sequence of outcomes, then chain `f` over the collected values.
    ///
    /// `f` is only called when every element succeeded.
    pub fn and_then_all<I, U, F>(outcomes: I, f: F) -> Outcome<U, E>
    where
        I: IntoIterator<Item = Outcome<T, E>>,
        F: FnOnce(Vec<T>) -> Outcome<U, E>,
    {
        Outcome::fold(outcomes).and_then(f)
    }
}

impl<T, E, C> FromIterator<Outcome<T, E>> for Outcome<C, E>
where
    C: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<T, E>>>(iter: I) -> Self {
        iter.into_iter()
            .map(Outcome::into_result)
            .collect::<Result<C, E>>()
            .into()
    }
}

/// Fold a tuple of outcomes with different value types.
///
/// Implemented for tuples of 1 to 8 outcomes sharing one error type. The
/// collected values come back as a tuple, so the function given to
/// [`and_then_all`](FoldAll::and_then_all) can destructure them
/// positionally.
///
/// ```
/// use outcome::{Outcome, traverse::FoldAll};
///
/// let result = (
///     Outcome::<_, &str>::success(1),
///     Outcome::<&str, _>::failure("second"),
///     Outcome::<bool, _>::failure("third"),
/// )
///     .fold_all();
/// assert_eq!(result, Outcome::<(i32, &str, bool), _>::Failure("second"));
/// ```
pub trait FoldAll<E> {
    /// The tuple of values produced when everything succeeds
    type Output;

    /// Collect the tuple into one outcome, stopping at the first failure.
    fn fold_all(self) -> Outcome<Self::Output, E>;

    /// Fold, then chain `f` over the value tuple.
    fn and_then_all<U, F>(self, f: F) -> Outcome<U, E>
    where
        Self: Sized,
        F: FnOnce(Self::Output) -> Outcome<U, E>,
    {
        self.fold_all().and_then(f)
    }
}

macro_rules! impl_fold_all {
    ($($T:ident),+) => {
        impl<E, $($T),+> FoldAll<E> for ($(Outcome<$T, E>,)+) {
            type Output = ($($T,)+);

            #[allow(non_snake_case)]
            fn fold_all(self) -> Outcome<Self::Output, E> {
                let ($($T,)+) = self;
                $(
                    let $T = match $T {
                        Outcome::Success(value) => value,
                        Outcome::Failure(error) => return Outcome::Failure(error),
                    };
                )+
                Outcome::Success(($($T,)+))
            }
        }
    };
}

impl_fold_all!(T1);
impl_fold_all!(T1, T2);
impl_fold_all!(T1, T2, T3);
impl_fold_all!(T1, T2, T3, T4);
impl_fold_all!(T1, T2, T3, T4, T5);
impl_fold_all!(T1, T2, T3, T4, T5, T6);
impl_fold_all!(T1, T2, T3, T4, T5, T6, T7);
impl_fold_all!(T1, T2, T3, T4, T5, T6, T7, T8);
