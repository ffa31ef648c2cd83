//! The `Outcome` type and its single-value combinators
//!
//! An `Outcome<T, E>` is either a `Success` holding a value or a `Failure`
//! holding an error payload. Every combinator consumes the outcome and returns
//! a new one, so pipelines read top to bottom without early returns.
//!
//! # Examples
//!
//! ```
//! use outcome::Outcome;
//!
//! fn parse(input: &str) -> Outcome<i32, String> {
//!     input
//!         .parse::<i32>()
//!         .map_err(|e| e.to_string())
//!         .into()
//! }
//!
//! let doubled = parse("21").map(|n| n * 2);
//! assert_eq!(doubled, Outcome::Success(42));
//!
//! let failed = parse("nope").map(|n| n * 2);
//! assert!(failed.is_failure());
//! assert_eq!(failed.with_default(0), 0);
//! ```

/// A value that either succeeded with `T` or failed with `E`.
///
/// There is no third state. Unlike `Result`, `Outcome` is meant to be carried
/// through pipelines by value and recovered with [`catch_error`] and
/// friends rather than with `?`.
///
/// [`catch_error`]: Outcome::catch_error
///
/// # Examples
///
/// ```
/// use outcome::Outcome;
///
/// let ok = Outcome::<_, &str>::success(1);
/// let err = Outcome::<i32, _>::failure("boom");
///
/// assert!(ok.is_success());
/// assert!(err.is_failure());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use = "this `Outcome` may be a `Failure`, which should be handled"]
pub enum Outcome<T, E> {
    /// The computation produced a value
    Success(T),
    /// The computation failed with an error payload
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Wrap a value in `Success`.
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let o = Outcome::<i32, String>::success(42);
    /// assert_eq!(o, Outcome::Success(42));
    /// ```
    #[inline]
    pub fn success(value: T) -> Self {
        Outcome::Success(value)
    }

    /// Wrap an error in `Failure`.
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::failure("bad input");
    /// assert_eq!(o, Outcome::Failure("bad input"));
    /// ```
    #[inline]
    pub fn failure(error: E) -> Self {
        Outcome::Failure(error)
    }

    /// Create an outcome from a `Result`.
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error),
        }
    }

    /// Convert this outcome into a `Result`.
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// assert_eq!(Outcome::<_, String>::success(1).into_result(), Ok(1));
    /// assert_eq!(Outcome::<i32, _>::failure("e").into_result(), Err("e"));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }

    /// Returns `true` if this is a `Success`.
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Returns `true` if this is a `Failure`.
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// Returns the success value, if any.
    #[inline]
    pub fn success_value(self) -> Option<T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    /// Returns the failure payload, if any.
    #[inline]
    pub fn failure_value(self) -> Option<E> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(error) => Some(error),
        }
    }

    /// Convert to `Outcome<&T, &E>`.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Return the success value, or `default` on failure.
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// assert_eq!(Outcome::<_, &str>::success(3).with_default(0), 3);
    /// assert_eq!(Outcome::<i32, _>::failure("e").with_default(0), 0);
    /// ```
    #[inline]
    pub fn with_default(self, default: T) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => default,
        }
    }

    /// Return the success value, or compute one from the error.
    #[inline]
    pub fn with_default_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => f(error),
        }
    }

    /// Transform the success value. `f` is not called on failure.
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let o = Outcome::<_, String>::success(5).map(|x| x * 2);
    /// assert_eq!(o, Outcome::Success(10));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Transform the failure payload. `f` is not called on success.
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let o = Outcome::<i32, _>::failure("timeout").map_err(str::len);
    /// assert_eq!(o, Outcome::Failure(7));
    /// ```
    #[inline]
    pub fn map_err<E2, F>(self, f: F) -> Outcome<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    /// Combine two outcomes with a binary function.
    ///
    /// If either side failed, the first failure wins: `self`'s failure takes
    /// precedence over `other`'s.
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let sum = Outcome::<_, &str>::success(1).map2(Outcome::success(2), |a, b| a + b);
    /// assert_eq!(sum, Outcome::Success(3));
    ///
    /// let first = Outcome::<i32, _>::failure("a").map2(Outcome::<i32, _>::failure("b"), |a, b| a + b);
    /// assert_eq!(first, Outcome::Failure("a"));
    /// ```
    pub fn map2<U, R, F>(self, other: Outcome<U, E>, f: F) -> Outcome<R, E>
    where
        F: FnOnce(T, U) -> R,
    {
        match (self, other) {
            (Outcome::Success(a), Outcome::Success(b)) => Outcome::Success(f(a, b)),
            (Outcome::Failure(error), _) | (_, Outcome::Failure(error)) => {
                Outcome::Failure(error)
            }
        }
    }

    /// Chain a computation that itself may fail.
    ///
    /// The outcome returned by `f` is passed through as is.
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// fn half(n: i32) -> Outcome<i32, String> {
    ///     if n % 2 == 0 {
    ///         Outcome::success(n / 2)
    ///     } else {
    ///         Outcome::failure(format!("{} is odd", n))
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::success(8).and_then(half).and_then(half), Outcome::Success(2));
    /// assert_eq!(
    ///     Outcome::success(6).and_then(half).and_then(half),
    ///     Outcome::Failure("3 is odd".to_string())
    /// );
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Outcome::Success(value) => f(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Observe the success value without changing the outcome.
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let mut seen = Vec::new();
    /// let o = Outcome::<_, &str>::success(7).perform(|v| seen.push(*v));
    /// assert_eq!(o, Outcome::Success(7));
    /// assert_eq!(seen, vec![7]);
    /// ```
    #[inline]
    pub fn perform<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Outcome::Success(value) = &self {
            f(value);
        }
        self
    }

    /// Observe the failure payload without changing the outcome.
    #[inline]
    pub fn perform_error<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Outcome::Failure(error) = &self {
            f(error);
        }
        self
    }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Flatten one level of nesting.
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let nested: Outcome<Outcome<i32, &str>, &str> = Outcome::success(Outcome::success(1));
    /// assert_eq!(nested.resolve(), Outcome::Success(1));
    ///
    /// let inner: Outcome<Outcome<i32, &str>, &str> = Outcome::success(Outcome::failure("e"));
    /// assert_eq!(inner.resolve(), Outcome::Failure("e"));
    /// ```
    #[inline]
    pub fn resolve(self) -> Outcome<T, E> {
        match self {
            Outcome::Success(inner) => inner,
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        Outcome::from_result(result)
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_constructors() {
        assert_eq!(Outcome::<_, ()>::success(1), Outcome::Success(1));
        assert_eq!(Outcome::<(), _>::failure("e"), Outcome::Failure("e"));
    }

    #[test]
    fn test_predicates() {
        let ok = Outcome::<i32, &str>::success(1);
        let err = Outcome::<i32, &str>::failure("e");

        assert!(ok.is_success());
        assert!(!ok.is_failure());
        assert!(err.is_failure());
        assert!(!err.is_success());
    }

    #[test]
    fn test_result_conversion() {
        let o: Outcome<i32, &str> = Ok::<_, &str>(1).into();
        assert_eq!(o, Outcome::Success(1));

        let o: Outcome<i32, &str> = Err::<i32, _>("e").into();
        assert_eq!(o, Outcome::Failure("e"));

        let r: Result<i32, &str> = Outcome::success(2).into();
        assert_eq!(r, Ok(2));
    }

    #[test]
    fn test_extractors() {
        assert_eq!(Outcome::<_, &str>::success(1).success_value(), Some(1));
        assert_eq!(Outcome::<i32, _>::failure("e").success_value(), None);
        assert_eq!(Outcome::<i32, _>::failure("e").failure_value(), Some("e"));
        assert_eq!(Outcome::<_, &str>::success(1).failure_value(), None);
    }

    #[test]
    fn test_map_skips_failure() {
        let called = Cell::new(false);
        let o = Outcome::<i32, _>::failure("e").map(|x| {
            called.set(true);
            x + 1
        });
        assert_eq!(o, Outcome::Failure("e"));
        assert!(!called.get());
    }

    #[test]
    fn test_map_err() {
        let o = Outcome::<i32, _>::failure(2).map_err(|e| e * 10);
        assert_eq!(o, Outcome::Failure(20));

        let o = Outcome::<_, i32>::success(2).map_err(|e| e * 10);
        assert_eq!(o, Outcome::Success(2));
    }

    #[test]
    fn test_map2_precedence() {
        let both = Outcome::<i32, &str>::failure("first")
            .map2(Outcome::<i32, &str>::failure("second"), |a, b| a + b);
        assert_eq!(both, Outcome::Failure("first"));

        let right = Outcome::<i32, &str>::success(1)
            .map2(Outcome::<i32, &str>::failure("second"), |a, b| a + b);
        assert_eq!(right, Outcome::Failure("second"));

        let ok = Outcome::<i32, &str>::success(1).map2(Outcome::success("x"), |a, b| {
            format!("{}{}", a, b)
        });
        assert_eq!(ok, Outcome::Success("1x".to_string()));
    }

    #[test]
    fn test_and_then_left_identity() {
        let f = |x: i32| Outcome::<_, &str>::success(x * 3);
        assert_eq!(Outcome::success(4).and_then(f), f(4));
    }

    #[test]
    fn test_and_then_does_not_double_wrap() {
        let o: Outcome<i32, &str> = Outcome::success(1).and_then(|_| Outcome::failure("inner"));
        assert_eq!(o, Outcome::Failure("inner"));
    }

    #[test]
    fn test_and_then_short_circuits() {
        let called = Cell::new(false);
        let o = Outcome::<i32, _>::failure("e").and_then(|x| {
            called.set(true);
            Outcome::success(x)
        });
        assert_eq!(o, Outcome::Failure("e"));
        assert!(!called.get());
    }

    #[test]
    fn test_perform_returns_original() {
        let hits = Cell::new(0);
        let o = Outcome::<_, &str>::success(5).perform(|_| hits.set(hits.get() + 1));
        assert_eq!(o, Outcome::Success(5));
        assert_eq!(hits.get(), 1);

        let o = Outcome::<i32, _>::failure("e").perform(|_| hits.set(hits.get() + 1));
        assert_eq!(o, Outcome::Failure("e"));
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_perform_error() {
        let seen = Cell::new("");
        let o = Outcome::<i32, _>::failure("bad").perform_error(|e| seen.set(*e));
        assert_eq!(o, Outcome::Failure("bad"));
        assert_eq!(seen.get(), "bad");
    }

    #[test]
    fn test_with_default() {
        assert_eq!(Outcome::<_, &str>::success(1).with_default(9), 1);
        assert_eq!(Outcome::<i32, _>::failure("e").with_default(9), 9);
        assert_eq!(
            Outcome::<usize, _>::failure("four").with_default_else(str::len),
            4
        );
    }

    #[test]
    fn test_resolve() {
        let o: Outcome<Outcome<i32, &str>, &str> = Outcome::success(Outcome::success(1));
        assert_eq!(o.resolve(), Outcome::Success(1));

        let o: Outcome<Outcome<i32, &str>, &str> = Outcome::success(Outcome::failure("e"));
        assert_eq!(o.resolve(), Outcome::Failure("e"));

        let o: Outcome<Outcome<i32, &str>, &str> = Outcome::failure("e");
        assert_eq!(o.resolve(), Outcome::Failure("e"));
    }

    #[test]
    fn test_resolve_single_level() {
        let o: Outcome<Outcome<Outcome<i32, &str>, &str>, &str> =
            Outcome::success(Outcome::success(Outcome::success(1)));
        assert_eq!(o.resolve(), Outcome::Success(Outcome::Success(1)));
    }

    #[test]
    fn test_functor_composition() {
        let f = |v: i32| v + 1;
        let g = |v: i32| v * 2;

        let o = Outcome::<i32, ()>::success(10);
        assert_eq!(o.map(f).map(g), o.map(|v| g(f(v))));
    }
}
