//! Testing utilities for code that returns outcomes
//!
//! Assertion macros that print the unexpected payload on panic, and, with
//! the `proptest` feature, an `Arbitrary` implementation for [`Outcome`].
//!
//! # Examples
//!
//! ```rust
//! use outcome::{Outcome, assert_success, assert_failure, assert_failure_eq};
//!
//! let port = assert_success!(Outcome::<u16, String>::success(8080));
//! assert_eq!(port, 8080);
//!
//! let error = assert_failure!(Outcome::<u16, _>::failure("port in use"));
//! assert_eq!(error, "port in use");
//!
//! assert_failure_eq!(Outcome::<u16, _>::failure("port in use"), "port in use");
//! ```
//!
//! [`Outcome`]: crate::Outcome

/// Assert that an outcome is a `Success` and return its value.
///
/// Panics with the failure payload otherwise.
///
/// # Example
///
/// ```rust
/// use outcome::{Outcome, assert_success};
///
/// let value = assert_success!(Outcome::<_, Vec<String>>::success(42));
/// assert_eq!(value, 42);
/// ```
#[macro_export]
macro_rules! assert_success {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Success(value) => value,
            $crate::Outcome::Failure(e) => {
                panic!("Expected Success, got Failure: {:?}", e);
            }
        }
    };
}

/// Assert that an outcome is a `Failure` and return its payload.
///
/// Panics with the success value otherwise.
///
/// # Example
///
/// ```rust
/// use outcome::{Outcome, assert_failure};
///
/// let error = assert_failure!(Outcome::<i32, _>::failure("timeout"));
/// assert_eq!(error, "timeout");
/// ```
#[macro_export]
macro_rules! assert_failure {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Failure(error) => error,
            $crate::Outcome::Success(v) => {
                panic!("Expected Failure, got Success: {:?}", v);
            }
        }
    };
}

/// Assert that an outcome is a `Failure` carrying the expected payload.
///
/// # Example
///
/// ```rust
/// use outcome::{Outcome, assert_failure_eq};
///
/// let val = Outcome::<i32, _>::failure(vec!["error1", "error2"]);
/// assert_failure_eq!(val, vec!["error1", "error2"]);
/// ```
#[macro_export]
macro_rules! assert_failure_eq {
    ($outcome:expr, $expected:expr) => {
        match $outcome {
            $crate::Outcome::Failure(error) => {
                assert_eq!(error, $expected);
            }
            $crate::Outcome::Success(v) => {
                panic!(
                    "Expected Failure with {:?}, got Success: {:?}",
                    $expected, v
                );
            }
        }
    };
}

#[cfg(feature = "proptest")]
use crate::Outcome;
#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl<T, E> Arbitrary for Outcome<T, E>
where
    T: Arbitrary + 'static,
    E: Arbitrary + 'static,
{
    type Parameters = (T::Parameters, E::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (t_params, e_params) = args;
        prop_oneof![
            any_with::<T>(t_params).prop_map(Outcome::success),
            any_with::<E>(e_params).prop_map(Outcome::failure),
        ]
        .boxed()
    }
}
