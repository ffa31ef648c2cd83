//! Bounded retry for outcome-producing functions.
//!
//! Retrying starts from a successful seed. The seed value is handed to the
//! function on the first attempt and on every retry; intermediate failures
//! never feed into the next call.
//!
//! ```text
//!   Failure(e) ──────────────────────────────► Failure(e)   (f never called)
//!   Success(v) ─► f(&v) ─► Success(u) ───────► Success(u)
//!                   │
//!                   └─► Failure(e) ─► budget left? ─ no ─► Failure(e)
//!                                         │ yes
//!                                  wait, then f(&v) again
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use outcome::Outcome;
//! use std::time::Duration;
//!
//! let mut calls = 0;
//! let result = Outcome::<_, String>::success("config.toml").retry_with_delay(
//!     |path| {
//!         calls += 1;
//!         if calls < 3 {
//!             Outcome::failure(format!("{} is locked", path))
//!         } else {
//!             Outcome::success(path.len())
//!         }
//!     },
//!     5,
//!     Duration::ZERO,
//! );
//!
//! assert_eq!(result, Outcome::Success(11));
//! assert_eq!(calls, 3);
//! ```
//!
//! # Scheduling
//!
//! The synchronous executors block the calling thread with
//! `std::thread::sleep` between attempts; a zero delay skips the sleep.
//! With the `async` feature, `Outcome::retry_async` waits with
//! `tokio::time::sleep` instead. Neither can be cancelled from the inside;
//! wrap the async form in `tokio::time::timeout` if you need a deadline.
//!
//! # Backoff
//!
//! [`RetryPolicy`] describes the wait between attempts: constant, linear,
//! exponential or Fibonacci, with an optional cap and optional jitter
//! (`jitter` feature).

mod policy;

pub use policy::{JitterStrategy, RetryEvent, RetryPolicy, RetryStrategy, DEFAULT_MAX_RETRIES};

use std::time::{Duration, Instant};

use crate::Outcome;

/// Wait between attempts when no delay is given.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(1000);

/// Bookkeeping shared by the blocking and async executors.
struct Attempts<'p> {
    policy: &'p RetryPolicy,
    retries: u32,
    prev_delay: Option<Duration>,
    start: Instant,
}

impl<'p> Attempts<'p> {
    fn new(policy: &'p RetryPolicy) -> Self {
        Self {
            policy,
            retries: 0,
            prev_delay: None,
            start: Instant::now(),
        }
    }

    /// Record a failed attempt. Returns how long to wait before the next one,
    /// or `None` when the budget is spent.
    fn after_failure<E, H>(&mut self, error: &E, on_retry: &mut H) -> Option<Duration>
    where
        H: FnMut(&RetryEvent<'_, E>),
    {
        let attempt = self.retries + 1;
        let Some(delay) = self.policy.delay_with_jitter(self.retries, self.prev_delay) else {
            #[cfg(feature = "tracing")]
            tracing::warn!(attempts = attempt, "retry budget exhausted");
            return None;
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            attempt,
            delay_ms = delay.as_millis() as u64,
            "attempt failed, retrying"
        );

        on_retry(&RetryEvent {
            attempt,
            error,
            next_delay: delay,
            elapsed: self.start.elapsed(),
        });

        self.prev_delay = Some(delay);
        self.retries += 1;
        Some(delay)
    }
}

#[cfg(feature = "async")]
fn no_hook<E>(_: &RetryEvent<'_, E>) {}

impl<T, E> Outcome<T, E> {
    /// Retry `f` up to `max_attempts` extra times, waiting
    /// [`DEFAULT_RETRY_DELAY`] between attempts.
    ///
    /// See [`retry_with_policy`](Outcome::retry_with_policy) for the exact
    /// state machine.
    pub fn retry<U, F>(self, f: F, max_attempts: u32) -> Outcome<U, E>
    where
        F: FnMut(&T) -> Outcome<U, E>,
    {
        self.retry_with_delay(f, max_attempts, DEFAULT_RETRY_DELAY)
    }

    /// Retry `f` up to `max_attempts` extra times with a constant `delay`.
    ///
    /// `f` is called at most `max_attempts + 1` times.
    ///
    /// ```rust
    /// use outcome::Outcome;
    /// use std::time::Duration;
    ///
    /// let mut calls = 0;
    /// let result: Outcome<(), &str> = Outcome::success("Ok").retry_with_delay(
    ///     |_| {
    ///         calls += 1;
    ///         Outcome::failure("Error")
    ///     },
    ///     3,
    ///     Duration::ZERO,
    /// );
    ///
    /// assert_eq!(result, Outcome::Failure("Error"));
    /// assert_eq!(calls, 4);
    /// ```
    pub fn retry_with_delay<U, F>(self, f: F, max_attempts: u32, delay: Duration) -> Outcome<U, E>
    where
        F: FnMut(&T) -> Outcome<U, E>,
    {
        let policy = RetryPolicy::constant(delay).with_max_retries(max_attempts);
        self.retry_with_policy(f, &policy)
    }

    /// Retry `f` according to `policy`.
    ///
    /// - A `Failure` is returned as is and `f` is never called.
    /// - A `Success(v)` calls `f(&v)`. While that yields a failure and the
    ///   policy allows another retry, the executor waits and calls `f(&v)`
    ///   again with the same seed.
    /// - The first success is returned; once the budget is spent, the last
    ///   failure is returned.
    pub fn retry_with_policy<U, F>(self, f: F, policy: &RetryPolicy) -> Outcome<U, E>
    where
        F: FnMut(&T) -> Outcome<U, E>,
    {
        self.retry_with_hooks(f, policy, |_| {})
    }

    /// Like [`retry_with_policy`](Outcome::retry_with_policy), calling
    /// `on_retry` before each wait.
    ///
    /// ```rust
    /// use outcome::{Outcome, RetryPolicy};
    /// use std::time::Duration;
    ///
    /// let policy = RetryPolicy::linear(Duration::ZERO).with_max_retries(2);
    /// let mut seen = Vec::new();
    ///
    /// let result: Outcome<i32, String> = Outcome::success(1).retry_with_hooks(
    ///     |_| Outcome::failure("down".to_string()),
    ///     &policy,
    ///     |event| seen.push((event.attempt, event.error.clone())),
    /// );
    ///
    /// assert!(result.is_failure());
    /// assert_eq!(seen, vec![(1, "down".to_string()), (2, "down".to_string())]);
    /// ```
    pub fn retry_with_hooks<U, F, H>(
        self,
        mut f: F,
        policy: &RetryPolicy,
        mut on_retry: H,
    ) -> Outcome<U, E>
    where
        F: FnMut(&T) -> Outcome<U, E>,
        H: FnMut(&RetryEvent<'_, E>),
    {
        let seed = match self {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => return Outcome::Failure(error),
        };

        let mut attempts = Attempts::new(policy);
        loop {
            let error = match f(&seed) {
                Outcome::Success(value) => return Outcome::Success(value),
                Outcome::Failure(error) => error,
            };

            match attempts.after_failure(&error, &mut on_retry) {
                Some(delay) => {
                    if !delay.is_zero() {
                        std::thread::sleep(delay);
                    }
                }
                None => return Outcome::Failure(error),
            }
        }
    }

    /// Async form of [`retry_with_policy`](Outcome::retry_with_policy).
    ///
    /// Waits with `tokio::time::sleep`, so the executing task yields between
    /// attempts instead of blocking its thread. The future returned by `f`
    /// cannot borrow the seed; clone what it needs.
    ///
    /// ```rust
    /// use outcome::{Outcome, RetryPolicy};
    /// use std::time::Duration;
    ///
    /// # tokio_test::block_on(async {
    /// let policy = RetryPolicy::constant(Duration::from_millis(1)).with_max_retries(2);
    ///
    /// let result = Outcome::<_, String>::success(21)
    ///     .retry_async(|n| {
    ///         let n = *n;
    ///         async move { Outcome::success(n * 2) }
    ///     }, &policy)
    ///     .await;
    ///
    /// assert_eq!(result, Outcome::Success(42));
    /// # });
    /// ```
    #[cfg(feature = "async")]
    pub async fn retry_async<U, F, Fut>(self, mut f: F, policy: &RetryPolicy) -> Outcome<U, E>
    where
        F: FnMut(&T) -> Fut,
        Fut: std::future::Future<Output = Outcome<U, E>>,
    {
        let seed = match self {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => return Outcome::Failure(error),
        };

        let mut attempts = Attempts::new(policy);
        loop {
            let error = match f(&seed).await {
                Outcome::Success(value) => return Outcome::Success(value),
                Outcome::Failure(error) => error,
            };

            match attempts.after_failure(&error, &mut no_hook::<E>) {
                Some(delay) => tokio::time::sleep(delay).await,
                None => return Outcome::Failure(error),
            }
        }
    }
}
