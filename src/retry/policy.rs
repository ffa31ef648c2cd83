//! Retry policy types and configuration.

use std::time::Duration;

use super::DEFAULT_RETRY_DELAY;

/// Number of retries a policy allows when none is configured.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// How long to wait between attempts and how many retries to allow.
///
/// Policies are plain data. The retry budget is always finite: every policy
/// starts with [`DEFAULT_MAX_RETRIES`] and [`with_max_retries`] replaces it.
///
/// [`with_max_retries`]: RetryPolicy::with_max_retries
///
/// # Examples
///
/// ```rust
/// use outcome::RetryPolicy;
/// use std::time::Duration;
///
/// let policy = RetryPolicy::exponential(Duration::from_millis(100))
///     .with_max_retries(5)
///     .with_max_delay(Duration::from_secs(1));
///
/// assert_eq!(policy.max_retries(), 5);
/// assert_eq!(policy.delay_for_attempt(4), Some(Duration::from_secs(1)));
/// assert_eq!(policy.delay_for_attempt(5), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    strategy: RetryStrategy,
    max_retries: u32,
    max_delay: Option<Duration>,
    jitter: JitterStrategy,
}

/// The backoff strategy for retry delays.
#[derive(Debug, Clone, PartialEq)]
pub enum RetryStrategy {
    /// Fixed delay between attempts.
    Constant(Duration),
    /// Delay increases linearly: base * (attempt + 1).
    Linear {
        /// Base delay duration.
        base: Duration,
    },
    /// Delay doubles: base * 2^attempt.
    Exponential {
        /// Base delay duration.
        base: Duration,
    },
    /// Delay follows the Fibonacci sequence: base * fib(attempt + 1).
    Fibonacci {
        /// Base delay duration.
        base: Duration,
    },
}

/// Randomness applied on top of the computed delay.
///
/// Without the `jitter` feature every strategy returns the delay unchanged.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum JitterStrategy {
    /// No jitter applied.
    #[default]
    None,
    /// Add ±percentage randomness to delay.
    Proportional(f64),
    /// Random delay between 0 and calculated delay.
    Full,
    /// Random delay between the base and 3x the previous delay.
    Decorrelated,
}

/// Information about a failed attempt that is about to be retried.
#[derive(Debug, Clone)]
pub struct RetryEvent<'a, E> {
    /// Which attempt just failed (1-indexed; 1 is the initial call).
    pub attempt: u32,
    /// The error from the failed attempt.
    pub error: &'a E,
    /// How long the executor will wait before the next attempt.
    pub next_delay: Duration,
    /// Time since the first attempt started.
    pub elapsed: Duration,
}

impl RetryPolicy {
    fn with_strategy(strategy: RetryStrategy) -> Self {
        Self {
            strategy,
            max_retries: DEFAULT_MAX_RETRIES,
            max_delay: None,
            jitter: JitterStrategy::None,
        }
    }

    /// Wait the same `delay` before every retry.
    ///
    /// ```rust
    /// use outcome::RetryPolicy;
    /// use std::time::Duration;
    ///
    /// let policy = RetryPolicy::constant(Duration::from_millis(500)).with_max_retries(2);
    ///
    /// assert_eq!(policy.delay_for_attempt(0), Some(Duration::from_millis(500)));
    /// assert_eq!(policy.delay_for_attempt(1), Some(Duration::from_millis(500)));
    /// assert_eq!(policy.delay_for_attempt(2), None);
    /// ```
    pub fn constant(delay: Duration) -> Self {
        Self::with_strategy(RetryStrategy::Constant(delay))
    }

    /// Delay grows by `base` each retry: base, 2*base, 3*base, ...
    pub fn linear(base: Duration) -> Self {
        Self::with_strategy(RetryStrategy::Linear { base })
    }

    /// Delay doubles each retry: base, 2*base, 4*base, ...
    ///
    /// ```rust
    /// use outcome::RetryPolicy;
    /// use std::time::Duration;
    ///
    /// let policy = RetryPolicy::exponential(Duration::from_millis(100));
    ///
    /// assert_eq!(policy.delay_for_attempt(0), Some(Duration::from_millis(100)));
    /// assert_eq!(policy.delay_for_attempt(1), Some(Duration::from_millis(200)));
    /// assert_eq!(policy.delay_for_attempt(2), Some(Duration::from_millis(400)));
    /// ```
    pub fn exponential(base: Duration) -> Self {
        Self::with_strategy(RetryStrategy::Exponential { base })
    }

    /// Delay follows Fibonacci multiples of `base`: 1, 1, 2, 3, 5, ...
    pub fn fibonacci(base: Duration) -> Self {
        Self::with_strategy(RetryStrategy::Fibonacci { base })
    }

    /// Set how many retries follow the initial attempt.
    ///
    /// `with_max_retries(3)` allows up to 4 calls in total.
    pub fn with_max_retries(mut self, n: u32) -> Self {
        self.max_retries = n;
        self
    }

    /// Cap every delay at `d`, jitter included.
    pub fn with_max_delay(mut self, d: Duration) -> Self {
        self.max_delay = Some(d);
        self
    }

    /// Add ±`factor` proportional jitter (clamped to `0.0..=1.0`, NaN is `0.0`).
    ///
    /// Has no effect without the `jitter` feature.
    pub fn with_jitter(mut self, factor: f64) -> Self {
        let factor = if factor.is_nan() { 0.0 } else { factor.clamp(0.0, 1.0) };
        self.jitter = JitterStrategy::Proportional(factor);
        self
    }

    /// Pick each delay uniformly between zero and the computed delay.
    ///
    /// Has no effect without the `jitter` feature.
    pub fn with_full_jitter(mut self) -> Self {
        self.jitter = JitterStrategy::Full;
        self
    }

    /// Pick each delay between the computed delay and 3x the previous one.
    ///
    /// Has no effect without the `jitter` feature.
    pub fn with_decorrelated_jitter(mut self) -> Self {
        self.jitter = JitterStrategy::Decorrelated;
        self
    }

    /// Get the retry budget.
    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Get the delay cap.
    pub fn max_delay(&self) -> Option<Duration> {
        self.max_delay
    }

    /// Get the jitter strategy.
    pub fn jitter(&self) -> &JitterStrategy {
        &self.jitter
    }

    /// Get the backoff strategy.
    pub fn strategy(&self) -> &RetryStrategy {
        &self.strategy
    }

    /// The delay before retry number `attempt` (0-indexed), without jitter.
    ///
    /// Returns `None` once the retry budget is spent.
    pub fn delay_for_attempt(&self, attempt: u32) -> Option<Duration> {
        if attempt >= self.max_retries {
            return None;
        }

        let base_delay = match &self.strategy {
            RetryStrategy::Constant(d) => *d,
            RetryStrategy::Linear { base } => base.saturating_mul(attempt.saturating_add(1)),
            RetryStrategy::Exponential { base } => {
                base.saturating_mul(2u32.saturating_pow(attempt))
            }
            RetryStrategy::Fibonacci { base } => {
                base.saturating_mul(fibonacci(attempt.saturating_add(1)))
            }
        };

        Some(cap(base_delay, self.max_delay))
    }

    /// The delay before retry number `attempt` with jitter applied.
    pub(crate) fn delay_with_jitter(
        &self,
        attempt: u32,
        prev_delay: Option<Duration>,
    ) -> Option<Duration> {
        let base_delay = self.delay_for_attempt(attempt)?;
        Some(cap(
            self.jitter.apply(base_delay, prev_delay),
            self.max_delay,
        ))
    }
}

impl Default for RetryPolicy {
    /// Constant [`DEFAULT_RETRY_DELAY`] with [`DEFAULT_MAX_RETRIES`] retries.
    fn default() -> Self {
        Self::constant(DEFAULT_RETRY_DELAY)
    }
}

impl JitterStrategy {
    /// Apply jitter to a computed delay.
    ///
    /// `prev_delay` is only consulted by [`JitterStrategy::Decorrelated`].
    pub fn apply(
        &self,
        base_delay: Duration,
        #[cfg_attr(not(feature = "jitter"), allow(unused_variables))] prev_delay: Option<Duration>,
    ) -> Duration {
        match self {
            JitterStrategy::None => base_delay,
            #[cfg(feature = "jitter")]
            JitterStrategy::Proportional(factor) => {
                use rand::Rng;
                let base_millis = base_delay.as_millis() as f64;
                let spread = base_millis * factor;
                let low = (base_millis - spread).max(0.0);
                let high = base_millis + spread;
                if !(low.is_finite() && high.is_finite()) || high < low {
                    return base_delay;
                }
                Duration::from_millis(rand::rng().random_range(low..=high) as u64)
            }
            #[cfg(feature = "jitter")]
            JitterStrategy::Full => {
                use rand::Rng;
                let max_millis = base_delay.as_millis() as u64;
                Duration::from_millis(rand::rng().random_range(0..=max_millis))
            }
            #[cfg(feature = "jitter")]
            JitterStrategy::Decorrelated => {
                use rand::Rng;
                let prev = prev_delay.unwrap_or(base_delay);
                let low = base_delay.as_millis() as u64;
                let high = prev.as_millis().saturating_mul(3) as u64;
                if high <= low {
                    base_delay
                } else {
                    Duration::from_millis(rand::rng().random_range(low..=high))
                }
            }
            #[cfg(not(feature = "jitter"))]
            _ => base_delay,
        }
    }
}

fn cap(delay: Duration, max_delay: Option<Duration>) -> Duration {
    match max_delay {
        Some(max) => delay.min(max),
        None => delay,
    }
}

/// Calculate the nth Fibonacci number.
fn fibonacci(n: u32) -> u32 {
    if n == 0 {
        return 0;
    }
    let (mut a, mut b) = (0u32, 1u32);
    for _ in 1..n {
        let next = a.saturating_add(b);
        a = b;
        b = next;
    }
    b
}

#[cfg(test)]
mod policy_tests {
    use super::*;

    fn ms(n: u64) -> Option<Duration> {
        Some(Duration::from_millis(n))
    }

    #[test]
    fn test_constant_delay() {
        let policy = RetryPolicy::constant(Duration::from_millis(100)).with_max_retries(3);

        assert_eq!(policy.delay_for_attempt(0), ms(100));
        assert_eq!(policy.delay_for_attempt(2), ms(100));
        assert_eq!(policy.delay_for_attempt(3), None);
    }

    #[test]
    fn test_linear_delay() {
        let policy = RetryPolicy::linear(Duration::from_millis(100)).with_max_retries(5);

        assert_eq!(policy.delay_for_attempt(0), ms(100));
        assert_eq!(policy.delay_for_attempt(1), ms(200));
        assert_eq!(policy.delay_for_attempt(3), ms(400));
    }

    #[test]
    fn test_exponential_delay() {
        let policy = RetryPolicy::exponential(Duration::from_millis(100)).with_max_retries(5);

        assert_eq!(policy.delay_for_attempt(0), ms(100));
        assert_eq!(policy.delay_for_attempt(1), ms(200));
        assert_eq!(policy.delay_for_attempt(3), ms(800));
    }

    #[test]
    fn test_fibonacci_delay() {
        let policy = RetryPolicy::fibonacci(Duration::from_millis(100)).with_max_retries(6);

        let delays: Vec<_> = (0..6).map(|n| policy.delay_for_attempt(n)).collect();
        assert_eq!(
            delays,
            vec![ms(100), ms(100), ms(200), ms(300), ms(500), ms(800)]
        );
    }

    #[test]
    fn test_max_delay_cap() {
        let policy = RetryPolicy::exponential(Duration::from_millis(100))
            .with_max_retries(10)
            .with_max_delay(Duration::from_millis(500));

        assert_eq!(policy.delay_for_attempt(2), ms(400));
        assert_eq!(policy.delay_for_attempt(3), ms(500));
        assert_eq!(policy.delay_for_attempt(9), ms(500));
    }

    #[test]
    fn test_default_budget() {
        let policy = RetryPolicy::default();

        assert_eq!(policy.max_retries(), DEFAULT_MAX_RETRIES);
        assert_eq!(policy.delay_for_attempt(0), Some(DEFAULT_RETRY_DELAY));
        assert_eq!(policy.delay_for_attempt(DEFAULT_MAX_RETRIES), None);
    }

    #[test]
    fn test_zero_retries() {
        let policy = RetryPolicy::constant(Duration::ZERO).with_max_retries(0);
        assert_eq!(policy.delay_for_attempt(0), None);
    }

    #[test]
    fn test_exponential_saturates() {
        let policy = RetryPolicy::exponential(Duration::from_secs(1)).with_max_retries(u32::MAX);
        assert!(policy.delay_for_attempt(200).is_some());
    }

    #[test]
    fn test_jitter_none_returns_base_delay() {
        let base = Duration::from_millis(100);
        assert_eq!(JitterStrategy::None.apply(base, None), base);
    }

    #[test]
    fn test_jitter_factor_is_clamped() {
        let policy = RetryPolicy::constant(Duration::from_millis(10)).with_jitter(4.0);
        assert_eq!(policy.jitter(), &JitterStrategy::Proportional(1.0));
    }

    #[cfg(feature = "jitter")]
    #[test]
    fn test_full_jitter_stays_within_bounds() {
        let policy = RetryPolicy::constant(Duration::from_millis(50))
            .with_max_retries(1)
            .with_full_jitter();

        for _ in 0..100 {
            let delay = policy.delay_with_jitter(0, None).unwrap();
            assert!(delay <= Duration::from_millis(50));
        }
    }

    #[cfg(feature = "jitter")]
    #[test]
    fn test_jitter_respects_max_delay() {
        let policy = RetryPolicy::constant(Duration::from_millis(100))
            .with_max_retries(1)
            .with_max_delay(Duration::from_millis(100))
            .with_jitter(0.5);

        for _ in 0..100 {
            let delay = policy.delay_with_jitter(0, None).unwrap();
            assert!(delay <= Duration::from_millis(100));
        }
    }

    #[test]
    fn test_nan_jitter_factor_becomes_zero() {
        let policy = RetryPolicy::constant(Duration::from_millis(10)).with_jitter(f64::NAN);
        assert_eq!(policy.jitter(), &JitterStrategy::Proportional(0.0));
    }

    #[cfg(feature = "jitter")]
    #[test]
    fn test_non_finite_jitter_keeps_base_delay() {
        let base = Duration::from_millis(10);

        let policy = RetryPolicy::constant(base)
            .with_max_retries(1)
            .with_jitter(f64::NAN);
        assert_eq!(policy.delay_with_jitter(0, None), Some(base));

        for factor in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(JitterStrategy::Proportional(factor).apply(base, None), base);
        }
    }

    #[test]
    fn test_policy_getters() {
        let policy = RetryPolicy::exponential(Duration::from_millis(100))
            .with_max_retries(3)
            .with_max_delay(Duration::from_secs(5))
            .with_decorrelated_jitter();

        assert_eq!(policy.max_retries(), 3);
        assert_eq!(policy.max_delay(), Some(Duration::from_secs(5)));
        assert_eq!(policy.jitter(), &JitterStrategy::Decorrelated);
        assert!(matches!(
            policy.strategy(),
            RetryStrategy::Exponential { .. }
        ));
    }

    #[test]
    fn test_fibonacci_function() {
        let seq: Vec<u32> = (0..8).map(fibonacci).collect();
        assert_eq!(seq, vec![0, 1, 1, 2, 3, 5, 8, 13]);
    }
}
