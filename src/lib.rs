//! # Outcome
//!
//! A success-or-failure value with combinators for composing fallible
//! pipelines.
//!
//! An [`Outcome<T, E>`](Outcome) is either `Success(T)` or `Failure(E)`.
//! Around that type the crate provides:
//!
//! - single-value combinators: `map`, `map_err`, `map2`, `and_then`,
//!   `perform`, `with_default`, `resolve`
//! - recovery: [`Outcome::catch_error`] and [`Outcome::catch_all_errors`],
//!   with [`check`] validating what a handler hands back
//! - fail-fast folding over sequences and tuples ([`traverse`])
//! - bounded retry with configurable backoff ([`retry`])
//! - list aggregation with `and`/`or`/`product`/`sum` ([`calc`])
//!
//! ## Quick Example
//!
//! ```rust
//! use outcome::{calc, Outcome};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum ConfigError {
//!     Missing(&'static str),
//!     Invalid(&'static str),
//! }
//!
//! fn port(raw: Option<&str>) -> Outcome<u16, ConfigError> {
//!     match raw {
//!         None => Outcome::failure(ConfigError::Missing("port")),
//!         Some(text) => text
//!             .parse::<u16>()
//!             .map_err(|_| ConfigError::Invalid("port"))
//!             .into(),
//!     }
//! }
//!
//! // Recover from one specific error, leave the others alone
//! let with_fallback = port(None)
//!     .catch_error(&ConfigError::Missing("port"), |_| Outcome::<u16, ConfigError>::success(8080))
//!     .unwrap();
//! assert_eq!(with_fallback, Outcome::Success(8080));
//!
//! // Collect every problem instead of stopping at the first
//! let report = calc::product(vec![port(Some("80")), port(Some("eighty")), port(None)]);
//! assert_eq!(
//!     report,
//!     Outcome::Failure(vec![ConfigError::Invalid("port"), ConfigError::Missing("port")])
//! );
//! ```
//!
//! ## Features
//!
//! - `async`: `Outcome::retry_async` on top of tokio
//! - `jitter`: randomized backoff in [`RetryPolicy`]
//! - `tracing`: debug/warn events from the retry executors
//! - `serde`: `Serialize`/`Deserialize` for `Outcome`
//! - `proptest`: `Arbitrary` for `Outcome`

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod calc;
pub mod check;
pub mod outcome;
pub mod retry;
pub mod semigroup;
pub mod testing;
pub mod traverse;

// Re-exports
pub use check::{check, IntoOutcome, TypeError};
pub use outcome::Outcome;
pub use retry::{JitterStrategy, RetryEvent, RetryPolicy, RetryStrategy, DEFAULT_RETRY_DELAY};
pub use semigroup::Semigroup;
pub use traverse::FoldAll;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::calc;
    pub use crate::check::{check, IntoOutcome, TypeError};
    pub use crate::outcome::Outcome;
    pub use crate::retry::RetryPolicy;
    pub use crate::semigroup::Semigroup;
    pub use crate::traverse::FoldAll;
}
