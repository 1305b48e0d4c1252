//! # outcome — a two-state result type with a combinator algebra
//!
//! `Outcome<T, E>` is either `Ok(T)` or `Err(E)`. Domain failures travel as
//! ordinary values; only extracting the wrong side is treated as a
//! programming error.
//!
//! ## Design
//!
//! - **State**: a plain enum. The variant is the tag, so `Ok(5)` and
//!   `Err(5)` of an `Outcome<i32, i32>` never compare equal.
//!
//! - **Combinators**: inspection (`is_ok`, `ok`, `err`), defaulted
//!   extraction (`unwrap_or*`), transformation (`map*`), chaining
//!   (`and`, `and_then`, `or`, `or_else`) and projection (`as_ref`,
//!   `as_mut`). Closures run at most once, and only for the matching state.
//!
//! - **Contract violations**: `unwrap`, `unwrap_err`, `expect` and
//!   `expect_err` on the wrong state never return. The build-time
//!   [`PanicPolicy`] decides whether they unwind with a
//!   [`ContractViolation`] payload or abort the process.
//!
//! - **Propagation**: [`try_ok!`] unwraps an `Ok` or returns the `Err` from
//!   the enclosing function, converting it with `From`.
//!
//! ## Quick Start
//!
//! ```rust
//! use outcome::{try_ok, ensure, Outcome};
//!
//! #[derive(Debug, PartialEq)]
//! enum ConfigError {
//!     NotANumber(String),
//!     Zero,
//! }
//!
//! fn parse_workers(raw: &str) -> Outcome<usize, ConfigError> {
//!     let n = try_ok!(Outcome::from(raw.trim().parse::<usize>())
//!         .map_err(|_| ConfigError::NotANumber(raw.to_string())));
//!     ensure!(n > 0, ConfigError::Zero);
//!     Outcome::Ok(n)
//! }
//!
//! assert_eq!(parse_workers(" 4 "), Outcome::Ok(4));
//! assert_eq!(parse_workers("0"), Outcome::Err(ConfigError::Zero));
//! assert_eq!(parse_workers("four").unwrap_or(1), 1);
//! ```
//!
//! ## Feature Flags
//!
//! | Flag                 | Effect |
//! |----------------------|--------|
//! | `abort-on-violation` | Contract violations write to stderr and abort instead of unwinding |
//!
//! ## Environment
//!
//! | Variable               | Effect |
//! |------------------------|--------|
//! | `OUTCOME_LOG_LEVEL`    | Diagnostic level: off, error, warn (default), info, debug, trace |
//! | `OUTCOME_FLUSH_EPRINT` | Flush stderr after every diagnostic line |
//!
//! Both are read once, by a host call to [`diag::init`]. The library never
//! reads the environment on its own.

#[macro_use]
pub mod diag;
pub mod env;
mod policy;
mod outcome;
#[macro_use]
mod macros;
mod convert;

// ── Public API ────────────────────────────────────────────────────

pub use outcome::Outcome;
pub use policy::{panic_policy, ContractViolation, PanicPolicy, ViolationKind, ACTIVE_POLICY};
pub use convert::IntoOutcome;
pub use diag::{set_flush_enabled, set_log_level, LogLevel};
