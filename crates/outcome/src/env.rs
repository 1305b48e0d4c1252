//! Environment variable readers
//!
//! Only the diagnostic layer consults the environment; the `Outcome`
//! combinators never do.
//!
//! ```ignore
//! use outcome::env::{env_get, env_get_bool};
//!
//! let retries: u32 = env_get("APP_RETRIES", 3);
//! let flush = env_get_bool("OUTCOME_FLUSH_EPRINT", false);
//! ```

use std::str::FromStr;

/// Parse `key` as `T`, falling back to `default` when unset or unparseable.
#[inline]
pub fn env_get<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    env_get_opt(key).unwrap_or(default)
}

/// Read `key` as a boolean flag.
///
/// "1", "true", "yes", "on" (any case) are true; any other value is false.
/// Unset returns `default`.
#[inline]
pub fn env_get_bool(key: &str, default: bool) -> bool {
    match std::env::var(key) {
        Ok(val) => matches!(val.to_lowercase().as_str(), "1" | "true" | "yes" | "on"),
        Err(_) => default,
    }
}

/// `Some(T)` if `key` is set and parses, `None` otherwise.
#[inline]
pub fn env_get_opt<T>(key: &str) -> Option<T>
where
    T: FromStr,
{
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

/// Read `key` as a string, or `default` when unset.
///
/// Needs no `FromStr`, and keeps surrounding whitespace.
#[inline]
pub fn env_get_str(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// `true` if `key` is set, whatever its value (empty included).
#[inline]
pub fn env_is_set(key: &str) -> bool {
    std::env::var_os(key).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_get_default() {
        let val: usize = env_get("__OUTCOME_TEST_UNSET__", 42);
        assert_eq!(val, 42);
    }

    #[test]
    fn test_env_get_bool_default() {
        assert!(env_get_bool("__OUTCOME_TEST_UNSET__", true));
        assert!(!env_get_bool("__OUTCOME_TEST_UNSET__", false));
    }

    #[test]
    fn test_env_get_opt_none() {
        let val: Option<usize> = env_get_opt("__OUTCOME_TEST_UNSET__");
        assert!(val.is_none());
    }

    #[test]
    fn test_env_get_with_set_var() {
        std::env::set_var("__OUTCOME_TEST_NUM__", " 123 ");
        let val: usize = env_get("__OUTCOME_TEST_NUM__", 0);
        assert_eq!(val, 123);
        std::env::remove_var("__OUTCOME_TEST_NUM__");
    }

    #[test]
    fn test_env_get_bool_variants() {
        for truthy in ["1", "true", "TRUE", "yes", "on"] {
            std::env::set_var("__OUTCOME_TEST_BOOL__", truthy);
            assert!(env_get_bool("__OUTCOME_TEST_BOOL__", false), "{truthy}");
        }
        for falsy in ["0", "false", "garbage"] {
            std::env::set_var("__OUTCOME_TEST_BOOL__", falsy);
            assert!(!env_get_bool("__OUTCOME_TEST_BOOL__", true), "{falsy}");
        }
        std::env::remove_var("__OUTCOME_TEST_BOOL__");
    }

    #[test]
    fn test_env_get_str() {
        assert_eq!(env_get_str("__OUTCOME_TEST_UNSET__", "fallback"), "fallback");

        std::env::set_var("__OUTCOME_TEST_STR__", " padded ");
        assert_eq!(env_get_str("__OUTCOME_TEST_STR__", "fallback"), " padded ");
        std::env::remove_var("__OUTCOME_TEST_STR__");
    }

    #[test]
    fn test_env_is_set() {
        assert!(!env_is_set("__OUTCOME_TEST_UNSET__"));

        std::env::set_var("__OUTCOME_TEST_EMPTY__", "");
        assert!(env_is_set("__OUTCOME_TEST_EMPTY__"));
        std::env::remove_var("__OUTCOME_TEST_EMPTY__");
        assert!(!env_is_set("__OUTCOME_TEST_EMPTY__"));
    }

    #[test]
    fn test_env_get_invalid_parse() {
        std::env::set_var("__OUTCOME_TEST_INVALID__", "not_a_number");
        let val: usize = env_get("__OUTCOME_TEST_INVALID__", 99);
        assert_eq!(val, 99);
        std::env::remove_var("__OUTCOME_TEST_INVALID__");
    }
}
