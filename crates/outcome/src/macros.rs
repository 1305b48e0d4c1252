/// Unwrap an `Ok` or return its `Err` from the enclosing function.
///
/// The enclosing function must return `Outcome<_, F>` where `F: From<E>`.
/// The payload is moved, never cloned. No logging, no I/O.
///
/// ```
/// use outcome::{try_ok, Outcome};
///
/// fn parse(s: &str) -> Outcome<u16, String> {
///     s.parse::<u16>().map_err(|e| e.to_string()).into()
/// }
///
/// fn next_port(s: &str) -> Outcome<u16, String> {
///     let port = try_ok!(parse(s));
///     Outcome::Ok(port + 1)
/// }
///
/// assert_eq!(next_port("8080"), Outcome::Ok(8081));
/// assert!(next_port("http").is_err());
/// ```
#[macro_export]
macro_rules! try_ok {
    ($expr:expr $(,)?) => {
        match $expr {
            $crate::Outcome::Ok(val) => val,
            $crate::Outcome::Err(err) => return $crate::Outcome::Err(::core::convert::From::from(err)),
        }
    };
}

/// Return `Outcome::Err(err)` early if a condition is false.
///
/// ```ignore
/// ensure!(workers > 0, ConfigError::NoWorkers);
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr $(,)?) => {
        if !$cond {
            return $crate::Outcome::Err(::core::convert::From::from($err));
        }
    };
}

/// Return `Outcome::Err(err)` from the enclosing function.
#[macro_export]
macro_rules! bail {
    ($err:expr $(,)?) => {
        return $crate::Outcome::Err(::core::convert::From::from($err))
    };
}

#[cfg(test)]
mod tests {
    use crate::Outcome;
    use std::cell::Cell;

    #[derive(Debug, PartialEq)]
    enum AppError {
        Parse(String),
        Range(i64),
    }

    impl From<String> for AppError {
        fn from(s: String) -> Self {
            AppError::Parse(s)
        }
    }

    fn parse(s: &str) -> Outcome<i64, String> {
        match s.parse::<i64>() {
            Ok(v) => Outcome::Ok(v),
            Err(e) => Outcome::Err(e.to_string()),
        }
    }

    #[test]
    fn try_ok_binds_and_continues() {
        fn double(s: &str) -> Outcome<i64, String> {
            let v = try_ok!(parse(s));
            Outcome::Ok(v * 2)
        }
        assert_eq!(double("21"), Outcome::Ok(42));
    }

    #[test]
    fn try_ok_returns_err_immediately() {
        let reached = Cell::new(false);
        let run = |s: &str| -> Outcome<i64, String> {
            let v = try_ok!(parse(s));
            reached.set(true);
            Outcome::Ok(v)
        };
        let e = run("nope");
        assert!(e.is_err());
        assert!(!reached.get());
        assert_eq!(e, parse("nope"));

        assert_eq!(run("3"), Outcome::Ok(3));
        assert!(reached.get());
    }

    #[test]
    fn try_ok_retags_via_from() {
        fn checked(s: &str) -> Outcome<i64, AppError> {
            let v = try_ok!(parse(s));
            Outcome::Ok(v)
        }
        assert_eq!(checked("7"), Outcome::Ok(7));
        assert!(matches!(checked("x"), Outcome::Err(AppError::Parse(_))));
    }

    #[test]
    fn try_ok_moves_payload() {
        fn first(items: Outcome<Vec<String>, ()>) -> Outcome<String, ()> {
            let mut v = try_ok!(items);
            Outcome::Ok(v.remove(0))
        }
        assert_eq!(first(Outcome::Ok(vec!["a".to_string()])), Outcome::Ok("a".to_string()));
        assert_eq!(first(Outcome::Err(())), Outcome::Err(()));
    }

    #[test]
    fn early_returns_leave_diagnostics_uninitialized() {
        fn chain(s: &str) -> Outcome<i64, AppError> {
            let v = try_ok!(parse(s));
            ensure!(v != 0, AppError::Range(v));
            if v < 0 {
                bail!(AppError::Range(v));
            }
            Outcome::Ok(v)
        }
        std::env::set_var(crate::diag::LOG_LEVEL_VAR, "trace");
        assert!(chain("x").is_err());
        assert!(chain("0").is_err());
        assert!(chain("-1").is_err());
        std::env::remove_var(crate::diag::LOG_LEVEL_VAR);

        assert!(!crate::diag::is_initialized());
        assert_eq!(crate::diag::log_level(), crate::LogLevel::Warn);
    }

    #[test]
    fn ensure_passes() {
        fn check(v: i64) -> Outcome<i64, AppError> {
            ensure!(v > 0, AppError::Range(v));
            Outcome::Ok(v)
        }
        assert_eq!(check(5), Outcome::Ok(5));
    }

    #[test]
    fn ensure_fails() {
        fn check(v: i64) -> Outcome<i64, AppError> {
            ensure!(v > 0, AppError::Range(v));
            Outcome::Ok(v)
        }
        assert_eq!(check(-1), Outcome::Err(AppError::Range(-1)));
    }

    #[test]
    fn bail_returns() {
        fn always(v: i64) -> Outcome<(), AppError> {
            if v == 0 {
                bail!("zero".to_string());
            }
            Outcome::Ok(())
        }
        assert_eq!(always(0), Outcome::Err(AppError::Parse("zero".to_string())));
        assert_eq!(always(1), Outcome::Ok(()));
    }
}
