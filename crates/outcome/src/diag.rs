//! Leveled stderr diagnostics for the outcome crate
//!
//! Leveled macros for host applications, plus the unconditional line used
//! to report contract violations. Output is line-atomic under the stderr
//! lock and can be flushed after every line.
//!
//! The environment is read only by an explicit [`init`] call; until then
//! the defaults (level `warn`, no flushing) apply.
//!
//! # Environment Variables
//!
//! - `OUTCOME_FLUSH_EPRINT=1` - Flush stderr after each line (useful right before an abort)
//! - `OUTCOME_LOG_LEVEL=<level>` - off, error, warn, info, debug, trace (or 0..5). Default: warn
//!
//! # Usage
//!
//! ```ignore
//! use outcome::{diag, oinfo, owarn};
//!
//! diag::init();
//! oinfo!("loaded {} entries", n);
//! owarn!("config rejected: {}", err);
//! ```

use std::io::Write;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use crate::env::{env_get_bool, env_get_opt};

/// Log levels, most severe first.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Off = 0,
    Error = 1,
    Warn = 2,
    Info = 3,
    Debug = 4,
    Trace = 5,
}

impl LogLevel {
    pub fn from_u8(v: u8) -> Self {
        match v {
            0 => LogLevel::Off,
            1 => LogLevel::Error,
            2 => LogLevel::Warn,
            3 => LogLevel::Info,
            4 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }

    pub fn prefix(&self) -> &'static str {
        match self {
            LogLevel::Off => "",
            LogLevel::Error => "[outcome ERROR]",
            LogLevel::Warn => "[outcome WARN] ",
            LogLevel::Info => "[outcome INFO] ",
            LogLevel::Debug => "[outcome DEBUG]",
            LogLevel::Trace => "[outcome TRACE]",
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "off" | "0" => Ok(LogLevel::Off),
            "error" | "1" => Ok(LogLevel::Error),
            "warn" | "2" => Ok(LogLevel::Warn),
            "info" | "3" => Ok(LogLevel::Info),
            "debug" | "4" => Ok(LogLevel::Debug),
            "trace" | "5" => Ok(LogLevel::Trace),
            _ => Err(()),
        }
    }
}

/// Environment variable holding the log level.
pub const LOG_LEVEL_VAR: &str = "OUTCOME_LOG_LEVEL";
/// Environment variable enabling flush-after-every-line.
pub const FLUSH_VAR: &str = "OUTCOME_FLUSH_EPRINT";

static FLUSH_ENABLED: AtomicBool = AtomicBool::new(false);
static LOG_LEVEL: AtomicU8 = AtomicU8::new(LogLevel::Warn as u8);
static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Initialize diagnostics from environment variables.
///
/// Only the host calls this. Later calls are no-ops.
pub fn init() {
    if INITIALIZED.swap(true, Ordering::SeqCst) {
        return;
    }

    FLUSH_ENABLED.store(env_get_bool(FLUSH_VAR, false), Ordering::Relaxed);

    // Unparseable values leave the default in place.
    if let Some(level) = env_get_opt::<LogLevel>(LOG_LEVEL_VAR) {
        LOG_LEVEL.store(level as u8, Ordering::Relaxed);
    }
}

/// `true` once [`init`] has read the environment.
#[inline]
pub fn is_initialized() -> bool {
    INITIALIZED.load(Ordering::Relaxed)
}

#[inline]
pub fn flush_enabled() -> bool {
    FLUSH_ENABLED.load(Ordering::Relaxed)
}

#[inline]
pub fn log_level() -> LogLevel {
    LogLevel::from_u8(LOG_LEVEL.load(Ordering::Relaxed))
}

/// Set log level programmatically. A later [`init`] may override it.
pub fn set_log_level(level: LogLevel) {
    LOG_LEVEL.store(level as u8, Ordering::Relaxed);
}

pub fn set_flush_enabled(enabled: bool) {
    FLUSH_ENABLED.store(enabled, Ordering::Relaxed);
}

#[inline]
pub fn level_enabled(level: LogLevel) -> bool {
    level != LogLevel::Off && level as u8 <= log_level() as u8
}

/// Internal: leveled line, dropped when the level is filtered out.
#[doc(hidden)]
pub fn _olog_impl(level: LogLevel, args: std::fmt::Arguments<'_>) {
    if !level_enabled(level) {
        return;
    }
    write_line(level, args, flush_enabled());
}

/// Internal: error line that ignores the level filter and always flushes.
///
/// Contract violations report here, whatever the level, and the abort path
/// gets no other chance to drain stderr.
#[doc(hidden)]
pub fn _ofatal_impl(args: std::fmt::Arguments<'_>) {
    write_line(LogLevel::Error, args, true);
}

fn write_line(level: LogLevel, args: std::fmt::Arguments<'_>, flush: bool) {
    let stderr = std::io::stderr();
    let mut handle = stderr.lock();
    let _ = write!(handle, "{} ", level.prefix());
    let _ = handle.write_fmt(args);
    let _ = handle.write_all(b"\n");
    if flush {
        let _ = handle.flush();
    }
}

// ============================================================================
// Public Macros
// ============================================================================

#[macro_export]
macro_rules! oerror {
    ($($arg:tt)*) => {{
        $crate::diag::_olog_impl(
            $crate::diag::LogLevel::Error,
            format_args!($($arg)*)
        );
    }};
}

#[macro_export]
macro_rules! owarn {
    ($($arg:tt)*) => {{
        $crate::diag::_olog_impl(
            $crate::diag::LogLevel::Warn,
            format_args!($($arg)*)
        );
    }};
}

#[macro_export]
macro_rules! oinfo {
    ($($arg:tt)*) => {{
        $crate::diag::_olog_impl(
            $crate::diag::LogLevel::Info,
            format_args!($($arg)*)
        );
    }};
}

#[macro_export]
macro_rules! odebug {
    ($($arg:tt)*) => {{
        $crate::diag::_olog_impl(
            $crate::diag::LogLevel::Debug,
            format_args!($($arg)*)
        );
    }};
}

/// Trace level log (most verbose)
#[macro_export]
macro_rules! otrace {
    ($($arg:tt)*) => {{
        $crate::diag::_olog_impl(
            $crate::diag::LogLevel::Trace,
            format_args!($($arg)*)
        );
    }};
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_levels() {
        assert!(LogLevel::Error < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Debug);
        assert!(LogLevel::Debug < LogLevel::Trace);
    }

    #[test]
    fn test_level_from_u8() {
        assert_eq!(LogLevel::from_u8(0), LogLevel::Off);
        assert_eq!(LogLevel::from_u8(1), LogLevel::Error);
        assert_eq!(LogLevel::from_u8(4), LogLevel::Debug);
        assert_eq!(LogLevel::from_u8(99), LogLevel::Trace);
    }

    #[test]
    fn test_level_from_str() {
        assert_eq!("off".parse::<LogLevel>(), Ok(LogLevel::Off));
        assert_eq!("WARN".parse::<LogLevel>(), Ok(LogLevel::Warn));
        assert_eq!("5".parse::<LogLevel>(), Ok(LogLevel::Trace));
        assert!("loud".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_off_is_never_enabled() {
        assert!(!level_enabled(LogLevel::Off));
    }

    #[test]
    fn test_macros_compile() {
        // Nothing in this crate moves the level off its default, so the
        // below-warn macros stay silent without touching the global.
        assert_eq!(log_level(), LogLevel::Warn);
        oinfo!("info");
        odebug!("debug {}", 42);
        otrace!("trace");
    }
}
