use std::error::Error;
use std::fmt;
use std::panic::Location;

/// What happens when a caller extracts the wrong side of an `Outcome`.
///
/// Chosen once per build by the `abort-on-violation` feature. There is no
/// runtime switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanicPolicy {
    /// Write the violation to stderr, then unwind with a
    /// [`ContractViolation`] payload. Catchable with `std::panic::catch_unwind`.
    Unwind,
    /// Write the violation to stderr, flush, then `std::process::abort()`.
    Abort,
}

cfg_if::cfg_if! {
    if #[cfg(feature = "abort-on-violation")] {
        /// The policy compiled into this build.
        pub const ACTIVE_POLICY: PanicPolicy = PanicPolicy::Abort;
    } else {
        /// The policy compiled into this build.
        pub const ACTIVE_POLICY: PanicPolicy = PanicPolicy::Unwind;
    }
}

#[inline]
pub fn panic_policy() -> PanicPolicy {
    ACTIVE_POLICY
}

/// Which extraction was attempted on the wrong state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// `unwrap` / `expect` on an `Err`.
    UnwrapOnErr,
    /// `unwrap_err` / `expect_err` on an `Ok`.
    UnwrapErrOnOk,
}

impl ViolationKind {
    /// The fixed message used by `unwrap` and `unwrap_err`.
    pub fn default_message(&self) -> &'static str {
        match self {
            ViolationKind::UnwrapOnErr => "called `Outcome::unwrap()` on an `Err` value",
            ViolationKind::UnwrapErrOnOk => "called `Outcome::unwrap_err()` on an `Ok` value",
        }
    }
}

/// Payload raised when an extraction contract is broken.
///
/// Under the unwind policy this is the panic payload, so a caught panic can
/// be downcast back to it:
///
/// ```
/// # #[cfg(not(feature = "abort-on-violation"))]
/// # {
/// use outcome::{ContractViolation, Outcome, ViolationKind};
///
/// let caught = std::panic::catch_unwind(|| {
///     Outcome::<i32, &str>::Err("boom").unwrap()
/// })
/// .unwrap_err();
///
/// let violation = caught.downcast_ref::<ContractViolation>().unwrap();
/// assert_eq!(violation.kind(), ViolationKind::UnwrapOnErr);
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractViolation {
    kind: ViolationKind,
    message: String,
    file: &'static str,
    line: u32,
}

impl ContractViolation {
    pub fn new(kind: ViolationKind, message: impl Into<String>, location: &'static Location<'static>) -> Self {
        Self {
            kind,
            message: message.into(),
            file: location.file(),
            line: location.line(),
        }
    }

    #[inline]
    pub fn kind(&self) -> ViolationKind {
        self.kind
    }

    /// The fixed message, or the caller's `expect` message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// File of the offending call site.
    #[inline]
    pub fn file(&self) -> &'static str {
        self.file
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }
}

impl fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}:{}", self.message, self.file, self.line)
    }
}

impl Error for ContractViolation {}

// ── Raising ───────────────────────────────────────────────────────

/// Apply the active policy. Never returns.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn violate(kind: ViolationKind, message: Option<&str>) -> ! {
    let message = message.unwrap_or_else(|| kind.default_message());
    raise(ContractViolation::new(kind, message, Location::caller()))
}

// Both policies write the violation regardless of the log level: the panic
// hook cannot print a typed payload, and abort leaves nothing else behind.
cfg_if::cfg_if! {
    if #[cfg(feature = "abort-on-violation")] {
        #[track_caller]
        fn raise(violation: ContractViolation) -> ! {
            crate::diag::_ofatal_impl(format_args!("{}", violation));
            std::process::abort()
        }
    } else {
        #[track_caller]
        fn raise(violation: ContractViolation) -> ! {
            crate::diag::_ofatal_impl(format_args!("{}", violation));
            std::panic::panic_any(violation)
        }
    }
}
