use std::fmt;

use crate::policy::{violate, ViolationKind};

/// A value that is either a success (`Ok(T)`) or a domain failure (`Err(E)`).
///
/// The variant is the tag: `Outcome::<i32, i32>::Ok(5)` and
/// `Outcome::<i32, i32>::Err(5)` stay distinct even though both carry an
/// `i32`.
///
/// Every closure-taking combinator calls its closure at most once, and only
/// for the state it names. Extracting the wrong side (`unwrap` on `Err`,
/// `unwrap_err` on `Ok`) is a contract violation handled by the build's
/// [`PanicPolicy`](crate::PanicPolicy).
///
/// ```
/// use outcome::Outcome;
///
/// let parsed: Outcome<u16, String> = Outcome::Ok(8080);
/// let port = parsed
///     .map(|p| p + 1)
///     .and_then(|p| if p < 1024 { Outcome::Err("privileged".to_string()) } else { Outcome::Ok(p) })
///     .unwrap_or(80);
/// assert_eq!(port, 8081);
/// ```
#[must_use = "this `Outcome` may be an `Err` variant, which should be handled"]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Outcome<T, E> {
    Ok(T),
    Err(E),
}

// ── State inspection ──────────────────────────────────────────────

impl<T, E> Outcome<T, E> {
    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    #[inline]
    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// `true` if `Ok` and the payload satisfies `pred`.
    #[inline]
    pub fn is_ok_and(&self, pred: impl FnOnce(&T) -> bool) -> bool {
        match self {
            Outcome::Ok(v) => pred(v),
            Outcome::Err(_) => false,
        }
    }

    /// `true` if `Err` and the error satisfies `pred`.
    #[inline]
    pub fn is_err_and(&self, pred: impl FnOnce(&E) -> bool) -> bool {
        match self {
            Outcome::Ok(_) => false,
            Outcome::Err(e) => pred(e),
        }
    }

    /// Copy of the Ok payload, leaving `self` untouched.
    ///
    /// Use [`into_ok`](Self::into_ok) to move the payload out instead.
    #[inline]
    pub fn ok(&self) -> Option<T>
    where
        T: Clone,
    {
        match self {
            Outcome::Ok(v) => Some(v.clone()),
            Outcome::Err(_) => None,
        }
    }

    /// Copy of the Err payload, leaving `self` untouched.
    #[inline]
    pub fn err(&self) -> Option<E>
    where
        E: Clone,
    {
        match self {
            Outcome::Ok(_) => None,
            Outcome::Err(e) => Some(e.clone()),
        }
    }

    /// Consume `self`, moving the Ok payload out.
    #[inline]
    pub fn into_ok(self) -> Option<T> {
        match self {
            Outcome::Ok(v) => Some(v),
            Outcome::Err(_) => None,
        }
    }

    /// Consume `self`, moving the Err payload out.
    #[inline]
    pub fn into_err(self) -> Option<E> {
        match self {
            Outcome::Ok(_) => None,
            Outcome::Err(e) => Some(e),
        }
    }

    /// Structural equality: same state and equal payloads. Agrees with `==`.
    #[inline]
    pub fn equals(&self, other: &Self) -> bool
    where
        T: PartialEq,
        E: PartialEq,
    {
        match (self, other) {
            (Outcome::Ok(a), Outcome::Ok(b)) => a == b,
            (Outcome::Err(a), Outcome::Err(b)) => a == b,
            _ => false,
        }
    }
}

// ── Unsafe extraction ─────────────────────────────────────────────

impl<T, E> Outcome<T, E> {
    /// The Ok payload.
    ///
    /// On `Err` this is a contract violation: the active panic policy
    /// fires and no value is returned.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Outcome::Ok(v) => v,
            Outcome::Err(_) => violate(ViolationKind::UnwrapOnErr, None),
        }
    }

    /// The Err payload. Violates the contract on `Ok`.
    #[inline]
    #[track_caller]
    pub fn unwrap_err(self) -> E {
        match self {
            Outcome::Ok(_) => violate(ViolationKind::UnwrapErrOnOk, None),
            Outcome::Err(e) => e,
        }
    }

    /// Like [`unwrap`](Self::unwrap), reporting `msg` on violation.
    #[inline]
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Outcome::Ok(v) => v,
            Outcome::Err(_) => violate(ViolationKind::UnwrapOnErr, Some(msg)),
        }
    }

    /// Like [`unwrap_err`](Self::unwrap_err), reporting `msg` on violation.
    #[inline]
    #[track_caller]
    pub fn expect_err(self, msg: &str) -> E {
        match self {
            Outcome::Ok(_) => violate(ViolationKind::UnwrapErrOnOk, Some(msg)),
            Outcome::Err(e) => e,
        }
    }
}

// ── Defaulted extraction ──────────────────────────────────────────

impl<T, E> Outcome<T, E> {
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Outcome::Ok(v) => v,
            Outcome::Err(_) => default,
        }
    }

    /// The Ok payload, or `T::default()` on `Err`.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Outcome::Ok(v) => v,
            Outcome::Err(_) => T::default(),
        }
    }

    /// The Ok payload, or `fallback(err)` on `Err`.
    #[inline]
    pub fn unwrap_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Outcome::Ok(v) => v,
            Outcome::Err(e) => fallback(e),
        }
    }

    /// Move the Ok payload out through a mutable borrow.
    ///
    /// The container stays `Ok`, now holding `T::default()`. Returns `None`
    /// and leaves `self` alone on `Err`.
    #[inline]
    pub fn take_ok(&mut self) -> Option<T>
    where
        T: Default,
    {
        match self {
            Outcome::Ok(v) => Some(std::mem::take(v)),
            Outcome::Err(_) => None,
        }
    }

    /// Move the Err payload out, leaving `E::default()` behind. `None` on `Ok`.
    #[inline]
    pub fn take_err(&mut self) -> Option<E>
    where
        E: Default,
    {
        match self {
            Outcome::Ok(_) => None,
            Outcome::Err(e) => Some(std::mem::take(e)),
        }
    }
}

// ── Transformation ────────────────────────────────────────────────

impl<T, E> Outcome<T, E> {
    #[inline]
    pub fn map<U, F>(self, op: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Ok(v) => Outcome::Ok(op(v)),
            Outcome::Err(e) => Outcome::Err(e),
        }
    }

    #[inline]
    pub fn map_err<F, O>(self, op: O) -> Outcome<T, F>
    where
        O: FnOnce(E) -> F,
    {
        match self {
            Outcome::Ok(v) => Outcome::Ok(v),
            Outcome::Err(e) => Outcome::Err(op(e)),
        }
    }

    #[inline]
    pub fn map_or<U, F>(self, default: U, op: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Ok(v) => op(v),
            Outcome::Err(_) => default,
        }
    }

    /// `on_err(e)` for `Err`, `on_ok(v)` for `Ok`. Exactly one runs.
    #[inline]
    pub fn map_or_else<U, D, F>(self, on_err: D, on_ok: F) -> U
    where
        D: FnOnce(E) -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Ok(v) => on_ok(v),
            Outcome::Err(e) => on_err(e),
        }
    }

    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Outcome::Ok(v) = &self {
            f(v);
        }
        self
    }

    #[inline]
    pub fn inspect_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Outcome::Err(e) = &self {
            f(e);
        }
        self
    }
}

// ── Chaining ──────────────────────────────────────────────────────

impl<T, E> Outcome<T, E> {
    /// `other` if `self` is `Ok`, otherwise `self`'s error.
    ///
    /// Left-to-right AND: the first `Err` in a chain wins.
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let first: Outcome<i32, &str> = Outcome::Err("first");
    /// let second: Outcome<i32, &str> = Outcome::Err("second");
    /// assert_eq!(first.and(second), Outcome::Err("first"));
    /// ```
    #[inline]
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Outcome::Ok(_) => other,
            Outcome::Err(e) => Outcome::Err(e),
        }
    }

    /// Feed the Ok payload into the next fallible step.
    #[inline]
    pub fn and_then<U, F>(self, op: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Outcome::Ok(v) => op(v),
            Outcome::Err(e) => Outcome::Err(e),
        }
    }

    /// `alt` if `self` is `Err`, otherwise `self`'s value.
    #[inline]
    pub fn or<F>(self, alt: Outcome<T, F>) -> Outcome<T, F> {
        match self {
            Outcome::Ok(v) => Outcome::Ok(v),
            Outcome::Err(_) => alt,
        }
    }

    /// Recover from the error with another fallible step.
    #[inline]
    pub fn or_else<F, O>(self, op: O) -> Outcome<T, F>
    where
        O: FnOnce(E) -> Outcome<T, F>,
    {
        match self {
            Outcome::Ok(v) => Outcome::Ok(v),
            Outcome::Err(e) => op(e),
        }
    }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
    #[inline]
    pub fn flatten(self) -> Outcome<T, E> {
        self.and_then(|inner| inner)
    }
}

// ── Reference projection ──────────────────────────────────────────

impl<T, E> Outcome<T, E> {
    /// Borrow the payload without moving it.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Ok(v) => Outcome::Ok(v),
            Outcome::Err(e) => Outcome::Err(e),
        }
    }

    /// Mutably borrow the payload.
    ///
    /// The view can mutate in place or move the payload out with
    /// `std::mem::take` / `std::mem::replace`.
    #[inline]
    pub fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
        match self {
            Outcome::Ok(v) => Outcome::Ok(v),
            Outcome::Err(e) => Outcome::Err(e),
        }
    }

    /// Zero-or-one iterator over the Ok payload.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().into_ok().into_iter()
    }
}

impl<T: Copy, E> Outcome<&T, E> {
    #[inline]
    pub fn copied(self) -> Outcome<T, E> {
        self.map(|&v| v)
    }
}

impl<T: Clone, E> Outcome<&T, E> {
    #[inline]
    pub fn cloned(self) -> Outcome<T, E> {
        self.map(T::clone)
    }
}

impl<T: Copy, E> Outcome<&mut T, E> {
    #[inline]
    pub fn copied(self) -> Outcome<T, E> {
        self.map(|&mut v| v)
    }
}

impl<T: Clone, E> Outcome<&mut T, E> {
    #[inline]
    pub fn cloned(self) -> Outcome<T, E> {
        self.map(|v| v.clone())
    }
}

// ── Display ───────────────────────────────────────────────────────

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Ok(v) => write!(f, "Ok({})", v),
            Outcome::Err(e) => write!(f, "Err({})", e),
        }
    }
}
