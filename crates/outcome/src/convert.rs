use crate::Outcome;

// ── Result interop ────────────────────────────────────────────────

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(res: Result<T, E>) -> Self {
        match res {
            Ok(v) => Outcome::Ok(v),
            Err(e) => Outcome::Err(e),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(out: Outcome<T, E>) -> Self {
        out.into_result()
    }
}

impl<T, E> Outcome<T, E> {
    /// Convert to a `core::result::Result`, e.g. to use `?` in a
    /// `Result`-returning function.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Outcome::Ok(v) => Ok(v),
            Outcome::Err(e) => Err(e),
        }
    }
}

// ── IntoOutcome — lifting foreign values ──────────────────────────

/// Extension trait for turning `Result` and `Option` into an `Outcome`.
///
/// ```
/// use outcome::{IntoOutcome, Outcome};
///
/// let port = "8080".parse::<u16>().into_outcome();
/// assert_eq!(port, Outcome::Ok(8080));
///
/// let missing: Option<u16> = None;
/// assert_eq!(missing.ok_or_outcome("no port"), Outcome::Err("no port"));
/// ```
pub trait IntoOutcome<T> {
    /// Error carried by the produced outcome when lifting a `Result`.
    type Error;

    fn into_outcome(self) -> Outcome<T, Self::Error>;

    /// Lift, substituting `err` for the absence/failure case.
    fn ok_or_outcome<E>(self, err: E) -> Outcome<T, E>;
}

impl<T, E> IntoOutcome<T> for Result<T, E> {
    type Error = E;

    #[inline]
    fn into_outcome(self) -> Outcome<T, E> {
        self.into()
    }

    #[inline]
    fn ok_or_outcome<F>(self, err: F) -> Outcome<T, F> {
        match self {
            Ok(v) => Outcome::Ok(v),
            Err(_) => Outcome::Err(err),
        }
    }
}

impl<T> IntoOutcome<T> for Option<T> {
    type Error = ();

    #[inline]
    fn into_outcome(self) -> Outcome<T, ()> {
        self.ok_or_outcome(())
    }

    #[inline]
    fn ok_or_outcome<E>(self, err: E) -> Outcome<T, E> {
        match self {
            Some(v) => Outcome::Ok(v),
            None => Outcome::Err(err),
        }
    }
}

// ── Collecting ────────────────────────────────────────────────────

/// Collect until the first `Err`, which becomes the result. Items after it
/// are not pulled from the iterator.
impl<A, E, V> FromIterator<Outcome<A, E>> for Outcome<V, E>
where
    V: FromIterator<A>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<A, E>>>(iter: I) -> Self {
        iter.into_iter()
            .map(Outcome::into_result)
            .collect::<Result<V, E>>()
            .into()
    }
}

impl<T, E> IntoIterator for Outcome<T, E> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.into_ok().into_iter()
    }
}
