#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of evaluating a single rule against a single value.
///
/// A check either passes, or fails carrying exactly one reason. There is no
/// third state: rules are total and never signal failure any other way.
///
/// # Examples
///
/// ```
/// use rule_rail::types::Check;
///
/// let pass: Check<&str> = Check::Pass;
/// assert!(pass.is_pass());
///
/// let fail = Check::Fail("missing digit");
/// assert_eq!(fail.into_reason(), Some("missing digit"));
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum Check<R> {
    Pass,
    Fail(R),
}

impl<R> Check<R> {
    /// Passes when `holds` is `true`, otherwise fails with `reason`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::types::Check;
    ///
    /// assert_eq!(Check::when("abc".len() >= 2, "too short"), Check::Pass);
    /// assert_eq!(Check::when("a".len() >= 2, "too short"), Check::Fail("too short"));
    /// ```
    #[inline]
    pub fn when(holds: bool, reason: R) -> Self {
        if holds {
            Self::Pass
        } else {
            Self::Fail(reason)
        }
    }

    /// Like [`Check::when`], but only builds the reason on failure.
    #[inline]
    pub fn when_else<F>(holds: bool, reason: F) -> Self
    where
        F: FnOnce() -> R,
    {
        if holds {
            Self::Pass
        } else {
            Self::Fail(reason())
        }
    }

    #[must_use]
    #[inline]
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    #[must_use]
    #[inline]
    pub fn is_fail(&self) -> bool {
        !self.is_pass()
    }

    /// Re-tags a failure with a reason of another type.
    #[inline]
    pub fn map_reason<S, F>(self, f: F) -> Check<S>
    where
        F: FnOnce(R) -> S,
    {
        match self {
            Self::Pass => Check::Pass,
            Self::Fail(reason) => Check::Fail(f(reason)),
        }
    }

    /// Returns the failure reason, if any.
    #[must_use]
    #[inline]
    pub fn into_reason(self) -> Option<R> {
        match self {
            Self::Pass => None,
            Self::Fail(reason) => Some(reason),
        }
    }

    /// Converts into a `Result`, with the reason on the error side.
    #[inline]
    pub fn to_result(self) -> Result<(), R> {
        match self {
            Self::Pass => Ok(()),
            Self::Fail(reason) => Err(reason),
        }
    }
}

impl<R> From<Result<(), R>> for Check<R> {
    fn from(result: Result<(), R>) -> Self {
        match result {
            Ok(()) => Self::Pass,
            Err(reason) => Self::Fail(reason),
        }
    }
}
