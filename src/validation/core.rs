use crate::traits::{Composition, Reason, Rule};
use crate::types::{Check, ErrorVec};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use smallvec::smallvec;

/// Immutable snapshot of a value and every reason collected against it so far.
///
/// `Validation<R, T>` is the accumulator of the engine. Folding a rule into a
/// snapshot evaluates the rule against the snapshot's value and, on failure,
/// appends the rule's reason at the end of the list. Folding never stops
/// early, so the final list names every failed rule in the order the rules
/// were folded.
///
/// Unlike `Result`, both variants keep the subject value: rules only observe
/// it, they never transform it.
///
/// # Serde Support
///
/// `Validation` implements `Serialize` and `Deserialize` when `R` and `T` do.
/// Deserializing an `Invalid` with an empty reason list yields `Valid`.
///
/// # Type Parameters
///
/// * `R` - The reason type
/// * `T` - The subject value type
///
/// # Variants
///
/// * `Valid(T)` - No rule has failed
/// * `Invalid { value, reasons }` - One or more rules failed; `reasons` is never empty
///
/// Success is derived from the reason list. An `Invalid` built by hand with
/// no reasons still reports [`is_valid`](Validation::is_valid) and takes the
/// success path of every combinator.
///
/// # Examples
///
/// ```
/// use rule_rail::rules::{AlwaysFail, MinLength, StringReason};
/// use rule_rail::validation::Validation;
///
/// let result = Validation::identity("ab")
///     .fold_rule(&MinLength::new(5))
///     .fold_rule(&AlwaysFail::new(StringReason::Empty));
///
/// assert_eq!(result.reasons(), &[StringReason::TooShort { min: 5 }, StringReason::Empty]);
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Wire<R, T>"))]
#[derive(Clone, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Validation<R, T> {
    Valid(T),
    Invalid { value: T, reasons: ErrorVec<R> },
}

/// Serialized shape of [`Validation`], normalised on the way in.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(rename = "Validation")]
enum Wire<R, T> {
    Valid(T),
    Invalid { value: T, reasons: ErrorVec<R> },
}

#[cfg(feature = "serde")]
impl<R, T> From<Wire<R, T>> for Validation<R, T> {
    fn from(wire: Wire<R, T>) -> Self {
        match wire {
            Wire::Valid(value) => Self::Valid(value),
            Wire::Invalid { value, reasons } => Self::invalid_many(value, reasons),
        }
    }
}

impl<R, T> Validation<R, T> {
    /// Creates a successful snapshot with no reasons. Every fold starts here.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::validation::Validation;
    ///
    /// let v = Validation::<&str, _>::identity(42);
    /// assert!(v.is_valid());
    /// assert!(v.reasons().is_empty());
    /// ```
    #[inline]
    pub fn identity(value: T) -> Self {
        Self::Valid(value)
    }

    /// Alias of [`Validation::identity`].
    #[inline]
    pub fn valid(value: T) -> Self {
        Self::Valid(value)
    }

    /// Creates a failed snapshot from a single reason.
    #[inline]
    pub fn invalid(value: T, reason: R) -> Self {
        Self::Invalid { value, reasons: smallvec![reason] }
    }

    /// Creates a snapshot from an iterator of reasons.
    ///
    /// An empty iterator yields a valid snapshot.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::validation::Validation;
    ///
    /// let v = Validation::invalid_many("x", ["missing", "invalid"]);
    /// assert_eq!(v.reasons().len(), 2);
    ///
    /// let v = Validation::<&str, _>::invalid_many("x", []);
    /// assert!(v.is_valid());
    /// ```
    pub fn invalid_many<I>(value: T, reasons: I) -> Self
    where
        I: IntoIterator<Item = R>,
    {
        let reasons: ErrorVec<R> = reasons.into_iter().collect();
        if reasons.is_empty() {
            Self::Valid(value)
        } else {
            Self::Invalid { value, reasons }
        }
    }

    /// `true` when no reason has been collected.
    #[must_use]
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.reasons().is_empty()
    }

    #[must_use]
    #[inline]
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// The subject value, untouched by any fold.
    #[inline]
    pub fn value(&self) -> &T {
        match self {
            Self::Valid(value) | Self::Invalid { value, .. } => value,
        }
    }

    /// Collected reasons in fold order; empty when valid.
    #[inline]
    pub fn reasons(&self) -> &[R] {
        match self {
            Self::Valid(_) => &[],
            Self::Invalid { reasons, .. } => reasons,
        }
    }

    #[inline]
    pub fn iter_reasons(&self) -> core::slice::Iter<'_, R> {
        self.reasons().iter()
    }

    /// Appends one reason, turning a valid snapshot invalid.
    fn push_reason(self, reason: R) -> Self {
        match self {
            Self::Valid(value) => Self::Invalid { value, reasons: smallvec![reason] },
            Self::Invalid { value, mut reasons } => {
                reasons.push(reason);
                Self::Invalid { value, reasons }
            },
        }
    }

    /// Maps each reason while preserving the value.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::validation::Validation;
    ///
    /// let v = Validation::invalid_many(0, ["a", "b"]);
    /// let mapped = v.map_reasons(|r| format!("ERR:{r}"));
    /// assert_eq!(mapped.reasons(), &["ERR:a".to_string(), "ERR:b".to_string()]);
    /// ```
    pub fn map_reasons<S, F>(self, f: F) -> Validation<S, T>
    where
        F: FnMut(R) -> S,
    {
        match self {
            Self::Valid(value) => Validation::Valid(value),
            Self::Invalid { value, reasons } => {
                Validation::Invalid { value, reasons: reasons.into_iter().map(f).collect() }
            },
        }
    }

    /// Dispatches on the variant and returns the chosen callback's result.
    ///
    /// Exactly one of the callbacks runs: `on_success(value)` when valid,
    /// `on_failure(value, reasons)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::validation::Validation;
    ///
    /// let message = Validation::invalid_many("pw", ["too short", "no digit"]).fold(
    ///     |_| String::from("ok"),
    ///     |_, reasons| reasons.join("; "),
    /// );
    /// assert_eq!(message, "too short; no digit");
    /// ```
    pub fn fold<B, S, F>(self, on_success: S, on_failure: F) -> B
    where
        S: FnOnce(T) -> B,
        F: FnOnce(T, ErrorVec<R>) -> B,
    {
        let (value, reasons) = self.into_parts();
        if reasons.is_empty() {
            on_success(value)
        } else {
            on_failure(value, reasons)
        }
    }

    /// Runs `effect` when valid; returns the snapshot unchanged.
    pub fn on_success<F>(self, effect: F) -> Self
    where
        F: FnOnce(&T),
    {
        if self.is_valid() {
            effect(self.value());
        }
        self
    }

    /// Runs `effect` when invalid; returns the snapshot unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::validation::Validation;
    ///
    /// let mut seen = 0;
    /// let v = Validation::invalid("x", "bad")
    ///     .on_success(|_| seen += 10)
    ///     .on_failure(|_, reasons| seen += reasons.len());
    /// assert!(v.is_invalid());
    /// assert_eq!(seen, 1);
    /// ```
    pub fn on_failure<F>(self, effect: F) -> Self
    where
        F: FnOnce(&T, &[R]),
    {
        if self.is_invalid() {
            effect(self.value(), self.reasons());
        }
        self
    }

    /// Converts into a `Result`, keeping every reason on the error side.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::validation::Validation;
    ///
    /// assert_eq!(Validation::<&str, _>::valid(42).to_result(), Ok(42));
    /// assert!(Validation::invalid(42, "error").to_result().is_err());
    /// ```
    pub fn to_result(self) -> Result<T, ErrorVec<R>> {
        let (value, reasons) = self.into_parts();
        if reasons.is_empty() {
            Ok(value)
        } else {
            Err(reasons)
        }
    }

    /// Returns the value when valid.
    #[must_use]
    pub fn into_value(self) -> Option<T> {
        if self.is_valid() {
            Some(self.into_parts().0)
        } else {
            None
        }
    }

    /// Returns the reasons when invalid.
    #[must_use]
    pub fn into_reasons(self) -> Option<ErrorVec<R>> {
        let (_, reasons) = self.into_parts();
        if reasons.is_empty() {
            None
        } else {
            Some(reasons)
        }
    }

    /// Splits into the value and its (possibly empty) reasons.
    pub fn into_parts(self) -> (T, ErrorVec<R>) {
        match self {
            Self::Valid(value) => (value, ErrorVec::new()),
            Self::Invalid { value, reasons } => (value, reasons),
        }
    }
}

impl<R: Reason, T> Validation<R, T> {
    /// Folds one rule's outcome into the snapshot.
    ///
    /// The rule sees the original subject value. A failure appends its
    /// reason after every reason already collected; a pass changes nothing.
    pub fn fold_rule<Ru>(self, rule: &Ru) -> Self
    where
        Ru: Rule<T, Reason = R> + ?Sized,
    {
        match rule.evaluate(self.value()) {
            Check::Pass => self,
            Check::Fail(reason) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(reason = %reason, "rule failed");

                self.push_reason(reason)
            },
        }
    }

    /// Folds every rule of an ordered sequence, without short-circuiting.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::rules::{ContainsDigit, ContainsSymbol, MinLength, StringReason};
    /// use rule_rail::rule_set;
    /// use rule_rail::validation::Validation;
    ///
    /// let policy = rule_set![MinLength::new(12), ContainsDigit, ContainsSymbol];
    /// let result = Validation::identity("hunter2").fold_rules(&policy);
    ///
    /// assert_eq!(
    ///     result.reasons(),
    ///     &[StringReason::TooShort { min: 12 }, StringReason::MissingSymbol]
    /// );
    /// ```
    pub fn fold_rules<I>(self, rules: I) -> Self
    where
        I: IntoIterator,
        I::Item: Rule<T, Reason = R>,
    {
        rules.into_iter().fold(self, |acc, rule| acc.fold_rule(&rule))
    }

    /// Resolves `composition` once for the subject value, then folds the result.
    ///
    /// An empty resolution leaves the snapshot unchanged.
    pub fn fold_composition<C>(self, composition: &C) -> Self
    where
        C: Composition<T, Reason = R> + ?Sized,
    {
        let rules = composition.rules_for(self.value());
        if rules.is_empty() {
            return self;
        }
        self.fold_rules(&rules)
    }
}
