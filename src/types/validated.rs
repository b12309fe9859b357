use core::fmt;

use crate::traits::{Composition, Reason, Rule};
use crate::types::{ErrorVec, RuleSet};
use crate::validation::Validation;

/// A value that keeps its validation result in sync with its contents.
///
/// The rule set is fixed at construction. Every write through
/// [`set_value`](Validated::set_value), [`replace`](Validated::replace) or
/// [`update`](Validated::update) re-runs the whole set against the new value
/// and replaces the stored reasons. Reasons from a previous value never
/// survive a write.
///
/// There is no "not yet validated" state: the constructor validates, so a
/// holder is always either valid or invalid.
///
/// # Frozen compositions
///
/// [`with_composition`](Validated::with_composition) resolves the
/// composition once, against the initial value, and keeps that rule set for
/// the life of the holder. Later values are checked against those same rules
/// even if the composition would pick different ones for them.
///
/// # Examples
///
/// ```
/// use rule_rail::rules::{MinLength, StringReason};
/// use rule_rail::types::Validated;
///
/// let mut field = Validated::new(String::from("123456"), MinLength::new(5));
/// assert!(field.is_valid());
///
/// field.set_value(String::from("123"));
/// assert!(field.is_invalid());
/// assert_eq!(field.reasons(), &[StringReason::TooShort { min: 5 }]);
///
/// field.set_value(String::from("12345"));
/// assert!(field.is_valid());
/// ```
pub struct Validated<T, R: Reason> {
    value: T,
    rules: RuleSet<T, R>,
    reasons: ErrorVec<R>,
}

impl<T, R: Reason> Validated<T, R> {
    /// Creates a holder checked by a single rule.
    pub fn new<Ru>(value: T, rule: Ru) -> Self
    where
        Ru: Rule<T, Reason = R> + 'static,
    {
        Self::with_rules(value, RuleSet::of(rule))
    }

    /// Creates a holder checked by an ordered rule set.
    pub fn with_rules(value: T, rules: RuleSet<T, R>) -> Self {
        let reasons = rules.reasons_for(&value);
        Self { value, rules, reasons }
    }

    /// Creates a holder whose rules are resolved from `composition` for the
    /// initial value and then frozen.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::rules::{AllDigits, MinLength, StringReason};
    /// use rule_rail::types::{RuleSet, Validated};
    ///
    /// let pick = |value: &String| -> RuleSet<String, StringReason> {
    ///     if value.chars().all(|c| c.is_ascii_digit()) {
    ///         RuleSet::of(MinLength::new(4))
    ///     } else {
    ///         RuleSet::of(AllDigits)
    ///     }
    /// };
    ///
    /// let mut pin = Validated::with_composition(String::from("1234"), &pick);
    /// assert!(pin.is_valid());
    ///
    /// // Still checked by MinLength(4), not re-resolved to AllDigits.
    /// pin.set_value(String::from("abcd"));
    /// assert!(pin.is_valid());
    /// ```
    pub fn with_composition<C>(value: T, composition: &C) -> Self
    where
        C: Composition<T, Reason = R> + ?Sized,
    {
        let rules = composition.rules_for(&value);
        Self::with_rules(value, rules)
    }

    /// Replaces the value, re-validates it, and returns the new reasons.
    pub fn set_value(&mut self, value: T) -> &[R] {
        self.value = value;
        self.revalidate();
        &self.reasons
    }

    /// Replaces the value, re-validates it, and returns the previous value.
    pub fn replace(&mut self, value: T) -> T {
        let previous = core::mem::replace(&mut self.value, value);
        self.revalidate();
        previous
    }

    /// Mutates the value in place, re-validates it, and returns the new reasons.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::rules::{Even, NumberReason};
    /// use rule_rail::types::Validated;
    ///
    /// let mut counter = Validated::new(2_u32, Even);
    /// assert_eq!(counter.update(|n| *n += 1), &[NumberReason::NotEven]);
    /// ```
    pub fn update<F>(&mut self, f: F) -> &[R]
    where
        F: FnOnce(&mut T),
    {
        f(&mut self.value);
        self.revalidate();
        &self.reasons
    }

    fn revalidate(&mut self) {
        self.reasons = self.rules.reasons_for(&self.value);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            rules = self.rules.len(),
            reasons = self.reasons.len(),
            "re-validated holder value"
        );
    }

    #[must_use]
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.reasons.is_empty()
    }

    #[must_use]
    #[inline]
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Reasons derived from the current value, in rule order.
    #[inline]
    pub fn reasons(&self) -> &[R] {
        &self.reasons
    }

    /// The frozen rule set.
    #[inline]
    pub fn rules(&self) -> &RuleSet<T, R> {
        &self.rules
    }

    /// Copies the current state into an immutable snapshot.
    pub fn snapshot(&self) -> Validation<R, T>
    where
        T: Clone,
        R: Clone,
    {
        Validation::invalid_many(self.value.clone(), self.reasons.iter().cloned())
    }

    /// Consumes the holder, keeping the value and its reasons.
    pub fn into_validation(self) -> Validation<R, T> {
        Validation::invalid_many(self.value, self.reasons)
    }

    pub fn into_value(self) -> T {
        self.value
    }
}

impl<T: fmt::Debug, R: Reason> fmt::Debug for Validated<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validated")
            .field("value", &self.value)
            .field("rules", &self.rules)
            .field("reasons", &self.reasons)
            .finish()
    }
}
