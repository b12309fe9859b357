use core::fmt;

use crate::traits::{Reason, Rule};
use crate::types::alloc_type::{Box, Vec};
use crate::types::ErrorVec;

/// A type-erased rule producing reasons of type `R`.
pub type BoxedRule<T, R> = Box<dyn Rule<T, Reason = R>>;

/// An ordered, owned list of rules over `T`.
///
/// Order is significant: folding a set reports reasons in the order the
/// rules were added. Rules of different concrete types can share a set as
/// long as they agree on the reason type (see [`map_reason`](crate::rules::map_reason)).
///
/// # Lifetimes
///
/// A set owns its rules as `Box<dyn Rule>` with no lifetime parameter, so
/// every rule added must be `'static`. A closure rule that borrows local
/// state cannot be stored; fold such rules directly by reference instead:
///
/// ```
/// use rule_rail::rules::from_fn;
/// use rule_rail::traits::Rule;
/// use rule_rail::types::Check;
/// use rule_rail::validation::validate_all;
///
/// let limit = 10;
/// let below = from_fn(|n: &i32| Check::when(*n < limit, "too large"));
/// let even = from_fn(|n: &i32| Check::when(n % 2 == 0, "odd"));
///
/// let rules: [&dyn Rule<i32, Reason = &str>; 2] = [&below, &even];
/// assert_eq!(validate_all(11, rules).reasons(), &["too large", "odd"]);
/// ```
///
/// # Examples
///
/// ```
/// use rule_rail::rules::{AlwaysFail, MinLength, StringReason};
/// use rule_rail::types::RuleSet;
///
/// let set: RuleSet<str, StringReason> = RuleSet::of(MinLength::new(5))
///     .and(AlwaysFail::new(StringReason::Empty));
///
/// let reasons = set.reasons_for("ab");
/// assert_eq!(reasons.as_slice(), &[StringReason::TooShort { min: 5 }, StringReason::Empty]);
/// ```
pub struct RuleSet<T: ?Sized, R: Reason> {
    rules: Vec<BoxedRule<T, R>>,
}

impl<T: ?Sized, R: Reason> RuleSet<T, R> {
    /// Creates an empty set. Folding it always succeeds.
    #[inline]
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { rules: Vec::with_capacity(capacity) }
    }

    /// Creates a set holding a single rule.
    pub fn of<Ru>(rule: Ru) -> Self
    where
        Ru: Rule<T, Reason = R> + 'static,
    {
        Self::new().and(rule)
    }

    /// Appends `rule` after every rule already in the set.
    #[must_use]
    pub fn and<Ru>(mut self, rule: Ru) -> Self
    where
        Ru: Rule<T, Reason = R> + 'static,
    {
        self.push(rule);
        self
    }

    pub fn push<Ru>(&mut self, rule: Ru)
    where
        Ru: Rule<T, Reason = R> + 'static,
    {
        self.rules.push(Box::new(rule));
    }

    /// Moves every rule of `other` to the end of this set, keeping their order.
    pub fn append(&mut self, mut other: RuleSet<T, R>) {
        self.rules.append(&mut other.rules);
    }

    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, BoxedRule<T, R>> {
        self.rules.iter()
    }

    /// Evaluates every rule against `value` and returns the reasons of the
    /// failing ones, in set order. Never stops early.
    pub fn reasons_for(&self, value: &T) -> ErrorVec<R> {
        self.rules.iter().filter_map(|rule| rule.evaluate(value).into_reason()).collect()
    }
}

/// Builds a two-rule set, `first` before `second`.
///
/// # Examples
///
/// ```
/// use rule_rail::rules::{ContainsDigit, NotBlank};
/// use rule_rail::types::both;
///
/// let set = both::<str, _, _, _>(NotBlank, ContainsDigit);
/// assert_eq!(set.len(), 2);
/// ```
pub fn both<T, R, A, B>(first: A, second: B) -> RuleSet<T, R>
where
    T: ?Sized,
    R: Reason,
    A: Rule<T, Reason = R> + 'static,
    B: Rule<T, Reason = R> + 'static,
{
    RuleSet::of(first).and(second)
}

impl<T: ?Sized, R: Reason> Default for RuleSet<T, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized, R: Reason> fmt::Debug for RuleSet<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSet").field("len", &self.rules.len()).finish()
    }
}

impl<T: ?Sized, R: Reason> FromIterator<BoxedRule<T, R>> for RuleSet<T, R> {
    fn from_iter<I: IntoIterator<Item = BoxedRule<T, R>>>(iter: I) -> Self {
        Self { rules: iter.into_iter().collect() }
    }
}

impl<T: ?Sized, R: Reason> Extend<BoxedRule<T, R>> for RuleSet<T, R> {
    fn extend<I: IntoIterator<Item = BoxedRule<T, R>>>(&mut self, iter: I) {
        self.rules.extend(iter);
    }
}

impl<T: ?Sized, R: Reason> IntoIterator for RuleSet<T, R> {
    type Item = BoxedRule<T, R>;
    type IntoIter = <Vec<BoxedRule<T, R>> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.into_iter()
    }
}

impl<'a, T: ?Sized, R: Reason> IntoIterator for &'a RuleSet<T, R> {
    type Item = &'a BoxedRule<T, R>;
    type IntoIter = core::slice::Iter<'a, BoxedRule<T, R>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
