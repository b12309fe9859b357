use core::fmt;
use core::marker::PhantomData;

use crate::traits::{Reason, Rule};
use crate::types::Check;

/// A rule that always passes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AlwaysPass<R> {
    _reason: PhantomData<fn() -> R>,
}

impl<R> AlwaysPass<R> {
    pub fn new() -> Self {
        Self { _reason: PhantomData }
    }
}

impl<T: ?Sized, R: Reason> Rule<T> for AlwaysPass<R> {
    type Reason = R;

    #[inline]
    fn evaluate(&self, _value: &T) -> Check<R> {
        Check::Pass
    }
}

/// A rule that always fails with the same reason.
///
/// # Examples
///
/// ```
/// use rule_rail::rules::AlwaysFail;
/// use rule_rail::traits::Rule;
/// use rule_rail::types::Check;
///
/// let rule = AlwaysFail::new("closed");
/// assert_eq!(Rule::<u8>::evaluate(&rule, &1), Check::Fail("closed"));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AlwaysFail<R> {
    reason: R,
}

impl<R> AlwaysFail<R> {
    pub fn new(reason: R) -> Self {
        Self { reason }
    }
}

impl<T: ?Sized, R: Reason + Clone> Rule<T> for AlwaysFail<R> {
    type Reason = R;

    #[inline]
    fn evaluate(&self, _value: &T) -> Check<R> {
        Check::Fail(self.reason.clone())
    }
}

/// A rule backed by a closure. Built with [`from_fn`].
pub struct FnRule<T: ?Sized, F> {
    f: F,
    _value: PhantomData<fn(&T)>,
}

/// Turns `f` into a rule.
///
/// The closure must behave like any other rule: total, deterministic and
/// free of side effects.
///
/// # Examples
///
/// ```
/// use rule_rail::rules::from_fn;
/// use rule_rail::traits::Rule;
/// use rule_rail::types::Check;
///
/// let lowercase = from_fn(|s: &str| Check::when(s == s.to_lowercase(), "not lowercase"));
/// assert!(lowercase.evaluate("abc").is_pass());
/// assert!(lowercase.evaluate("aBc").is_fail());
/// ```
pub fn from_fn<T, R, F>(f: F) -> FnRule<T, F>
where
    T: ?Sized,
    R: Reason,
    F: Fn(&T) -> Check<R>,
{
    FnRule { f, _value: PhantomData }
}

impl<T, R, F> Rule<T> for FnRule<T, F>
where
    T: ?Sized,
    R: Reason,
    F: Fn(&T) -> Check<R>,
{
    type Reason = R;

    #[inline]
    fn evaluate(&self, value: &T) -> Check<R> {
        (self.f)(value)
    }
}

impl<T: ?Sized, F> fmt::Debug for FnRule<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnRule").finish_non_exhaustive()
    }
}

/// Re-tags the failures of an inner rule. Built with [`map_reason`].
#[derive(Clone, Copy)]
pub struct MapReason<Ru, F> {
    rule: Ru,
    f: F,
}

impl<Ru, F> MapReason<Ru, F> {
    pub fn inner(&self) -> &Ru {
        &self.rule
    }
}

/// Re-tags the failures of `rule` with `f`.
///
/// Lets rules from different catalogs share one [`RuleSet`](crate::types::RuleSet).
/// The rule passes exactly when `rule` passes.
///
/// # Examples
///
/// ```
/// use rule_rail::rules::{map_reason, MinLength};
/// use rule_rail::traits::Rule;
/// use rule_rail::types::Check;
///
/// let rule = map_reason(MinLength::new(3), |_| "username too short");
/// assert_eq!(rule.evaluate("ab"), Check::Fail("username too short"));
/// ```
pub fn map_reason<Ru, F>(rule: Ru, f: F) -> MapReason<Ru, F> {
    MapReason { rule, f }
}

impl<T, Ru, S, F> Rule<T> for MapReason<Ru, F>
where
    T: ?Sized,
    Ru: Rule<T>,
    S: Reason,
    F: Fn(Ru::Reason) -> S,
{
    type Reason = S;

    #[inline]
    fn evaluate(&self, value: &T) -> Check<S> {
        self.rule.evaluate(value).map_reason(&self.f)
    }
}

impl<Ru: fmt::Debug, F> fmt::Debug for MapReason<Ru, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapReason").field("rule", &self.rule).finish_non_exhaustive()
    }
}
