use crate::traits::Reason;
use crate::types::alloc_type::Box;
use crate::types::{BoxedRule, Check};

/// A total check of one value.
///
/// `evaluate` must terminate for every value in the rule's documented domain
/// and must depend only on its argument and the parameters the rule was built
/// with. Folding relies on this to produce the same reasons, in the same
/// order, for the same input.
///
/// A rule is never the place to report its own misconfiguration. Parameters
/// that contradict each other, or that cannot apply to the value at hand,
/// panic (see [`Substring`](crate::rules::Substring)) rather than turning
/// into a reason.
///
/// # Examples
///
/// ```
/// use rule_rail::traits::Rule;
/// use rule_rail::types::Check;
///
/// struct AtMost(u32);
///
/// impl Rule<u32> for AtMost {
///     type Reason = &'static str;
///
///     fn evaluate(&self, value: &u32) -> Check<Self::Reason> {
///         Check::when(*value <= self.0, "too large")
///     }
/// }
///
/// assert!(AtMost(3).evaluate(&2).is_pass());
/// assert!(AtMost(3).evaluate(&4).is_fail());
/// ```
pub trait Rule<T: ?Sized> {
    type Reason: Reason;

    /// Evaluates the rule against `value`.
    fn evaluate(&self, value: &T) -> Check<Self::Reason>;

    /// Boxes the rule so it can be stored next to rules of other types.
    fn boxed(self) -> BoxedRule<T, Self::Reason>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

impl<T, Ru> Rule<T> for &Ru
where
    T: ?Sized,
    Ru: Rule<T> + ?Sized,
{
    type Reason = Ru::Reason;

    #[inline]
    fn evaluate(&self, value: &T) -> Check<Self::Reason> {
        (**self).evaluate(value)
    }
}

impl<T, Ru> Rule<T> for Box<Ru>
where
    T: ?Sized,
    Ru: Rule<T> + ?Sized,
{
    type Reason = Ru::Reason;

    #[inline]
    fn evaluate(&self, value: &T) -> Check<Self::Reason> {
        (**self).evaluate(value)
    }
}
