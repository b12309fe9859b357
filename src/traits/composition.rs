use crate::traits::Reason;
use crate::types::RuleSet;

/// Selects the ordered rules that apply to a particular value.
///
/// A composition may inspect the value's shape and return different rule
/// sets for different values. An empty set means the value is vacuously
/// valid. The order of the returned set is the order reasons are reported in.
///
/// Any `Fn(&T) -> RuleSet<T, R>` closure is a composition.
///
/// # Examples
///
/// ```
/// use rule_rail::rules::{ContainsDigit, MinLength, StringReason};
/// use rule_rail::traits::Composition;
/// use rule_rail::types::RuleSet;
/// use rule_rail::rule_set;
///
/// let password = |value: &String| -> RuleSet<String, StringReason> {
///     if value.starts_with("tmp-") {
///         RuleSet::new()
///     } else {
///         rule_set![MinLength::new(12), ContainsDigit]
///     }
/// };
///
/// assert!(password.rules_for(&"tmp-1".to_string()).is_empty());
/// assert_eq!(password.rules_for(&"hunter2".to_string()).len(), 2);
/// ```
pub trait Composition<T: ?Sized> {
    type Reason: Reason;

    /// Resolves the rules to apply to `value`, in reporting order.
    fn rules_for(&self, value: &T) -> RuleSet<T, Self::Reason>;
}

impl<T, R, F> Composition<T> for F
where
    T: ?Sized,
    R: Reason,
    F: Fn(&T) -> RuleSet<T, R>,
{
    type Reason = R;

    #[inline]
    fn rules_for(&self, value: &T) -> RuleSet<T, R> {
        self(value)
    }
}
