use crate::traits::{Composition, Reason, Rule};
use crate::types::ErrorVec;
use crate::validation::core::Validation;

/// Checks `value` against a single rule.
///
/// # Examples
///
/// ```
/// use rule_rail::rules::{Positive, NumberReason};
/// use rule_rail::validation::validate;
///
/// assert!(validate(3, &Positive).is_valid());
/// assert_eq!(validate(-3, &Positive).reasons(), &[NumberReason::NotPositive]);
/// ```
pub fn validate<T, Ru>(value: T, rule: &Ru) -> Validation<Ru::Reason, T>
where
    Ru: Rule<T> + ?Sized,
{
    Validation::identity(value).fold_rule(rule)
}

/// Checks `value` against an ordered sequence of rules, collecting every failure.
pub fn validate_all<T, R, I>(value: T, rules: I) -> Validation<R, T>
where
    R: Reason,
    I: IntoIterator,
    I::Item: Rule<T, Reason = R>,
{
    Validation::identity(value).fold_rules(rules)
}

/// Checks `value` against the rules `composition` selects for it.
///
/// # Examples
///
/// ```
/// use rule_rail::rules::{AllDigits, StringReason};
/// use rule_rail::types::RuleSet;
/// use rule_rail::validation::validate_with;
///
/// let only_codes = |value: &String| -> RuleSet<String, StringReason> {
///     if value.starts_with('#') {
///         RuleSet::new()
///     } else {
///         RuleSet::of(AllDigits)
///     }
/// };
///
/// assert!(validate_with(String::from("#anything"), &only_codes).is_valid());
/// assert!(validate_with(String::from("12a"), &only_codes).is_invalid());
/// ```
pub fn validate_with<T, C>(value: T, composition: &C) -> Validation<C::Reason, T>
where
    C: Composition<T> + ?Sized,
{
    Validation::identity(value).fold_composition(composition)
}

/// Checks `value` against `rules` and converts the outcome with
/// [`Validation::fold`].
///
/// # Examples
///
/// ```
/// use rule_rail::rules::{Between, Even};
/// use rule_rail::rule_set;
/// use rule_rail::validation::validate_fold;
///
/// let summary = validate_fold(
///     7_i32,
///     &rule_set![Between::new(1, 5), Even],
///     |n| format!("{n} ok"),
///     |n, reasons| format!("{n}: {} problems", reasons.len()),
/// );
/// assert_eq!(summary, "7: 2 problems");
/// ```
pub fn validate_fold<T, R, I, B, S, F>(value: T, rules: I, on_success: S, on_failure: F) -> B
where
    R: Reason,
    I: IntoIterator,
    I::Item: Rule<T, Reason = R>,
    S: FnOnce(T) -> B,
    F: FnOnce(T, ErrorVec<R>) -> B,
{
    validate_all(value, rules).fold(on_success, on_failure)
}
