//! Macros for assembling rule sets.
//!
//! - [`macro@crate::rule_set`] - Builds a [`RuleSet`](crate::types::RuleSet)
//!   from rules listed in reporting order.
//!
//! # Examples
//!
//! ```
//! use rule_rail::rules::{ContainsDigit, MinLength, StringReason};
//! use rule_rail::rule_set;
//! use rule_rail::types::RuleSet;
//!
//! let password: RuleSet<str, StringReason> = rule_set![MinLength::new(12), ContainsDigit];
//! assert_eq!(password.len(), 2);
//! ```

/// Builds a [`RuleSet`](crate::types::RuleSet) in declaration order.
///
/// Each rule is appended with [`RuleSet::and`](crate::types::RuleSet::and), so
/// `rule_set![a, b, c]` reports `a`'s reason before `b`'s before `c`'s. All
/// rules must share a reason type; use
/// [`map_reason`](crate::rules::map_reason) to align them.
///
/// # Syntax
///
/// - `rule_set![]` - An empty set, which accepts every value
/// - `rule_set![rule, ...]` - A set of the listed rules
///
/// # Examples
///
/// ```
/// use rule_rail::rules::{AlwaysFail, MinLength, StringReason};
/// use rule_rail::rule_set;
/// use rule_rail::validation::validate_all;
///
/// let result = validate_all("ab", &rule_set![MinLength::new(5), AlwaysFail::new(StringReason::Empty)]);
/// assert_eq!(result.reasons(), &[StringReason::TooShort { min: 5 }, StringReason::Empty]);
/// ```
#[macro_export]
macro_rules! rule_set {
    () => {
        $crate::types::RuleSet::new()
    };
    ($($rule:expr),+ $(,)?) => {
        $crate::types::RuleSet::new()$(.and($rule))+
    };
}
