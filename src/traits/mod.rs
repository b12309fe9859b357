//! Core traits of the accumulation engine.
//!
//! - [`Reason`]: opaque identity of a failed constraint
//! - [`Rule`]: a total check of one value, producing [`Check`](crate::types::Check)
//! - [`Composition`]: a value-dependent selector of an ordered [`RuleSet`](crate::types::RuleSet)
//!
//! # Examples
//!
//! ```
//! use rule_rail::traits::Rule;
//! use rule_rail::types::Check;
//!
//! struct NonEmpty;
//!
//! impl Rule<str> for NonEmpty {
//!     type Reason = &'static str;
//!
//!     fn evaluate(&self, value: &str) -> Check<Self::Reason> {
//!         Check::when(!value.is_empty(), "empty")
//!     }
//! }
//!
//! assert!(NonEmpty.evaluate("x").is_pass());
//! assert_eq!(NonEmpty.evaluate(""), Check::Fail("empty"));
//! ```

pub mod composition;
pub mod reason;
pub mod rule;

pub use composition::Composition;
pub use reason::Reason;
pub use rule::Rule;
