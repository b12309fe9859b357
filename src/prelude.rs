//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use rule_rail::prelude::*;
//!
//! let mut name = Validated::with_rules(String::new(), rule_set![NotBlank, MaxLength::new(32)]);
//! assert_eq!(name.reasons(), &[StringReason::Blank]);
//!
//! name.set_value(String::from("ada"));
//! assert!(name.is_valid());
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`rule_set!`]
//! - **Types**: [`Check`], [`RuleSet`], [`Validation`], [`Validated`]
//! - **Traits**: [`Rule`], [`Composition`], [`Reason`]
//! - **Functions**: [`validate`], [`validate_all`], [`validate_with`], [`validate_fold`], [`from_fn`]
//! - **Rules**: the whole [`rules`](crate::rules) catalog

pub use crate::rule_set;

pub use crate::traits::{Composition, Reason, Rule};
pub use crate::types::{both, BoxedRule, Check, ErrorVec, RuleSet, Validated};
pub use crate::validation::{validate, validate_all, validate_fold, validate_with, Validation};

pub use crate::rules::*;
