//! Rule-based validation that reports every failed rule, not just the first.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! depend on `rule_rail::*`, the [`prelude`], or pick focused pieces.
//!
//! # Examples
//!
//! ## Folding rules into a snapshot
//!
//! ```
//! use rule_rail::rules::{AlwaysFail, MinLength, StringReason};
//! use rule_rail::rule_set;
//! use rule_rail::validation::Validation;
//!
//! let result = Validation::identity("ab")
//!     .fold_rules(&rule_set![MinLength::new(5), AlwaysFail::new(StringReason::Empty)]);
//!
//! assert!(result.is_invalid());
//! assert_eq!(result.reasons(), &[StringReason::TooShort { min: 5 }, StringReason::Empty]);
//! ```
//!
//! ## Value-dependent rules
//!
//! ```
//! use rule_rail::rules::{AllDigits, ExactLength, MinLength, StringReason};
//! use rule_rail::rule_set;
//! use rule_rail::types::RuleSet;
//! use rule_rail::validation::validate_with;
//!
//! let account = |id: &String| -> RuleSet<String, StringReason> {
//!     if id.starts_with("EXT-") {
//!         RuleSet::of(MinLength::new(8))
//!     } else {
//!         rule_set![AllDigits, ExactLength::new(6)]
//!     }
//! };
//!
//! assert!(validate_with(String::from("EXT-1234"), &account).is_valid());
//! assert_eq!(
//!     validate_with(String::from("12a"), &account).reasons(),
//!     &[StringReason::NotAllDigits, StringReason::WrongLength { expected: 6 }]
//! );
//! ```
//!
//! ## A live field
//!
//! ```
//! use rule_rail::rules::{MinLength, StringReason};
//! use rule_rail::types::Validated;
//!
//! let mut field = Validated::new(String::from("123456"), MinLength::new(5));
//! assert!(field.is_valid());
//!
//! assert_eq!(field.set_value(String::from("123")), &[StringReason::TooShort { min: 5 }]);
//! assert!(field.set_value(String::from("12345")).is_empty());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Macros for assembling rule sets
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Ready-made rules for strings and numbers
pub mod rules;
/// Reason, Rule and Composition traits
pub mod traits;
/// Check outcomes, rule sets and the live validated holder
pub mod types;
/// The Validation accumulator and its entry points
pub mod validation;

pub use traits::*;
pub use types::{both, BoxedRule, Check, ErrorVec, RuleSet, Validated};
pub use validation::*;
