//! The accumulator and its entry points.
//!
//! [`Validation`] is the immutable snapshot of a value plus every reason
//! collected against it. Folding rules into a snapshot never short-circuits:
//! each rule runs, and failing rules append their reason in fold order.
//!
//! # Key Components
//!
//! - [`Validation`] - snapshot type with the fold and combinator operations
//! - [`validate`], [`validate_all`], [`validate_with`], [`validate_fold`] -
//!   start from [`Validation::identity`] and fold in one call
//!
//! # Examples
//!
//! ```
//! use rule_rail::rules::{NotBlank, MaxLength, StringReason};
//! use rule_rail::rule_set;
//! use rule_rail::validation::validate_all;
//!
//! let result = validate_all("   ", &rule_set![NotBlank, MaxLength::new(2)]);
//! assert_eq!(result.reasons(), &[StringReason::Blank, StringReason::TooLong { max: 2 }]);
//! ```
pub mod combinators;
pub mod core;

pub use self::combinators::*;
pub use self::core::*;
