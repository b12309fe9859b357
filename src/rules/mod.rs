//! Ready-made rules for primitive values.
//!
//! Every rule here is an ordinary [`Rule`](crate::traits::Rule) implementor:
//!
//! - [`adapters`]: constant rules, closures as rules, reason re-tagging
//! - [`string`]: length and character-class checks over anything `AsRef<str>`
//! - [`number`]: sign, parity and range checks
//! - [`substring`]: applies a string rule to a character range of the value
//!
//! # Examples
//!
//! ```
//! use rule_rail::rules::{ContainsDigit, ContainsSymbol, MinLength, StringReason};
//! use rule_rail::rule_set;
//! use rule_rail::validation::validate_all;
//!
//! let password = rule_set![MinLength::new(12), ContainsDigit, ContainsSymbol];
//! let result = validate_all("correcthorse", &password);
//!
//! assert_eq!(result.reasons(), &[StringReason::MissingDigit, StringReason::MissingSymbol]);
//! ```
pub mod adapters;
pub mod number;
pub mod string;
pub mod substring;

pub use adapters::*;
pub use number::*;
pub use string::*;
pub use substring::*;
