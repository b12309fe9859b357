//! Storage and outcome types shared by the accumulation engine.
//!
//! # Examples
//!
//! ```
//! use rule_rail::types::{Check, ErrorVec};
//!
//! let outcome: Check<&str> = Check::when(3 > 5, "too small");
//! assert!(outcome.is_fail());
//!
//! let reasons: ErrorVec<&str> = outcome.into_reason().into_iter().collect();
//! assert_eq!(reasons.as_slice(), &["too small"]);
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod check;
pub mod rule_set;
pub mod validated;

pub use check::*;
pub use rule_set::*;
pub use validated::*;

/// SmallVec-backed collection used for accumulating failure reasons.
///
/// Uses inline storage for a single element to avoid heap allocations
/// in the common case where at most one rule fails.
pub type ErrorVec<R> = SmallVec<[R; 1]>;
