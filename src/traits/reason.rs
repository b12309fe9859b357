use core::fmt::{Debug, Display};

use crate::types::alloc_type::String;

/// Marker for values that label a specific failed constraint.
///
/// A reason carries no behavior beyond identity and display. Each domain
/// brings its own closed enum (see [`StringReason`](crate::rules::StringReason)
/// and [`NumberReason`](crate::rules::NumberReason)); the engine never
/// creates reasons itself.
///
/// # Examples
///
/// ```
/// use core::fmt;
/// use rule_rail::traits::Reason;
///
/// #[derive(Debug, PartialEq)]
/// enum SignupReason {
///     UsernameTaken,
/// }
///
/// impl fmt::Display for SignupReason {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         f.write_str("username taken")
///     }
/// }
///
/// impl Reason for SignupReason {}
/// ```
pub trait Reason: PartialEq + Debug + Display {}

impl Reason for &'static str {}

impl Reason for String {}
