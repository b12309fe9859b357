//! Rules over text.
//!
//! Every rule accepts any `S: AsRef<str> + ?Sized`, so the same rule checks
//! `str`, `&str`, `String` or `Cow<str>` values. Lengths count `char`s, not bytes.
use core::fmt;

use crate::traits::{Reason, Rule};
use crate::types::alloc_type::String;
use crate::types::Check;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Why a string rule failed.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StringReason {
    Empty,
    Blank,
    TooShort { min: usize },
    TooLong { max: usize },
    WrongLength { expected: usize },
    MissingDigit,
    MissingLetter,
    MissingUppercase,
    MissingLowercase,
    MissingSymbol,
    ContainsWhitespace,
    NotAllDigits,
    MissingPrefix,
    MissingSuffix,
    MissingSubstring,
}

impl fmt::Display for StringReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("empty"),
            Self::Blank => f.write_str("blank"),
            Self::TooShort { min } => write!(f, "shorter than {min}"),
            Self::TooLong { max } => write!(f, "longer than {max}"),
            Self::WrongLength { expected } => write!(f, "length is not {expected}"),
            Self::MissingDigit => f.write_str("missing digit"),
            Self::MissingLetter => f.write_str("missing letter"),
            Self::MissingUppercase => f.write_str("missing uppercase letter"),
            Self::MissingLowercase => f.write_str("missing lowercase letter"),
            Self::MissingSymbol => f.write_str("missing symbol"),
            Self::ContainsWhitespace => f.write_str("contains whitespace"),
            Self::NotAllDigits => f.write_str("not all digits"),
            Self::MissingPrefix => f.write_str("missing prefix"),
            Self::MissingSuffix => f.write_str("missing suffix"),
            Self::MissingSubstring => f.write_str("missing substring"),
        }
    }
}

impl Reason for StringReason {}

#[inline]
fn char_len(value: &str) -> usize {
    value.chars().count()
}

macro_rules! char_class_rule {
    ($(#[$meta:meta])* $name:ident, $reason:ident, |$c:ident| $test:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
        pub struct $name;

        impl<S: AsRef<str> + ?Sized> Rule<S> for $name {
            type Reason = StringReason;

            fn evaluate(&self, value: &S) -> Check<StringReason> {
                Check::when(value.as_ref().chars().any(|$c: char| $test), StringReason::$reason)
            }
        }
    };
}

char_class_rule!(
    /// Requires at least one ASCII digit.
    ContainsDigit, MissingDigit, |c| c.is_ascii_digit()
);
char_class_rule!(
    /// Requires at least one alphabetic character.
    ContainsLetter, MissingLetter, |c| c.is_alphabetic()
);
char_class_rule!(ContainsUppercase, MissingUppercase, |c| c.is_uppercase());
char_class_rule!(ContainsLowercase, MissingLowercase, |c| c.is_lowercase());
char_class_rule!(
    /// Requires a character that is neither alphanumeric nor whitespace.
    ContainsSymbol, MissingSymbol, |c| !c.is_alphanumeric() && !c.is_whitespace()
);

/// Rejects the empty string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NotEmpty;

impl<S: AsRef<str> + ?Sized> Rule<S> for NotEmpty {
    type Reason = StringReason;

    fn evaluate(&self, value: &S) -> Check<StringReason> {
        Check::when(!value.as_ref().is_empty(), StringReason::Empty)
    }
}

/// Rejects strings that are empty or whitespace only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NotBlank;

impl<S: AsRef<str> + ?Sized> Rule<S> for NotBlank {
    type Reason = StringReason;

    fn evaluate(&self, value: &S) -> Check<StringReason> {
        Check::when(!value.as_ref().trim().is_empty(), StringReason::Blank)
    }
}

/// Rejects any whitespace character.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoWhitespace;

impl<S: AsRef<str> + ?Sized> Rule<S> for NoWhitespace {
    type Reason = StringReason;

    fn evaluate(&self, value: &S) -> Check<StringReason> {
        let clean = !value.as_ref().chars().any(char::is_whitespace);
        Check::when(clean, StringReason::ContainsWhitespace)
    }
}

/// Requires every character to be an ASCII digit. The empty string passes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AllDigits;

impl<S: AsRef<str> + ?Sized> Rule<S> for AllDigits {
    type Reason = StringReason;

    fn evaluate(&self, value: &S) -> Check<StringReason> {
        let digits = value.as_ref().chars().all(|c| c.is_ascii_digit());
        Check::when(digits, StringReason::NotAllDigits)
    }
}

/// Requires at least `min` characters.
///
/// # Examples
///
/// ```
/// use rule_rail::rules::{MinLength, StringReason};
/// use rule_rail::traits::Rule;
/// use rule_rail::types::Check;
///
/// assert!(MinLength::new(2).evaluate("héllo").is_pass());
/// assert_eq!(MinLength::new(5).evaluate("ab"), Check::Fail(StringReason::TooShort { min: 5 }));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MinLength {
    min: usize,
}

impl MinLength {
    pub fn new(min: usize) -> Self {
        Self { min }
    }
}

impl<S: AsRef<str> + ?Sized> Rule<S> for MinLength {
    type Reason = StringReason;

    fn evaluate(&self, value: &S) -> Check<StringReason> {
        Check::when(char_len(value.as_ref()) >= self.min, StringReason::TooShort { min: self.min })
    }
}

/// Allows at most `max` characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MaxLength {
    max: usize,
}

impl MaxLength {
    pub fn new(max: usize) -> Self {
        Self { max }
    }
}

impl<S: AsRef<str> + ?Sized> Rule<S> for MaxLength {
    type Reason = StringReason;

    fn evaluate(&self, value: &S) -> Check<StringReason> {
        Check::when(char_len(value.as_ref()) <= self.max, StringReason::TooLong { max: self.max })
    }
}

/// Requires exactly `expected` characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExactLength {
    expected: usize,
}

impl ExactLength {
    pub fn new(expected: usize) -> Self {
        Self { expected }
    }
}

impl<S: AsRef<str> + ?Sized> Rule<S> for ExactLength {
    type Reason = StringReason;

    fn evaluate(&self, value: &S) -> Check<StringReason> {
        Check::when(
            char_len(value.as_ref()) == self.expected,
            StringReason::WrongLength { expected: self.expected },
        )
    }
}

/// Requires a character count within `min..=max`.
///
/// Too short values fail with [`StringReason::TooShort`], too long ones with
/// [`StringReason::TooLong`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LengthBetween {
    min: usize,
    max: usize,
}

impl LengthBetween {
    /// # Panics
    ///
    /// Panics if `min > max`.
    pub fn new(min: usize, max: usize) -> Self {
        assert!(min <= max, "LengthBetween: min ({min}) is greater than max ({max})");
        Self { min, max }
    }
}

impl<S: AsRef<str> + ?Sized> Rule<S> for LengthBetween {
    type Reason = StringReason;

    fn evaluate(&self, value: &S) -> Check<StringReason> {
        let len = char_len(value.as_ref());
        if len < self.min {
            Check::Fail(StringReason::TooShort { min: self.min })
        } else if len > self.max {
            Check::Fail(StringReason::TooLong { max: self.max })
        } else {
            Check::Pass
        }
    }
}

/// Requires the value to start with a fixed prefix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StartsWith {
    prefix: String,
}

impl StartsWith {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into() }
    }
}

impl<S: AsRef<str> + ?Sized> Rule<S> for StartsWith {
    type Reason = StringReason;

    fn evaluate(&self, value: &S) -> Check<StringReason> {
        Check::when(value.as_ref().starts_with(self.prefix.as_str()), StringReason::MissingPrefix)
    }
}

/// Requires the value to end with a fixed suffix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EndsWith {
    suffix: String,
}

impl EndsWith {
    pub fn new(suffix: impl Into<String>) -> Self {
        Self { suffix: suffix.into() }
    }
}

impl<S: AsRef<str> + ?Sized> Rule<S> for EndsWith {
    type Reason = StringReason;

    fn evaluate(&self, value: &S) -> Check<StringReason> {
        Check::when(value.as_ref().ends_with(self.suffix.as_str()), StringReason::MissingSuffix)
    }
}

/// Requires the value to contain a fixed substring.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Contains {
    needle: String,
}

impl Contains {
    pub fn new(needle: impl Into<String>) -> Self {
        Self { needle: needle.into() }
    }
}

impl<S: AsRef<str> + ?Sized> Rule<S> for Contains {
    type Reason = StringReason;

    fn evaluate(&self, value: &S) -> Check<StringReason> {
        Check::when(value.as_ref().contains(self.needle.as_str()), StringReason::MissingSubstring)
    }
}
