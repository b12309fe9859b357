//! Rules over numbers.
//!
//! Sign and range rules work for any `PartialOrd` type whose `Default` is its
//! zero, which covers every primitive integer and float. Parity rules are
//! implemented for the primitive integers.
use core::fmt;

use crate::traits::{Reason, Rule};
use crate::types::Check;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Why a numeric rule failed.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NumberReason {
    NotPositive,
    NotNegative,
    Negative,
    Zero,
    NotEven,
    NotOdd,
    TooSmall,
    TooLarge,
}

impl fmt::Display for NumberReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::NotPositive => "not positive",
            Self::NotNegative => "not negative",
            Self::Negative => "negative",
            Self::Zero => "zero",
            Self::NotEven => "not even",
            Self::NotOdd => "not odd",
            Self::TooSmall => "too small",
            Self::TooLarge => "too large",
        };
        f.write_str(text)
    }
}

impl Reason for NumberReason {}

/// Requires a value strictly greater than zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Positive;

impl<N: PartialOrd + Default> Rule<N> for Positive {
    type Reason = NumberReason;

    fn evaluate(&self, value: &N) -> Check<NumberReason> {
        Check::when(*value > N::default(), NumberReason::NotPositive)
    }
}

/// Requires a value strictly less than zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Negative;

impl<N: PartialOrd + Default> Rule<N> for Negative {
    type Reason = NumberReason;

    fn evaluate(&self, value: &N) -> Check<NumberReason> {
        Check::when(*value < N::default(), NumberReason::NotNegative)
    }
}

/// Requires a value of zero or more.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NonNegative;

impl<N: PartialOrd + Default> Rule<N> for NonNegative {
    type Reason = NumberReason;

    fn evaluate(&self, value: &N) -> Check<NumberReason> {
        Check::when(*value >= N::default(), NumberReason::Negative)
    }
}

/// Rejects zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NonZero;

impl<N: PartialEq + Default> Rule<N> for NonZero {
    type Reason = NumberReason;

    fn evaluate(&self, value: &N) -> Check<NumberReason> {
        Check::when(*value != N::default(), NumberReason::Zero)
    }
}

/// Requires an even integer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Even;

/// Requires an odd integer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Odd;

macro_rules! impl_parity {
    ($($int:ty),* $(,)?) => {
        $(
            impl Rule<$int> for Even {
                type Reason = NumberReason;

                fn evaluate(&self, value: &$int) -> Check<NumberReason> {
                    Check::when(*value % 2 == 0, NumberReason::NotEven)
                }
            }

            impl Rule<$int> for Odd {
                type Reason = NumberReason;

                fn evaluate(&self, value: &$int) -> Check<NumberReason> {
                    Check::when(*value % 2 != 0, NumberReason::NotOdd)
                }
            }
        )*
    };
}

impl_parity!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Requires a value of at least `min`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AtLeast<N> {
    min: N,
}

impl<N> AtLeast<N> {
    pub fn new(min: N) -> Self {
        Self { min }
    }
}

impl<N: PartialOrd> Rule<N> for AtLeast<N> {
    type Reason = NumberReason;

    fn evaluate(&self, value: &N) -> Check<NumberReason> {
        Check::when(*value >= self.min, NumberReason::TooSmall)
    }
}

/// Requires a value of at most `max`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AtMost<N> {
    max: N,
}

impl<N> AtMost<N> {
    pub fn new(max: N) -> Self {
        Self { max }
    }
}

impl<N: PartialOrd> Rule<N> for AtMost<N> {
    type Reason = NumberReason;

    fn evaluate(&self, value: &N) -> Check<NumberReason> {
        Check::when(*value <= self.max, NumberReason::TooLarge)
    }
}

/// Requires a value within `min..=max`.
///
/// # Examples
///
/// ```
/// use rule_rail::rules::{Between, NumberReason};
/// use rule_rail::traits::Rule;
/// use rule_rail::types::Check;
///
/// let age = Between::new(18, 130);
/// assert!(age.evaluate(&30).is_pass());
/// assert_eq!(age.evaluate(&12), Check::Fail(NumberReason::TooSmall));
/// assert_eq!(age.evaluate(&200), Check::Fail(NumberReason::TooLarge));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Between<N> {
    min: N,
    max: N,
}

impl<N: PartialOrd> Between<N> {
    /// # Panics
    ///
    /// Panics if `min <= max` does not hold, including when either bound is NaN.
    pub fn new(min: N, max: N) -> Self {
        assert!(min <= max, "Between: bounds are not ordered");
        Self { min, max }
    }
}

impl<N: PartialOrd> Rule<N> for Between<N> {
    type Reason = NumberReason;

    fn evaluate(&self, value: &N) -> Check<NumberReason> {
        if *value < self.min {
            Check::Fail(NumberReason::TooSmall)
        } else if *value > self.max {
            Check::Fail(NumberReason::TooLarge)
        } else {
            Check::Pass
        }
    }
}
