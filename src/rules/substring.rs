use core::ops::Range;

use crate::traits::Rule;
use crate::types::Check;

/// Applies a string rule to a character range of the value.
///
/// The range counts `char`s. It is part of the rule's configuration, so a
/// value too short to contain it is a contract violation by the caller and
/// panics instead of producing a reason. Pair it with a length rule folded
/// earlier when inputs of unknown length are expected.
///
/// # Examples
///
/// ```
/// use rule_rail::rules::{AllDigits, StringReason, Substring};
/// use rule_rail::traits::Rule;
/// use rule_rail::types::Check;
///
/// let area_code = Substring::new(0..3, AllDigits);
/// assert!(area_code.evaluate("555-0100").is_pass());
/// assert_eq!(area_code.evaluate("5a5-0100"), Check::Fail(StringReason::NotAllDigits));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Substring<Ru> {
    range: Range<usize>,
    rule: Ru,
}

impl<Ru> Substring<Ru> {
    /// # Panics
    ///
    /// Panics if `range.start > range.end`.
    pub fn new(range: Range<usize>, rule: Ru) -> Self {
        assert!(
            range.start <= range.end,
            "Substring: range start {} is past its end {}",
            range.start,
            range.end
        );
        Self { range, rule }
    }

    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }
}

/// Byte span of the `start..end` character range of `value`, if it fits.
fn byte_span(value: &str, start: usize, end: usize) -> Option<Range<usize>> {
    let mut boundaries = value.char_indices().map(|(i, _)| i).chain(core::iter::once(value.len()));
    let from = boundaries.nth(start)?;
    if end == start {
        return Some(from..from);
    }
    let to = boundaries.nth(end - start - 1)?;
    Some(from..to)
}

impl<S, Ru> Rule<S> for Substring<Ru>
where
    S: AsRef<str> + ?Sized,
    Ru: Rule<str>,
{
    type Reason = Ru::Reason;

    /// # Panics
    ///
    /// Panics if the value has fewer than `range.end` characters.
    fn evaluate(&self, value: &S) -> Check<Ru::Reason> {
        let value = value.as_ref();
        let span = match byte_span(value, self.range.start, self.range.end) {
            Some(span) => span,
            None => panic!(
                "Substring: range {}..{} exceeds a value of {} characters",
                self.range.start,
                self.range.end,
                value.chars().count()
            ),
        };
        self.rule.evaluate(&value[span])
    }
}
