use rule_rail::rules::{
    AllDigits, Contains, ContainsDigit, ContainsLetter, ContainsLowercase, ContainsSymbol,
    ContainsUppercase, EndsWith, ExactLength, LengthBetween, MaxLength, MinLength, NoWhitespace,
    NotBlank, NotEmpty, StartsWith, StringReason,
};
use rule_rail::traits::Rule;
use rule_rail::types::Check;
use std::borrow::Cow;

#[test]
fn length_rules_count_characters_not_bytes() {
    let accented = "héé";
    assert_eq!(accented.len(), 5);

    assert!(MinLength::new(3).evaluate(accented).is_pass());
    assert!(MaxLength::new(3).evaluate(accented).is_pass());
    assert!(ExactLength::new(3).evaluate(accented).is_pass());
    assert_eq!(MaxLength::new(2).evaluate(accented), Check::Fail(StringReason::TooLong { max: 2 }));
    assert_eq!(
        ExactLength::new(4).evaluate(accented),
        Check::Fail(StringReason::WrongLength { expected: 4 })
    );
}

#[test]
fn rules_accept_any_string_like_value() {
    let owned = String::from("abc");
    let borrowed: &str = "abc";
    let cow: Cow<'_, str> = Cow::Borrowed("abc");

    assert!(MinLength::new(3).evaluate(&owned).is_pass());
    assert!(MinLength::new(3).evaluate(&borrowed).is_pass());
    assert!(MinLength::new(3).evaluate(&cow).is_pass());
    assert!(MinLength::new(3).evaluate("abc").is_pass());
}

#[test]
fn length_between_reports_the_violated_side() {
    let rule = LengthBetween::new(2, 4);
    assert_eq!(rule.evaluate("a"), Check::Fail(StringReason::TooShort { min: 2 }));
    assert!(rule.evaluate("abc").is_pass());
    assert_eq!(rule.evaluate("abcde"), Check::Fail(StringReason::TooLong { max: 4 }));
}

#[test]
#[should_panic(expected = "min (10) is greater than max (2)")]
fn length_between_rejects_inverted_bounds() {
    let _ = LengthBetween::new(10, 2);
}

#[test]
fn emptiness_and_blankness_differ() {
    assert_eq!(NotEmpty.evaluate(""), Check::Fail(StringReason::Empty));
    assert!(NotEmpty.evaluate("  ").is_pass());
    assert_eq!(NotBlank.evaluate("  \t"), Check::Fail(StringReason::Blank));
    assert_eq!(NotBlank.evaluate(""), Check::Fail(StringReason::Blank));
    assert!(NotBlank.evaluate(" a ").is_pass());
}

#[test]
fn character_classes() {
    assert!(ContainsDigit.evaluate("a1").is_pass());
    assert_eq!(ContainsDigit.evaluate("ab"), Check::Fail(StringReason::MissingDigit));

    assert!(ContainsLetter.evaluate("1é").is_pass());
    assert_eq!(ContainsLetter.evaluate("12"), Check::Fail(StringReason::MissingLetter));

    assert!(ContainsUppercase.evaluate("aB").is_pass());
    assert_eq!(ContainsUppercase.evaluate("ab"), Check::Fail(StringReason::MissingUppercase));

    assert!(ContainsLowercase.evaluate("Ab").is_pass());
    assert_eq!(ContainsLowercase.evaluate("AB"), Check::Fail(StringReason::MissingLowercase));

    assert!(ContainsSymbol.evaluate("a&b").is_pass());
    assert_eq!(ContainsSymbol.evaluate("a b1"), Check::Fail(StringReason::MissingSymbol));

    assert!(NoWhitespace.evaluate("ab").is_pass());
    assert_eq!(NoWhitespace.evaluate("a\nb"), Check::Fail(StringReason::ContainsWhitespace));
}

#[test]
fn all_digits_accepts_the_empty_string() {
    assert!(AllDigits.evaluate("").is_pass());
    assert!(AllDigits.evaluate("0123").is_pass());
    assert_eq!(AllDigits.evaluate("12a"), Check::Fail(StringReason::NotAllDigits));
}

#[test]
fn affix_rules() {
    assert!(StartsWith::new("https://").evaluate("https://x").is_pass());
    assert_eq!(StartsWith::new("https://").evaluate("http://x"), Check::Fail(StringReason::MissingPrefix));

    assert!(EndsWith::new(".rs").evaluate("lib.rs").is_pass());
    assert_eq!(EndsWith::new(".rs").evaluate("lib.py"), Check::Fail(StringReason::MissingSuffix));

    assert!(Contains::new("@").evaluate("a@b").is_pass());
    assert_eq!(Contains::new("@").evaluate("ab"), Check::Fail(StringReason::MissingSubstring));
}

#[test]
fn reasons_display_as_short_phrases() {
    assert_eq!(StringReason::TooShort { min: 12 }.to_string(), "shorter than 12");
    assert_eq!(StringReason::MissingSymbol.to_string(), "missing symbol");
}
