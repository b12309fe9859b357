use rule_rail::rule_set;
use rule_rail::rules::{AllDigits, ContainsUppercase, ExactLength, StringReason, Substring};
use rule_rail::traits::Rule;
use rule_rail::types::{Check, RuleSet};
use rule_rail::validation::validate_all;

#[test]
fn applies_the_inner_rule_to_the_character_range() {
    let rule = Substring::new(1..3, ContainsUppercase);
    assert!(rule.evaluate("aBc").is_pass());
    assert_eq!(rule.evaluate("Abc"), Check::Fail(StringReason::MissingUppercase));
}

#[test]
fn ranges_count_characters() {
    let rule = Substring::new(1..3, AllDigits);
    assert!(rule.evaluate("é12x").is_pass());
    assert_eq!(rule.evaluate("1é2"), Check::Fail(StringReason::NotAllDigits));
}

#[test]
fn empty_range_sees_an_empty_slice() {
    let rule = Substring::new(2..2, AllDigits);
    assert!(rule.evaluate("ab").is_pass());
}

#[test]
fn reasons_join_the_fold_in_order() {
    let code: RuleSet<String, StringReason> =
        rule_set![ExactLength::new(6), Substring::new(0..2, AllDigits), Substring::new(2..6, AllDigits)];

    let result = validate_all(String::from("1x34y6"), &code);
    assert_eq!(result.reasons(), &[StringReason::NotAllDigits, StringReason::NotAllDigits]);
}

#[test]
#[should_panic(expected = "range 2..5 exceeds a value of 3 characters")]
fn value_shorter_than_the_range_is_a_contract_violation() {
    let rule = Substring::new(2..5, AllDigits);
    let _ = rule.evaluate("abc");
}

#[test]
#[should_panic(expected = "range start 4 is past its end 1")]
fn inverted_range_is_rejected_at_construction() {
    #[allow(clippy::reversed_empty_ranges)]
    let _ = Substring::new(4..1, AllDigits);
}
