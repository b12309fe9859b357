use std::cell::Cell;

use rule_rail::rule_set;
use rule_rail::rules::{
    AllDigits, ContainsDigit, Even, MinLength, NotBlank, NumberReason, Positive, StringReason,
};
use rule_rail::types::{RuleSet, Validated};
use rule_rail::validation::{validate_all, Validation};

fn name_rules() -> RuleSet<String, StringReason> {
    rule_set![NotBlank, MinLength::new(3), ContainsDigit]
}

#[test]
fn single_rule_holder_tracks_each_write() {
    let mut field = Validated::new(String::from("123456"), MinLength::new(5));
    assert!(field.is_valid());
    assert!(field.reasons().is_empty());

    field.set_value(String::from("123"));
    assert!(field.is_invalid());
    assert_eq!(field.reasons(), &[StringReason::TooShort { min: 5 }]);

    field.set_value(String::from("12345"));
    assert!(field.is_valid());
    assert!(field.reasons().is_empty());
}

#[test]
fn construction_validates_immediately() {
    let field = Validated::with_rules(String::new(), name_rules());

    assert!(field.is_invalid());
    assert_eq!(
        field.reasons(),
        &[StringReason::Blank, StringReason::TooShort { min: 3 }, StringReason::MissingDigit]
    );
}

#[test]
fn set_value_returns_the_new_reasons() {
    let mut field = Validated::with_rules(String::from("ab1"), name_rules());
    assert!(field.is_valid());

    let reasons = field.set_value(String::from("a"));
    assert_eq!(reasons, &[StringReason::TooShort { min: 3 }, StringReason::MissingDigit]);
}

#[test]
fn holder_matches_a_direct_fold_after_every_write() {
    let mut field = Validated::with_rules(String::from("seed"), name_rules());
    let direct = name_rules();

    for value in ["", "x", "abc", "ab1", "   ", "long enough 7"] {
        field.set_value(value.to_string());
        let expected = validate_all(value.to_string(), &direct);
        assert_eq!(field.reasons(), expected.reasons(), "value {value:?}");
        assert_eq!(field.is_valid(), expected.is_valid());
    }
}

#[test]
fn reasons_from_a_previous_value_never_linger() {
    let mut field = Validated::with_rules(-3_i32, rule_set![Positive, Even]);
    assert_eq!(field.reasons(), &[NumberReason::NotPositive, NumberReason::NotEven]);

    field.set_value(-4);
    assert_eq!(field.reasons(), &[NumberReason::NotPositive]);

    field.set_value(-3);
    assert_eq!(field.reasons(), &[NumberReason::NotPositive, NumberReason::NotEven]);
}

#[test]
fn replace_hands_back_the_old_value() {
    let mut field = Validated::new(4_u32, Even);
    let old = field.replace(5);

    assert_eq!(old, 4);
    assert_eq!(field.value(), &5);
    assert_eq!(field.reasons(), &[NumberReason::NotEven]);
}

#[test]
fn update_mutates_in_place_then_revalidates() {
    let mut field = Validated::new(String::from("ab"), MinLength::new(3));
    assert!(field.is_invalid());

    let reasons = field.update(|value| value.push('c'));
    assert!(reasons.is_empty());
    assert_eq!(field.value(), "abc");
    assert!(field.is_valid());
}

#[test]
fn composition_is_resolved_once_and_frozen() {
    let resolutions = Cell::new(0);
    let pick = |value: &String| -> RuleSet<String, StringReason> {
        resolutions.set(resolutions.get() + 1);
        if value.chars().all(|c| c.is_ascii_digit()) {
            RuleSet::of(MinLength::new(4))
        } else {
            RuleSet::of(AllDigits)
        }
    };

    let mut pin = Validated::with_composition(String::from("1234"), &pick);
    assert!(pin.is_valid());

    pin.set_value(String::from("abcd"));
    pin.set_value(String::from("12"));

    assert_eq!(resolutions.get(), 1);
    assert_eq!(pin.rules().len(), 1);
    assert_eq!(pin.reasons(), &[StringReason::TooShort { min: 4 }]);

    pin.set_value(String::from("abcd"));
    assert!(pin.is_valid(), "frozen MinLength(4) accepts non-digits");
}

#[test]
fn composition_with_no_rules_keeps_the_holder_valid() {
    let none = |_: &i32| -> RuleSet<i32, NumberReason> { RuleSet::new() };
    let mut field = Validated::with_composition(-1, &none);

    assert!(field.is_valid());
    assert!(field.set_value(7).is_empty());
}

#[test]
fn snapshot_and_into_validation_agree() {
    let mut field = Validated::new(String::from("ab"), MinLength::new(3));
    let snapshot = field.snapshot();

    assert_eq!(
        snapshot,
        Validation::invalid(String::from("ab"), StringReason::TooShort { min: 3 })
    );

    field.set_value(String::from("abc"));
    assert_eq!(field.snapshot(), Validation::valid(String::from("abc")));
    assert_eq!(field.into_validation(), Validation::valid(String::from("abc")));
}

#[test]
fn into_value_releases_the_value() {
    let field = Validated::new(9_i64, Positive);
    assert_eq!(field.into_value(), 9);
}

#[test]
fn debug_shows_value_rule_count_and_reasons() {
    let field = Validated::new(3_u8, Even);
    assert_eq!(
        format!("{field:?}"),
        "Validated { value: 3, rules: RuleSet { len: 1 }, reasons: [NotEven] }"
    );
}
