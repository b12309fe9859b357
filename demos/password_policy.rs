//! Password policy with value-dependent rules and a live field.
//!
//! Run with `cargo run --example password_policy`.

use rule_rail::prelude::*;

fn policy(candidate: &String) -> RuleSet<String, StringReason> {
    // One-time codes issued by support follow their own shape. The substring
    // rule needs all ten characters present, so shorter codes only get the
    // length check.
    if candidate.starts_with("otp-") {
        if candidate.chars().count() < 10 {
            return RuleSet::of(ExactLength::new(10));
        }
        return rule_set![ExactLength::new(10), Substring::new(4..10, AllDigits)];
    }

    rule_set![
        MinLength::new(12),
        ContainsDigit,
        ContainsUppercase,
        ContainsSymbol,
        NoWhitespace,
    ]
}

fn describe(candidate: &str) -> String {
    validate_with(candidate.to_string(), &policy).fold(
        |value| format!("{value:?}: accepted"),
        |value, reasons| {
            let list: Vec<String> = reasons.iter().map(ToString::to_string).collect();
            format!("{value:?}: must fix {}", list.join("; "))
        },
    )
}

fn main() {
    for candidate in ["hunter2", "correct horse battery", "Tr0ub4dor&3xyz", "otp-123456", "otp-12ab56", "otp-1"] {
        println!("{}", describe(candidate));
    }

    let mut field = Validated::with_composition(String::from("hunter2"), &policy);
    println!("initial: valid={} reasons={:?}", field.is_valid(), field.reasons());

    let reasons = field.set_value(String::from("Tr0ub4dor&3xyz"));
    println!("after update: reasons={reasons:?}");
}
