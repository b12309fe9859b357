use rule_rail::types::ErrorVec;
use rule_rail::validation::Validation;

fn reasonless_invalid() -> Validation<&'static str, i32> {
    Validation::Invalid { value: 1, reasons: ErrorVec::new() }
}

#[test]
fn validity_follows_the_reason_list() {
    let v = reasonless_invalid();
    assert!(v.is_valid());
    assert!(!v.is_invalid());
    assert_eq!(v.is_valid(), v.reasons().is_empty());
}

#[test]
fn reasonless_invalid_takes_the_success_path() {
    let outcome = reasonless_invalid().fold(|value| value * 10, |_, reasons| reasons.len() as i32);
    assert_eq!(outcome, 10);

    let mut successes = 0;
    let mut failures = 0;
    let _ = reasonless_invalid().on_success(|_| successes += 1).on_failure(|_, _| failures += 1);
    assert_eq!((successes, failures), (1, 0));

    assert_eq!(reasonless_invalid().to_result(), Ok(1));
    assert_eq!(reasonless_invalid().into_value(), Some(1));
    assert_eq!(reasonless_invalid().into_reasons(), None);
}

#[test]
fn folding_a_failure_into_a_reasonless_invalid_makes_it_invalid() {
    let v = reasonless_invalid().fold_rule(&rule_rail::rules::AlwaysFail::new("broken"));
    assert!(v.is_invalid());
    assert_eq!(v.reasons(), &["broken"]);
}
