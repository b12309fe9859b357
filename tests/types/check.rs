use rule_rail::types::Check;

#[test]
fn when_passes_on_true_and_fails_on_false() {
    assert_eq!(Check::when(true, "unused"), Check::Pass);
    assert_eq!(Check::when(false, "why"), Check::Fail("why"));
}

#[test]
fn when_else_builds_reason_only_on_failure() {
    let mut built = 0;
    let pass: Check<String> = Check::when_else(true, || {
        built += 1;
        String::from("never")
    });
    assert!(pass.is_pass());
    assert_eq!(built, 0);

    let fail = Check::when_else(false, || String::from("built"));
    assert_eq!(fail.into_reason(), Some(String::from("built")));
}

#[test]
fn map_reason_leaves_pass_untouched() {
    let pass: Check<u8> = Check::Pass;
    assert_eq!(pass.map_reason(|n| n + 1), Check::Pass);
    assert_eq!(Check::Fail(1_u8).map_reason(|n| n + 1), Check::Fail(2));
}

#[test]
fn converts_to_and_from_result() {
    assert_eq!(Check::<&str>::Pass.to_result(), Ok(()));
    assert_eq!(Check::Fail("bad").to_result(), Err("bad"));
    assert_eq!(Check::from(Err::<(), _>("bad")), Check::Fail("bad"));
    assert!(Check::<&str>::from(Ok(())).is_pass());
}
