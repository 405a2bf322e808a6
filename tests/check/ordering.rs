use guard_rail::{check, ViolationKind};

#[test]
fn greater_than_passes_and_returns_the_value() {
    let returned = check(10, "my_argument").is().greater_than(5).unwrap().into_value();
    assert_eq!(returned, 10);
}

#[test]
fn greater_than_reports_ordering_kind_with_default_message() {
    let err = check(5, "my_argument").is().greater_than(10).unwrap_err();

    assert_eq!(err.kind(), ViolationKind::Ordering);
    assert_eq!(
        err.message(),
        "my_argument must be greater than 10, actual value is 5"
    );
}

#[test]
fn greater_than_custom_message_replaces_the_default() {
    let err = check(5, "my_argument")
        .is()
        .with_message("custom message")
        .greater_than(10)
        .unwrap_err();

    assert_eq!(err.message(), "custom message");
}

#[test]
fn ordering_is_strict_at_the_boundary() {
    assert!(check(5, "n").is().greater_than(5).is_err());
    assert!(check(5, "n").is().greater_than_or_equal_to(5).is_ok());
    assert!(check(5, "n").is().less_than(5).is_err());
    assert!(check(5, "n").is().less_than_or_equal_to(5).is_ok());
}

#[test]
fn less_than_reports_the_actual_value() {
    let err = check(10, "my_argument").is().less_than(5).unwrap_err();

    assert_eq!(
        err.message(),
        "my_argument must be less than 5, actual value is 10"
    );
}

#[test]
fn or_equal_to_variants_still_fail_past_the_bound() {
    let err = check(4, "replicas")
        .is()
        .greater_than_or_equal_to(5)
        .unwrap_err();
    assert_eq!(
        err.message(),
        "replicas must be greater than or equal to 5, actual value is 4"
    );

    let err = check(11, "level").is().less_than_or_equal_to(10).unwrap_err();
    assert_eq!(
        err.message(),
        "level must be less than or equal to 10, actual value is 11"
    );
}

#[test]
fn absent_values_fail_with_null_kind_and_null_text() {
    let err = check(Option::<i32>::None, "age")
        .is()
        .greater_than(18)
        .unwrap_err();

    assert_eq!(err.kind(), ViolationKind::Null);
    assert_eq!(err.message(), "age must be greater than 18, actual value is null");
}

#[test]
fn present_option_values_compare_against_the_inner_value() {
    assert!(check(Some(21), "age").is().greater_than(18).is_ok());

    let err = check(Some(16), "age").is().greater_than(18).unwrap_err();
    assert_eq!(err.kind(), ViolationKind::Ordering);
    assert_eq!(err.message(), "age must be greater than 18, actual value is 16");
}

#[test]
fn incomparable_floats_fail_the_check() {
    let err = check(f64::NAN, "ratio").is().greater_than(0.0).unwrap_err();
    assert_eq!(err.kind(), ViolationKind::Ordering);
}

#[test]
fn string_slices_compare_lexicographically() {
    assert!(check("beta", "tag").is().greater_than("alpha").is_ok());
    assert!(check("alpha", "tag").is().less_than("beta").is_ok());
}
