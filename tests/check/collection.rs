use guard_rail::{check, ViolationKind};
use std::collections::BTreeSet;

#[test]
fn not_empty_returns_the_wrapped_collection() {
    let returned = check(vec!["value"], "my_argument")
        .is()
        .not_empty()
        .unwrap()
        .into_value();
    assert_eq!(returned, vec!["value"]);
}

#[test]
fn not_empty_rejects_an_empty_collection() {
    let err = check(Vec::<String>::new(), "my_argument")
        .is()
        .not_empty()
        .unwrap_err();

    assert_eq!(err.kind(), ViolationKind::Emptiness);
    assert_eq!(err.message(), "my_argument cannot be empty.");
}

#[test]
fn not_empty_custom_message_replaces_the_default() {
    let err = check(Vec::<String>::new(), "my_argument")
        .is()
        .with_message("custom message")
        .not_empty()
        .unwrap_err();

    assert_eq!(err.message(), "custom message");
}

#[test]
fn not_empty_on_an_absent_collection_is_a_null_violation() {
    let err = check(Option::<Vec<i32>>::None, "my_argument")
        .is()
        .not_empty()
        .unwrap_err();

    assert_eq!(err.kind(), ViolationKind::Null);
}

#[test]
fn count_accepts_an_exact_match() {
    let returned = check(vec!["1"], "my_argument").is().count(1).unwrap().into_value();
    assert_eq!(returned, vec!["1"]);
}

#[test]
fn count_reports_expected_and_actual() {
    let err = check(vec!["1"], "my_argument").is().count(2).unwrap_err();

    assert_eq!(err.kind(), ViolationKind::Count);
    assert_eq!(err.message(), "my_argument expected count: 2 actual: 1");
}

#[test]
fn count_on_an_absent_collection_substitutes_null_for_the_actual() {
    let err = check(Option::<Vec<i32>>::None, "my_argument")
        .is()
        .count(1)
        .unwrap_err();

    assert_eq!(err.kind(), ViolationKind::Null);
    assert_eq!(err.message(), "my_argument expected count: 1 actual: null");
}

#[test]
fn count_less_than_is_strict() {
    assert!(check(vec![1, 2], "retries").is().count_less_than(3).is_ok());

    let err = check(vec![1, 2, 3], "retries").is().count_less_than(3).unwrap_err();
    assert_eq!(err.kind(), ViolationKind::Count);
    assert_eq!(err.message(), "retries expected count less than: 3 actual: 3");
}

#[test]
fn count_greater_than_is_strict() {
    assert!(check(vec![1, 2], "quorum").is().count_greater_than(1).is_ok());

    let err = check(vec![1], "quorum").is().count_greater_than(1).unwrap_err();
    assert_eq!(err.message(), "quorum expected count greater than: 1 actual: 1");
}

#[test]
fn count_variants_treat_an_absent_collection_as_guaranteed_failure() {
    let none = Option::<Vec<i32>>::None;

    let err = check(none.clone(), "xs").is().count_less_than(3).unwrap_err();
    assert_eq!(err.kind(), ViolationKind::Null);
    assert_eq!(err.message(), "xs expected count less than: 3 actual: null");

    let err = check(none, "xs").is().count_greater_than(0).unwrap_err();
    assert_eq!(err.kind(), ViolationKind::Null);
}

#[test]
fn containing_finds_an_equal_item() {
    let returned = check(vec!["a", "b"], "zones")
        .is()
        .containing("b")
        .unwrap()
        .into_value();
    assert_eq!(returned, vec!["a", "b"]);
}

#[test]
fn containing_reports_membership_kind_when_the_item_is_missing() {
    let err = check(vec!["a", "b"], "zones").is().containing("z").unwrap_err();

    assert_eq!(err.kind(), ViolationKind::Membership);
    assert_eq!(err.message(), "zones does not contain expected item");
}

#[test]
fn containing_on_an_absent_collection_is_a_null_violation() {
    let err = check(Option::<Vec<&str>>::None, "zones")
        .is()
        .containing("b")
        .unwrap_err();

    assert_eq!(err.kind(), ViolationKind::Null);
}

#[test]
fn collection_checks_cover_arrays_slices_and_sets() {
    assert!(check([1, 2, 3], "arr").is().count(3).is_ok());

    let slice: &[i32] = &[1, 2];
    assert!(check(slice, "slice").is().containing(2).is_ok());

    let ordered: BTreeSet<i32> = [3, 1].into_iter().collect();
    assert!(check(ordered, "ordered").is().count(2).is_ok());
}

#[cfg(feature = "std")]
#[test]
fn hash_sets_support_membership_checks() {
    use std::collections::HashSet;

    let set: HashSet<&str> = ["a", "b"].into_iter().collect();
    assert!(check(set.clone(), "set").is().containing("a").is_ok());

    let err = check(set, "set").is().containing("z").unwrap_err();
    assert_eq!(err.kind(), ViolationKind::Membership);
}

#[test]
fn collection_and_scalar_checks_interleave_on_one_chain() {
    let value = Some(vec![1, 2]);
    let returned = check(value, "xs")
        .is()
        .not_empty()
        .unwrap()
        .and()
        .not_null()
        .unwrap()
        .and()
        .count_greater_than(1)
        .unwrap()
        .into_value();

    assert_eq!(returned, Some(vec![1, 2]));
}
