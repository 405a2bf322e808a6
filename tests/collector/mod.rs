use guard_rail::{check_arg, collect_arg, Collector, ViolationKind};

#[test]
fn collector_records_failures_and_reports_them_together() {
    let my_argument = "";
    let my_collection_argument: Vec<String> = Vec::new();
    let my_success_argument = "Hello world";

    let mut collector = Collector::new();

    let result1 = collector.add(my_argument, "my_argument", |a| {
        a.is().not_null_or_whitespace()
    });
    let result2 = collector.add(my_collection_argument.clone(), "my_collection_argument", |a| {
        a.is().not_empty()
    });
    let result3 = collector.add(my_success_argument, "my_success_argument", |a| {
        a.is().matching(|s| !s.is_empty())
    });

    assert_eq!(result1, my_argument);
    assert_eq!(result2, my_collection_argument);
    assert_eq!(result3, my_success_argument);

    let err = collector.finish("Errors occurred").unwrap_err();
    assert_eq!(err.message(), "Errors occurred");
    assert_eq!(err.violations().len(), 2);
}

#[test]
fn one_failure_among_successes_reports_exactly_that_failure() {
    let mut collector = Collector::new();

    collector.add(7, "lucky", |a| a.is().greater_than(0));
    collector.add(Option::<i32>::None, "unlucky", |a| a.is().not_null());
    collector.add("ok", "fine", |a| a.is().not_null_or_empty());

    let err = collector.finish("summary").unwrap_err();
    assert_eq!(err.message(), "summary");
    assert_eq!(err.violations().len(), 1);
    assert_eq!(err.violations()[0].name(), "unlucky");
    assert_eq!(err.violations()[0].kind(), ViolationKind::Null);
}

#[test]
fn finish_with_no_failures_is_a_no_op() {
    let mut collector = Collector::new();

    collector.add(1, "a", |a| a.is().greater_than(0));
    collector.add("x", "b", |a| a.is().not_null_or_whitespace());
    assert!(collector.is_empty());

    assert!(collector.finish("unused").is_ok());
}

#[test]
fn a_failing_add_returns_the_pre_check_value() {
    let mut collector = Collector::new();

    let port = collector.add(0u16, "port", |a| a.is().greater_than(0));
    assert_eq!(port, 0);

    let host = collector.add(String::new(), "host", |a| a.is().not_null_or_empty());
    assert_eq!(host, "");
}

#[test]
fn violations_keep_add_order() {
    let mut collector = Collector::new();

    collector.add(1, "first", |a| a.is().less_than(0));
    collector.add(2, "second", |a| a.is().less_than(0));
    collector.add(3, "third", |a| a.is().less_than(0));

    let names: Vec<&str> = collector.iter().map(|v| v.name()).collect();
    assert_eq!(names, ["first", "second", "third"]);

    let err = collector.finish("three down").unwrap_err();
    let names: Vec<&str> = err.violations().iter().map(|v| v.name()).collect();
    assert_eq!(names, ["first", "second", "third"]);
}

#[test]
fn a_chain_failure_mid_way_records_only_one_violation() {
    let mut collector = Collector::new();

    // First check passes, second fails; the chain stops there.
    let level = collector.add(11, "level", |a| {
        a.is().greater_than_or_equal_to(0)?.and().less_than_or_equal_to(10)
    });

    assert_eq!(level, 11);
    assert_eq!(collector.len(), 1);
    assert_eq!(
        collector.iter().next().unwrap().message(),
        "level must be less than or equal to 10, actual value is 11"
    );
    collector.finish("bounds").unwrap_err();
}

#[test]
fn collection_chains_run_inside_a_collector() {
    let items = Some(vec![String::from("a")]);
    let mut collector = Collector::new();

    let returned = collector.add(items.clone(), "items", |a| {
        a.is().not_empty()?.and().not_null()
    });

    assert_eq!(returned, items);
    assert!(collector.finish("unused").is_ok());
}

#[test]
fn collect_arg_captures_the_identifier_as_the_name() {
    let user_name = "";
    let mut collector = Collector::new();

    let returned = collect_arg!(collector, user_name, |a| a.is().not_null_or_empty());
    assert_eq!(returned, "");

    let err = collector.finish("bad input").unwrap_err();
    assert_eq!(err.violations()[0].name(), "user_name");
}

#[test]
fn collect_arg_accepts_a_name_override() {
    let inner = Option::<u32>::None;
    let mut collector = Collector::new();

    collect_arg!(collector, inner, "request.tenant_id", |a| a.is().not_null());

    let err = collector.finish("bad request").unwrap_err();
    assert_eq!(err.violations()[0].name(), "request.tenant_id");
    assert_eq!(err.violations()[0].message(), "request.tenant_id cannot be null");
}

#[test]
fn check_arg_captures_the_identifier_as_the_name() {
    let attempts = 5;
    let err = check_arg!(attempts).is().less_than(3).unwrap_err();
    assert_eq!(err.name(), "attempts");
    assert_eq!(err.message(), "attempts must be less than 3, actual value is 5");
}
