//! Batch validation of a form-like input: every violation is recorded and
//! reported at once, while the batch keeps working on best-effort values.
//!
//! Run with: `cargo run --example collect_violations`

use guard_rail::{collect_arg, Collector, CompositeViolation};

fn validate_signup(
    user_name: &str,
    email: &str,
    age: i32,
    roles: Vec<String>,
) -> Result<(), CompositeViolation> {
    let mut violations = Collector::new();

    let user_name = collect_arg!(violations, user_name, |a| a.is().not_null_or_whitespace());
    let email = collect_arg!(violations, email, |a| {
        a.is().not_null_or_empty()?.and().matching(|e| e.contains('@'))
    });
    let age = collect_arg!(violations, age, |a| {
        a.is().greater_than_or_equal_to(13)?.and().less_than(130)
    });
    let roles = collect_arg!(violations, roles, |a| {
        a.is().not_empty()?.and().containing(String::from("member"))
    });

    // Sentinel values let the summary print even for a failed batch.
    println!("  best effort: {user_name:?} / {email:?} / {age} / {roles:?}");

    violations.finish("signup form is invalid")
}

fn main() {
    println!("valid submission:");
    let ok = validate_signup(
        "ada",
        "ada@example.com",
        36,
        vec![String::from("member"), String::from("admin")],
    );
    println!("  -> {ok:?}");

    println!("invalid submission:");
    if let Err(err) = validate_signup("  ", "nowhere", 7, Vec::new()) {
        println!("  -> {}", err.message());
        for violation in &err {
            println!("     [{}] {}", violation.kind(), violation);
        }
    }
}
