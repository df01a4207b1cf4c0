//! Failure messages as seen by the host application.

use claws::prelude::*;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

// ============================================================================
// DISPLAY
// ============================================================================

#[test]
fn null_message_names_the_expression() {
    let token: Option<String> = None;
    let err = not_null(named!(token)).unwrap_err();
    assert_snapshot!(err, @"`token` must not be null");
}

#[test]
fn blank_message() {
    let title = Some("");
    let err = not_null_not_blank(named!(title)).unwrap_err();
    assert_snapshot!(err, @"`title` must not be blank");
}

#[test]
fn empty_message() {
    let members: Option<Vec<u32>> = Some(Vec::new());
    let err = not_null_not_empty(named!(members)).unwrap_err();
    assert_snapshot!(err, @"`members` must not be empty");
}

#[test]
fn numeric_message_quotes_the_input() {
    let price = "ten";
    let err = numeric(named!(price)).unwrap_err();
    assert_snapshot!(err, @r#"`price` must be numeric, got "ten""#);
}

#[test]
fn default_message() {
    let tenant_id = 0_u64;
    let err = not_default(named!(tenant_id)).unwrap_err();
    assert_snapshot!(err, @"`tenant_id` must not be the default value, got 0");
}

#[test]
fn comparison_messages() {
    let mode = "root";
    let depth = 2;

    assert_eq!(
        not_equal(named!(mode), "root").unwrap_err().to_string(),
        "`mode` must not be equal to \"root\""
    );
    assert_eq!(
        at_least(named!(depth), 3).unwrap_err().to_string(),
        "`depth` must be at least 3, got 2"
    );
    assert_eq!(
        greater_than(named!(depth), 2).unwrap_err().to_string(),
        "`depth` must be greater than 2, got 2"
    );
}

#[test]
fn anonymous_values_use_default_description() {
    let err = greater_than(Named::anonymous(1.5_f64), 2.0).unwrap_err();
    assert_eq!(err.name(), DEFAULT_NAME);
    assert_snapshot!(err, @"`the provided value` must be greater than 2.0, got 1.5");
}

#[test]
fn predicate_message_with_and_without_description() {
    let shard = 7_u32;

    let plain = ensure(named!(shard)).passes(|s| *s < 4).unwrap_err();
    assert_snapshot!(plain, @"`shard` must pass the provided predicate, got 7");

    let described = ensure!(shard, "below shard count", |s| *s < 4).unwrap_err();
    assert_snapshot!(
        described,
        @"`shard` must pass the provided predicate, got 7 (below shard count)"
    );
}

// ============================================================================
// CODES
// ============================================================================

#[test]
fn codes_are_stable() {
    let codes = [
        GuardErrorKind::MustNotBeNull,
        GuardErrorKind::MustNotBeBlank,
        GuardErrorKind::MustNotBeEmpty,
        GuardErrorKind::MustBeNumeric,
        GuardErrorKind::MustNotBeDefaultValue,
        GuardErrorKind::MustNotBeEqual,
        GuardErrorKind::MustBeAtLeast,
        GuardErrorKind::MustBeGreaterThan,
        GuardErrorKind::MustPassProvidedPredicate,
    ]
    .map(GuardErrorKind::code);

    assert_eq!(
        codes,
        [
            "must_not_be_null",
            "must_not_be_blank",
            "must_not_be_empty",
            "must_be_numeric",
            "must_not_be_default_value",
            "must_not_be_equal",
            "must_be_at_least",
            "must_be_greater_than",
            "must_pass_provided_predicate",
        ]
    );
}

#[test]
fn error_is_std_error() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
    assert_error::<GuardError>();
}
