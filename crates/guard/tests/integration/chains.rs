//! Integration test: chaining behaviour shared by every family

use paramguard::prelude::*;
use pretty_assertions::assert_eq;
use regex::Regex;
use rstest::rstest;

// ============================================================================
// IDENTITY: a passing check returns the same wrapper
// ============================================================================

#[test]
fn test_passing_checks_return_input_unchanged() {
    let original = validate(String::from("Value"), "name");
    let checked = original
        .clone()
        .is_not_null()
        .and_then(TextGuard::is_not_empty)
        .and_then(|v| v.has_length_between(1, 10))
        .and_then(|v| v.starts_with("V"))
        .and_then(|v| v.is_greater_than(String::from("A")))
        .unwrap();
    assert_eq!(checked, original);
}

#[test]
fn test_first_failure_wins() {
    let error = validate(150, "age")
        .is_greater_than(0)
        .and_then(|v| v.is_less_than(130))
        .and_then(|v| v.is_equal_to(42))
        .unwrap_err();
    assert_eq!(error.check(), Check::LessThan);
}

// ============================================================================
// NULL TRANSPARENCY
// ============================================================================

#[test]
fn test_absent_text_skips_every_non_null_check() {
    let absent = || validate_option(None::<String>, "s");
    assert!(absent().is_empty().is_ok());
    assert!(absent().is_not_empty().is_ok());
    assert!(absent().is_not_white_space().is_ok());
    assert!(absent().has_length(3).is_ok());
    assert!(absent().has_min_length(3).is_ok());
    assert!(absent().has_max_length(3).is_ok());
    assert!(absent().has_length_between(1, 3).is_ok());
    assert!(absent().contains("x").is_ok());
    assert!(absent().starts_with("x").is_ok());
    assert!(absent().ends_with("x").is_ok());
    assert!(absent().is_equal_to_str("x", Case::Sensitive).is_ok());
    assert!(absent().is_not_equal_to_str("x", Case::Insensitive).is_ok());
    assert!(absent().is_match("^x$").is_ok());
    assert_eq!(absent().capture("^x$").map(|(_, outcome)| outcome), Ok(MatchOutcome::Skipped));
    assert!(absent().is_equal_to("x").is_ok());
    assert!(absent().is_not_equal_to("x").is_ok());
}

#[test]
fn test_absent_text_skips_precompiled_patterns() {
    let regex = Regex::new(r"^\d+$").unwrap();
    let absent = || validate_option(None::<&str>, "code");
    assert!(absent().is_match_regex(&regex).is_ok());

    let (validator, outcome) = absent().capture_regex(&regex).unwrap();
    assert_eq!(outcome, MatchOutcome::Skipped);
    assert!(!validator.is_present());
}

#[test]
fn test_absent_collection_skips_every_non_null_check() {
    let absent = || validate_option(None::<Vec<u8>>, "v");
    assert!(absent().is_empty().is_ok());
    assert!(absent().is_not_empty().is_ok());
    assert!(absent().contains(&1).is_ok());
}

#[test]
fn test_null_specific_checks_reject_absence() {
    let absent = || validate_option(None::<i32>, "n");
    assert_eq!(
        absent().is_not_null().unwrap_err().kind(),
        GuardErrorKind::MissingValue
    );
    assert_eq!(absent().require().unwrap_err().kind(), GuardErrorKind::MissingValue);
    assert!(absent().is_null().is_ok());
}

#[test]
fn test_null_or_empty_kinds() {
    let absent = validate_option(None::<&str>, "s").is_not_null_or_empty().unwrap_err();
    let empty = validate("", "s").is_not_null_or_empty().unwrap_err();
    assert_eq!(absent.kind(), GuardErrorKind::MissingValue);
    assert_eq!(empty.kind(), GuardErrorKind::InvalidValue);
    assert_eq!(absent.message(), empty.message());
}

// ============================================================================
// MESSAGE OVERRIDES
// ============================================================================

#[rstest]
#[case(validate(1, "n").is_greater_than(1))]
#[case(validate(1, "n").is_between(2, 3))]
#[case(validate(1, "n").is_equal_to(2))]
#[case(validate(1, "n").is_null())]
fn test_override_is_verbatim(#[case] result: GuardResult<Validator<i32>>) {
    let check = result.as_ref().unwrap_err().check();
    let error = result.with_message("ExceptionMessage").unwrap_err();
    assert_eq!(error.message(), "ExceptionMessage");
    assert_eq!(error.check(), check);
    assert_eq!(error.parameter(), Some("n"));
}

#[test]
fn test_override_on_success_is_ignored() {
    let result = validate(2, "n").is_greater_than(1).with_message("unused");
    assert!(result.is_ok());
}

#[test]
fn test_override_in_middle_of_chain() {
    let error = validate("abc", "code")
        .has_length(3)
        .and_then(|v| v.is_match(r"^\d+$").with_message("code must be numeric"))
        .unwrap_err();
    assert_eq!(error.message(), "code must be numeric");
    assert_eq!(error.to_string(), "invalid value for `code`: code must be numeric");
}
