//! Integration test: message catalogs loaded from JSON

use std::sync::Arc;

use paramguard::prelude::*;
use pretty_assertions::assert_eq;

const GERMAN: &str = r#"{
    "not_null": "Wert darf nicht null sein.",
    "between": "Wert muss zwischen '{min}' und '{max}' liegen.",
    "min_length": "Wert muss mindestens {min} Zeichen lang sein."
}"#;

fn german() -> Arc<Messages> {
    Arc::new(Messages::from_json_str(GERMAN).unwrap())
}

#[test]
fn test_catalog_overrides_defaults() {
    let catalog = german();
    assert_eq!(catalog.len(), 3);

    let error = validate(0, "n")
        .with_messages(Arc::clone(&catalog))
        .is_between(1, 3)
        .unwrap_err();
    assert_eq!(error.message(), "Wert muss zwischen '1' und '3' liegen.");

    let error = validate_option(None::<&str>, "s")
        .with_messages(Arc::clone(&catalog))
        .is_not_null()
        .unwrap_err();
    assert_eq!(error.kind(), GuardErrorKind::MissingValue);
    assert_eq!(error.message(), "Wert darf nicht null sein.");

    let error = validate("ab", "s")
        .with_messages(catalog)
        .has_min_length(3)
        .unwrap_err();
    insta::assert_snapshot!(error, @"invalid value for `s`: Wert muss mindestens 3 Zeichen lang sein.");
}

#[test]
fn test_catalog_falls_back_for_missing_entries() {
    let error = validate(5, "n")
        .with_messages(german())
        .is_less_than(5)
        .unwrap_err();
    assert_eq!(error.message(), "Value must be less than '5'.");
}

#[test]
fn test_catalog_survives_the_whole_chain() {
    let error = validate("", "s")
        .with_messages(german())
        .is_not_null()
        .and_then(|v| v.has_min_length(1))
        .unwrap_err();
    assert_eq!(error.message(), "Wert muss mindestens 1 Zeichen lang sein.");
}

#[test]
fn test_override_beats_catalog() {
    let error = validate(9, "n")
        .with_messages(german())
        .is_between(1, 3)
        .with_message("custom")
        .unwrap_err();
    assert_eq!(error.message(), "custom");
}

#[test]
fn test_catalog_from_reader() {
    let catalog = Messages::from_json_reader(GERMAN.as_bytes()).unwrap();
    assert_eq!(catalog.template(Check::NotNull), "Wert darf nicht null sein.");
    assert_eq!(catalog.template(Check::Null), Check::Null.default_template());
}

#[test]
fn test_invalid_catalogs() {
    let err = Messages::from_json_str(r#"{ "length": "needs {min}" }"#).unwrap_err();
    insta::assert_snapshot!(err, @"template for `length` uses unknown placeholder `{min}`");

    let err = Messages::from_json_str("not json").unwrap_err();
    assert!(matches!(err, MessagesError::Parse(_)));
}

#[test]
fn test_every_check_has_a_builtin_template() {
    for check in Check::ALL {
        assert!(!Messages::builtin().template(check).is_empty(), "{check}");
    }
}
