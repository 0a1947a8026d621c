//! Integration test: end-to-end guard scenarios

use std::any::Any;
use std::collections::HashMap;
use std::fmt::Display;

use paramguard::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn test_greater_than_failure_names_parameter() {
    let error = validate(5, "x").is_greater_than(5).unwrap_err();
    assert_eq!(error.kind(), GuardErrorKind::InvalidValue);
    assert_eq!(error.parameter(), Some("x"));
    assert_eq!(error.code(), "greater_than");
    insta::assert_snapshot!(error, @"invalid value for `x`: Value must be greater than '5'.");
}

#[test]
fn test_missing_value_display() {
    let error = validate_option(None::<&str>, "user").is_not_null().unwrap_err();
    insta::assert_snapshot!(error, @"missing value for `user`: Value cannot be null.");
}

#[test]
fn test_unnamed_display() {
    let error = Validator::new(Some(0)).is_between(1, 3).unwrap_err();
    assert_eq!(error.parameter(), None);
    insta::assert_snapshot!(error, @"invalid value: Value must be between '1' and '3'.");
}

#[test]
fn test_simple_passing_scenarios() {
    assert!(validate("abc", "s").has_length(3).is_ok());
    assert!(validate_option(None::<i32>, "n").is_between(1, 3).is_ok());
    assert!(validate("Value", "s").starts_with("V").is_ok());
}

#[test]
fn test_empty_vec_rejected() {
    let error = validate(Vec::<i32>::new(), "ids").is_not_empty().unwrap_err();
    assert_eq!(error.kind(), GuardErrorKind::InvalidValue);
    insta::assert_snapshot!(error.message(), @"Value cannot be empty.");
}

// ============================================================================
// A CONSTRUCTOR GUARDED THE WAY A CALLER WOULD
// ============================================================================

#[derive(Debug)]
struct Endpoint {
    host: String,
    port: u16,
    tags: Vec<String>,
}

impl Endpoint {
    fn new(host: Option<String>, port: u16, tags: Vec<String>) -> Result<Self, GuardError> {
        let host = param!(?host)
            .is_not_null_or_white_space()?
            .has_max_length(253)?
            .is_match(r"^[a-z0-9.-]+$")?
            .require()?;
        let port = param!(port).is_not_equal_to(0)?.require()?;
        let tags = param!(tags)
            .when(|t| t.is_some_and(|t| t.len() > 1), |v| {
                v.contains(&String::from("primary"))
            })?
            .require()?;
        Ok(Self { host, port, tags })
    }
}

#[test]
fn test_endpoint_constructor() {
    let endpoint = Endpoint::new(Some("db.internal".into()), 5432, vec![]).unwrap();
    assert_eq!(endpoint.host, "db.internal");
    assert_eq!(endpoint.port, 5432);
    assert!(endpoint.tags.is_empty());

    let error = Endpoint::new(None, 5432, vec![]).unwrap_err();
    assert_eq!(error.kind(), GuardErrorKind::MissingValue);
    assert_eq!(error.parameter(), Some("host"));

    let error = Endpoint::new(Some("DB".into()), 5432, vec![]).unwrap_err();
    assert_eq!(error.check(), Check::Match);

    let error = Endpoint::new(Some("db".into()), 0, vec![]).unwrap_err();
    assert_eq!(error.parameter(), Some("port"));

    let tags = vec!["a".to_string(), "b".to_string()];
    let error = Endpoint::new(Some("db".into()), 1, tags).unwrap_err();
    insta::assert_snapshot!(error, @r#"invalid value for `tags`: Value must contain '"primary"'."#);
}

// ============================================================================
// TYPES
// ============================================================================

#[test]
fn test_dynamic_payload() {
    let payloads: Vec<Box<dyn Any>> = vec![Box::new(7_u32), Box::new("seven")];

    let first = validate(&payloads[0], "payload");
    assert_eq!(first.downcast_ref::<u32>().map(|v| v.copied()), Ok(Some(7)));

    let error = validate(&payloads[1], "payload")
        .is_type::<u32>()
        .unwrap_err();
    assert_eq!(error.param("type"), Some("u32"));
}

#[test]
fn test_descriptor_registry() {
    let registry: HashMap<&str, TypeInfo> = HashMap::from([
        (
            "count",
            TypeInfo::builder::<u64>().implements::<dyn Display>(|v| v).build(),
        ),
        ("renderer", TypeInfo::trait_object::<dyn Display>()),
    ]);

    assert!(validate(&registry["count"], "count").is_concrete().is_ok());
    assert!(
        validate(&registry["count"], "count")
            .is_assignable_to_info(&registry["renderer"])
            .is_ok()
    );
    assert!(validate(&registry["renderer"], "renderer").is_trait_object().is_ok());
    assert!(validate(&registry["renderer"], "renderer").is_concrete().is_err());
}
