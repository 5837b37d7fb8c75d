//! Argument resolution: literals, `%` parameters, `@` services, failures

use ign_domain::{ConfigValue, Error};

use crate::fixtures::{Harness, def, yaml};

#[test]
fn plain_values_pass_through_unchanged() {
    let harness = Harness::new();
    let resolver = harness.resolver();

    let raw = vec![
        ConfigValue::from("plain"),
        ConfigValue::from(42),
        yaml("[x, y]"),
        ConfigValue::from(""),
        ConfigValue::Null,
    ];
    let resolved = resolver.resolve(&raw).unwrap();

    assert_eq!(resolved[0].as_str(), Some("plain"));
    assert_eq!(resolved[1].as_integer(), Some(42));
    assert_eq!(
        resolved[2].as_value().and_then(ConfigValue::as_list).map(<[_]>::len),
        Some(2)
    );
    assert_eq!(resolved[3].as_str(), Some(""));
    assert!(resolved[4].as_value().unwrap().is_null());
}

#[test]
fn lists_are_never_interpreted_as_references() {
    let harness = Harness::new();
    let resolver = harness.resolver();

    // entries that would be references as bare strings
    let raw = vec![yaml("[\"@service\", \"%param%\"]")];
    let resolved = resolver.resolve(&raw).unwrap();

    let list = resolved[0].as_value().unwrap().as_list().unwrap();
    assert_eq!(list[0].as_str(), Some("@service"));
    assert_eq!(list[1].as_str(), Some("%param%"));
}

#[test]
fn parameter_reference_resolves_by_dotted_key() {
    let mut harness = Harness::new();
    harness
        .params
        .load("a", yaml("b: 7").as_mapping().unwrap())
        .unwrap();
    let resolver = harness.resolver();

    let resolved = resolver.resolve_one(&ConfigValue::from("%a.b%")).unwrap();
    assert_eq!(resolved.as_integer(), Some(7));
}

#[test]
fn service_reference_resolves_to_the_singleton() {
    let mut harness = Harness::new();
    harness.services.define("foo", def("recorder", vec![])).unwrap();
    let resolver = harness.resolver();

    let first = resolver.resolve_one(&ConfigValue::from("@foo")).unwrap();
    let second = resolver.resolve_one(&ConfigValue::from("@foo")).unwrap();

    let first = first.as_service().unwrap();
    let second = second.as_service().unwrap();
    assert!(first.same_instance(second));
    assert_eq!(first.class_name(), "recorder");
}

#[test]
fn unknown_parameter_is_a_resolution_error() {
    let harness = Harness::new();
    let resolver = harness.resolver();

    let err = resolver
        .resolve_one(&ConfigValue::from("%missing.key%"))
        .unwrap_err();
    assert!(matches!(err, Error::Resolution { .. }), "got {err:?}");
}

#[test]
fn malformed_parameter_reference_is_rejected() {
    let harness = Harness::new();
    let resolver = harness.resolver();

    for raw in ["%unclosed", "%", "%%"] {
        let err = resolver.resolve_one(&ConfigValue::from(raw)).unwrap_err();
        assert!(matches!(err, Error::Resolution { .. }), "'{raw}' gave {err:?}");
    }
}

#[test]
fn unknown_service_is_fatal() {
    let harness = Harness::new();
    let resolver = harness.resolver();

    let err = resolver
        .resolve_one(&ConfigValue::from("@no.such.service"))
        .unwrap_err();
    assert!(err.to_string().contains("no.such.service"));
}
