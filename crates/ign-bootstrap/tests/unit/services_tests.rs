//! Lazy singleton construction, contract substitution, and calls

use std::sync::atomic::Ordering;

use ign_bootstrap::documents::{CallConfig, ContractConfig, ServiceConfig};
use ign_domain::{ConfigValue, Error};

use crate::fixtures::{FixedRetryPolicy, Harness, Recorder, UNSTABLE_ATTEMPTS, def, yaml};

#[test]
fn get_twice_returns_the_identical_instance() {
    let mut harness = Harness::new();
    harness.services.define("log", def("recorder", vec![])).unwrap();
    let resolver = harness.resolver();

    let first = harness.services.get("log", &resolver).unwrap();
    let second = harness.services.get("log", &resolver).unwrap();
    assert!(first.same_instance(&second));
    assert!(harness.services.is_constructed("log"));
}

#[test]
fn definition_is_not_constructed_until_first_get() {
    let mut harness = Harness::new();
    harness.services.define("log", def("recorder", vec![])).unwrap();
    assert!(!harness.services.is_constructed("log"));
}

#[test]
fn contract_substitutes_class_and_arguments() {
    // parameters { settings: { retries: 3 } }, contract RetryPolicy →
    // fixed_retry_policy with override args, service declared as RetryPolicy
    let mut harness = Harness::new();
    harness
        .params
        .load("settings", yaml("retries: 3").as_mapping().unwrap())
        .unwrap();
    harness.contracts.register(
        "RetryPolicy",
        ContractConfig {
            class: "fixed_retry_policy".to_string(),
            arguments: Some(vec![ConfigValue::from("%settings.retries%")]),
            calls: None,
        },
    );
    harness
        .services
        .define(
            "policy",
            // own arguments must lose against the contract override
            def("RetryPolicy", vec![ConfigValue::from(99)]),
        )
        .unwrap();

    let resolver = harness.resolver();
    let handle = harness.services.get("policy", &resolver).unwrap();

    assert_eq!(handle.class_name(), "fixed_retry_policy");
    let policy = handle
        .instance()
        .as_any()
        .downcast_ref::<FixedRetryPolicy>()
        .unwrap();
    assert_eq!(policy.retries, 3);
}

#[test]
fn calls_run_in_order_with_resolved_arguments() {
    let mut harness = Harness::new();
    harness
        .params
        .load("settings", yaml("tag: from-params").as_mapping().unwrap())
        .unwrap();
    harness
        .services
        .define(
            "log",
            ServiceConfig {
                class: "recorder".to_string(),
                arguments: vec![],
                calls: vec![
                    CallConfig {
                        method: "note".to_string(),
                        arguments: vec![ConfigValue::from("first")],
                    },
                    CallConfig {
                        method: "note".to_string(),
                        arguments: vec![ConfigValue::from("%settings.tag%")],
                    },
                ],
            },
        )
        .unwrap();

    let resolver = harness.resolver();
    let handle = harness.services.get("log", &resolver).unwrap();

    let recorder = handle.instance().as_any().downcast_ref::<Recorder>().unwrap();
    let entries = recorder.entries.lock().unwrap();
    assert_eq!(entries.as_slice(), ["first", "from-params"]);
}

#[test]
fn call_to_missing_method_names_service_and_method() {
    let mut harness = Harness::new();
    harness
        .services
        .define(
            "log",
            ServiceConfig {
                class: "recorder".to_string(),
                arguments: vec![],
                calls: vec![CallConfig {
                    method: "vanish".to_string(),
                    arguments: vec![],
                }],
            },
        )
        .unwrap();

    let resolver = harness.resolver();
    let err = harness.services.get("log", &resolver).unwrap_err();

    assert!(matches!(err, Error::Configuration { .. }), "got {err:?}");
    let message = err.to_string();
    assert!(message.contains("log"));
    assert!(message.contains("vanish"));
}

#[test]
fn unknown_class_is_a_configuration_error() {
    let mut harness = Harness::new();
    harness
        .services
        .define("ghost", def("no_such_class", vec![]))
        .unwrap();

    let resolver = harness.resolver();
    let err = harness.services.get("ghost", &resolver).unwrap_err();
    assert!(err.to_string().contains("no_such_class"));
}

#[test]
fn failed_construction_is_not_cached() {
    let mut harness = Harness::new();
    harness.services.define("flaky", def("unstable", vec![])).unwrap();
    let resolver = harness.resolver();

    let before = UNSTABLE_ATTEMPTS.load(Ordering::SeqCst);
    assert!(harness.services.get("flaky", &resolver).is_err());
    assert!(harness.services.get("flaky", &resolver).is_err());
    assert_eq!(UNSTABLE_ATTEMPTS.load(Ordering::SeqCst), before + 2);
    assert!(!harness.services.is_constructed("flaky"));
}

#[test]
fn nested_reference_constructs_depth_first_and_shares_the_instance() {
    let mut harness = Harness::new();
    harness.services.define("inner", def("recorder", vec![])).unwrap();
    harness
        .services
        .define("outer", def("composite", vec![ConfigValue::from("@inner")]))
        .unwrap();

    let resolver = harness.resolver();
    let outer = harness.services.get("outer", &resolver).unwrap();
    // constructing outer must have constructed inner on the way down
    assert!(harness.services.is_constructed("inner"));

    let composite = outer
        .instance()
        .as_any()
        .downcast_ref::<crate::fixtures::Composite>()
        .unwrap();
    let inner = harness.services.get("inner", &resolver).unwrap();
    assert!(composite.dep.same_instance(&inner));
}

#[test]
fn duplicate_service_id_is_rejected() {
    let mut harness = Harness::new();
    harness.services.define("dup", def("recorder", vec![])).unwrap();
    let err = harness
        .services
        .define("dup", def("recorder", vec![]))
        .unwrap_err();
    assert!(err.to_string().contains("dup"));
}
