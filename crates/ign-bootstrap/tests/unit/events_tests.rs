//! Dispatch-time listener resolution, ordering, and failure policy

use ign_bootstrap::{DispatchPolicy, EventRegistry, ResolvedArg};
use ign_domain::{ConfigValue, Error};

use crate::fixtures::{Harness, Recorder, SEQUENCE, def};

#[test]
fn listeners_fire_in_descending_priority_with_stable_ties() {
    let mut harness = Harness::new();
    for label in ["a", "b", "c"] {
        harness
            .services
            .define(
                format!("seq.{label}"),
                def("sequencer", vec![ConfigValue::from(label)]),
            )
            .unwrap();
    }

    let mut events = EventRegistry::new();
    events.register("boot", "@seq.a", None, 5);
    events.register("boot", "@seq.b", None, 10);
    events.register("boot", "@seq.c", None, 5);

    SEQUENCE.lock().unwrap().clear();
    let resolver = harness.resolver();
    let invoked = events.dispatch("boot", &[], &resolver).unwrap();

    assert_eq!(invoked, 3);
    assert_eq!(SEQUENCE.lock().unwrap().as_slice(), ["b", "a", "c"]);
}

#[test]
fn unknown_listener_service_fails_only_at_dispatch() {
    let harness = Harness::new();
    let mut events = EventRegistry::new();

    // registration never validates
    events.register("boot", "@ghost.service", None, 0);

    let resolver = harness.resolver();
    let err = events.dispatch("boot", &[], &resolver).unwrap_err();
    assert!(matches!(err, Error::Dispatch { .. }), "got {err:?}");
    assert!(err.to_string().contains("ghost.service"));
}

#[test]
fn unsupported_method_names_event_service_and_method() {
    let mut harness = Harness::new();
    harness.services.define("log", def("recorder", vec![])).unwrap();

    let mut events = EventRegistry::new();
    events.register("boot", "log", Some("vanish"), 0);

    let resolver = harness.resolver();
    let err = events.dispatch("boot", &[], &resolver).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("boot"));
    assert!(message.contains("log"));
    assert!(message.contains("vanish"));
}

#[test]
fn event_arguments_reach_the_listener() {
    let mut harness = Harness::new();
    harness.services.define("log", def("recorder", vec![])).unwrap();

    let mut events = EventRegistry::new();
    events.register("boot", "@log", None, 0);

    let resolver = harness.resolver();
    let payload = [ResolvedArg::Value(ConfigValue::from("payload"))];
    events.dispatch("boot", &payload, &resolver).unwrap();

    let handle = harness.services.get("log", &resolver).unwrap();
    let recorder = handle.instance().as_any().downcast_ref::<Recorder>().unwrap();
    assert_eq!(recorder.entries.lock().unwrap().as_slice(), ["event:payload"]);
}

#[test]
fn fail_fast_aborts_sibling_dispatch() {
    let mut harness = Harness::new();
    harness.services.define("log", def("recorder", vec![])).unwrap();

    let mut events = EventRegistry::new();
    events.register("boot", "@log", Some("explode"), 10);
    events.register("boot", "@log", Some("note"), 0);

    let resolver = harness.resolver();
    let payload = [ResolvedArg::Value(ConfigValue::from("after"))];
    assert!(events.dispatch("boot", &payload, &resolver).is_err());

    let handle = harness.services.get("log", &resolver).unwrap();
    let recorder = handle.instance().as_any().downcast_ref::<Recorder>().unwrap();
    assert!(recorder.entries.lock().unwrap().is_empty());
}

#[test]
fn continue_on_error_invokes_every_sibling() {
    let mut harness = Harness::new();
    harness.services.define("log", def("recorder", vec![])).unwrap();

    let mut events = EventRegistry::with_policy(DispatchPolicy::ContinueOnError);
    events.register("boot", "@log", Some("explode"), 10);
    events.register("boot", "@log", Some("note"), 0);

    let resolver = harness.resolver();
    let payload = [ResolvedArg::Value(ConfigValue::from("after"))];
    let invoked = events.dispatch("boot", &payload, &resolver).unwrap();

    assert_eq!(invoked, 1);
    let handle = harness.services.get("log", &resolver).unwrap();
    let recorder = handle.instance().as_any().downcast_ref::<Recorder>().unwrap();
    assert_eq!(recorder.entries.lock().unwrap().as_slice(), ["after"]);
}

#[test]
fn dispatching_an_event_with_no_listeners_is_a_no_op() {
    let harness = Harness::new();
    let events = EventRegistry::new();
    let resolver = harness.resolver();
    assert_eq!(events.dispatch("silent", &[], &resolver).unwrap(), 0);
}
