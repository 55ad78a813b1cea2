//! Integration tests for registry shadowing
//!
//! Tests last-registration-wins semantics and definition immutability.

use nameplate_registry::{FixtureDefinition, FixtureRegistry, Initializer};

#[test]
fn definitions_register_without_evaluation() {
    let mut registry = FixtureRegistry::new();
    registry.define("boom", None, |_| -> i64 { panic!("must not run at definition time") });
    assert!(registry.contains("boom"));
    assert_eq!(registry.len(), 1);
}

#[test]
fn redefinition_shadows_silently() {
    let mut registry = FixtureRegistry::new();
    registry.define("x", Some("first"), |_| 1_i64);
    registry.define("x", Some("second"), |_| 2_i64);

    assert_eq!(registry.len(), 1);
    let def = registry.definition("x").unwrap();
    assert_eq!(def.label().as_str(), "second");
}

#[test]
fn names_are_scoped_per_registry() {
    let mut a = FixtureRegistry::new();
    a.define("x", None, |_| 1_i64);

    let mut b = a.clone();
    b.define("x", Some("shadowed"), |_| 2_i64);

    assert_eq!(a.definition("x").unwrap().label().as_str(), "x");
    assert_eq!(b.definition("x").unwrap().label().as_str(), "shadowed");
}

#[test]
fn prebuilt_definitions_insert_the_same_way() {
    let mut registry = FixtureRegistry::new();
    registry.insert(FixtureDefinition::new(
        "widget",
        Some("a widget"),
        Initializer::new(|_| 1_i64),
    ));
    registry.insert(FixtureDefinition::new(
        "widget",
        None,
        Initializer::new(|_| 2_i64),
    ));

    assert_eq!(registry.len(), 1);
    assert_eq!(registry.definition("widget").unwrap().label().as_str(), "widget");
}

#[test]
fn names_iterates_defined_fixtures() {
    let mut registry = FixtureRegistry::new();
    registry.define("a", None, |_| 1_i64);
    registry.define("b", None, |_| 2_i64);

    let mut names: Vec<&str> = registry.names().collect();
    names.sort_unstable();
    assert_eq!(names, vec!["a", "b"]);
}
