//! Integration tests for the Labeled wrapper
//!
//! Tests textual-identity rewriting and the forwarding surface.

use nameplate_decor::{DebugMode, Decorator, Labeled, inner_ref, labeled_ref};
use nameplate_foundation::{Label, Raw};

// =============================================================================
// Identity rewriting
// =============================================================================

#[test]
fn both_conversions_become_the_label() {
    let decorator = Decorator::new(DebugMode::Off);
    let labeled = decorator.decorate(1234.5_f64, &Label::new("a price"));
    assert_eq!(format!("{labeled}"), "a price");
    assert_eq!(format!("{labeled:?}"), "a price");
}

#[test]
fn quoted_labels_are_preserved_verbatim() {
    let decorator = Decorator::new(DebugMode::Off);
    let labeled = decorator.decorate(0_i64, &Label::new("label with \"quotes\""));
    assert_eq!(format!("{labeled}"), "label with \"quotes\"");
    assert_eq!(format!("{labeled:?}"), "label with \"quotes\"");
}

// =============================================================================
// Forwarding
// =============================================================================

#[test]
fn methods_reach_the_wrapped_value() {
    let decorator = Decorator::new(DebugMode::Off);
    let labeled = decorator.decorate(String::from("forwarded"), &Label::new("w"));
    assert_eq!(labeled.len(), 9);
    assert!(labeled.starts_with("forward"));
}

#[test]
fn equality_is_untouched_by_decoration() {
    let plain = Labeled::new(99_i64, Label::new("left"));
    let renamed = Labeled::new(99_i64, Label::new("right"));
    assert_eq!(plain, renamed);
    assert_eq!(plain, 99_i64);
}

#[test]
fn mutation_reaches_the_wrapped_value() {
    let mut labeled = Labeled::new(vec![1_i32], Label::new("xs"));
    labeled.get_mut().push(2);
    labeled.push(3);
    assert_eq!(labeled.get(), &vec![1, 2, 3]);
    assert_eq!(labeled.into_inner(), vec![1, 2, 3]);
}

// =============================================================================
// Stored views
// =============================================================================

#[test]
fn stored_slots_expose_label_and_value() {
    let decorator = Decorator::new(DebugMode::Off);
    let value = decorator.apply(Raw::of(7_u8), &Label::new("seven"));

    let labeled = labeled_ref(&value).unwrap();
    assert_eq!(labeled.label().as_str(), "seven");
    assert_eq!(inner_ref::<u8>(&value), Some(&7));
    assert!(inner_ref::<i64>(&value).is_none());
}

#[test]
fn undecorated_values_have_no_labeled_view() {
    let value = nameplate_foundation::FixtureValue::of(7_u8);
    assert!(labeled_ref(&value).is_none());
    assert!(inner_ref::<u8>(&value).is_none());
}
