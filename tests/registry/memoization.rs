//! Integration tests for the memoization contract
//!
//! Tests at-most-once evaluation, reference identity, and nil slots.

use std::cell::Cell;
use std::rc::Rc;

use nameplate_decor::{DebugMode, inner_ref};
use nameplate_foundation::Raw;
use nameplate_harness::TestGroup;
use nameplate_registry::MemoStore;

#[test]
fn initializer_runs_at_most_once_per_instance() {
    let calls = Rc::new(Cell::new(0_u32));
    let counter = calls.clone();

    let mut group = TestGroup::new("memo").with_debug_mode(DebugMode::Off);
    group.define_lazy("expensive", None, move |_| {
        counter.set(counter.get() + 1);
        String::from("computed")
    });

    group
        .run("accesses twice", |instance| {
            let first = instance.fixture("expensive")?;
            let second = instance.fixture("expensive")?;
            assert!(first.shares_allocation(&second));
            Ok(())
        })
        .unwrap();

    assert_eq!(calls.get(), 1);
}

#[test]
fn each_instance_gets_its_own_slots() {
    let calls = Rc::new(Cell::new(0_u32));
    let counter = calls.clone();

    let mut group = TestGroup::new("memo").with_debug_mode(DebugMode::Off);
    group.define_lazy("expensive", None, move |_| {
        counter.set(counter.get() + 1);
        0_i64
    });

    for test in ["first", "second"] {
        group
            .run(test, |instance| {
                instance.fixture("expensive")?;
                Ok(())
            })
            .unwrap();
    }
    assert_eq!(calls.get(), 2);
}

#[test]
fn nil_slots_memoize_without_decoration() {
    let calls = Rc::new(Cell::new(0_u32));
    let counter = calls.clone();

    let mut group = TestGroup::new("memo").with_debug_mode(DebugMode::Off);
    group.define_lazy("nothing", None, move |_| {
        counter.set(counter.get() + 1);
        Raw::nil()
    });

    group
        .run("nil twice", |instance| {
            assert!(instance.fixture("nothing")?.is_nil());
            assert!(instance.fixture("nothing")?.is_nil());
            assert!(instance.is_evaluated("nothing"));
            Ok(())
        })
        .unwrap();

    assert_eq!(calls.get(), 1);
}

#[test]
fn dependent_fixtures_share_the_same_slots() {
    let mut group = TestGroup::new("memo").with_debug_mode(DebugMode::Off);
    group.define_lazy("base", None, |_| 2_i64);
    group.define_lazy("doubled", None, |scope| {
        let base = scope.fixture("base").unwrap();
        *inner_ref::<i64>(&base).unwrap() * 2
    });

    group
        .run("reads both", |instance| {
            let doubled = instance.fixture("doubled")?;
            assert_eq!(inner_ref::<i64>(&doubled), Some(&4));

            // "base" was evaluated through the dependent initializer and
            // is now memoized for direct access too.
            assert!(instance.is_evaluated("base"));
            let base = instance.fixture("base")?;
            assert_eq!(inner_ref::<i64>(&base), Some(&2));
            Ok(())
        })
        .unwrap();
}

#[test]
fn memo_store_is_reusable_standalone() {
    let mut store = MemoStore::new();
    assert!(store.is_empty());

    store.store("slot", nameplate_foundation::FixtureValue::of(1_i64));
    assert_eq!(store.len(), 1);
    assert!(store.is_evaluated("slot"));
    assert!(store.lookup("other").is_none());
}
