//! Property tests over the reporting surface
//!
//! Arbitrary labels and payloads flow through definition, evaluation,
//! and decoration without corruption.

use proptest::prelude::*;

use nameplate_decor::{DebugMode, inner_ref};
use nameplate_harness::TestGroup;

proptest! {
    #[test]
    fn labels_render_verbatim_through_the_stack(label in ".+") {
        let mut group = TestGroup::new("prop").with_debug_mode(DebugMode::Off);
        group.define_lazy("subject", Some(label.as_str()), |_| 0_i64);

        let (plain, diagnostic) = group
            .run("render", |instance| {
                let subject = instance.fixture("subject")?;
                Ok((format!("{subject}"), format!("{subject:?}")))
            })
            .unwrap();
        prop_assert_eq!(plain, label.clone());
        prop_assert_eq!(diagnostic, label);
    }

    #[test]
    fn augmentation_appends_the_payload(payload in any::<i64>()) {
        let mut group = TestGroup::new("prop").with_debug_mode(DebugMode::Augment);
        group.define_lazy("subject", Some("tag"), move |_| payload);

        let (plain, inner) = group
            .run("render", |instance| {
                let subject = instance.fixture("subject")?;
                let inner = inner_ref::<i64>(&subject).copied();
                Ok((format!("{subject}"), inner))
            })
            .unwrap();
        prop_assert_eq!(plain, format!("tag ({payload})"));
        prop_assert_eq!(inner, Some(payload));
    }

    #[test]
    fn payloads_survive_decoration_unchanged(text in ".*") {
        let expected = text.clone();
        let mut group = TestGroup::new("prop").with_debug_mode(DebugMode::Off);
        group.define_lazy("subject", Some("opaque"), move |_| text.clone());

        let inner = group
            .run("inspect", |instance| {
                let subject = instance.fixture("subject")?;
                Ok(inner_ref::<String>(&subject).cloned())
            })
            .unwrap();
        prop_assert_eq!(inner, Some(expected));
    }
}
