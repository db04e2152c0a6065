//! Fuzz-style tests using proptest
//!
//! Parsers must turn arbitrary input into an error, never a panic.
//! Run with: cargo test --test fuzz_tests

use camera_personality::document::{parse_camera_definitions, parse_personality_document};
use camera_personality::legacy::{parse_legacy_camera, parse_legacy_cameras, LegacyOptions};
use camera_personality::metadata::{keys, StaticMetadata};
use camera_personality::types::Orientation;
use proptest::prelude::*;
use serde_json::Value;

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        "[0-9a-z]{0,6}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::hash_map(
                prop_oneof![
                    Just("camera_definitions".to_string()),
                    Just("orientation".to_string()),
                    Just("hal_version".to_string()),
                    Just("resolutions".to_string()),
                    Just("width".to_string()),
                    Just("height".to_string()),
                    "[a-z]{1,4}",
                ],
                inner,
                0..6
            )
            .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Arbitrary text never panics the document parser
    #[test]
    fn fuzz_document_text(text in ".{0,256}") {
        let _ = parse_personality_document(&text);
    }

    /// Arbitrary JSON trees never panic, and any accepted camera is valid
    #[test]
    fn fuzz_document_tree(value in arb_json()) {
        if let Ok(cameras) = parse_camera_definitions(&value) {
            for camera in cameras {
                prop_assert!(!camera.resolutions.is_empty());
                for r in &camera.resolutions {
                    prop_assert!(r.width() > 0 && r.width() % 8 == 0);
                    prop_assert!(r.height() > 0 && r.height() % 8 == 0);
                }
            }
        }
    }

    /// Arbitrary legacy settings never panic
    #[test]
    fn fuzz_legacy_setting(setting in "[0-9,a-z+ -]{0,32}") {
        let _ = parse_legacy_camera(&setting, Orientation::Front);
    }

    /// The legacy fallback never yields more than one camera per key
    #[test]
    fn fuzz_legacy_cameras(front in "[0-9,a-z]{0,24}", back in "[0-9,a-z]{0,24}") {
        let meta = StaticMetadata::new()
            .with(keys::FRONT_CAMERA_CONFIG, front)
            .with(keys::BACK_CAMERA_CONFIG, back);
        let cameras = parse_legacy_cameras(&meta, LegacyOptions::default());
        prop_assert!(cameras.len() <= 2);
    }
}
