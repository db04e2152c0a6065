//! The process-wide personality is resolved once and never again.

use camera_personality::config::ResolverConfig;
use camera_personality::metadata::{keys, StaticMetadata};
use camera_personality::personality::{
    global_personality, resolved_global_personality, PersonalitySource,
};
use camera_personality::resolver::PersonalityResolver;
use camera_personality::testing::{fixtures, MemoryStore};
use std::sync::Arc;

#[test]
fn test_global_personality_first_resolver_wins() {
    assert!(resolved_global_personality().is_none());

    let first = PersonalityResolver::new(
        StaticMetadata::new().with(keys::DEVICE_PERSONALITY_DEFINITION, fixtures::TWO_CAMERAS),
        MemoryStore::new(),
        ResolverConfig::default(),
    );
    let second = PersonalityResolver::new(
        StaticMetadata::new().with(keys::FRONT_CAMERA_CONFIG, fixtures::LEGACY_FRONT),
        MemoryStore::new(),
        ResolverConfig::default(),
    );

    let a = global_personality(&first);
    let b = global_personality(&second);

    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(b.source(), &PersonalitySource::InlineDefinition);
    assert_eq!(b.cameras().len(), 2);
    assert!(resolved_global_personality().is_some());
}
