//! The resolved device personality and its one-time initialization.

use crate::resolver::PersonalityResolver;
use crate::types::Camera;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Where a committed personality came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum PersonalitySource {
    /// Inline document in instance metadata.
    InlineDefinition,
    /// Personality file selected by name in instance metadata.
    NamedFile(String),
    /// The configured default personality file.
    DefaultFile(String),
    /// Per-camera legacy metadata settings.
    LegacySettings,
}

impl fmt::Display for PersonalitySource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PersonalitySource::InlineDefinition => write!(f, "inline definition"),
            PersonalitySource::NamedFile(name) => write!(f, "personality file '{}'", name),
            PersonalitySource::DefaultFile(name) => write!(f, "default personality '{}'", name),
            PersonalitySource::LegacySettings => write!(f, "legacy settings"),
        }
    }
}

/// Immutable camera configuration of this device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevicePersonality {
    cameras: Vec<Camera>,
    source: PersonalitySource,
}

impl DevicePersonality {
    pub(crate) fn new(cameras: Vec<Camera>, source: PersonalitySource) -> Self {
        crate::assert_invariant!(
            cameras.iter().all(|camera| !camera.resolutions.is_empty()),
            "Committed cameras declare at least one resolution",
            "personality::DevicePersonality"
        );
        Self { cameras, source }
    }

    pub fn cameras(&self) -> &[Camera] {
        &self.cameras
    }

    pub fn source(&self) -> &PersonalitySource {
        &self.source
    }

    pub fn is_empty(&self) -> bool {
        self.cameras.is_empty()
    }
}

/// Holds at most one resolved personality.
///
/// The first call to [`PersonalityCell::get_or_resolve`] runs the resolver;
/// concurrent callers wait for it and every later call returns the same
/// `Arc` without resolving again.
#[derive(Debug, Default)]
pub struct PersonalityCell {
    inner: OnceLock<Arc<DevicePersonality>>,
}

impl PersonalityCell {
    pub const fn new() -> Self {
        Self {
            inner: OnceLock::new(),
        }
    }

    pub fn get_or_resolve(&self, resolver: &PersonalityResolver) -> Arc<DevicePersonality> {
        Arc::clone(self.inner.get_or_init(|| Arc::new(resolver.resolve())))
    }

    /// The personality, if it has been resolved.
    pub fn get(&self) -> Option<Arc<DevicePersonality>> {
        self.inner.get().cloned()
    }

    pub fn is_resolved(&self) -> bool {
        self.inner.get().is_some()
    }
}

static GLOBAL_PERSONALITY: PersonalityCell = PersonalityCell::new();

/// Process-wide personality, resolved with `resolver` on first access.
///
/// Later calls ignore `resolver` and return the personality committed by the
/// first one.
pub fn global_personality(resolver: &PersonalityResolver) -> Arc<DevicePersonality> {
    GLOBAL_PERSONALITY.get_or_resolve(resolver)
}

/// Process-wide personality if something already resolved it.
pub fn resolved_global_personality() -> Option<Arc<DevicePersonality>> {
    GLOBAL_PERSONALITY.get()
}
