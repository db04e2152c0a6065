//! Personality resolution across definition sources.
//!
//! Sources are tried in a fixed order and the first one that validates
//! completely is committed:
//!
//! 1. inline definition from metadata,
//! 2. personality file named in metadata,
//! 3. the default personality file,
//! 4. legacy per-camera settings, which always succeed (possibly empty).
//!
//! A source is parsed into a fresh list; nothing from a rejected source
//! survives into the next attempt.

use crate::config::ResolverConfig;
use crate::document::parse_personality_document;
use crate::errors::{PersonalityError, Result};
use crate::legacy::parse_legacy_cameras;
use crate::metadata::{keys, MetadataReader};
use crate::personality::{DevicePersonality, PersonalitySource};
use crate::store::{is_valid_personality_name, DirectoryStore, PersonalityStore};
use crate::types::Camera;

pub struct PersonalityResolver {
    reader: Box<dyn MetadataReader>,
    store: Box<dyn PersonalityStore>,
    config: ResolverConfig,
}

impl PersonalityResolver {
    pub fn new<R, S>(reader: R, store: S, config: ResolverConfig) -> Self
    where
        R: MetadataReader + 'static,
        S: PersonalityStore + 'static,
    {
        Self {
            reader: Box::new(reader),
            store: Box::new(store),
            config,
        }
    }

    /// Resolver reading personality files from `config.personalities_dir`.
    pub fn with_directory<R>(reader: R, config: ResolverConfig) -> Self
    where
        R: MetadataReader + 'static,
    {
        let store = DirectoryStore::new(config.personalities_dir.clone());
        Self::new(reader, store, config)
    }

    /// Run the full fallback chain. Never fails.
    pub fn resolve(&self) -> DevicePersonality {
        if let Some(definition) = self.reader.value_for_key(keys::DEVICE_PERSONALITY_DEFINITION) {
            let parsed = parse_personality_document(&definition);
            if let Some(personality) = self.attempt(PersonalitySource::InlineDefinition, parsed) {
                return personality;
            }
        }

        if let Some(name) = self.reader.value_for_key(keys::DEVICE_PERSONALITY_NAME) {
            let parsed = self.load_named(&name);
            if let Some(personality) = self.attempt(PersonalitySource::NamedFile(name), parsed) {
                return personality;
            }
        }

        let default_name = &self.config.default_personality;
        let parsed = self.load_named(default_name);
        let source = PersonalitySource::DefaultFile(default_name.clone());
        if let Some(personality) = self.attempt(source, parsed) {
            return personality;
        }

        log::error!("Could not initialize device personality from any source");

        let cameras = parse_legacy_cameras(&self.reader, self.config.legacy_options());
        self.commit(cameras, PersonalitySource::LegacySettings)
    }

    /// Resolve exactly one source, without falling back.
    pub fn resolve_source(&self, source: &PersonalitySource) -> Result<Vec<Camera>> {
        match source {
            PersonalitySource::InlineDefinition => {
                let definition = self
                    .reader
                    .value_for_key(keys::DEVICE_PERSONALITY_DEFINITION)
                    .ok_or_else(|| {
                        PersonalityError::missing_field(keys::DEVICE_PERSONALITY_DEFINITION)
                    })?;
                parse_personality_document(&definition)
            }
            PersonalitySource::NamedFile(name) | PersonalitySource::DefaultFile(name) => {
                self.load_named(name)
            }
            PersonalitySource::LegacySettings => Ok(parse_legacy_cameras(
                &self.reader,
                self.config.legacy_options(),
            )),
        }
    }

    fn attempt(
        &self,
        source: PersonalitySource,
        parsed: Result<Vec<Camera>>,
    ) -> Option<DevicePersonality> {
        match parsed {
            Ok(cameras) => Some(self.commit(cameras, source)),
            Err(e) => {
                log::warn!("Rejected {}: {}", source, e);
                None
            }
        }
    }

    fn load_named(&self, name: &str) -> Result<Vec<Camera>> {
        if !is_valid_personality_name(name) {
            log::error!("Refusing personality name {:?}", name);
            return Err(PersonalityError::file_unavailable(
                name,
                "personality name must not contain path components",
            ));
        }

        let text = self.store.read_personality(name)?;
        log::info!("Parsing personality file: {}", self.store.describe(name));
        parse_personality_document(&text)
    }

    fn commit(&self, cameras: Vec<Camera>, source: PersonalitySource) -> DevicePersonality {
        log::info!(
            "Device personality from {}: {} camera(s)",
            source,
            cameras.len()
        );
        for camera in &cameras {
            log::debug!("  {}", camera);
        }
        DevicePersonality::new(cameras, source)
    }
}

impl std::fmt::Debug for PersonalityResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersonalityResolver")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
