//! Instance metadata lookup.
//!
//! The resolver only ever asks for a handful of keys and treats the reader as
//! a read-only, synchronous key to string map.

use crate::errors::{PersonalityError, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Metadata keys consumed during personality resolution.
pub mod keys {
    /// Inline personality document (JSON text).
    pub const DEVICE_PERSONALITY_DEFINITION: &str = "device_personality_definition";
    /// Name of a personality file under the personality root.
    pub const DEVICE_PERSONALITY_NAME: &str = "device_personality_name";
    /// Legacy front camera setting, `hal,width,height,style`.
    pub const FRONT_CAMERA_CONFIG: &str = "front_camera_config";
    /// Legacy back camera setting, `hal,width,height,style`.
    pub const BACK_CAMERA_CONFIG: &str = "back_camera_config";
}

/// Key/value source for instance metadata.
pub trait MetadataReader: Send + Sync {
    /// Value for `key`, or `None` when the key is not present.
    fn value_for_key(&self, key: &str) -> Option<String>;
}

impl<T: MetadataReader + ?Sized> MetadataReader for &T {
    fn value_for_key(&self, key: &str) -> Option<String> {
        (**self).value_for_key(key)
    }
}

impl<T: MetadataReader + ?Sized> MetadataReader for Box<T> {
    fn value_for_key(&self, key: &str) -> Option<String> {
        (**self).value_for_key(key)
    }
}

/// Fixed in-memory metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticMetadata {
    values: HashMap<String, String>,
}

impl StaticMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StaticMetadata {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl MetadataReader for StaticMetadata {
    fn value_for_key(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// Metadata loaded from a flat JSON object on disk.
///
/// Non-string values are stored as their JSON text, so a nested personality
/// definition can be written inline without escaping.
#[derive(Debug, Clone, Default)]
pub struct FileMetadata {
    inner: StaticMetadata,
}

impl FileMetadata {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            PersonalityError::file_unavailable(path.display().to_string(), e.to_string())
        })?;
        let metadata = Self::from_json(&contents)?;
        log::info!(
            "Loaded {} metadata values from {:?}",
            metadata.inner.len(),
            path
        );
        Ok(metadata)
    }

    pub fn from_json(contents: &str) -> Result<Self> {
        let root: serde_json::Value = serde_json::from_str(contents)
            .map_err(|e| PersonalityError::MalformedDocument(e.to_string()))?;
        let Some(object) = root.as_object() else {
            return Err(PersonalityError::MalformedDocument(
                "metadata root is not an object".to_string(),
            ));
        };

        let inner = object
            .iter()
            .map(|(key, value)| match value {
                serde_json::Value::String(s) => (key.clone(), s.clone()),
                other => (key.clone(), other.to_string()),
            })
            .collect();
        Ok(Self { inner })
    }
}

impl MetadataReader for FileMetadata {
    fn value_for_key(&self, key: &str) -> Option<String> {
        self.inner.value_for_key(key)
    }
}

/// Metadata taken from `CAMERA_PERSONALITY_META_<KEY>` environment variables.
#[derive(Debug, Clone, Default)]
pub struct EnvMetadata {
    prefix: String,
}

impl EnvMetadata {
    pub const DEFAULT_PREFIX: &'static str = "CAMERA_PERSONALITY_META_";

    pub fn new() -> Self {
        Self::with_prefix(Self::DEFAULT_PREFIX)
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn variable_for(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key.to_ascii_uppercase())
    }
}

impl MetadataReader for EnvMetadata {
    fn value_for_key(&self, key: &str) -> Option<String> {
        std::env::var(self.variable_for(key)).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_metadata_lookup() {
        let meta = StaticMetadata::new().with(keys::DEVICE_PERSONALITY_NAME, "phone");
        assert_eq!(
            meta.value_for_key(keys::DEVICE_PERSONALITY_NAME).as_deref(),
            Some("phone")
        );
        assert!(meta.value_for_key(keys::FRONT_CAMERA_CONFIG).is_none());
    }

    #[test]
    fn test_file_metadata_inline_object() {
        let meta = FileMetadata::from_json(
            r#"{
                "device_personality_name": "tablet",
                "device_personality_definition": { "camera_definitions": [] }
            }"#,
        )
        .unwrap();
        assert_eq!(
            meta.value_for_key(keys::DEVICE_PERSONALITY_NAME).as_deref(),
            Some("tablet")
        );
        assert_eq!(
            meta.value_for_key(keys::DEVICE_PERSONALITY_DEFINITION)
                .as_deref(),
            Some(r#"{"camera_definitions":[]}"#)
        );
    }

    #[test]
    fn test_file_metadata_rejects_non_object() {
        assert!(FileMetadata::from_json("[]").is_err());
        assert!(FileMetadata::from_json("not json").is_err());
    }

    #[test]
    fn test_env_variable_name() {
        let env = EnvMetadata::new();
        assert_eq!(
            env.variable_for(keys::FRONT_CAMERA_CONFIG),
            "CAMERA_PERSONALITY_META_FRONT_CAMERA_CONFIG"
        );
    }
}
