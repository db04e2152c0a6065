//! Access to named personality files.

use crate::errors::{PersonalityError, Result};
use std::fs;
use std::path::PathBuf;

/// Extension appended to personality names.
pub const PERSONALITY_EXTENSION: &str = "json";

/// Source of personality documents, addressed by name.
pub trait PersonalityStore: Send + Sync {
    /// Full text of the personality called `name`.
    fn read_personality(&self, name: &str) -> Result<String>;

    /// Human-readable location of `name`, for diagnostics.
    fn describe(&self, name: &str) -> String {
        format!("{}.{}", name, PERSONALITY_EXTENSION)
    }
}

impl<T: PersonalityStore + ?Sized> PersonalityStore for &T {
    fn read_personality(&self, name: &str) -> Result<String> {
        (**self).read_personality(name)
    }

    fn describe(&self, name: &str) -> String {
        (**self).describe(name)
    }
}

impl<T: PersonalityStore + ?Sized> PersonalityStore for Box<T> {
    fn read_personality(&self, name: &str) -> Result<String> {
        (**self).read_personality(name)
    }

    fn describe(&self, name: &str) -> String {
        (**self).describe(name)
    }
}

/// Personality files stored as `<root>/<name>.json`.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(format!("{}.{}", name, PERSONALITY_EXTENSION))
    }
}

impl PersonalityStore for DirectoryStore {
    fn read_personality(&self, name: &str) -> Result<String> {
        let path = self.path_for(name);
        fs::read_to_string(&path).map_err(|e| {
            log::error!("Could not open personality file: {}", path.display());
            PersonalityError::file_unavailable(path.display().to_string(), e.to_string())
        })
    }

    fn describe(&self, name: &str) -> String {
        self.path_for(name).display().to_string()
    }
}

/// Whether `name` can only address a file directly inside the store root.
pub fn is_valid_personality_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', '\0'])
}
