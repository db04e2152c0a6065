//! In-memory collaborators that record how they were used.

use crate::errors::{PersonalityError, Result};
use crate::metadata::{MetadataReader, StaticMetadata};
use crate::store::PersonalityStore;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Personality store backed by a map. Clones share contents and counters.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    files: Arc<Mutex<HashMap<String, String>>>,
    reads: Arc<Mutex<HashMap<String, usize>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(self, name: impl Into<String>, contents: impl Into<String>) -> Self {
        self.insert(name, contents);
        self
    }

    pub fn insert(&self, name: impl Into<String>, contents: impl Into<String>) {
        lock(&self.files).insert(name.into(), contents.into());
    }

    /// Number of read attempts for `name`, successful or not.
    pub fn reads_of(&self, name: &str) -> usize {
        lock(&self.reads).get(name).copied().unwrap_or(0)
    }

    pub fn total_reads(&self) -> usize {
        lock(&self.reads).values().sum()
    }
}

impl PersonalityStore for MemoryStore {
    fn read_personality(&self, name: &str) -> Result<String> {
        *lock(&self.reads).entry(name.to_string()).or_insert(0) += 1;
        lock(&self.files).get(name).cloned().ok_or_else(|| {
            PersonalityError::file_unavailable(self.describe(name), "no such personality")
        })
    }

    fn describe(&self, name: &str) -> String {
        format!("memory:{}.json", name)
    }
}

/// Metadata reader that remembers every key it was asked for.
#[derive(Debug, Clone, Default)]
pub struct RecordingMetadata {
    values: StaticMetadata,
    lookups: Arc<Mutex<Vec<String>>>,
}

impl RecordingMetadata {
    pub fn new(values: StaticMetadata) -> Self {
        Self {
            values,
            lookups: Arc::default(),
        }
    }

    /// Keys looked up so far, in order.
    pub fn lookups(&self) -> Vec<String> {
        lock(&self.lookups).clone()
    }

    pub fn was_consulted(&self, key: &str) -> bool {
        lock(&self.lookups).iter().any(|k| k == key)
    }
}

impl MetadataReader for RecordingMetadata {
    fn value_for_key(&self, key: &str) -> Option<String> {
        lock(&self.lookups).push(key.to_string());
        self.values.value_for_key(key)
    }
}
