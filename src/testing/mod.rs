//! Testing utilities for camera personality resolution
//!
//! Deterministic fakes for the metadata reader and personality store, plus
//! sample documents, so resolution can be exercised without a device image.

pub mod fakes;
pub mod fixtures;

pub use fakes::{MemoryStore, RecordingMetadata};
