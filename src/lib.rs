//! Camera personality resolution for virtual devices
//!
//! A virtual device learns which cameras it exposes from its "personality".
//! This crate finds that personality, validates it, and hands an immutable
//! list of camera descriptors to the camera HAL.
//!
//! # Sources
//! Tried in order; the first that validates completely wins:
//! - an inline JSON definition in instance metadata
//! - a personality file named in instance metadata
//! - the default personality file
//! - legacy per-camera metadata settings (never fails, may be empty)
//!
//! # Usage
//! ```rust,ignore
//! use camera_personality::{global_personality, EnvMetadata, PersonalityResolver, ResolverConfig};
//!
//! camera_personality::init_logging();
//! let resolver = PersonalityResolver::with_directory(
//!     EnvMetadata::new(),
//!     ResolverConfig::load_or_default(),
//! );
//! for camera in global_personality(&resolver).cameras() {
//!     println!("{}", camera);
//! }
//! ```
pub mod config;
pub mod document;
pub mod errors;
pub mod invariant_ppt;
pub mod legacy;
pub mod metadata;
pub mod personality;
pub mod resolver;
pub mod store;
pub mod types;
pub mod validators;

// Testing utilities - fakes and fixtures for offline resolution tests
pub mod testing;

// Re-exports for convenience
pub use crate::config::ResolverConfig;
pub use document::{parse_camera_definitions, parse_personality_document};
pub use errors::{ErrorKind, PersonalityError, Result};
pub use legacy::{parse_legacy_camera, parse_legacy_cameras, LegacyOptions};
pub use metadata::{EnvMetadata, FileMetadata, MetadataReader, StaticMetadata};
pub use personality::{
    global_personality, resolved_global_personality, DevicePersonality, PersonalityCell,
    PersonalitySource,
};
pub use resolver::PersonalityResolver;
pub use store::{DirectoryStore, PersonalityStore};
pub use types::{Camera, HalVersion, Orientation, Resolution};
pub use validators::{parse_hal_version, parse_orientation, parse_resolution};

/// Initialize logging for personality resolution
pub fn init_logging() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "camera_personality=info");
    }
    let _ = env_logger::try_init();
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Get crate information
pub fn get_info() -> CrateInfo {
    CrateInfo {
        name: NAME.to_string(),
        version: VERSION.to_string(),
        description: DESCRIPTION.to_string(),
    }
}

/// Crate information structure
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CrateInfo {
    pub name: String,
    pub version: String,
    pub description: String,
}
