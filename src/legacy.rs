//! Legacy per-camera metadata settings.
//!
//! Before structured personalities, each camera was described by a single
//! metadata value of the form `hal_version,width,height,style`. The style
//! component is ignored.

use crate::errors::{PersonalityError, Result};
use crate::metadata::{keys, MetadataReader};
use crate::types::{Camera, Orientation};
use crate::validators::{parse_hal_version, parse_resolution};

/// Behaviour switches for the legacy fallback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LegacyOptions {
    /// Report the camera from the back key as front-facing, as older
    /// deployments did.
    pub back_camera_reports_front: bool,
}

/// Parse one legacy setting into a camera facing `orientation`.
pub fn parse_legacy_camera(setting: &str, orientation: Orientation) -> Result<Camera> {
    let mut tokens = setting.split(',');

    let hal_version = tokens
        .next()
        .ok_or_else(|| PersonalityError::missing_field("hal_version"))
        .and_then(parse_hal_version)?;

    let width = tokens
        .next()
        .ok_or_else(|| PersonalityError::missing_field("width"))?;
    let height = tokens
        .next()
        .ok_or_else(|| PersonalityError::missing_field("height"))?;
    let resolution = parse_resolution(width, height)?;

    Camera::new(orientation, hal_version, vec![resolution])
}

/// Build cameras from the front and back legacy keys.
///
/// Never fails: a missing key or a setting that does not parse just leaves
/// that camera out.
pub fn parse_legacy_cameras<R: MetadataReader + ?Sized>(
    reader: &R,
    options: LegacyOptions,
) -> Vec<Camera> {
    let back_orientation = if options.back_camera_reports_front {
        Orientation::Front
    } else {
        Orientation::Back
    };

    let sources = [
        (keys::FRONT_CAMERA_CONFIG, Orientation::Front),
        (keys::BACK_CAMERA_CONFIG, back_orientation),
    ];

    let mut cameras = Vec::with_capacity(sources.len());
    for (key, orientation) in sources {
        let Some(setting) = reader.value_for_key(key) else {
            continue;
        };
        match parse_legacy_camera(&setting, orientation) {
            Ok(camera) => {
                log::debug!("Legacy {} setting: {}", key, camera);
                cameras.push(camera);
            }
            Err(e) => log::warn!("Ignoring legacy {} setting {:?}: {}", key, setting, e),
        }
    }
    cameras
}
