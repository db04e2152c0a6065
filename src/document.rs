//! Structured personality documents.
//!
//! ```json
//! {
//!   "camera_definitions": [
//!     {
//!       "orientation": "front",
//!       "hal_version": "1",
//!       "resolutions": [
//!         { "width": "1600", "height": "1200" },
//!         { "width": "1280", "height": "800" }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! Entries of `camera_definitions` or `resolutions` that are not objects are
//! logged and skipped. A missing required field or a value that fails
//! validation rejects the whole document.

use crate::errors::{PersonalityError, Result};
use crate::types::{Camera, Resolution};
use crate::validators::{parse_hal_version, parse_orientation, parse_resolution};
use serde_json::{Map, Value};

pub const CAMERA_DEFINITIONS_KEY: &str = "camera_definitions";
pub const ORIENTATION_KEY: &str = "orientation";
pub const HAL_VERSION_KEY: &str = "hal_version";
pub const RESOLUTIONS_KEY: &str = "resolutions";
pub const WIDTH_KEY: &str = "width";
pub const HEIGHT_KEY: &str = "height";

/// Parse personality text and extract its camera definitions.
pub fn parse_personality_document(text: &str) -> Result<Vec<Camera>> {
    let root: Value = serde_json::from_str(text).map_err(|e| {
        log::error!("Could not parse personality: {}", e);
        PersonalityError::MalformedDocument(e.to_string())
    })?;
    parse_camera_definitions(&root)
}

/// Walk an already-parsed personality document.
pub fn parse_camera_definitions(root: &Value) -> Result<Vec<Camera>> {
    let Some(root) = root.as_object() else {
        log::error!("Personality root is not an object");
        return Err(PersonalityError::MalformedDocument(
            "personality root is not an object".to_string(),
        ));
    };

    let definitions = match root.get(CAMERA_DEFINITIONS_KEY) {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(other) => {
            log::error!("{} is not an array: {}", CAMERA_DEFINITIONS_KEY, other);
            return Err(PersonalityError::MalformedDocument(format!(
                "{} must be an array",
                CAMERA_DEFINITIONS_KEY
            )));
        }
    };

    let mut cameras = Vec::with_capacity(definitions.len());
    for (index, item) in definitions.iter().enumerate() {
        let Some(definition) = item.as_object() else {
            let skipped = PersonalityError::malformed_element("camera definition", index);
            log::warn!("{}", skipped);
            continue;
        };
        cameras.push(parse_camera(definition)?);
    }

    Ok(cameras)
}

fn parse_camera(definition: &Map<String, Value>) -> Result<Camera> {
    let orientation = parse_orientation(&required_token(definition, ORIENTATION_KEY)?)?;
    let hal_version = parse_hal_version(&required_token(definition, HAL_VERSION_KEY)?)?;

    let resolutions = match required(definition, RESOLUTIONS_KEY)? {
        Value::Array(items) if !items.is_empty() => items,
        _ => {
            log::error!(
                "Invalid camera definition: {} is not an array or is empty",
                RESOLUTIONS_KEY
            );
            return Err(PersonalityError::EmptyResolutionList);
        }
    };

    let mut parsed = Vec::with_capacity(resolutions.len());
    for (index, item) in resolutions.iter().enumerate() {
        let Some(entry) = item.as_object() else {
            let skipped = PersonalityError::malformed_element("camera resolution", index);
            log::warn!("{}", skipped);
            continue;
        };
        parsed.push(parse_resolution_entry(entry)?);
    }

    // Every entry may have been skipped.
    Camera::new(orientation, hal_version, parsed).map_err(|e| {
        log::error!("Camera definition has no usable resolutions");
        e
    })
}

fn parse_resolution_entry(entry: &Map<String, Value>) -> Result<Resolution> {
    if !entry.contains_key(WIDTH_KEY) || !entry.contains_key(HEIGHT_KEY) {
        log::error!(
            "Invalid camera resolution: keys {} and {} are both required",
            WIDTH_KEY,
            HEIGHT_KEY
        );
        let missing = if entry.contains_key(WIDTH_KEY) {
            HEIGHT_KEY
        } else {
            WIDTH_KEY
        };
        return Err(PersonalityError::missing_field(missing));
    }

    let width = required_token(entry, WIDTH_KEY)?;
    let height = required_token(entry, HEIGHT_KEY)?;
    parse_resolution(&width, &height)
}

fn required<'a>(object: &'a Map<String, Value>, key: &str) -> Result<&'a Value> {
    object.get(key).ok_or_else(|| {
        log::error!("Invalid camera definition: key {} is missing", key);
        PersonalityError::missing_field(key)
    })
}

fn required_token(object: &Map<String, Value>, key: &str) -> Result<String> {
    scalar_token(key, required(object, key)?)
}

/// Render a scalar JSON value as the string token the validators expect.
fn scalar_token(key: &str, value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok(String::new()),
        Value::Array(_) | Value::Object(_) => {
            log::error!("Invalid camera definition: {} is not a scalar value", key);
            Err(PersonalityError::invalid_value(
                key,
                value.to_string(),
                "expected a string",
            ))
        }
    }
}
