//! Sample personality documents and legacy settings.

/// A single front-facing HALv1 camera.
pub const ONE_FRONT_CAMERA: &str = r#"{
  "camera_definitions": [
    {
      "orientation": "front",
      "hal_version": "1",
      "resolutions": [
        { "width": "1600", "height": "1200" }
      ]
    }
  ]
}"#;

/// Front and back cameras with two resolutions each.
pub const TWO_CAMERAS: &str = r#"{
  "camera_definitions": [
    {
      "orientation": "front",
      "hal_version": "1",
      "resolutions": [
        { "width": "1600", "height": "1200" },
        { "width": "1280", "height": "800" }
      ]
    },
    {
      "orientation": "back",
      "hal_version": "3",
      "resolutions": [
        { "width": "1024", "height": "768" },
        { "width": "800", "height": "600" }
      ]
    }
  ]
}"#;

/// A device without cameras.
pub const NO_CAMERAS: &str = r#"{ "camera_definitions": [] }"#;

/// Second camera lacks `hal_version`; the whole document is rejected.
pub const MISSING_HAL_VERSION: &str = r#"{
  "camera_definitions": [
    {
      "orientation": "front",
      "hal_version": "1",
      "resolutions": [ { "width": "640", "height": "480" } ]
    },
    {
      "orientation": "back",
      "resolutions": [ { "width": "640", "height": "480" } ]
    }
  ]
}"#;

/// Not JSON at all.
pub const MALFORMED: &str = r#"{ "camera_definitions": [ { "orientation": "front", "#;

pub const LEGACY_FRONT: &str = "1,1600,1200,square";
pub const LEGACY_BACK: &str = "3,1024,768,wide";

/// Build a one-camera document.
pub fn single_camera_document(
    orientation: &str,
    hal_version: &str,
    resolutions: &[(&str, &str)],
) -> String {
    let resolutions: Vec<serde_json::Value> = resolutions
        .iter()
        .map(|(w, h)| serde_json::json!({ "width": w, "height": h }))
        .collect();
    serde_json::json!({
        "camera_definitions": [{
            "orientation": orientation,
            "hal_version": hal_version,
            "resolutions": resolutions,
        }]
    })
    .to_string()
}
