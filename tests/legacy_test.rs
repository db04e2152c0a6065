//! Tests for legacy per-camera settings

use camera_personality::legacy::{parse_legacy_camera, parse_legacy_cameras, LegacyOptions};
use camera_personality::metadata::{keys, StaticMetadata};
use camera_personality::testing::fixtures;
use camera_personality::types::{Camera, HalVersion, Orientation, Resolution};

#[cfg(test)]
mod legacy_tests {
    use super::*;

    #[test]
    fn test_front_square_setting() {
        let camera = parse_legacy_camera(fixtures::LEGACY_FRONT, Orientation::Front).unwrap();
        let expected = Camera::new(
            Orientation::Front,
            HalVersion::V1,
            vec![Resolution::new(1600, 1200).unwrap()],
        )
        .unwrap();
        assert_eq!(camera, expected);
    }

    #[test]
    fn test_extra_trailing_fields_ignored() {
        let camera = parse_legacy_camera("2,640,480,square,extra,more", Orientation::Back).unwrap();
        assert_eq!(camera.hal_version, HalVersion::V2);
        assert_eq!(camera.resolutions.len(), 1);
    }

    #[test]
    fn test_rejected_settings() {
        for setting in ["", "1", "1,1600", "x,1600,1200", "1,1601,1200", "1,1600,-8", "1x,8,8"] {
            assert!(
                parse_legacy_camera(setting, Orientation::Front).is_err(),
                "setting {:?} should be rejected",
                setting
            );
        }
    }

    #[test]
    fn test_both_keys() {
        let meta = StaticMetadata::new()
            .with(keys::FRONT_CAMERA_CONFIG, fixtures::LEGACY_FRONT)
            .with(keys::BACK_CAMERA_CONFIG, fixtures::LEGACY_BACK);
        let cameras = parse_legacy_cameras(&meta, LegacyOptions::default());
        assert_eq!(cameras.len(), 2);
        assert_eq!(cameras[0].orientation, Orientation::Front);
        assert_eq!(cameras[1].orientation, Orientation::Back);
        assert_eq!(cameras[1].hal_version, HalVersion::V3);
    }

    #[test]
    fn test_only_front_key() {
        let meta = StaticMetadata::new().with(keys::FRONT_CAMERA_CONFIG, fixtures::LEGACY_FRONT);
        let cameras = parse_legacy_cameras(&meta, LegacyOptions::default());
        assert_eq!(cameras.len(), 1);
        assert_eq!(cameras[0].orientation, Orientation::Front);
    }

    #[test]
    fn test_both_keys_invalid() {
        let meta = StaticMetadata::new()
            .with(keys::FRONT_CAMERA_CONFIG, "garbage")
            .with(keys::BACK_CAMERA_CONFIG, "1,100,100,square");
        assert!(parse_legacy_cameras(&meta, LegacyOptions::default()).is_empty());
    }

    #[test]
    fn test_compat_reports_back_as_front() {
        let meta = StaticMetadata::new()
            .with(keys::FRONT_CAMERA_CONFIG, fixtures::LEGACY_FRONT)
            .with(keys::BACK_CAMERA_CONFIG, fixtures::LEGACY_BACK);
        let options = LegacyOptions {
            back_camera_reports_front: true,
        };
        let cameras = parse_legacy_cameras(&meta, options);
        assert!(cameras.iter().all(|c| c.orientation == Orientation::Front));
    }
}
