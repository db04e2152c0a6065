//! Token validators shared by the document and legacy parsers.
//!
//! All string to enum mapping for orientations and HAL versions lives here.

use crate::errors::{PersonalityError, Result};
use crate::types::{HalVersion, Orientation, Resolution};

/// Parse an orientation literal. Only `"back"` and `"front"` are accepted.
pub fn parse_orientation(token: &str) -> Result<Orientation> {
    match token {
        "back" => Ok(Orientation::Back),
        "front" => Ok(Orientation::Front),
        _ => {
            log::error!("Invalid camera orientation: {}", token);
            Err(PersonalityError::invalid_value(
                "orientation",
                token,
                "expected \"front\" or \"back\"",
            ))
        }
    }
}

/// Parse a camera HAL version. The token must be a whole decimal number.
pub fn parse_hal_version(token: &str) -> Result<HalVersion> {
    let version = parse_decimal("hal_version", token)?;
    match version {
        1 => Ok(HalVersion::V1),
        2 => Ok(HalVersion::V2),
        3 => Ok(HalVersion::V3),
        other => {
            log::error!("Invalid camera HAL version. Version {} not supported", other);
            Err(PersonalityError::invalid_value(
                "hal_version",
                token,
                format!("version {} not supported", other),
            ))
        }
    }
}

/// Parse a width/height token pair into a [`Resolution`].
pub fn parse_resolution(width: &str, height: &str) -> Result<Resolution> {
    let w = parse_decimal("width", width)?;
    let h = parse_decimal("height", height)?;
    check_dimensions(w, h)
}

/// Range checks applied to numeric dimensions.
pub(crate) fn check_dimensions(width: i64, height: i64) -> Result<Resolution> {
    if width <= 0 || height <= 0 {
        log::error!("Invalid camera resolution: {}x{}", width, height);
        let (field, value) = if width <= 0 {
            ("width", width)
        } else {
            ("height", height)
        };
        return Err(PersonalityError::invalid_value(
            field,
            value.to_string(),
            "must be positive",
        ));
    }

    if width % 8 != 0 || height % 8 != 0 {
        log::error!(
            "Invalid camera resolution: width and height must be divisible by 8, got {}x{} ({}x{})",
            width,
            height,
            width % 8,
            height % 8
        );
        let (field, value) = if width % 8 != 0 {
            ("width", width)
        } else {
            ("height", height)
        };
        return Err(PersonalityError::invalid_value(
            field,
            value.to_string(),
            "must be divisible by 8",
        ));
    }

    let (Ok(w), Ok(h)) = (u32::try_from(width), u32::try_from(height)) else {
        return Err(PersonalityError::invalid_value(
            "resolution",
            format!("{}x{}", width, height),
            "dimension out of range",
        ));
    };

    Ok(Resolution::from_validated(w, h))
}

/// Strict base-10 integer parse: optional sign, then digits, nothing else.
///
/// A numeric prefix followed by anything (`"12abc"`, `"1x"`, `"8 "`) is a
/// failure, not a truncated value.
pub fn parse_decimal(field: &str, token: &str) -> Result<i64> {
    let digits = token
        .strip_prefix('+')
        .or_else(|| token.strip_prefix('-'))
        .unwrap_or(token);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        log::error!("Invalid camera {}. Expected number, got {:?}", field, token);
        return Err(PersonalityError::invalid_value(
            field,
            token,
            "expected a decimal number",
        ));
    }

    token.parse::<i64>().map_err(|e| {
        log::error!("Invalid camera {}: {:?} ({})", field, token, e);
        PersonalityError::invalid_value(field, token, e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    #[test]
    fn test_orientation_literals() {
        assert_eq!(parse_orientation("front").unwrap(), Orientation::Front);
        assert_eq!(parse_orientation("back").unwrap(), Orientation::Back);
        assert!(parse_orientation("Front").is_err());
        assert!(parse_orientation("side").is_err());
        assert!(parse_orientation("").is_err());
    }

    #[test]
    fn test_hal_versions() {
        assert_eq!(parse_hal_version("1").unwrap(), HalVersion::V1);
        assert_eq!(parse_hal_version("2").unwrap(), HalVersion::V2);
        assert_eq!(parse_hal_version("3").unwrap(), HalVersion::V3);
        assert_eq!(parse_hal_version("+3").unwrap(), HalVersion::V3);
        assert!(parse_hal_version("0").is_err());
        assert!(parse_hal_version("4").is_err());
        assert!(parse_hal_version("1x").is_err());
        assert!(parse_hal_version(" 1").is_err());
        assert!(parse_hal_version("").is_err());
    }

    #[test]
    fn test_resolution_rules() {
        let r = parse_resolution("1600", "1200").unwrap();
        assert_eq!((r.width(), r.height()), (1600, 1200));

        let err = parse_resolution("100", "100").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFieldValue);
        assert!(err.to_string().contains("divisible by 8"));

        assert!(parse_resolution("0", "8").is_err());
        assert!(parse_resolution("-8", "8").is_err());
        assert!(parse_resolution("640", "480px").is_err());
        assert!(parse_resolution("640", "").is_err());
    }

    #[test]
    fn test_error_names_offending_field() {
        match parse_resolution("640", "484").unwrap_err() {
            PersonalityError::InvalidFieldValue { field, value, .. } => {
                assert_eq!(field, "height");
                assert_eq!(value, "484");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_surrounding_whitespace_rejected() {
        assert!(parse_hal_version(" 1").is_err());
        assert!(parse_hal_version("1 ").is_err());
        assert!(parse_resolution(" 8", "8").is_err());
        assert!(parse_resolution("8", "\t8").is_err());
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert!(parse_resolution("99999999999999999999", "8").is_err());
        assert!(parse_resolution("8589934592", "8").is_err());
    }
}
