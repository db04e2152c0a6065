//! Camera descriptor model handed to the camera HAL.

use crate::errors::PersonalityError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which side of the device a camera faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Front,
    Back,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Front => "front",
            Orientation::Back => "back",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Orientation {
    type Err = PersonalityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::validators::parse_orientation(s)
    }
}

/// Camera HAL interface version a camera claims to implement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum HalVersion {
    V1,
    V2,
    V3,
}

impl HalVersion {
    pub fn as_u8(&self) -> u8 {
        match self {
            HalVersion::V1 => 1,
            HalVersion::V2 => 2,
            HalVersion::V3 => 3,
        }
    }
}

impl From<HalVersion> for u8 {
    fn from(version: HalVersion) -> Self {
        version.as_u8()
    }
}

impl TryFrom<u8> for HalVersion {
    type Error = PersonalityError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        crate::validators::parse_hal_version(&value.to_string())
    }
}

impl fmt::Display for HalVersion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "HALv{}", self.as_u8())
    }
}

impl FromStr for HalVersion {
    type Err = PersonalityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::validators::parse_hal_version(s)
    }
}

/// A supported capture resolution.
///
/// Both dimensions are positive multiples of 8. Fields are private so the
/// only way to obtain one is through validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawResolution")]
pub struct Resolution {
    width: u32,
    height: u32,
}

#[derive(Deserialize)]
struct RawResolution {
    width: u32,
    height: u32,
}

impl TryFrom<RawResolution> for Resolution {
    type Error = PersonalityError;

    fn try_from(raw: RawResolution) -> Result<Self, Self::Error> {
        Resolution::new(raw.width, raw.height)
    }
}

impl Resolution {
    /// Build a resolution from already-numeric dimensions.
    pub fn new(width: u32, height: u32) -> Result<Self, PersonalityError> {
        crate::validators::check_dimensions(i64::from(width), i64::from(height))
    }

    pub(crate) fn from_validated(width: u32, height: u32) -> Self {
        crate::assert_invariant!(
            width > 0 && height > 0 && width % 8 == 0 && height % 8 == 0,
            "Resolution dimensions are positive multiples of 8",
            "types::Resolution"
        );
        Self { width, height }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// One camera as declared by the device personality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCamera")]
pub struct Camera {
    pub orientation: Orientation,
    pub hal_version: HalVersion,
    /// Declared capability set, in input order. Never empty.
    pub resolutions: Vec<Resolution>,
}

#[derive(Deserialize)]
struct RawCamera {
    orientation: Orientation,
    hal_version: HalVersion,
    resolutions: Vec<Resolution>,
}

impl TryFrom<RawCamera> for Camera {
    type Error = PersonalityError;

    fn try_from(raw: RawCamera) -> Result<Self, Self::Error> {
        Camera::new(raw.orientation, raw.hal_version, raw.resolutions)
    }
}

impl Camera {
    pub fn new(
        orientation: Orientation,
        hal_version: HalVersion,
        resolutions: Vec<Resolution>,
    ) -> Result<Self, PersonalityError> {
        if resolutions.is_empty() {
            return Err(PersonalityError::EmptyResolutionList);
        }
        Ok(Self {
            orientation,
            hal_version,
            resolutions,
        })
    }
}

impl fmt::Display for Camera {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sizes: Vec<String> = self.resolutions.iter().map(|r| r.to_string()).collect();
        write!(
            f,
            "{} camera, {}, [{}]",
            self.orientation,
            self.hal_version,
            sizes.join(", ")
        )
    }
}
