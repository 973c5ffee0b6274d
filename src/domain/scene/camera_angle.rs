//! Camera angle and its framing phrase

use std::fmt;
use std::str::FromStr;

use super::lookup::{resolve_phrase, Phrase};
use crate::domain::error::UnknownSceneValue;
use crate::domain::text::normalize_key;

/// Framing used when no camera angle is given
pub const DEFAULT_FRAMING: &str = "a casual, slightly uneven handheld framing";

/// All recognised camera angles
pub const ALL_CAMERA_ANGLES: &[CameraAngle] = &[
    CameraAngle::EyeLevel,
    CameraAngle::LowAngle,
    CameraAngle::HighAngle,
    CameraAngle::Overhead,
    CameraAngle::CloseUp,
    CameraAngle::Selfie,
    CameraAngle::OverTheShoulder,
    CameraAngle::WideShot,
];

/// Camera angle / composition of the shot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraAngle {
    EyeLevel,
    LowAngle,
    HighAngle,
    Overhead,
    CloseUp,
    Selfie,
    OverTheShoulder,
    WideShot,
}

impl CameraAngle {
    /// Canonical identifier
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::EyeLevel => "eye level",
            Self::LowAngle => "low angle",
            Self::HighAngle => "high angle",
            Self::Overhead => "overhead",
            Self::CloseUp => "close-up",
            Self::Selfie => "selfie",
            Self::OverTheShoulder => "over the shoulder",
            Self::WideShot => "wide shot",
        }
    }

    /// Framing description for this angle
    pub const fn framing(&self) -> &'static str {
        match self {
            Self::EyeLevel => "shot at eye level, as if by a friend standing nearby",
            Self::LowAngle => "shot from a low angle looking slightly up at the person",
            Self::HighAngle => "shot from a high angle looking down at the person",
            Self::Overhead => "shot from directly overhead",
            Self::CloseUp => "a tight close-up on the face and shoulders",
            Self::Selfie => "a handheld selfie taken at arm's length",
            Self::OverTheShoulder => "shot over the shoulder of someone nearby",
            Self::WideShot => "a wide shot that shows the full body and surroundings",
        }
    }

    /// Resolve a raw camera angle field into a framing phrase.
    pub fn framing_for(raw: Option<&str>) -> String {
        resolve_phrase::<Self, _>(raw, DEFAULT_FRAMING, |value| {
            format!("shot from a \"{}\" angle", value)
        })
    }
}

impl Phrase for CameraAngle {
    fn phrase(&self) -> &'static str {
        self.framing()
    }
}

impl FromStr for CameraAngle {
    type Err = UnknownSceneValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "eye level" | "eyelevel" | "straight on" => Ok(Self::EyeLevel),
            "low angle" | "low" | "worm's eye" => Ok(Self::LowAngle),
            "high angle" | "high" => Ok(Self::HighAngle),
            "overhead" | "top down" | "bird's eye" | "flat lay" => Ok(Self::Overhead),
            "close up" | "closeup" | "portrait" => Ok(Self::CloseUp),
            "selfie" | "mirror selfie" => Ok(Self::Selfie),
            "over the shoulder" => Ok(Self::OverTheShoulder),
            "wide shot" | "wide" | "full body" => Ok(Self::WideShot),
            _ => Err(UnknownSceneValue {
                field: "camera angle",
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for CameraAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_variants() {
        assert_eq!("Close-Up".parse::<CameraAngle>().unwrap(), CameraAngle::CloseUp);
        assert_eq!("over_the_shoulder".parse::<CameraAngle>().unwrap(), CameraAngle::OverTheShoulder);
        assert_eq!("top-down".parse::<CameraAngle>().unwrap(), CameraAngle::Overhead);
    }

    #[test]
    fn every_identifier_parses_back() {
        for angle in ALL_CAMERA_ANGLES {
            assert_eq!(angle.as_str().parse::<CameraAngle>().unwrap(), *angle);
        }
    }

    #[test]
    fn framing_for_unknown_and_absent() {
        assert_eq!(CameraAngle::framing_for(Some("dutch tilt")), "shot from a \"dutch tilt\" angle");
        assert_eq!(CameraAngle::framing_for(None), DEFAULT_FRAMING);
    }
}
