//! Time of day and its lighting phrase

use std::fmt;
use std::str::FromStr;

use super::lookup::{resolve_phrase, Phrase};
use crate::domain::error::UnknownSceneValue;
use crate::domain::text::normalize_key;

/// Lighting used when no time of day is given
pub const DEFAULT_LIGHTING: &str = "natural lighting";

/// All recognised times of day
pub const ALL_TIMES_OF_DAY: &[TimeOfDay] = &[
    TimeOfDay::Morning,
    TimeOfDay::Noon,
    TimeOfDay::Afternoon,
    TimeOfDay::Sunset,
    TimeOfDay::Evening,
    TimeOfDay::BlueHour,
    TimeOfDay::Night,
];

/// Time of day for the shot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeOfDay {
    Morning,
    Noon,
    Afternoon,
    Sunset,
    Evening,
    BlueHour,
    Night,
}

impl TimeOfDay {
    /// Canonical identifier
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Noon => "noon",
            Self::Afternoon => "afternoon",
            Self::Sunset => "sunset",
            Self::Evening => "evening",
            Self::BlueHour => "blue hour",
            Self::Night => "night",
        }
    }

    /// Lighting that goes with this time of day
    pub const fn lighting(&self) -> &'static str {
        match self {
            Self::Morning => "soft morning sunlight",
            Self::Noon => "hard overhead midday sun",
            Self::Afternoon => "bright daylight",
            Self::Sunset => "orange sunset glow with long shadows",
            Self::Evening => "golden hour light",
            Self::BlueHour => "cool blue twilight",
            Self::Night => "dim ambient street light",
        }
    }

    /// Resolve a raw time-of-day field into a lighting phrase.
    /// Unknown values keep the user's wording.
    pub fn lighting_for(raw: Option<&str>) -> String {
        resolve_phrase::<Self, _>(raw, DEFAULT_LIGHTING, |value| {
            format!("{} suited to \"{}\"", DEFAULT_LIGHTING, value)
        })
    }
}

impl Phrase for TimeOfDay {
    fn phrase(&self) -> &'static str {
        self.lighting()
    }
}

impl FromStr for TimeOfDay {
    type Err = UnknownSceneValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "morning" | "sunrise" | "early morning" => Ok(Self::Morning),
            "noon" | "midday" => Ok(Self::Noon),
            "afternoon" | "day" | "daytime" => Ok(Self::Afternoon),
            "sunset" => Ok(Self::Sunset),
            "evening" | "golden hour" => Ok(Self::Evening),
            "blue hour" | "dusk" | "twilight" => Ok(Self::BlueHour),
            "night" | "midnight" | "late night" => Ok(Self::Night),
            _ => Err(UnknownSceneValue {
                field: "time of day",
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
