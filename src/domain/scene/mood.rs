//! Mood and its facial expression phrase

use std::fmt;
use std::str::FromStr;

use super::lookup::{resolve_phrase, Phrase};
use crate::domain::error::UnknownSceneValue;
use crate::domain::text::normalize_key;

/// Expression used when no mood is given
pub const DEFAULT_EXPRESSION: &str = "a natural, unposed expression";

/// All recognised moods
pub const ALL_MOODS: &[Mood] = &[
    Mood::Happy,
    Mood::Sleepy,
    Mood::Melancholy,
    Mood::Confident,
    Mood::Calm,
    Mood::Playful,
    Mood::Pensive,
    Mood::Dreamy,
    Mood::Energetic,
    Mood::Serious,
];

/// Mood of the subject
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mood {
    Happy,
    Sleepy,
    Melancholy,
    Confident,
    Calm,
    Playful,
    Pensive,
    Dreamy,
    Energetic,
    Serious,
}

impl Mood {
    /// Canonical identifier
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Sleepy => "sleepy",
            Self::Melancholy => "melancholy",
            Self::Confident => "confident",
            Self::Calm => "calm",
            Self::Playful => "playful",
            Self::Pensive => "pensive",
            Self::Dreamy => "dreamy",
            Self::Energetic => "energetic",
            Self::Serious => "serious",
        }
    }

    /// Facial expression for this mood
    pub const fn expression(&self) -> &'static str {
        match self {
            Self::Happy => "a warm, genuine smile that reaches the eyes",
            Self::Sleepy => "heavy-lidded, sleepy eyes and a soft, unguarded face",
            Self::Melancholy => "a subtle, melancholy half-smile with a distant gaze",
            Self::Confident => "a relaxed, self-assured look straight past the camera",
            Self::Calm => "a calm, peaceful expression with relaxed features",
            Self::Playful => "a playful grin, caught mid-laugh",
            Self::Pensive => "a thoughtful, pensive look, lost in thought",
            Self::Dreamy => "a dreamy, faraway gaze",
            Self::Energetic => "a bright, animated expression full of energy",
            Self::Serious => "a serious, focused expression",
        }
    }

    /// Resolve a raw mood field into an expression phrase.
    pub fn expression_for(raw: Option<&str>) -> String {
        resolve_phrase::<Self, _>(raw, DEFAULT_EXPRESSION, |value| {
            format!("an expression fitting a {} mood", value)
        })
    }
}

impl Phrase for Mood {
    fn phrase(&self) -> &'static str {
        self.expression()
    }
}

impl FromStr for Mood {
    type Err = UnknownSceneValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "happy" | "joyful" | "cheerful" => Ok(Self::Happy),
            "sleepy" | "tired" | "sleepy eyes" => Ok(Self::Sleepy),
            "melancholy" | "melancholic" | "sad" => Ok(Self::Melancholy),
            "confident" | "bold" => Ok(Self::Confident),
            "calm" | "relaxed" | "serene" => Ok(Self::Calm),
            "playful" | "silly" => Ok(Self::Playful),
            "pensive" | "thoughtful" => Ok(Self::Pensive),
            "dreamy" | "wistful" => Ok(Self::Dreamy),
            "energetic" | "excited" => Ok(Self::Energetic),
            "serious" | "focused" => Ok(Self::Serious),
            _ => Err(UnknownSceneValue {
                field: "mood",
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
