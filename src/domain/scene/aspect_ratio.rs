//! Aspect ratio directive

use std::fmt;
use std::str::FromStr;

use super::lookup::Phrase;
use crate::domain::error::UnknownSceneValue;
use crate::domain::text::{non_blank_opt, normalize_key};

/// All recognised aspect ratios
pub const ALL_ASPECT_RATIOS: &[AspectRatio] = &[
    AspectRatio::Square,
    AspectRatio::Portrait4x5,
    AspectRatio::Portrait3x4,
    AspectRatio::Portrait2x3,
    AspectRatio::Vertical9x16,
    AspectRatio::Landscape4x3,
    AspectRatio::Landscape3x2,
    AspectRatio::Widescreen16x9,
    AspectRatio::Cinematic21x9,
];

/// Output image aspect ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AspectRatio {
    Square,
    Portrait4x5,
    Portrait3x4,
    Portrait2x3,
    Vertical9x16,
    Landscape4x3,
    Landscape3x2,
    Widescreen16x9,
    Cinematic21x9,
}

impl AspectRatio {
    /// Ratio in `w:h` notation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Square => "1:1",
            Self::Portrait4x5 => "4:5",
            Self::Portrait3x4 => "3:4",
            Self::Portrait2x3 => "2:3",
            Self::Vertical9x16 => "9:16",
            Self::Landscape4x3 => "4:3",
            Self::Landscape3x2 => "3:2",
            Self::Widescreen16x9 => "16:9",
            Self::Cinematic21x9 => "21:9",
        }
    }

    /// Format directive for this ratio
    pub const fn directive(&self) -> &'static str {
        match self {
            Self::Square => "a square 1:1 photo",
            Self::Portrait4x5 => "a 4:5 portrait photo, as for a social media feed post",
            Self::Portrait3x4 => "a 3:4 portrait photo",
            Self::Portrait2x3 => "a 2:3 portrait photo",
            Self::Vertical9x16 => "a vertical 9:16 full-screen phone photo, as for a story",
            Self::Landscape4x3 => "a 4:3 landscape photo",
            Self::Landscape3x2 => "a 3:2 landscape photo, like a classic 35mm frame",
            Self::Widescreen16x9 => "a wide 16:9 landscape photo",
            Self::Cinematic21x9 => "an ultra-wide 21:9 cinematic photo",
        }
    }
}

impl Phrase for AspectRatio {
    fn phrase(&self) -> &'static str {
        self.directive()
    }
}

/// An aspect ratio request as resolved for the prompt.
///
/// Unknown ratios are kept verbatim instead of being dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAspectRatio {
    /// Ratio as restated at the end of the prompt
    pub ratio: String,
    /// Format directive opening the prompt
    pub directive: String,
}

impl ResolvedAspectRatio {
    /// Resolve a raw aspect ratio field. Absent or blank yields `None`.
    pub fn resolve(raw: Option<&str>) -> Option<Self> {
        let value = non_blank_opt(raw)?;
        let resolved = match value.parse::<AspectRatio>() {
            Ok(known) => Self {
                ratio: known.as_str().to_string(),
                directive: known.directive().to_string(),
            },
            Err(_) => Self {
                ratio: value.to_string(),
                directive: format!("a photo with a {} aspect ratio", value),
            },
        };
        Some(resolved)
    }
}

/// Fold `9 x 16`, `9/16` and `9 : 16` into `9:16`
fn normalize_ratio(value: &str) -> String {
    let key = normalize_key(value);
    let compact: String = key.chars().filter(|c| !c.is_whitespace()).collect();
    let mut parts = compact.splitn(2, |c| c == ':' || c == 'x' || c == '/');
    match (parts.next(), parts.next()) {
        (Some(w), Some(h))
            if !w.is_empty()
                && !h.is_empty()
                && w.chars().all(|c| c.is_ascii_digit())
                && h.chars().all(|c| c.is_ascii_digit()) =>
        {
            format!("{}:{}", w, h)
        }
        _ => key,
    }
}

impl FromStr for AspectRatio {
    type Err = UnknownSceneValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_ratio(s).as_str() {
            "1:1" | "square" => Ok(Self::Square),
            "4:5" | "portrait" => Ok(Self::Portrait4x5),
            "3:4" => Ok(Self::Portrait3x4),
            "2:3" => Ok(Self::Portrait2x3),
            "9:16" | "vertical" | "story" => Ok(Self::Vertical9x16),
            "4:3" | "landscape" => Ok(Self::Landscape4x3),
            "3:2" => Ok(Self::Landscape3x2),
            "16:9" | "widescreen" => Ok(Self::Widescreen16x9),
            "21:9" | "cinematic" => Ok(Self::Cinematic21x9),
            _ => Err(UnknownSceneValue {
                field: "aspect ratio",
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_separators() {
        assert_eq!("9:16".parse::<AspectRatio>().unwrap(), AspectRatio::Vertical9x16);
        assert_eq!("9x16".parse::<AspectRatio>().unwrap(), AspectRatio::Vertical9x16);
        assert_eq!("9 / 16".parse::<AspectRatio>().unwrap(), AspectRatio::Vertical9x16);
        assert_eq!(" 16 : 9 ".parse::<AspectRatio>().unwrap(), AspectRatio::Widescreen16x9);
    }

    #[test]
    fn parse_aliases() {
        assert_eq!("Square".parse::<AspectRatio>().unwrap(), AspectRatio::Square);
        assert_eq!("story".parse::<AspectRatio>().unwrap(), AspectRatio::Vertical9x16);
    }

    #[test]
    fn every_ratio_parses_back() {
        for ratio in ALL_ASPECT_RATIOS {
            assert_eq!(ratio.as_str().parse::<AspectRatio>().unwrap(), *ratio);
        }
    }

    #[test]
    fn resolve_known_ratio() {
        let resolved = ResolvedAspectRatio::resolve(Some("9x16")).unwrap();
        assert_eq!(resolved.ratio, "9:16");
        assert!(resolved.directive.contains("9:16"));
    }

    #[test]
    fn resolve_unknown_ratio_keeps_value() {
        let resolved = ResolvedAspectRatio::resolve(Some("5:7")).unwrap();
        assert_eq!(resolved.ratio, "5:7");
        assert_eq!(resolved.directive, "a photo with a 5:7 aspect ratio");
    }

    #[test]
    fn resolve_absent_ratio() {
        assert!(ResolvedAspectRatio::resolve(None).is_none());
        assert!(ResolvedAspectRatio::resolve(Some("  ")).is_none());
    }
}
