//! Scene configuration value object

use crate::domain::text::non_blank_opt;

/// The per-request attributes of the shot to generate.
///
/// Every field is optional; blank text counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SceneConfig {
    pub location: Option<String>,
    pub time_of_day: Option<String>,
    pub activity: Option<String>,
    pub mood: Option<String>,
    pub camera_angle: Option<String>,
    pub aspect_ratio: Option<String>,
    pub additional_instructions: Option<String>,
}

impl SceneConfig {
    /// Location text, if set
    pub fn location(&self) -> Option<&str> {
        non_blank_opt(self.location.as_deref())
    }

    /// Raw time-of-day text, if set
    pub fn time_of_day(&self) -> Option<&str> {
        non_blank_opt(self.time_of_day.as_deref())
    }

    /// Activity text, if set
    pub fn activity(&self) -> Option<&str> {
        non_blank_opt(self.activity.as_deref())
    }

    /// Raw mood text, if set
    pub fn mood(&self) -> Option<&str> {
        non_blank_opt(self.mood.as_deref())
    }

    /// Raw camera angle text, if set
    pub fn camera_angle(&self) -> Option<&str> {
        non_blank_opt(self.camera_angle.as_deref())
    }

    /// Raw aspect ratio text, if set
    pub fn aspect_ratio(&self) -> Option<&str> {
        non_blank_opt(self.aspect_ratio.as_deref())
    }

    /// Free-text refinements, if set
    pub fn additional_instructions(&self) -> Option<&str> {
        non_blank_opt(self.additional_instructions.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_are_absent() {
        let scene = SceneConfig {
            location: Some("  ".to_string()),
            mood: Some(String::new()),
            ..Default::default()
        };
        assert!(scene.location().is_none());
        assert!(scene.mood().is_none());
        assert!(scene.time_of_day().is_none());
    }

    #[test]
    fn set_fields_are_trimmed() {
        let scene = SceneConfig {
            activity: Some(" holding a coffee cup ".to_string()),
            ..Default::default()
        };
        assert_eq!(scene.activity(), Some("holding a coffee cup"));
    }
}
