//! Prompt composer

use tracing::trace;

use super::clauses::{CompositionContext, CLAUSES};
use super::prompt_text::PromptText;
use crate::domain::media::ReferenceFlags;
use crate::domain::persona::PersonaTraits;
use crate::domain::scene::SceneConfig;

/// Separator between prompt sections
pub const SECTION_SEPARATOR: &str = "\n\n";

/// Builds the image-generation prompt from persona, scene and the set of
/// attached reference images.
///
/// Composition is total and deterministic: identical inputs always give a
/// byte-identical prompt, and no input makes it fail.
pub struct PromptComposer;

impl PromptComposer {
    /// Compose the prompt
    pub fn compose(
        persona: &PersonaTraits,
        scene: &SceneConfig,
        flags: ReferenceFlags,
    ) -> PromptText {
        let ctx = CompositionContext::new(persona, scene, flags);
        let mut included = Vec::with_capacity(CLAUSES.len());
        let sections: Vec<String> = CLAUSES
            .iter()
            .filter_map(|clause| {
                let section = (clause.build)(&ctx)?;
                included.push(clause.name);
                Some(section)
            })
            .collect();
        trace!(sections = ?included, "composed prompt");

        PromptText::new(sections.join(SECTION_SEPARATOR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::prompt::clauses::{ITEMS_IMAGE_LEAD, LOCATION_IMAGE_LEAD};

    fn flags(has_location: bool, has_items: bool) -> ReferenceFlags {
        ReferenceFlags {
            has_location,
            has_items,
        }
    }

    fn full_persona() -> PersonaTraits {
        PersonaTraits::new("introverted traveler", "grainy", "urban cityscapes")
    }

    fn full_scene() -> SceneConfig {
        SceneConfig {
            location: Some("Lisbon".to_string()),
            time_of_day: Some("morning".to_string()),
            activity: Some("holding a coffee cup".to_string()),
            mood: Some("sleepy".to_string()),
            camera_angle: Some("eye level".to_string()),
            aspect_ratio: Some("9:16".to_string()),
            additional_instructions: Some("a tram passes in the background".to_string()),
        }
    }

    #[test]
    fn all_empty_inputs_give_generic_prompt() {
        let prompt = PromptComposer::compose(
            &PersonaTraits::new("", " ", ""),
            &SceneConfig::default(),
            flags(false, false),
        );
        let text = prompt.content();

        assert!(!text.is_empty());
        assert!(text.contains("A single person"));
        assert!(text.contains("natural lighting"));
        assert!(!text.contains("undefined"));
        assert!(!text.contains("null"));
        assert!(!text.contains("\"\""));
        assert!(!text.contains("**Format:**"));
        assert!(!text.contains("**Location:**"));
        assert!(!text.contains("**User Refinements:**"));
        assert!(!text.contains("\n\n\n"));
        assert!(!text.ends_with(SECTION_SEPARATOR));
    }

    #[test]
    fn composition_is_deterministic() {
        let persona = full_persona();
        let scene = full_scene();
        let first = PromptComposer::compose(&persona, &scene, flags(true, true));
        let second = PromptComposer::compose(&persona, &scene, flags(true, true));
        assert_eq!(first, second);
        assert_eq!(first.content().as_bytes(), second.content().as_bytes());
    }

    #[test]
    fn location_reference_clause_follows_flag() {
        let persona = full_persona();
        let scene = full_scene();
        let without = PromptComposer::compose(&persona, &scene, flags(false, false));
        let with = PromptComposer::compose(&persona, &scene, flags(true, false));
        assert!(!without.content().contains(LOCATION_IMAGE_LEAD));
        assert!(with.content().contains(LOCATION_IMAGE_LEAD));
    }

    #[test]
    fn items_reference_clause_follows_flag() {
        let persona = full_persona();
        let scene = full_scene();
        let without = PromptComposer::compose(&persona, &scene, flags(true, false));
        let with = PromptComposer::compose(&persona, &scene, flags(true, true));
        assert!(!without.content().contains(ITEMS_IMAGE_LEAD));
        assert!(with.content().contains(ITEMS_IMAGE_LEAD));
    }

    #[test]
    fn aspect_ratio_is_stated_first_and_restated_last() {
        let prompt = PromptComposer::compose(&full_persona(), &full_scene(), flags(false, false));
        let sections: Vec<&str> = prompt.content().split(SECTION_SEPARATOR).collect();
        let first = sections.first().unwrap();
        let last = sections.last().unwrap();
        assert!(first.starts_with("**Format:**"));
        assert!(first.contains("9:16"));
        assert!(last.starts_with("**Final Instruction:**"));
        assert!(last.contains("9:16"));
    }

    #[test]
    fn unknown_aspect_ratio_is_kept() {
        let scene = SceneConfig {
            aspect_ratio: Some("5:7".to_string()),
            ..Default::default()
        };
        let prompt = PromptComposer::compose(&PersonaTraits::default(), &scene, flags(false, false));
        assert!(prompt.content().contains("a photo with a 5:7 aspect ratio"));
        assert!(prompt.content().contains("must use a 5:7 aspect ratio"));
    }

    #[test]
    fn unknown_time_falls_back_to_generic_lighting() {
        let scene = SceneConfig {
            time_of_day: Some("dawnish".to_string()),
            ..Default::default()
        };
        let prompt = PromptComposer::compose(&PersonaTraits::default(), &scene, flags(false, false));
        assert!(prompt.content().contains("lit by natural lighting"));
        assert!(prompt.content().contains("dawnish"));
    }

    #[test]
    fn sections_follow_fixed_order() {
        let prompt = PromptComposer::compose(&full_persona(), &full_scene(), flags(true, true));
        let text = prompt.content();
        let headings = [
            "**Format:**",
            "**Style & Camera:**",
            "**Subject:**",
            "**Location:**",
            "**Wardrobe & Items:**",
            "**Scene:**",
            "**Expression:**",
            "**User Refinements:**",
            "**Final Instruction:**",
        ];
        let positions: Vec<usize> = headings
            .iter()
            .map(|h| text.find(h).unwrap_or_else(|| panic!("missing {}", h)))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn user_values_are_carried_through() {
        let prompt = PromptComposer::compose(&full_persona(), &full_scene(), flags(false, false));
        let text = prompt.content();
        assert!(text.contains("\"grainy\" aesthetic"));
        assert!(text.contains("\"introverted traveler\""));
        assert!(text.contains("holding a coffee cup"));
        assert!(text.contains("soft morning sunlight"));
        assert!(text.contains("sleepy eyes"));
        assert!(text.contains("**User Refinements:** a tram passes in the background"));
        assert!(text.contains("The aesthetic is paramount."));
    }
}
