//! Prompt clauses, one function per section
//!
//! Each clause returns `None` when it does not apply, so skipped sections
//! leave nothing behind in the output.

use crate::domain::media::ReferenceFlags;
use crate::domain::persona::PersonaTraits;
use crate::domain::scene::{CameraAngle, Mood, ResolvedAspectRatio, SceneConfig, TimeOfDay};

/// Opening of the location clause when a location image is attached
pub(crate) const LOCATION_IMAGE_LEAD: &str = "**Location:** The setting must match the";

/// Heading of the clause describing the items reference image
pub(crate) const ITEMS_IMAGE_LEAD: &str = "**Wardrobe & Items:**";

const REALISM_GUIDANCE: &str = "Emphasize photorealism. The image should look like a real, candid photograph, not a staged or AI-generated picture. Avoid artificial poses, perfect lighting, or overly clean compositions unless the aesthetic calls for them. Capture imperfections: slight grain, a little motion blur, uneven framing.";

const DEFAULT_ACTIVITY: &str = "going about their day";

/// Inputs shared by every clause, resolved once per composition
pub(crate) struct CompositionContext<'a> {
    pub persona: &'a PersonaTraits,
    pub scene: &'a SceneConfig,
    pub flags: ReferenceFlags,
    pub aspect_ratio: Option<ResolvedAspectRatio>,
}

impl<'a> CompositionContext<'a> {
    pub fn new(persona: &'a PersonaTraits, scene: &'a SceneConfig, flags: ReferenceFlags) -> Self {
        Self {
            persona,
            scene,
            flags,
            aspect_ratio: ResolvedAspectRatio::resolve(scene.aspect_ratio()),
        }
    }
}

/// A named section builder
pub(crate) struct Clause {
    pub name: &'static str,
    pub build: fn(&CompositionContext<'_>) -> Option<String>,
}

/// All clauses in output order
pub(crate) const CLAUSES: &[Clause] = &[
    Clause { name: "format", build: format_clause },
    Clause { name: "style", build: style_clause },
    Clause { name: "subject", build: subject_clause },
    Clause { name: "location", build: location_clause },
    Clause { name: "items", build: items_clause },
    Clause { name: "scene", build: scene_clause },
    Clause { name: "expression", build: expression_clause },
    Clause { name: "refinements", build: refinements_clause },
    Clause { name: "final", build: final_clause },
];

fn format_clause(ctx: &CompositionContext<'_>) -> Option<String> {
    let ratio = ctx.aspect_ratio.as_ref()?;
    Some(format!("**Format:** The output is {}.", ratio.directive))
}

fn style_clause(ctx: &CompositionContext<'_>) -> Option<String> {
    let aesthetic = match ctx.persona.aesthetic() {
        Some(aesthetic) => format!(
            "- **Aesthetic:** The image must strictly adhere to a \"{}\" aesthetic. This is the most important instruction.",
            aesthetic
        ),
        None => "- **Aesthetic:** A natural, candid photographic look.".to_string(),
    };
    let camera = format!(
        "- **Camera:** {}.",
        capitalize_first(&CameraAngle::framing_for(ctx.scene.camera_angle()))
    );

    Some(format!(
        "**Style & Camera:**\n{}\n{}\n- **Realism:** {}",
        aesthetic, camera, REALISM_GUIDANCE
    ))
}

fn subject_clause(ctx: &CompositionContext<'_>) -> Option<String> {
    let text = match ctx.persona.personality() {
        Some(personality) => format!(
            "**Subject:** A single person defined by this personality: \"{}\". Their face, hair and body type must match the first reference image.",
            personality
        ),
        None => "**Subject:** A single person whose face, hair and body type match the first reference image.".to_string(),
    };
    Some(text)
}

fn location_clause(ctx: &CompositionContext<'_>) -> Option<String> {
    let location = ctx.scene.location();
    let environment = ctx.persona.environment();

    let mut text = if ctx.flags.has_location {
        let mut text = format!(
            "{} second reference image: its architecture, atmosphere and mood",
            LOCATION_IMAGE_LEAD
        );
        if let Some(location) = location {
            text.push_str(&format!(", described as \"{}\"", location));
        }
        text
    } else if let Some(location) = location {
        format!("**Location:** The setting is \"{}\"", location)
    } else if let Some(environment) = environment {
        return Some(format!(
            "**Location:** A setting that fits their usual environment: \"{}\".",
            environment
        ));
    } else {
        return None;
    };

    if let Some(environment) = environment {
        text.push_str(&format!(
            ", which should complement their usual environment: \"{}\"",
            environment
        ));
    }
    text.push('.');
    Some(text)
}

fn items_clause(ctx: &CompositionContext<'_>) -> Option<String> {
    if !ctx.flags.has_items {
        return None;
    }
    let ordinal = if ctx.flags.has_location { "third" } else { "second" };
    Some(format!(
        "{} Dress the person in the clothing and include the items shown in the {} reference image, keeping them recognisable.",
        ITEMS_IMAGE_LEAD, ordinal
    ))
}

fn scene_clause(ctx: &CompositionContext<'_>) -> Option<String> {
    let activity = ctx.scene.activity().unwrap_or(DEFAULT_ACTIVITY);
    let mut text = format!(
        "**Scene:** The person is captured in a candid moment, {}",
        activity
    );
    if let Some(time) = ctx.scene.time_of_day() {
        text.push_str(&format!(", during the {}", time));
    }
    text.push_str(&format!(
        ". The scene is lit by {}.",
        TimeOfDay::lighting_for(ctx.scene.time_of_day())
    ));
    Some(text)
}

fn expression_clause(ctx: &CompositionContext<'_>) -> Option<String> {
    let mut text = format!(
        "**Expression:** {}",
        capitalize_first(&Mood::expression_for(ctx.scene.mood()))
    );
    if let Some(personality) = ctx.persona.personality() {
        text.push_str(&format!(
            ", with their personality (\"{}\") showing through",
            personality
        ));
    }
    text.push('.');
    Some(text)
}

fn refinements_clause(ctx: &CompositionContext<'_>) -> Option<String> {
    ctx.scene
        .additional_instructions()
        .map(|text| format!("**User Refinements:** {}", text))
}

fn final_clause(ctx: &CompositionContext<'_>) -> Option<String> {
    let mut text = String::from(
        "**Final Instruction:** Generate a single, photorealistic image based on all the above criteria.",
    );
    if ctx.persona.aesthetic().is_some() {
        text.push_str(" The aesthetic is paramount.");
    }
    if let Some(ratio) = ctx.aspect_ratio.as_ref() {
        text.push_str(&format!(
            " The image must use a {} aspect ratio.",
            ratio.ratio
        ));
    }
    Some(text)
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx<'a>(
        persona: &'a PersonaTraits,
        scene: &'a SceneConfig,
        has_location: bool,
        has_items: bool,
    ) -> CompositionContext<'a> {
        CompositionContext::new(
            persona,
            scene,
            ReferenceFlags {
                has_location,
                has_items,
            },
        )
    }

    #[test]
    fn clause_order_is_fixed() {
        let names: Vec<_> = CLAUSES.iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            [
                "format",
                "style",
                "subject",
                "location",
                "items",
                "scene",
                "expression",
                "refinements",
                "final"
            ]
        );
    }

    #[test]
    fn format_clause_only_with_ratio() {
        let persona = PersonaTraits::default();
        let scene = SceneConfig::default();
        assert!(format_clause(&ctx(&persona, &scene, false, false)).is_none());

        let scene = SceneConfig {
            aspect_ratio: Some("16:9".to_string()),
            ..Default::default()
        };
        let text = format_clause(&ctx(&persona, &scene, false, false)).unwrap();
        assert!(text.contains("16:9"));
    }

    #[test]
    fn location_clause_variants() {
        let persona = PersonaTraits::new("", "", "urban cityscapes");
        let scene = SceneConfig {
            location: Some("Lisbon".to_string()),
            ..Default::default()
        };

        let with_image = location_clause(&ctx(&persona, &scene, true, false)).unwrap();
        assert!(with_image.starts_with(LOCATION_IMAGE_LEAD));
        assert!(with_image.contains("\"Lisbon\""));
        assert!(with_image.contains("\"urban cityscapes\""));

        let text_only = location_clause(&ctx(&persona, &scene, false, false)).unwrap();
        assert_eq!(
            text_only,
            "**Location:** The setting is \"Lisbon\", which should complement their usual environment: \"urban cityscapes\"."
        );

        let bare_scene = SceneConfig::default();
        let environment_only = location_clause(&ctx(&persona, &bare_scene, false, false)).unwrap();
        assert!(environment_only.contains("usual environment"));

        let blank = PersonaTraits::default();
        assert!(location_clause(&ctx(&blank, &bare_scene, false, false)).is_none());
    }

    #[test]
    fn items_clause_ordinal_follows_location() {
        let persona = PersonaTraits::default();
        let scene = SceneConfig::default();
        assert!(items_clause(&ctx(&persona, &scene, true, false)).is_none());
        assert!(items_clause(&ctx(&persona, &scene, false, true))
            .unwrap()
            .contains("second reference image"));
        assert!(items_clause(&ctx(&persona, &scene, true, true))
            .unwrap()
            .contains("third reference image"));
    }

    #[test]
    fn scene_clause_defaults() {
        let persona = PersonaTraits::default();
        let scene = SceneConfig::default();
        assert_eq!(
            scene_clause(&ctx(&persona, &scene, false, false)).unwrap(),
            "**Scene:** The person is captured in a candid moment, going about their day. The scene is lit by natural lighting."
        );
    }

    #[test]
    fn scene_clause_with_time() {
        let persona = PersonaTraits::default();
        let scene = SceneConfig {
            activity: Some("holding a coffee cup".to_string()),
            time_of_day: Some("morning".to_string()),
            ..Default::default()
        };
        assert_eq!(
            scene_clause(&ctx(&persona, &scene, false, false)).unwrap(),
            "**Scene:** The person is captured in a candid moment, holding a coffee cup, during the morning. The scene is lit by soft morning sunlight."
        );
    }

    #[test]
    fn expression_clause_capitalizes_fallback() {
        let persona = PersonaTraits::default();
        let scene = SceneConfig {
            mood: Some("bittersweet".to_string()),
            ..Default::default()
        };
        assert_eq!(
            expression_clause(&ctx(&persona, &scene, false, false)).unwrap(),
            "**Expression:** An expression fitting a bittersweet mood."
        );
    }

    #[test]
    fn refinements_verbatim() {
        let persona = PersonaTraits::default();
        let scene = SceneConfig {
            additional_instructions: Some("  no sunglasses, add a red scarf ".to_string()),
            ..Default::default()
        };
        assert_eq!(
            refinements_clause(&ctx(&persona, &scene, false, false)).unwrap(),
            "**User Refinements:** no sunglasses, add a red scarf"
        );
    }

    #[test]
    fn capitalize_first_handles_empty() {
        assert_eq!(capitalize_first(""), "");
        assert_eq!(capitalize_first("shot"), "Shot");
    }
}
