//! Caption prompt value object

use crate::domain::persona::PersonaTraits;

const CAPTION_RULES: &str = r#"Based on the provided image and the persona details, write a short, authentic-sounding caption. It should feel like something the persona would post themselves.
- Do NOT use hashtags unless it feels natural for the persona.
- Keep it concise and in the first person.
- Match the tone and voice of the persona.
- Output ONLY the caption text."#;

/// Instruction asking the model to caption a generated image in the
/// persona's own voice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptionPrompt {
    content: String,
}

impl CaptionPrompt {
    /// Build the caption instruction for a persona
    pub fn build(persona: &PersonaTraits) -> Self {
        let mut content = String::from(
            "You are an AI assistant tasked with creating a social media caption.\n",
        );
        content.push_str(&format!(
            "Your persona is: \"{}\".\n",
            persona.personality().unwrap_or("an everyday person sharing a candid moment")
        ));
        if let Some(aesthetic) = persona.aesthetic() {
            content.push_str(&format!("Your visual style is: \"{}\".\n", aesthetic));
        }
        if let Some(environment) = persona.environment() {
            content.push_str(&format!("Your typical environment is: \"{}\".\n", environment));
        }
        content.push('\n');
        content.push_str(CAPTION_RULES);

        Self { content }
    }

    /// Get the prompt content
    pub fn content(&self) -> &str {
        &self.content
    }
}
