//! Prompt domain module

mod caption_prompt;
mod clauses;
mod composer;
mod prompt_text;

pub use caption_prompt::CaptionPrompt;
pub use composer::{PromptComposer, SECTION_SEPARATOR};
pub use prompt_text::PromptText;
