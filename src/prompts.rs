/// Prompt templates sent to the generative model.
pub const CAPTION_PROMPT: &str =
    "Generate a creative and descriptive caption for this image. Keep it concise but engaging.";

pub fn story_prompt(category: &str, word_limit: u32) -> String {
    format!(
        "Create a {category} story based on this image. Be concise and creative.\n\
         Requirements:\n\
         - Approximately {word_limit} words\n\
         - Match the {category} theme/genre\n\
         - Keep descriptions brief but engaging"
    )
}

pub fn translate_prompt(text: &str, target_language: &str) -> String {
    format!(
        "Translate the following text to {target_language}, \
         maintaining the original formatting and structure:\n\n{text}"
    )
}
