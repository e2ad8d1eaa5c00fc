//! Conversation payloads for starting and continuing a story.

use crate::domain::{ConversationMessage, StorySegment};

const INITIAL_RULES: &str = "\
You are a creative storyteller for an interactive fiction game called Chuzapath.
Your task is to create immersive, engaging story segments with meaningful choices.

Follow these rules:
1. Create vivid, atmospheric descriptions with sensory details.
2. Include 3-5 specific story elements that choices can relate to.
3. Keep paragraphs concise (80-120 words).
4. Generate exactly 4 options that relate directly to details in your story.
5. Each option should be 3-6 words, clear and distinct.
6. Options should offer meaningfully different paths forward.
7. Do not include numbering in the options.
8. Return ONLY JSON, with no other text.";

const CONTINUATION_RULES: &str = "\
You are a creative storyteller for an interactive fiction game called Chuzapath.
Your task is to continue the story based on the player's chosen option.

Follow these rules:
1. Create vivid, atmospheric continuations with sensory details.
2. Directly acknowledge and incorporate the chosen option.
3. Include 3-5 specific story elements that new choices can relate to.
4. Keep paragraphs concise (80-120 words).
5. Generate exactly 4 new options that relate directly to details in your continuation.
6. Each option should be 3-6 words, clear and distinct.
7. Options should offer meaningfully different paths forward.
8. Do not include numbering in the options.
9. Return ONLY JSON, with no other text.";

const DEFAULT_INITIAL_TASK: &str = "Create an engaging start to an interactive adventure story.";

fn output_shape(text_placeholder: &str) -> String {
    format!(
        "Return your response as valid JSON in this exact format:
{{
  \"text\": \"{}\",
  \"options\": [
    \"First brief option\",
    \"Second brief option\",
    \"Third brief option\",
    \"Fourth brief option\"
  ]
}}",
        text_placeholder
    )
}

/// Messages asking for the opening segment, optionally themed.
pub fn build_initial_prompt(theme: Option<&str>) -> Vec<ConversationMessage> {
    let task = match theme.map(str::trim).filter(|theme| !theme.is_empty()) {
        Some(theme) => format!("Create a story start with the theme: {}.", theme),
        None => DEFAULT_INITIAL_TASK.to_string(),
    };

    vec![
        ConversationMessage::system(INITIAL_RULES),
        ConversationMessage::user(format!(
            "{}\n\n{}",
            task,
            output_shape("The story paragraph goes here...")
        )),
    ]
}

/// Messages asking for the segment that follows `choice`.
pub fn build_continuation_prompt(
    segment: &StorySegment,
    choice: &str,
) -> Vec<ConversationMessage> {
    let options =
        segment.options.iter().map(|option| format!("\"{}\"", option)).collect::<Vec<_>>();

    let user = format!(
        "The current story is:
\"{}\"

The available options were:
{}

The player chose: \"{}\"

Continue the story based on this choice and provide 4 new options.

{}",
        segment.text,
        options.join("\n"),
        choice,
        output_shape("The story continuation goes here...")
    );

    vec![ConversationMessage::system(CONTINUATION_RULES), ConversationMessage::user(user)]
}
