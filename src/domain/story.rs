//! Story segments and the normalization of model output into them.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::AppError;

/// Number of choices every segment carries.
pub const OPTION_COUNT: usize = 4;

const FALLBACK_PREFIX: &str =
    "Connection to the storyteller was lost. Please try again later. Error: ";
const FALLBACK_OPTIONS: [&str; OPTION_COUNT] =
    ["Restart the journey", "Try again", "Check connection", "Go back"];

/// One narrative paragraph plus the four choices offered after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorySegment {
    pub text: String,
    pub options: [String; OPTION_COUNT],
}

impl StorySegment {
    pub fn new(text: impl Into<String>, options: [&str; OPTION_COUNT]) -> Self {
        Self { text: text.into(), options: options.map(str::to_string) }
    }

    /// Segment shown when the live storyteller could not produce one.
    pub fn fallback(reason: &AppError) -> Self {
        Self::new(format!("{}{}", FALLBACK_PREFIX, reason), FALLBACK_OPTIONS)
    }

    /// Check text and option contents; the option count is fixed by the type.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.text.trim().is_empty() {
            return Err(AppError::InvalidStory("text must not be empty".to_string()));
        }

        let mut seen = HashSet::new();
        for option in &self.options {
            let label = option.trim();
            if label.is_empty() {
                return Err(AppError::InvalidStory("options must not be blank".to_string()));
            }
            if !seen.insert(label) {
                return Err(AppError::InvalidStory(format!("duplicate option '{}'", label)));
            }
        }
        Ok(())
    }

    pub fn has_option(&self, choice: &str) -> bool {
        self.options.iter().any(|option| option == choice)
    }
}

/// Result of one completion attempt, before any fallback policy is applied.
#[derive(Debug)]
pub enum CompletionOutcome {
    Success(StorySegment),
    Failure(AppError),
}

impl CompletionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CompletionOutcome::Success(_))
    }

    pub fn failure(&self) -> Option<&AppError> {
        match self {
            CompletionOutcome::Success(_) => None,
            CompletionOutcome::Failure(err) => Some(err),
        }
    }

    /// Resolve to a segment, substituting the fallback segment on failure.
    pub fn or_fallback(self) -> StorySegment {
        match self {
            CompletionOutcome::Success(segment) => segment,
            CompletionOutcome::Failure(err) => StorySegment::fallback(&err),
        }
    }
}

impl From<Result<StorySegment, AppError>> for CompletionOutcome {
    fn from(result: Result<StorySegment, AppError>) -> Self {
        match result {
            Ok(segment) => CompletionOutcome::Success(segment),
            Err(err) => CompletionOutcome::Failure(err),
        }
    }
}

/// Remove a surrounding Markdown code fence (optionally tagged `json`).
///
/// Content without a complete fence is returned trimmed but otherwise untouched.
pub fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    if !rest.starts_with(['\r', '\n']) {
        return trimmed;
    }
    match rest.strip_suffix("```") {
        Some(body) => body.trim(),
        None => trimmed,
    }
}

/// Parse completion text into a validated segment.
pub fn parse_story_content(content: &str) -> Result<StorySegment, AppError> {
    let cleaned = strip_code_fence(content);
    let segment: StorySegment =
        serde_json::from_str(cleaned).map_err(|e| AppError::StoryParse(e.to_string()))?;
    segment.validate()?;
    Ok(segment)
}
