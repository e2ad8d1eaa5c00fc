//! Story generation through the completion API.

use tracing::warn;

use crate::domain::{
    CompletionOutcome, StorySegment, build_continuation_prompt, build_initial_prompt,
};
use crate::ports::{CompletionClient, StoryGenerator};

/// Prompt builder plus completion client, with the fallback policy applied.
pub struct LiveStoryGenerator<C: CompletionClient> {
    client: C,
}

impl<C: CompletionClient> LiveStoryGenerator<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Initial segment without the fallback policy, for callers that inspect failures.
    pub fn try_initial(&self, theme: Option<&str>) -> CompletionOutcome {
        self.client.complete(&build_initial_prompt(theme))
    }

    /// Continuation without the fallback policy.
    pub fn try_continuation(&self, segment: &StorySegment, choice: &str) -> CompletionOutcome {
        self.client.complete(&build_continuation_prompt(segment, choice))
    }
}

fn resolve(outcome: CompletionOutcome) -> StorySegment {
    if let Some(err) = outcome.failure() {
        warn!(error = %err, "storyteller failed, using fallback segment");
    }
    outcome.or_fallback()
}

impl<C: CompletionClient> StoryGenerator for LiveStoryGenerator<C> {
    fn initial(&self, theme: Option<&str>) -> StorySegment {
        resolve(self.try_initial(theme))
    }

    fn continuation(&self, segment: &StorySegment, choice: &str) -> StorySegment {
        resolve(self.try_continuation(segment, choice))
    }
}
