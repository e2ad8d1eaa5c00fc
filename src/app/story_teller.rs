//! Entry point for starting and continuing stories.

use tracing::info;

use crate::adapters::DemoStoryGenerator;
use crate::app::LiveStoryGenerator;
use crate::domain::{RuntimeConfig, StorySegment};
use crate::ports::{CompletionClient, StoryGenerator};

/// Routes each request to the live storyteller or to demo content.
///
/// Demo content is used when demo mode is forced, or when there is no key and
/// the process is not running locally.
pub struct StoryTeller<C: CompletionClient> {
    runtime: RuntimeConfig,
    live: LiveStoryGenerator<C>,
    demo: DemoStoryGenerator,
    force_demo: bool,
}

impl<C: CompletionClient> StoryTeller<C> {
    pub fn new(runtime: RuntimeConfig, client: C, demo: DemoStoryGenerator) -> Self {
        Self { runtime, live: LiveStoryGenerator::new(client), demo, force_demo: false }
    }

    pub fn with_forced_demo(mut self, force_demo: bool) -> Self {
        self.force_demo = force_demo;
        self
    }

    /// Whether the next call will be served from demo content.
    pub fn uses_demo(&self) -> bool {
        self.force_demo || !self.runtime.mode().has_api_path()
    }

    fn generator(&self) -> &dyn StoryGenerator {
        if self.uses_demo() {
            info!(forced = self.force_demo, "no API access method available, using demo content");
            &self.demo
        } else {
            &self.live
        }
    }

    pub fn start(&self, theme: Option<&str>) -> StorySegment {
        self.generator().initial(theme)
    }

    pub fn continue_story(&self, segment: &StorySegment, choice: &str) -> StorySegment {
        if !segment.has_option(choice) {
            info!(choice, "choice is not one of the offered options");
        }
        self.generator().continuation(segment, choice)
    }
}
