//! chuzapath: branching interactive fiction generated through a chat-completion API,
//! with a key-hiding proxy and a canned demo mode.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use adapters::proxy::{ProxyConfig, ProxyHandler, ProxyResponse};
pub use adapters::{DemoStoryGenerator, HttpCompletionClient, ProcessEnvironment};
pub use app::api::{
    ServeOptions, StoryOptions, continue_story, read_story, serve_proxy, start_story, story_teller,
};
pub use app::configuration::{is_local_development, resolve_key, resolve_runtime_config};
pub use app::{LiveStoryGenerator, StoryTeller};
pub use domain::{
    AppError, CompletionOutcome, ConversationMessage, Role, RuntimeConfig, RuntimeMode,
    StorySegment, build_continuation_prompt, build_initial_prompt,
};
pub use ports::{CompletionClient, EnvironmentSource, StoryGenerator};
