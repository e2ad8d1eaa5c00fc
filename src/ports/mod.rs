mod completion_client;
mod environment_source;
mod story_generator;

pub use completion_client::CompletionClient;
pub use environment_source::EnvironmentSource;
pub use story_generator::StoryGenerator;
