mod fake_completion_client;
mod map_environment;

pub use fake_completion_client::FakeCompletionClient;
pub use map_environment::MapEnvironment;
