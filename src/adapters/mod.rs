pub mod completion_http;
pub mod demo_story;
pub mod process_environment;
pub mod proxy;

pub use completion_http::HttpCompletionClient;
pub use demo_story::DemoStoryGenerator;
pub use process_environment::ProcessEnvironment;
