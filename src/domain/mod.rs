pub mod configuration;
pub mod error;
mod message;
pub mod prompt;
pub mod story;

pub use configuration::{
    ApiConfig, ChuzapathConfig, DemoConfig, ProxySettings, RuntimeConfig, RuntimeMode,
};
pub use error::AppError;
pub use message::{ConversationMessage, Role};
pub use prompt::{build_continuation_prompt, build_initial_prompt};
pub use story::{CompletionOutcome, OPTION_COUNT, StorySegment};
