pub mod api;
pub mod cli;
pub mod configuration;
mod live_story;
mod story_teller;

pub use live_story::LiveStoryGenerator;
pub use story_teller::StoryTeller;
