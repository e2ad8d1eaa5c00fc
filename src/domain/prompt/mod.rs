mod builder;

pub use builder::{build_continuation_prompt, build_initial_prompt};
