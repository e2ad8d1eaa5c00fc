//! Environment lookups against the compiled binary and the running process.

use crate::ports::EnvironmentSource;

/// Names the resolver looks up.
pub mod vars {
    pub const PREFIXED_API_KEY: &str = "CHUZAPATH_OPENAI_API_KEY";
    pub const API_KEY: &str = "OPENAI_API_KEY";
    pub const MODE: &str = "CHUZAPATH_MODE";
    pub const DEV: &str = "CHUZAPATH_DEV";
    pub const HOST: &str = "CHUZAPATH_HOST";
}

/// Reads `option_env!` values baked in at compile time and `std::env` at runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl EnvironmentSource for ProcessEnvironment {
    fn build_var(&self, name: &str) -> Option<String> {
        let value = match name {
            vars::PREFIXED_API_KEY => option_env!("CHUZAPATH_OPENAI_API_KEY"),
            vars::API_KEY => option_env!("OPENAI_API_KEY"),
            vars::MODE => option_env!("CHUZAPATH_MODE"),
            vars::DEV => option_env!("CHUZAPATH_DEV"),
            _ => None,
        };
        value.map(str::to_string)
    }

    fn process_var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}
