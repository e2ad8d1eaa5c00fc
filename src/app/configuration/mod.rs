mod config_loader;
mod runtime_resolver;

pub use config_loader::{DEFAULT_CONFIG_FILE, load_config};
pub use runtime_resolver::{is_local_development, resolve_key, resolve_runtime_config};
