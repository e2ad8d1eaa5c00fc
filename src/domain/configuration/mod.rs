mod app_config;
pub mod parse;
mod runtime;

pub use app_config::{
    ApiConfig, ChuzapathConfig, DEFAULT_MODEL, DEFAULT_PROXY_PATH, DemoConfig, ProxySettings,
};
pub use runtime::{RuntimeConfig, RuntimeMode, is_development_flag, is_local_host};
