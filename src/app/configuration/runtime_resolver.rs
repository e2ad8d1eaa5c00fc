//! Resolution of the runtime key and execution mode.

use tracing::{debug, warn};

use crate::adapters::process_environment::vars;
use crate::domain::RuntimeConfig;
use crate::domain::configuration::{is_development_flag, is_local_host};
use crate::ports::EnvironmentSource;

/// Prefixed name first, bare name second.
const KEY_VARS: [&str; 2] = [vars::PREFIXED_API_KEY, vars::API_KEY];

/// API key from build-time values, then process values; empty when absent.
pub fn resolve_key<E: EnvironmentSource>(env: &E) -> String {
    let build = KEY_VARS.iter().map(|name| env.build_var(name));
    let process = KEY_VARS.iter().map(|name| env.process_var(name));

    let key = build
        .chain(process)
        .flatten()
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty());

    match key {
        Some(key) => key,
        None => {
            warn!("No OpenAI API key found in environment variables");
            String::new()
        }
    }
}

/// Development build flag, or a loopback/private/local-domain host.
pub fn is_local_development<E: EnvironmentSource>(env: &E) -> bool {
    let flagged = [vars::MODE, vars::DEV]
        .iter()
        .flat_map(|name| [env.build_var(name), env.process_var(name)])
        .flatten()
        .any(|value| is_development_flag(&value));
    if flagged {
        return true;
    }

    env.process_var(vars::HOST).is_some_and(|host| is_local_host(&host))
}

/// Build the injected runtime configuration once at start-up.
pub fn resolve_runtime_config<E: EnvironmentSource>(env: &E) -> RuntimeConfig {
    let config = RuntimeConfig::new(resolve_key(env), is_local_development(env));
    debug!(?config, "resolved runtime configuration");
    config
}

impl RuntimeConfig {
    pub fn resolve<E: EnvironmentSource>(env: &E) -> Self {
        resolve_runtime_config(env)
    }
}
