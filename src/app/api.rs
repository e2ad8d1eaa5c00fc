//! Library entry points used by the CLI and by embedding applications.

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::adapters::proxy::{ProxyConfig, ProxyHandler, server};
use crate::adapters::{DemoStoryGenerator, HttpCompletionClient, ProcessEnvironment};
use crate::app::StoryTeller;
use crate::app::configuration::{load_config, resolve_runtime_config};
use crate::domain::{AppError, StorySegment};

/// Options shared by the story commands.
#[derive(Debug, Clone, Default)]
pub struct StoryOptions {
    /// Config file; `chuzapath.toml` in the working directory when unset.
    pub config_path: Option<PathBuf>,
    /// Serve canned demo content regardless of API access.
    pub force_demo: bool,
}

/// Options for the proxy server.
#[derive(Debug, Clone, Default)]
pub struct ServeOptions {
    pub config_path: Option<PathBuf>,
    /// Overrides `[proxy] bind` from the config file.
    pub bind: Option<SocketAddr>,
}

/// Build a story teller from the config file and the process environment.
pub fn story_teller(options: &StoryOptions) -> Result<StoryTeller<HttpCompletionClient>, AppError> {
    let config = load_config(options.config_path.as_deref())?;
    let runtime = resolve_runtime_config(&ProcessEnvironment);
    let client = HttpCompletionClient::new(runtime.clone(), &config.api)?;
    let demo = DemoStoryGenerator::from_config(&config.demo);

    Ok(StoryTeller::new(runtime, client, demo).with_forced_demo(options.force_demo))
}

/// Generate the opening segment.
pub fn start_story(options: &StoryOptions, theme: Option<&str>) -> Result<StorySegment, AppError> {
    Ok(story_teller(options)?.start(theme))
}

/// Generate the segment that follows `choice`.
pub fn continue_story(
    options: &StoryOptions,
    segment: &StorySegment,
    choice: &str,
) -> Result<StorySegment, AppError> {
    Ok(story_teller(options)?.continue_story(segment, choice))
}

/// Read a segment previously written as JSON.
pub fn read_story(path: &Path) -> Result<StorySegment, AppError> {
    let content = fs::read_to_string(path)?;
    let segment: StorySegment = serde_json::from_str(&content)?;
    segment.validate()?;
    Ok(segment)
}

/// Run the key-injecting proxy until the process is stopped.
pub fn serve_proxy(options: &ServeOptions) -> Result<(), AppError> {
    let config = load_config(options.config_path.as_deref())?;
    let bind = options.bind.unwrap_or(config.proxy.bind);
    let handler =
        Arc::new(ProxyHandler::new(ProxyConfig::from_env(&ProcessEnvironment, &config.api))?);

    let runtime = tokio::runtime::Builder::new_multi_thread().enable_all().build()?;
    runtime.block_on(server::serve(handler, bind, &config.proxy.path))
}
