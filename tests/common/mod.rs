//! Shared testing utilities for chuzapath CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Config with no demo latency and API endpoints that refuse connections.
pub const OFFLINE_CONFIG: &str = r#"
[api]
upstream_url = "http://127.0.0.1:1/v1/chat/completions"
proxy_url = "http://127.0.0.1:1/api/openai-proxy"
timeout_secs = 5

[demo]
initial_delay_ms = 0
continuation_delay_ms = 0
"#;

const ENV_VARS: [&str; 5] =
    ["CHUZAPATH_OPENAI_API_KEY", "OPENAI_API_KEY", "CHUZAPATH_MODE", "CHUZAPATH_DEV", "CHUZAPATH_HOST"];

/// Testing harness providing an isolated working directory for CLI runs.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment with the offline config in place.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        fs::write(work_dir.join("chuzapath.toml"), OFFLINE_CONFIG)
            .expect("Failed to write test config");

        Self { root, work_dir }
    }

    /// Path to the working directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for the compiled binary with a scrubbed environment.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("chuzapath").expect("Failed to locate chuzapath binary");
        cmd.current_dir(&self.work_dir).env("HOME", self.root.path());
        for var in ENV_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Write a story segment file and return its path.
    pub fn write_story(&self, name: &str, json: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        fs::write(&path, json).expect("Failed to write story file");
        path
    }
}
