//! TestWorld pattern for declarative integration test setup.
//!
//! Every world gets its own temporary home directory, so the binary never
//! sees the developer's real configuration.

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use ohmybar_testing::TestWorld;
///
/// let world = TestWorld::new().with_config("header = \"Work\"");
///
/// let result = world.run(&[]).unwrap();
/// assert!(result.stdout().starts_with("Work\n---\n"));
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    config_path: Option<PathBuf>,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");

        Self {
            temp_dir,
            config_path: None,
            env_vars: HashMap::new(),
        }
    }

    /// Home directory seen by the binary.
    pub fn home(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Config file passed with `--config`, if one was written.
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Write `config.toml` and pass it to every run.
    pub fn with_config(self, content: &str) -> Self {
        self.with_config_file("config.toml", content)
    }

    /// Write a config file under a chosen name (e.g. `config.json`).
    pub fn with_config_file(mut self, name: &str, content: &str) -> Self {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, content).expect("Failed to write config");
        self.config_path = Some(path);
        self
    }

    /// Write a bookmarks file and return its path.
    pub fn write_bookmarks(&self, entries: &[(&str, &str)]) -> PathBuf {
        let path = self.temp_dir.path().join("Bookmarks");
        std::fs::write(&path, fixtures::bookmarks_file(entries))
            .expect("Failed to write bookmarks");
        path
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Configure a CLI command with this test environment's settings.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.env("HOME", self.home())
            .env_remove("OHMYBAR_CONFIG")
            .env_remove("OHMYBAR_LOG")
            .env_remove("GITHUB_TOKEN")
            .current_dir(self.home());

        if let Some(path) = &self.config_path {
            cmd.arg("--config").arg(path);
        }

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute the binary with `args` and capture its output.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("ohmybar")
            .map_err(|e| anyhow::anyhow!("Failed to find ohmybar binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Captured result of one binary run.
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    /// Menu lines on stdout
    pub fn lines(&self) -> Vec<&str> {
        self.stdout.lines().collect()
    }
}
