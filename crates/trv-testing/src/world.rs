//! TestWorld pattern for declarative CLI test setup.
//!
//! Each world owns a temp directory that serves as the working directory,
//! holds input files, and points `TRV_CONFIG` at a config path inside it so
//! a developer's own config never leaks into a test.

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures::SampleFiles;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use trv_testing::TestWorld;
/// use trv_testing::fixtures::ALPHA;
///
/// let world = TestWorld::new().with_input("alpha.csv", ALPHA);
/// let result = world.run(&["stats", "alpha.csv"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    config_path: PathBuf,
    env_vars: HashMap<String, String>,
    samples: SampleFiles,
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
        let config_path = temp_dir.path().join("config.toml");

        Self {
            temp_dir,
            config_path,
            env_vars: HashMap::new(),
            samples: SampleFiles::new(),
        }
    }

    /// Resolve a file name relative to the working directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    /// Path the CLI reads its config from.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Write an input file into the working directory.
    pub fn with_input(self, name: &str, contents: &str) -> Self {
        fs::write(self.path(name), contents).expect("Failed to write input file");
        self
    }

    /// Copy a file from `samples/` into the working directory.
    pub fn with_sample(self, sample_name: &str) -> Self {
        self.samples
            .copy_to(sample_name, &self.path(sample_name))
            .expect("Failed to copy sample");
        self
    }

    /// Write the CLI config file.
    pub fn with_config(self, toml: &str) -> Self {
        fs::write(&self.config_path, toml).expect("Failed to write config");
        self
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Read a file the CLI wrote into the working directory.
    pub fn read_output(&self, name: &str) -> Result<String> {
        Ok(fs::read_to_string(self.path(name))?)
    }

    /// Configure a CLI command with this test environment's settings.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.current_dir(self.temp_dir.path())
            .env("TRV_CONFIG", &self.config_path)
            .env_remove("RUST_LOG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Run the `trv` binary with `args` and capture its output.
    ///
    /// Uses `Command::cargo_bin()`, so the binary must be part of the
    /// package under test.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("trv")
            .map_err(|e| anyhow::anyhow!("Failed to find trv binary: {}", e))?;

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

/// Result of a CLI command execution.
#[derive(Debug)]
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
}
