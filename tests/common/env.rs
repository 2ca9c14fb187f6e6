//! Isolated test environment for driving the farmgate binary.

use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;

/// Result of running a farmgate CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated environment: temp working directory + private state file.
pub struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn state_file(&self) -> PathBuf {
        self.dir.path().join("state.json")
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    /// Run farmgate with this environment's state file.
    pub fn run(&self, args: &[&str]) -> TestResult {
        let output = Command::new(env!("CARGO_BIN_EXE_farmgate"))
            .arg("--state-file")
            .arg(self.state_file())
            .args(args)
            .current_dir(self.dir.path())
            .output()
            .expect("failed to run farmgate");

        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Run and assert success, returning stdout.
    pub fn run_ok(&self, args: &[&str]) -> String {
        let result = self.run(args);
        assert!(
            result.success,
            "farmgate {:?} failed (exit {}):\n{}",
            args,
            result.exit_code,
            result.combined_output()
        );
        result.stdout
    }

    /// Run with `--json` and parse stdout.
    pub fn run_json(&self, args: &[&str]) -> serde_json::Value {
        let mut full = args.to_vec();
        full.push("--json");
        let stdout = self.run_ok(&full);
        serde_json::from_str(&stdout).expect("valid JSON output")
    }

    /// Read the raw persisted envelope from disk.
    pub fn read_envelope(&self) -> serde_json::Value {
        let raw = std::fs::read_to_string(self.state_file()).expect("state file exists");
        serde_json::from_str(&raw).expect("state file is valid JSON")
    }

    /// Overwrite the state file with raw bytes (for corruption tests).
    pub fn write_state_raw(&self, content: &str) {
        std::fs::write(self.state_file(), content).expect("write state file");
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
