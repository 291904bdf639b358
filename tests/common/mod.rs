use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Runs the `utilkit` binary against an isolated config directory
pub struct TestContext {
    pub temp_dir: TempDir,
    pub config_path: PathBuf,
}

impl TestContext {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("utilkit/config.json");

        TestContext {
            temp_dir,
            config_path,
        }
    }

    /// Write a config file that the next invocations will pick up
    pub fn write_config(&self, json: &str) {
        let parent = self.config_path.parent().expect("config path has a parent");
        std::fs::create_dir_all(parent).expect("Failed to create config dir");
        std::fs::write(&self.config_path, json).expect("Failed to write config");
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_utilkit"))
            .arg("--config")
            .arg(&self.config_path)
            .args(args)
            .env("XDG_CONFIG_HOME", self.temp_dir.path())
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to run utilkit")
    }

    /// Run and return trimmed stdout, panicking with stderr on failure
    pub fn stdout(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            output.status.success(),
            "utilkit {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).trim_end().to_string()
    }
}
