#![expect(dead_code, reason = "Test harness helpers are used selectively.")]

//! Test harness for running the compiled binary inside a scratch directory.

use assert_cmd::Command;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use tempfile::TempDir;

pub const SCENARIO_A: &str = "0\nA\n0\n1\nB\n0\n0\nC\n1\n";

/// Scratch working directory; the binary runs with it as its cwd.
pub struct TestHarness {
    dir: TempDir,
}

impl TestHarness {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn write_input(&self, name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.join(name);
        fs::write(&path, contents).expect("Failed to write input fixture");
        path
    }

    pub fn read(&self, name: &str) -> Option<String> {
        fs::read_to_string(self.join(name)).ok()
    }

    pub fn exists(&self, name: &str) -> bool {
        self.join(name).exists()
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("tripgrid"));
        cmd.current_dir(self.dir.path())
            .env_remove("TRIPGRID_INPUT")
            .env_remove("TRIPGRID_OUTPUT")
            .env_remove("TRIPGRID_LOG")
            .env_remove("TRIPGRID_LOG_FORMAT")
            .env_remove("RUST_LOG")
            .env_remove("NO_COLOR");
        cmd
    }

    pub fn run(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert()
    }
}
