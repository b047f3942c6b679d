//! Shared helpers for CLI specs.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Output;

use tempfile::TempDir;

/// Environment variables that would leak host configuration into a spec.
const SCRUBBED_ENV: &[&str] = &[
    "GT_CONFIG",
    "GT_ENV_LABEL",
    "GT_ENV_DESCRIPTOR",
    "GT_PYTHON",
    "GT_TIMEOUT_SECS",
    "RUST_LOG",
    "COLOR",
];

/// `gt` invoked from the current directory.
pub fn cli() -> Cli {
    Cli { args: Vec::new(), dir: None, env: Vec::new() }
}

/// Path to the built `gt` binary.
pub fn gt_bin() -> PathBuf {
    assert_cmd::cargo::cargo_bin("gt")
}

pub struct Cli {
    args: Vec<String>,
    dir: Option<PathBuf>,
    env: Vec<(String, String)>,
}

impl Cli {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|a| a.to_string()));
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.env.push((key.to_string(), value.to_string()));
        self
    }

    fn output(&self) -> Output {
        let mut cmd = assert_cmd::Command::cargo_bin("gt").unwrap();
        for key in SCRUBBED_ENV {
            cmd.env_remove(key);
        }
        cmd.env("NO_COLOR", "1");
        for (key, value) in &self.env {
            cmd.env(key, value);
        }
        if let Some(dir) = &self.dir {
            cmd.current_dir(dir);
        }
        cmd.args(&self.args).output().unwrap()
    }

    /// Run and assert exit code 0.
    pub fn passes(self) -> Ran {
        self.exits(0)
    }

    /// Run and assert a nonzero exit code.
    pub fn fails(self) -> Ran {
        let ran = Ran { output: self.output() };
        assert!(!ran.output.status.success(), "expected failure\n{}", ran.describe());
        ran
    }

    /// Run and assert a specific exit code.
    pub fn exits(self, code: i32) -> Ran {
        let ran = Ran { output: self.output() };
        assert_eq!(ran.output.status.code(), Some(code), "unexpected exit code\n{}", ran.describe());
        ran
    }
}

/// Output of a finished `gt` invocation.
pub struct Ran {
    output: Output,
}

impl Ran {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(self.stdout().contains(needle), "stdout missing {needle:?}\n{}", self.describe());
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        assert!(!self.stdout().contains(needle), "stdout has {needle:?}\n{}", self.describe());
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(self.stderr().contains(needle), "stderr missing {needle:?}\n{}", self.describe());
        self
    }

    fn describe(&self) -> String {
        format!(
            "status: {:?}\n--- stdout ---\n{}\n--- stderr ---\n{}",
            self.output.status.code(),
            self.stdout(),
            self.stderr()
        )
    }
}

/// Temporary working directory for one spec.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self { dir: tempfile::tempdir().unwrap() }
    }

    /// Project whose three suites run the given shell scripts.
    pub fn with_suites(api: &str, performance: &str, stability: &str) -> Self {
        let project = Self::empty();
        project.catalog(api, performance, stability, "exit 0");
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, rel: &str, contents: &str) {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, contents).unwrap();
    }

    /// Write `gauntlet.toml` with `sh -c` suites and install step.
    pub fn catalog(&self, api: &str, performance: &str, stability: &str, install: &str) {
        self.file(
            "gauntlet.toml",
            &format!(
                r#"timeout_secs = 30

[install]
command = ["sh", "-c", {install:?}]

[suites.api]
command = ["sh", "-c", {api:?}]

[suites.performance]
command = ["sh", "-c", {performance:?}]

[suites.stability]
command = ["sh", "-c", {stability:?}]
"#
            ),
        );
    }

    pub fn exists(&self, rel: &str) -> bool {
        self.dir.path().join(rel).exists()
    }

    pub fn read(&self, rel: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(rel)).unwrap()
    }

    pub fn json(&self, rel: &str) -> serde_json::Value {
        serde_json::from_str(&self.read(rel)).unwrap()
    }

    /// `gt` invoked inside the project directory.
    pub fn gt(&self) -> Cli {
        Cli { args: Vec::new(), dir: Some(self.dir.path().to_path_buf()), env: Vec::new() }
    }
}
