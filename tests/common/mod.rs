//! Shared testing utilities for mdbci CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const BOXES: &str = r#"{
    "centos_7_libvirt": {
        "provider": "libvirt",
        "platform": "centos",
        "platform_version": "7",
        "box": "generic/centos7"
    },
    "ubuntu_bionic_qemu": {
        "provider": "qemu",
        "platform": "ubuntu",
        "platform_version": "bionic",
        "box": "generic/ubuntu1804"
    },
    "centos_7_aws": {
        "provider": "aws",
        "platform": "centos",
        "platform_version": "7",
        "ami": "ami-0abc",
        "user": "centos",
        "default_instance_type": "t2.medium"
    }
}"#;

/// Testing harness providing an isolated home, box catalog and working directory.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment with the default box catalog installed.
    pub fn new() -> Self {
        let ctx = Self::empty();
        ctx.write_boxes(BOXES);
        ctx
    }

    /// Isolated environment without a box catalog.
    pub fn empty() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        fs::create_dir_all(root.path().join("home")).expect("Failed to create test home");
        fs::create_dir_all(root.path().join("bin")).expect("Failed to create empty bin directory");
        Self { root, work_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub fn home(&self) -> PathBuf {
        self.root.path().join("home")
    }

    /// Path to the directory CLI invocations run in.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    pub fn boxes_dir(&self) -> PathBuf {
        self.home().join(".config/mdbci/boxes")
    }

    pub fn write_boxes(&self, content: &str) {
        fs::create_dir_all(self.boxes_dir()).unwrap();
        fs::write(self.boxes_dir().join("boxes.json"), content).unwrap();
    }

    /// Write a template into the work directory and return its path.
    pub fn write_template(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    /// Path of a configuration directory inside the work directory.
    pub fn config_path(&self, name: &str) -> PathBuf {
        self.work_dir.join(name)
    }

    pub fn read(&self, path: impl AsRef<Path>) -> String {
        fs::read_to_string(path).unwrap()
    }

    /// Build a command for invoking the compiled `mdbci` binary in the work directory.
    ///
    /// `PATH` points at an empty directory so no external tool is reachable.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("mdbci").expect("Failed to locate mdbci binary");
        cmd.current_dir(&self.work_dir)
            .env("HOME", self.home())
            .env("PATH", self.root.path().join("bin"))
            .env("HOSTNAME", "test-host")
            .env("USER", "tester")
            .env("RUST_LOG", "info")
            .env_remove("MDBCI_CONFIG");
        cmd
    }
}
