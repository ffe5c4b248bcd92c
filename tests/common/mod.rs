#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub work: PathBuf,
    pub tree: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        let work = tmp.path().join("work");
        fs::create_dir_all(&home).expect("create isolated home");
        fs::create_dir_all(&work).expect("create work dir");

        let tree = make_fixture_tree(tmp.path());

        Self {
            _tmp: tmp,
            home,
            work,
            tree,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("aclscan");
        cmd.env("HOME", &self.home)
            .env_remove("RUST_LOG")
            .current_dir(&self.work);
        cmd
    }

    pub fn tree_arg(&self) -> &str {
        self.tree.to_str().expect("tree path utf8")
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn run_json_failure(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .failure()
            .code(1)
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("error json output")
    }

    pub fn write_config(&self, body: &str) {
        let path = self.home.join(".config/aclscan/config.toml");
        fs::create_dir_all(path.parent().expect("config parent")).expect("create config dir");
        fs::write(path, body).expect("write config");
    }

    pub fn read_work(&self, name: &str) -> String {
        fs::read_to_string(self.work.join(name)).expect("read output")
    }
}

/// tree/
///   a/
///     x/
///   b/
///   notes.txt
fn make_fixture_tree(base: &Path) -> PathBuf {
    let tree = base.join("tree");
    fs::create_dir_all(tree.join("a/x")).expect("create a/x");
    fs::create_dir_all(tree.join("b")).expect("create b");
    fs::write(tree.join("notes.txt"), "not a folder").expect("write file");
    tree
}

pub fn count_lines(text: &str, prefix: &str) -> usize {
    text.lines().filter(|l| l.starts_with(prefix)).count()
}
