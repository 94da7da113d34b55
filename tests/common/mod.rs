//! Test utilities for eval-dispatch integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Templates with short, predictable paths
pub const TEST_CONFIG: &str = r#"
[full]
program = "progA"
args = []
exp_config = "cfgs/full/{config}.on.yaml"

[extended]
program = "progB"
args = []
exp_config = "cfgs/{config}.on.yaml"
ckpt_path = "ckpts/{config}/{config}.{epoch}.pth"
"#;

/// Convert string literals into owned arguments
pub fn args(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Write `content` to `dir/name` and return the path
pub fn write_config(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}
