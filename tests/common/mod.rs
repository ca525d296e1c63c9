//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_compiler;

use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub use mock_compiler::MockCompiler;

pub fn raw_args(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}

/// Create a temporary config file with the given TOML content.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// TOML config that runs `sh -c <script>` as the compiler.
pub fn shell_compiler_config(script: &str) -> String {
    format!(
        r#"[compiler]
command = "sh"
args = ["-c", {}, "sh"]
"#,
        toml_string(script)
    )
}

fn toml_string(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}

/// Write a JS input file into `dir` and return its path.
pub fn js_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("Failed to write input file");
    path
}
