use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub compiler: CompilerConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// How to launch the compiler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilerConfig {
    /// Executable to run (default: "google-closure-compiler").
    #[serde(default = "default_compiler_command")]
    pub command: String,
    /// Arguments placed before the compiler flags (e.g. `["-jar", "closure.jar"]`).
    #[serde(default)]
    pub args: Vec<String>,
    /// Flags appended after the fixed compiler configuration.
    #[serde(default)]
    pub extra_flags: Vec<String>,
}

/// What to do with successful output, besides printing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Also write compiled output to the `--output` path (default: true).
    #[serde(default = "default_write_file")]
    pub write_file: bool,
}

fn default_compiler_command() -> String {
    "google-closure-compiler".to_string()
}

fn default_write_file() -> bool {
    true
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            command: default_compiler_command(),
            args: Vec::new(),
            extra_flags: Vec::new(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            write_file: default_write_file(),
        }
    }
}
