//! Shim configuration: which compiler to run and what to do with its output.

mod loader;
mod types;

pub use loader::{ConfigError, CONFIG_ENV_VAR};
pub use types::{CompilerConfig, Config, OutputConfig};
