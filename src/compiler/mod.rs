//! External compiler collaborator.
//!
//! The shim only needs "run these inputs, give me status + output streams",
//! so the compiler sits behind the [`Compiler`] trait. [`ClosureCompiler`]
//! is the process-backed implementation; tests substitute their own.

mod closure;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub use closure::{ClosureCompiler, CLOSURE_FLAGS};

/// What to compile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileRequest {
    pub inputs: Vec<PathBuf>,
}

/// Result of a compiler run that exited normally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerOutput {
    /// Process exit status. Zero means success.
    pub status: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CompilerOutput {
    pub fn success(&self) -> bool {
        self.status == 0
    }
}

/// Failures to run the compiler at all (as opposed to a non-zero status).
#[derive(Debug, Error)]
pub enum CompilerError {
    #[error("Failed to start compiler '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("Compiler '{command}' was terminated by a signal")]
    Terminated { command: String },
}

pub trait Compiler {
    fn compile(&self, request: &CompileRequest) -> Result<CompilerOutput, CompilerError>;
}
