//! The shim itself: tokenize → validate → compile → emit.
//!
//! Self-contained over its streams and compiler so the whole flow can be
//! driven from tests without spawning a process.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use thiserror::Error;
use tracing::{info, warn};

use crate::args::{parse_args, Shorthand};
use crate::compiler::{CompileRequest, Compiler, CompilerError};
use crate::config::Config;
use crate::validate::{validate_args_and_print_errors, CompileSchema};

/// Errors that end a shim run. The process exits non-zero on any of them.
#[derive(Debug, Error)]
pub enum ShimError {
    /// Argument validation failed; issues were already printed.
    #[error("Invalid Command Line Args")]
    InvalidArgs,

    /// Compiler exited with a non-zero status; its output was already echoed.
    #[error("ClosureError: {code}")]
    Compiler { code: i32 },

    #[error(transparent)]
    Launch(#[from] CompilerError),

    #[error("Failed to write output file '{path}': {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Run the shim over `raw_args` (program name already stripped).
pub fn run(
    raw_args: &[String],
    config: &Config,
    compiler: &dyn Compiler,
    stdout: &mut dyn Write,
    stderr: &mut dyn Write,
) -> Result<(), ShimError> {
    let parsed = parse_args(raw_args, &Shorthand::closure());

    let Some(args) = validate_args_and_print_errors(&CompileSchema, &parsed, stderr)? else {
        return Err(ShimError::InvalidArgs);
    };

    info!(
        inputs = args.inputs.len(),
        output = %args.output.display(),
        "compiling"
    );

    let result = compiler.compile(&CompileRequest {
        inputs: args.inputs.clone(),
    })?;

    if !result.success() {
        if !result.stdout.is_empty() {
            writeln!(stdout, "{}", result.stdout)?;
        }
        if !result.stderr.is_empty() {
            writeln!(stderr, "{}", result.stderr)?;
        }
        warn!(status = result.status, "closure compiler failed");
        return Err(ShimError::Compiler {
            code: result.status,
        });
    }

    if config.output.write_file {
        fs::write(&args.output, &result.stdout).map_err(|source| ShimError::WriteOutput {
            path: args.output.clone(),
            source,
        })?;
        info!(path = %args.output.display(), bytes = result.stdout.len(), "wrote output");
    }

    writeln!(stdout, "{}", result.stdout)?;
    Ok(())
}
