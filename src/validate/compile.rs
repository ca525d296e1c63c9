//! Schema for the compile command: `<input>... -o <output>`.

use std::path::PathBuf;

use crate::args::ParsedArgs;
use crate::validate::issue::Issue;
use crate::validate::schema::{non_empty_string_option, non_empty_top_level, Schema};

/// Validated arguments for one compiler run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileArgs {
    /// Input files, in command-line order.
    pub inputs: Vec<PathBuf>,
    /// Where the compiled output goes.
    pub output: PathBuf,
}

/// Requires at least one input file and a non-empty string `output` option.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompileSchema;

impl Schema for CompileSchema {
    type Output = CompileArgs;

    fn validate(&self, args: &ParsedArgs) -> Result<CompileArgs, Vec<Issue>> {
        match (non_empty_top_level(args), non_empty_string_option(args, "output")) {
            (Ok(inputs), Ok(output)) => Ok(CompileArgs {
                inputs: inputs.iter().map(PathBuf::from).collect(),
                output: PathBuf::from(output),
            }),
            (inputs, output) => Err(inputs.err().into_iter().chain(output.err()).collect()),
        }
    }
}
