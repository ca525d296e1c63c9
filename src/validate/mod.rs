//! Validation of tokenized arguments.
//!
//! The tokenizer accepts anything; a [`Schema`] decides whether the result
//! is usable. Schemas are injected by the caller, so [`crate::args`] has no
//! dependency on this module.

mod compile;
mod issue;
mod schema;

use std::io::{self, Write};

use tracing::debug;

use crate::args::ParsedArgs;

pub use compile::{CompileArgs, CompileSchema};
pub use issue::Issue;
pub use schema::{
    non_empty_string_option, non_empty_top_level, string_option, Schema, MSG_EMPTY_ARRAY,
    MSG_EMPTY_STRING, MSG_EXPECTED_STRING, MSG_REQUIRED,
};

/// Validate `args` against `schema`, writing one line per issue to `stderr`.
///
/// Returns `Ok(None)` when validation failed; the issues have already been
/// printed by then.
pub fn validate_args_and_print_errors<S: Schema>(
    schema: &S,
    args: &ParsedArgs,
    stderr: &mut dyn Write,
) -> io::Result<Option<S::Output>> {
    debug!(
        args = %serde_json::to_string(args).unwrap_or_default(),
        "parsed command line args"
    );

    match schema.validate(args) {
        Ok(output) => Ok(Some(output)),
        Err(issues) => {
            for issue in &issues {
                writeln!(stderr, "{}", issue)?;
            }
            debug!(count = issues.len(), "argument validation failed");
            Ok(None)
        }
    }
}
