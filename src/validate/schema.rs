//! Schema capability plus the field checks schemas are built from.

use crate::args::ParsedArgs;
use crate::validate::issue::Issue;

pub const MSG_EMPTY_ARRAY: &str = "Array must contain at least 1 element(s)";
pub const MSG_REQUIRED: &str = "Required";
pub const MSG_EXPECTED_STRING: &str = "Expected string, received boolean";
pub const MSG_EMPTY_STRING: &str = "String must contain at least 1 character(s)";

/// Checks a [`ParsedArgs`] and converts it to a typed value.
///
/// Every problem found is reported, not just the first.
pub trait Schema {
    type Output;

    fn validate(&self, args: &ParsedArgs) -> Result<Self::Output, Vec<Issue>>;
}

/// Require at least one positional value.
pub fn non_empty_top_level(args: &ParsedArgs) -> Result<&[String], Issue> {
    if args.top_level.is_empty() {
        Err(Issue::new(&["topLevel"], MSG_EMPTY_ARRAY))
    } else {
        Ok(&args.top_level)
    }
}

/// Require `name` to be present with a string value.
pub fn string_option<'a>(args: &'a ParsedArgs, name: &str) -> Result<&'a str, Issue> {
    let value = args
        .option(name)
        .ok_or_else(|| Issue::new(&["options", name], MSG_REQUIRED))?;
    value
        .as_str()
        .ok_or_else(|| Issue::new(&["options", name], MSG_EXPECTED_STRING))
}

/// Like [`string_option`], but an empty string is also rejected.
pub fn non_empty_string_option<'a>(args: &'a ParsedArgs, name: &str) -> Result<&'a str, Issue> {
    match string_option(args, name)? {
        "" => Err(Issue::new(&["options", name], MSG_EMPTY_STRING)),
        value => Ok(value),
    }
}
