//! Command-line tokenizing for the shim.
//!
//! ```text
//! argv → parse_args → ParsedArgs → Schema::validate → typed args
//! ```
//!
//! The tokenizer only splits tokens into positional values and named
//! options. It never fails; deciding whether the result makes sense is the
//! job of the [`validate`](crate::validate) stage.

mod parser;
mod shorthand;

pub use parser::{parse_args, OptionValue, ParsedArgs};
pub use shorthand::Shorthand;
