//! closure-shim: run Google Closure Compiler from a build script.
//!
//! ```text
//! closure-shim <input>... -o <output>
//! ```

pub mod args;
pub mod compiler;
pub mod config;
pub mod logging;
pub mod shim;
pub mod validate;
