use std::process::Command;

use tracing::debug;

use crate::compiler::{CompileRequest, Compiler, CompilerError, CompilerOutput};
use crate::config::CompilerConfig;

/// Fixed compiler configuration, passed on every run.
pub const CLOSURE_FLAGS: &[&str] = &[
    "--compilation_level=ADVANCED",
    "--assume_function_wrapper",
    "--process_closure_primitives=false",
    "--rewrite_polyfills=false",
    "--inject_libraries=false",
];

/// Runs Google Closure Compiler as a child process.
///
/// Command line: `<command> <prefix args> <CLOSURE_FLAGS> <extra flags> --js=<input>...`
#[derive(Debug, Clone)]
pub struct ClosureCompiler {
    command: String,
    prefix_args: Vec<String>,
    extra_flags: Vec<String>,
}

impl ClosureCompiler {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            prefix_args: Vec::new(),
            extra_flags: Vec::new(),
        }
    }

    pub fn from_config(config: &CompilerConfig) -> Self {
        Self {
            command: config.command.clone(),
            prefix_args: config.args.clone(),
            extra_flags: config.extra_flags.clone(),
        }
    }

    /// Arguments placed before the fixed flags (e.g. `-jar compiler.jar`).
    pub fn with_prefix_args(mut self, args: Vec<String>) -> Self {
        self.prefix_args = args;
        self
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    /// Full argument list for `request`, excluding the command itself.
    pub fn command_line(&self, request: &CompileRequest) -> Vec<String> {
        let mut args = self.prefix_args.clone();
        args.extend(CLOSURE_FLAGS.iter().map(|flag| flag.to_string()));
        args.extend(self.extra_flags.iter().cloned());
        args.extend(
            request
                .inputs
                .iter()
                .map(|input| format!("--js={}", input.display())),
        );
        args
    }
}

impl Compiler for ClosureCompiler {
    fn compile(&self, request: &CompileRequest) -> Result<CompilerOutput, CompilerError> {
        let args = self.command_line(request);
        debug!(command = %self.command, ?args, "invoking closure compiler");

        let output = Command::new(&self.command)
            .args(&args)
            .output()
            .map_err(|source| CompilerError::Spawn {
                command: self.command.clone(),
                source,
            })?;

        let status = output.status.code().ok_or_else(|| CompilerError::Terminated {
            command: self.command.clone(),
        })?;
        debug!(status, "closure compiler exited");

        Ok(CompilerOutput {
            status,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn request(inputs: &[&str]) -> CompileRequest {
        CompileRequest {
            inputs: inputs.iter().map(PathBuf::from).collect(),
        }
    }

    #[test]
    fn command_line_order() {
        let compiler = ClosureCompiler::new("java")
            .with_prefix_args(vec!["-jar".into(), "closure.jar".into()]);
        let args = compiler.command_line(&request(&["a.js", "b.js"]));

        assert_eq!(&args[..2], &["-jar", "closure.jar"]);
        assert_eq!(&args[2..2 + CLOSURE_FLAGS.len()], CLOSURE_FLAGS);
        assert_eq!(&args[args.len() - 2..], &["--js=a.js", "--js=b.js"]);
    }

    #[test]
    fn extra_flags_follow_fixed_flags() {
        let config = CompilerConfig {
            command: "google-closure-compiler".into(),
            args: Vec::new(),
            extra_flags: vec!["--language_out=ECMASCRIPT_2019".into()],
        };
        let compiler = ClosureCompiler::from_config(&config);
        let args = compiler.command_line(&request(&["main.js"]));

        assert_eq!(compiler.command(), "google-closure-compiler");
        assert_eq!(args[CLOSURE_FLAGS.len()], "--language_out=ECMASCRIPT_2019");
        assert_eq!(args.last().map(String::as_str), Some("--js=main.js"));
    }

    #[test]
    fn missing_command_is_spawn_error() {
        let compiler = ClosureCompiler::new("closure-shim-no-such-compiler-xyz");
        let err = compiler.compile(&request(&["a.js"])).unwrap_err();
        assert!(matches!(err, CompilerError::Spawn { ref command, .. } if command == "closure-shim-no-such-compiler-xyz"));
    }

    #[cfg(unix)]
    #[test]
    fn captures_status_and_streams() {
        let compiler = ClosureCompiler::new("sh").with_prefix_args(vec![
            "-c".into(),
            "echo out; echo err >&2; exit 4".into(),
            "sh".into(),
        ]);
        let output = compiler.compile(&request(&["a.js"])).unwrap();

        assert_eq!(output.status, 4);
        assert!(!output.success());
        assert_eq!(output.stdout, "out\n");
        assert_eq!(output.stderr, "err\n");
    }
}
