//! In-process compiler double for driving `shim::run`.

#![allow(dead_code)]

use std::cell::RefCell;
use std::io;

use closure_shim::compiler::{CompileRequest, Compiler, CompilerError, CompilerOutput};

/// What the mock should do when invoked.
#[derive(Debug, Clone)]
pub enum MockResult {
    Output(CompilerOutput),
    SpawnFailure,
}

/// Records every request and replays a canned result.
pub struct MockCompiler {
    result: MockResult,
    requests: RefCell<Vec<CompileRequest>>,
}

impl MockCompiler {
    pub fn succeeding(stdout: &str) -> Self {
        Self::with_output(0, stdout, "")
    }

    pub fn failing(status: i32, stdout: &str, stderr: &str) -> Self {
        Self::with_output(status, stdout, stderr)
    }

    pub fn unavailable() -> Self {
        Self {
            result: MockResult::SpawnFailure,
            requests: RefCell::new(Vec::new()),
        }
    }

    fn with_output(status: i32, stdout: &str, stderr: &str) -> Self {
        Self {
            result: MockResult::Output(CompilerOutput {
                status,
                stdout: stdout.to_string(),
                stderr: stderr.to_string(),
            }),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<CompileRequest> {
        self.requests.borrow().clone()
    }
}

impl Compiler for MockCompiler {
    fn compile(&self, request: &CompileRequest) -> Result<CompilerOutput, CompilerError> {
        self.requests.borrow_mut().push(request.clone());
        match &self.result {
            MockResult::Output(output) => Ok(output.clone()),
            MockResult::SpawnFailure => Err(CompilerError::Spawn {
                command: "mock-compiler".to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "not found"),
            }),
        }
    }
}
