//! How the process ends: exit code plus what to print.

use std::io::{self, Write};

use crate::error::NotifierError;
use crate::model::constants::{EXIT_FAILURE, EXIT_SUCCESS};

/// Final outcome of one invocation.
///
/// Every session produces exactly one of these. `stderr` lines are written
/// before `stdout` lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Termination {
    pub code: i32,
    pub stdout: Vec<String>,
    pub stderr: Vec<String>,
}

impl Termination {
    pub fn success() -> Self {
        Self {
            code: EXIT_SUCCESS,
            stdout: Vec::new(),
            stderr: Vec::new(),
        }
    }

    pub fn failure() -> Self {
        Self {
            code: EXIT_FAILURE,
            ..Self::success()
        }
    }

    /// Exit 1 with `Error: <err>` on stderr.
    pub fn from_error(err: &NotifierError) -> Self {
        Self::failure().with_stderr(format!("Error: {}", err))
    }

    pub fn with_stdout(mut self, line: impl Into<String>) -> Self {
        self.stdout.push(line.into());
        self
    }

    pub fn with_stderr(mut self, line: impl Into<String>) -> Self {
        self.stderr.push(line.into());
        self
    }

    pub fn is_success(&self) -> bool {
        self.code == EXIT_SUCCESS
    }

    /// Write the buffered output, one line per entry.
    pub fn write_to<O: Write, E: Write>(&self, out: &mut O, err: &mut E) -> io::Result<()> {
        for line in &self.stderr {
            writeln!(err, "{}", line)?;
        }
        err.flush()?;
        for line in &self.stdout {
            writeln!(out, "{}", line)?;
        }
        out.flush()
    }

    /// Write to the real stdout/stderr, ignoring closed pipes.
    pub fn emit(&self) {
        let _ = self.write_to(&mut io::stdout().lock(), &mut io::stderr().lock());
    }
}
