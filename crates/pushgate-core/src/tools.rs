//! Child-process execution for the external build and lint tools.
//!
//! Every external tool the gate touches goes through the [`ToolRunner`]
//! capability, so the control flow can be exercised in tests with scripted
//! exit statuses instead of real packaging and lint runs.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::error::PushgateError;

/// A single external tool invocation.
///
/// `quiet` discards the tool's stdout; stderr always passes through to the
/// console so build errors stay visible.
#[derive(Debug, Clone)]
pub struct ToolInvocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
    pub quiet: bool,
}

impl ToolInvocation {
    pub fn new(program: impl Into<String>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: cwd.into(),
            quiet: false,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn quiet(mut self) -> Self {
        self.quiet = true;
        self
    }
}

/// Exit status of a completed tool, reduced to the only part the gate
/// consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolStatus {
    /// Exit code, or `None` if the process was killed by a signal.
    pub code: Option<i32>,
}

impl ToolStatus {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Capability interface over external tools.
pub trait ToolRunner {
    /// Run the tool from its working directory and block until it exits.
    ///
    /// # Errors
    ///
    /// Returns [`PushgateError::ToolSpawn`] if the process cannot be
    /// started at all.
    fn run(&mut self, invocation: &ToolInvocation) -> Result<ToolStatus, PushgateError>;

    /// Whether `program` resolves to an executable in the current
    /// environment.
    fn is_installed(&self, program: &str) -> bool;
}

/// Production runner backed by `std::process::Command`.
pub struct SystemRunner;

impl ToolRunner for SystemRunner {
    fn run(&mut self, invocation: &ToolInvocation) -> Result<ToolStatus, PushgateError> {
        let mut command = Command::new(&invocation.program);
        command.args(&invocation.args).current_dir(&invocation.cwd);
        if invocation.quiet {
            command.stdout(Stdio::null());
        }

        let status = command.status().map_err(|e| PushgateError::ToolSpawn {
            program: invocation.program.clone(),
            source: e,
        })?;

        Ok(ToolStatus {
            code: status.code(),
        })
    }

    fn is_installed(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }
}
