//! The pre-push gate: a fixed linear sequence of build and lint steps.
//!
//! The sequence never short-circuits between the two distribution builds,
//! and the lint step runs whatever the builds returned. Only a missing
//! linter skips anything, and that skip is itself recorded as a failure.

use std::path::{Path, PathBuf};

use crate::report::{GateReport, StepKind, StepOutcome};
use crate::tools::{ToolInvocation, ToolRunner};

/// Distribution formats built before a push.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistKind {
    /// Prebuilt artifacts (`setup.py bdist`).
    Binary,
    /// Raw source for installation (`setup.py sdist`).
    Source,
}

impl DistKind {
    /// The `setup.py` subcommand that builds this distribution.
    pub fn build_command(&self) -> &'static str {
        match self {
            DistKind::Binary => "bdist",
            DistKind::Source => "sdist",
        }
    }

    pub fn step_kind(&self) -> StepKind {
        match self {
            DistKind::Binary => StepKind::BinaryDist,
            DistKind::Source => StepKind::SourceDist,
        }
    }
}

/// Tool selection for a gate run.
#[derive(Debug, Clone)]
pub struct GateOptions {
    /// Python interpreter used for the distribution builds.
    pub python: String,
    /// Lint executable looked up on the search path.
    pub linter: String,
    /// Lint configuration file, joined to the repository root when relative.
    pub lint_config: PathBuf,
}

impl Default for GateOptions {
    fn default() -> Self {
        Self {
            python: "python".into(),
            linter: "flake8".into(),
            lint_config: "setup.cfg".into(),
        }
    }
}

/// Run every pre-push check from the repository root and collect the
/// outcomes.
///
/// Both distribution builds are always attempted, whatever the first one
/// returns. The lint step is skipped and recorded as a missing tool when
/// the linter is not installed; otherwise it scans the whole repository
/// with the configured config file.
pub fn run_pre_push(
    root: &Path,
    options: &GateOptions,
    runner: &mut dyn ToolRunner,
) -> GateReport {
    let mut report = GateReport::new();

    for kind in [DistKind::Binary, DistKind::Source] {
        report.push(build_distribution(root, kind, options, runner));
    }

    if runner.is_installed(&options.linter) {
        report.push(run_lint(root, options, runner));
    } else {
        report.push(StepOutcome::missing_tool(
            StepKind::Lint,
            format!("{} is not installed", options.linter),
        ));
    }

    report
}

/// Build one distribution via `setup.py`, discarding the build's stdout.
fn build_distribution(
    root: &Path,
    kind: DistKind,
    options: &GateOptions,
    runner: &mut dyn ToolRunner,
) -> StepOutcome {
    let invocation = ToolInvocation::new(&options.python, root)
        .arg("setup.py")
        .arg(kind.build_command())
        .quiet();

    let step = kind.step_kind();
    match runner.run(&invocation) {
        Ok(status) if status.success() => StepOutcome::passed(step),
        Ok(status) => StepOutcome::failed(step, exit_detail(status.code)),
        Err(e) => StepOutcome::failed(step, e.to_string()),
    }
}

/// Lint the whole repository tree with the configured config file.
fn run_lint(root: &Path, options: &GateOptions, runner: &mut dyn ToolRunner) -> StepOutcome {
    let config = root.join(&options.lint_config);

    let invocation = ToolInvocation::new(&options.linter, root)
        .arg("--config")
        .arg(config.to_string_lossy())
        .arg(root.to_string_lossy());

    match runner.run(&invocation) {
        Ok(status) if status.success() => StepOutcome::passed(StepKind::Lint),
        Ok(status) => StepOutcome::failed(StepKind::Lint, exit_detail(status.code)),
        Err(e) => StepOutcome::failed(StepKind::Lint, e.to_string()),
    }
}

fn exit_detail(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with status {code}"),
        None => "terminated by signal".to_string(),
    }
}
