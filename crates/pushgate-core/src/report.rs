//! Step outcomes accumulated over a gate run.
//!
//! A run produces one [`StepOutcome`] per check, in execution order, and the
//! whole report folds into a single pass/fail answer via
//! [`GateReport::passed`].

use serde::Serialize;

/// The checks a pre-push run attempts, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepKind {
    BinaryDist,
    SourceDist,
    Lint,
}

impl StepKind {
    pub fn name(&self) -> &str {
        match self {
            StepKind::BinaryDist => "binary distribution",
            StepKind::SourceDist => "source distribution",
            StepKind::Lint => "lint",
        }
    }
}

impl std::fmt::Display for StepKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepStatus {
    Passed,
    Failed,
    /// The tool the step needs is not installed. The step never ran and the
    /// run counts as failed.
    MissingTool,
}

/// Outcome of a single step.
#[derive(Debug, Clone, Serialize)]
pub struct StepOutcome {
    pub kind: StepKind,
    pub status: StepStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl StepOutcome {
    pub fn passed(kind: StepKind) -> Self {
        Self {
            kind,
            status: StepStatus::Passed,
            detail: None,
        }
    }

    pub fn failed(kind: StepKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            status: StepStatus::Failed,
            detail: Some(detail.into()),
        }
    }

    pub fn missing_tool(kind: StepKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            status: StepStatus::MissingTool,
            detail: Some(detail.into()),
        }
    }

    pub fn is_passed(&self) -> bool {
        self.status == StepStatus::Passed
    }
}

/// Ordered record of every step a gate run attempted or skipped.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GateReport {
    pub steps: Vec<StepOutcome>,
}

impl GateReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, outcome: StepOutcome) {
        self.steps.push(outcome);
    }

    /// True iff every step ran and succeeded.
    pub fn passed(&self) -> bool {
        self.steps.iter().all(StepOutcome::is_passed)
    }

    pub fn outcome(&self, kind: StepKind) -> Option<&StepOutcome> {
        self.steps.iter().find(|step| step.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_passes_when_all_steps_pass() {
        let mut report = GateReport::new();
        report.push(StepOutcome::passed(StepKind::BinaryDist));
        report.push(StepOutcome::passed(StepKind::SourceDist));
        report.push(StepOutcome::passed(StepKind::Lint));

        assert!(report.passed());
    }

    #[test]
    fn single_failure_fails_the_report() {
        let mut report = GateReport::new();
        report.push(StepOutcome::failed(StepKind::BinaryDist, "exited with status 1"));
        report.push(StepOutcome::passed(StepKind::SourceDist));
        report.push(StepOutcome::passed(StepKind::Lint));

        assert!(!report.passed());
    }

    #[test]
    fn missing_tool_fails_the_report() {
        let mut report = GateReport::new();
        report.push(StepOutcome::passed(StepKind::BinaryDist));
        report.push(StepOutcome::passed(StepKind::SourceDist));
        report.push(StepOutcome::missing_tool(StepKind::Lint, "flake8 is not installed"));

        assert!(!report.passed());
    }

    #[test]
    fn outcome_looks_up_steps_by_kind() {
        let mut report = GateReport::new();
        report.push(StepOutcome::passed(StepKind::BinaryDist));
        report.push(StepOutcome::failed(StepKind::Lint, "exited with status 1"));

        assert_eq!(
            report.outcome(StepKind::Lint).unwrap().status,
            StepStatus::Failed
        );
        assert!(report.outcome(StepKind::SourceDist).is_none());
    }

    #[test]
    fn step_kinds_have_human_names() {
        assert_eq!(StepKind::BinaryDist.name(), "binary distribution");
        assert_eq!(StepKind::SourceDist.name(), "source distribution");
        assert_eq!(format!("{}", StepKind::Lint), "lint");
    }

    #[test]
    fn serializes_for_machine_output() {
        let outcome = StepOutcome::passed(StepKind::BinaryDist);
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["kind"], "binary-dist");
        assert_eq!(json["status"], "passed");
        assert!(json.get("detail").is_none());
    }
}
