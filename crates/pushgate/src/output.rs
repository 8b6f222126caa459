use colored::*;
use pushgate_core::report::{GateReport, StepKind, StepStatus};
use serde::Serialize;

/// Output mode for the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
    Quiet,
}

/// Accumulated JSON result entry.
#[derive(Debug, Serialize, Clone)]
pub struct JsonResultEntry {
    #[serde(rename = "type")]
    pub result_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Accumulated JSON output.
#[derive(Debug, Serialize)]
pub struct JsonOutput {
    pub results: Vec<JsonResultEntry>,
}

/// Reporter handles all output formatting.
pub struct Reporter {
    mode: OutputMode,
    json_results: Vec<JsonResultEntry>,
}

impl Reporter {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            json_results: Vec::new(),
        }
    }

    /// Returns the current output mode.
    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    pub fn error(&mut self, message: &str) {
        match self.mode {
            OutputMode::Human | OutputMode::Quiet => {
                eprintln!("{} {}", "ERROR:".red(), message);
            }
            OutputMode::Json => {
                self.json_results.push(JsonResultEntry {
                    result_type: "error".to_string(),
                    message: message.to_string(),
                    details: None,
                });
            }
        }
    }

    pub fn success(&mut self, message: &str) {
        match self.mode {
            OutputMode::Human => {
                println!("{} {}", "✓".green(), message);
            }
            OutputMode::Json => {
                self.json_results.push(JsonResultEntry {
                    result_type: "success".to_string(),
                    message: message.to_string(),
                    details: None,
                });
            }
            OutputMode::Quiet => {}
        }
    }

    pub fn info(&mut self, message: &str) {
        match self.mode {
            OutputMode::Human => {
                println!("{} {}", "INFO:".blue(), message);
            }
            OutputMode::Json => {
                self.json_results.push(JsonResultEntry {
                    result_type: "info".to_string(),
                    message: message.to_string(),
                    details: None,
                });
            }
            OutputMode::Quiet => {}
        }
    }

    pub fn section(&mut self, title: &str) {
        if self.mode == OutputMode::Human {
            println!("{}", format!("=== {title} ===").cyan());
        }
    }

    /// Full-width green banner for the checks that advertise success.
    pub fn banner_success(&mut self, message: &str) {
        match self.mode {
            OutputMode::Human => {
                println!("{}", message.black().on_green());
            }
            OutputMode::Json => {
                self.json_results.push(JsonResultEntry {
                    result_type: "success".to_string(),
                    message: message.to_string(),
                    details: None,
                });
            }
            OutputMode::Quiet => {}
        }
    }

    /// Red banner for lint failures and missing tools.
    pub fn banner_failure(&mut self, message: &str) {
        match self.mode {
            OutputMode::Human | OutputMode::Quiet => {
                eprintln!("{}", message.white().on_red());
            }
            OutputMode::Json => {
                self.json_results.push(JsonResultEntry {
                    result_type: "error".to_string(),
                    message: message.to_string(),
                    details: None,
                });
            }
        }
    }

    pub fn report_gate(&mut self, report: &GateReport) {
        if self.mode == OutputMode::Json {
            for step in &report.steps {
                let result_type = if step.is_passed() { "success" } else { "error" };
                self.json_results.push(JsonResultEntry {
                    result_type: result_type.to_string(),
                    message: format!("{}: {}", step.kind, status_word(step.status)),
                    details: step.detail.clone(),
                });
            }
            return;
        }

        for step in &report.steps {
            match (step.kind, step.status) {
                (StepKind::Lint, StepStatus::Passed) => {
                    self.banner_success("Lint check passed");
                }
                (StepKind::Lint, StepStatus::Failed) => {
                    self.banner_failure("Lint check failed, fix the errors before pushing");
                }
                (StepKind::Lint, StepStatus::MissingTool) => {
                    self.banner_failure(
                        step.detail.as_deref().unwrap_or("lint tool is not installed"),
                    );
                }
                (kind, StepStatus::Passed) => {
                    self.success(&format!("{kind} built"));
                }
                // Failed builds surface through the packaging tool's own
                // stderr; they get no dedicated line.
                _ => {}
            }
        }
    }

    pub fn finish(&self) {
        if self.mode == OutputMode::Json {
            let output = JsonOutput {
                results: self.json_results.clone(),
            };
            if let Ok(json) = serde_json::to_string_pretty(&output) {
                println!("{json}");
            }
        }
    }
}

fn status_word(status: StepStatus) -> &'static str {
    match status {
        StepStatus::Passed => "passed",
        StepStatus::Failed => "failed",
        StepStatus::MissingTool => "missing tool",
    }
}
