//! CLI handler for `pushgate run`.
//!
//! This is what the installed pre-push hook invokes. Any ref information
//! git passes on the hook's stdin is left unread.

use std::env;
use std::path::PathBuf;

use pushgate_core::gate::{run_pre_push, GateOptions};
use pushgate_core::repo::resolve_repo_root;
use pushgate_core::tools::SystemRunner;

use crate::output::Reporter;

/// Run the full pre-push gate from the repository containing the current
/// directory.
pub fn run_checks(
    python: String,
    linter: String,
    lint_config: PathBuf,
    reporter: &mut Reporter,
) -> bool {
    let cwd = match env::current_dir() {
        Ok(c) => c,
        Err(e) => {
            reporter.error(&format!("Cannot get current directory: {e}"));
            return false;
        }
    };

    let root = match resolve_repo_root(&cwd) {
        Ok(r) => r,
        Err(e) => {
            reporter.error(&format!("{e}"));
            return false;
        }
    };

    reporter.section("Pre-push checks");

    let options = GateOptions {
        python,
        linter,
        lint_config,
    };
    let report = run_pre_push(&root, &options, &mut SystemRunner);
    reporter.report_gate(&report);

    if report.passed() {
        reporter.success("Pre-push checks passed");
        true
    } else {
        reporter.error("Pre-push checks failed. Use 'git push --no-verify' to bypass.");
        false
    }
}
