//! CLI handler for `pushgate install`.

use std::env;
use std::path::Path;

use dialoguer::Confirm;
use pushgate_core::hooks::{hook_path, hook_status, install_pre_push_hook, HookStatus};
use pushgate_core::repo::resolve_repo_root;

use crate::output::{OutputMode, Reporter};

/// Install the native pre-push hook into the current repository.
pub fn run_install(force: bool, reporter: &mut Reporter) -> bool {
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

    match hook_status(&root) {
        Ok(HookStatus::Installed) => {
            reporter.info(&format!(
                "Pre-push hook already installed at {}",
                hook_path(&root).display()
            ));
            return true;
        }
        Ok(HookStatus::Foreign) if !force => {
            // Only the interactive mode may ask; everything else needs
            // an explicit --force.
            if reporter.mode() != OutputMode::Human || !confirm_overwrite(&root) {
                reporter.error(&format!(
                    "A pre-push hook already exists at {}. Re-run with --force to overwrite it.",
                    hook_path(&root).display()
                ));
                return false;
            }
        }
        Ok(HookStatus::Missing | HookStatus::Foreign) => {}
        Err(e) => {
            reporter.error(&format!("Cannot inspect existing hook: {e}"));
            return false;
        }
    }

    match install_pre_push_hook(&root) {
        Ok(msg) => {
            reporter.success(&msg);
            true
        }
        Err(e) => {
            reporter.error(&format!("Failed to install hook: {e}"));
            false
        }
    }
}

fn confirm_overwrite(root: &Path) -> bool {
    Confirm::new()
        .with_prompt(format!(
            "Overwrite the existing pre-push hook at {}?",
            hook_path(root).display()
        ))
        .default(false)
        .interact()
        .unwrap_or(false)
}
