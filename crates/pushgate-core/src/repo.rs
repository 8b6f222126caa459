//! Repository root resolution.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::PushgateError;

/// Resolve the top-level working directory of the repository containing
/// `start_dir` by asking git itself.
///
/// # Errors
///
/// Returns `PushgateError::ToolSpawn` if git cannot be executed, and
/// `PushgateError::NotARepository` (carrying git's stderr) if git exits
/// non-zero, typically because `start_dir` is not inside a work tree.
pub fn resolve_repo_root(start_dir: &Path) -> Result<PathBuf, PushgateError> {
    let output = Command::new("git")
        .args(["rev-parse", "--show-toplevel"])
        .current_dir(start_dir)
        .output()
        .map_err(|e| PushgateError::ToolSpawn {
            program: "git".into(),
            source: e,
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(PushgateError::NotARepository(stderr.trim().to_string()));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(PathBuf::from(stdout.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn git_init(dir: &Path) {
        Command::new("git")
            .args(["init"])
            .current_dir(dir)
            .output()
            .expect("git init failed");
    }

    #[test]
    fn resolves_root_from_repository_top_level() {
        let tmp = TempDir::new().unwrap();
        git_init(tmp.path());

        let root = resolve_repo_root(tmp.path()).unwrap();
        assert_eq!(
            root.canonicalize().unwrap(),
            tmp.path().canonicalize().unwrap()
        );
    }

    #[test]
    fn resolves_root_from_nested_directory() {
        let tmp = TempDir::new().unwrap();
        git_init(tmp.path());
        let nested = tmp.path().join("src").join("deep");
        fs::create_dir_all(&nested).unwrap();

        let root = resolve_repo_root(&nested).unwrap();
        assert_eq!(
            root.canonicalize().unwrap(),
            tmp.path().canonicalize().unwrap()
        );
    }

    #[test]
    fn fails_outside_a_repository() {
        let tmp = TempDir::new().unwrap();

        let err = resolve_repo_root(tmp.path()).unwrap_err();
        assert!(matches!(err, PushgateError::NotARepository(_)));
    }
}
