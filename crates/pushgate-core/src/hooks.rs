//! Installation of the native pre-push git hook.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::PushgateError;

/// The shebang and hook body written to `.git/hooks/pre-push`.
const PRE_PUSH_HOOK: &str = "#!/bin/sh\npushgate run\n";

/// State of the repository's pre-push hook file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookStatus {
    /// No pre-push hook exists.
    Missing,
    /// The existing hook already invokes `pushgate run`.
    Installed,
    /// A pre-push hook exists but belongs to something else.
    Foreign,
}

/// Path of the pre-push hook inside the repository.
pub fn hook_path(repo_root: &Path) -> PathBuf {
    repo_root.join(".git").join("hooks").join("pre-push")
}

/// Inspect the existing pre-push hook, if any.
///
/// # Errors
///
/// Returns `PushgateError::Io` if an existing hook file cannot be read.
pub fn hook_status(repo_root: &Path) -> Result<HookStatus, PushgateError> {
    let path = hook_path(repo_root);
    if !path.exists() {
        return Ok(HookStatus::Missing);
    }

    let content = fs::read_to_string(&path)?;
    if content.contains("pushgate run") {
        Ok(HookStatus::Installed)
    } else {
        Ok(HookStatus::Foreign)
    }
}

/// Write the pre-push hook script, replacing whatever is there.
///
/// Returns a human-readable description of what was done.
pub fn install_pre_push_hook(repo_root: &Path) -> Result<String, PushgateError> {
    let hooks_dir = repo_root.join(".git").join("hooks");
    fs::create_dir_all(&hooks_dir)?;

    let path = hooks_dir.join("pre-push");
    fs::write(&path, PRE_PUSH_HOOK)?;

    // Make executable on Unix
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let perms = fs::Permissions::from_mode(0o755);
        fs::set_permissions(&path, perms)?;
    }

    Ok(format!("Created {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn repo_with_git_dir() -> TempDir {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join(".git")).unwrap();
        tmp
    }

    #[test]
    fn install_creates_an_executable_hook() {
        let tmp = repo_with_git_dir();

        let result = install_pre_push_hook(tmp.path()).unwrap();
        assert!(result.contains("Created"));

        let path = hook_path(tmp.path());
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("#!/bin/sh"));
        assert!(content.contains("pushgate run"));

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = fs::metadata(&path).unwrap().permissions();
            assert!(perms.mode() & 0o111 != 0, "pre-push should be executable");
        }
    }

    #[test]
    fn status_is_missing_before_install() {
        let tmp = repo_with_git_dir();
        assert_eq!(hook_status(tmp.path()).unwrap(), HookStatus::Missing);
    }

    #[test]
    fn status_is_installed_after_install() {
        let tmp = repo_with_git_dir();
        install_pre_push_hook(tmp.path()).unwrap();
        assert_eq!(hook_status(tmp.path()).unwrap(), HookStatus::Installed);
    }

    #[test]
    fn status_is_foreign_for_someone_elses_hook() {
        let tmp = repo_with_git_dir();
        let path = hook_path(tmp.path());
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "#!/bin/sh\nmake test\n").unwrap();

        assert_eq!(hook_status(tmp.path()).unwrap(), HookStatus::Foreign);
    }

    #[test]
    fn install_replaces_a_foreign_hook() {
        let tmp = repo_with_git_dir();
        let path = hook_path(tmp.path());
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "#!/bin/sh\nmake test\n").unwrap();

        install_pre_push_hook(tmp.path()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("pushgate run"));
        assert!(!content.contains("make test"));
    }
}
