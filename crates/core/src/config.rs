//! Configuration path utilities for runpick.
//!
//! This module resolves where the manifest lives and which package manager
//! binary runs the selected script.

use std::path::{Path, PathBuf};

/// File name of the manifest looked up in the working directory
pub const DEFAULT_MANIFEST_NAME: &str = "package.json";

/// Default program used as `<program> run <script>`
pub const DEFAULT_RUNNER: &str = "npm";

/// Environment variable consulted when no runner is given on the command line
pub const RUNNER_ENV_VAR: &str = "RUNPICK_RUNNER";

/// Resolves the manifest file path.
///
/// If a custom path is provided, uses that path with `~` expanded. A relative
/// custom path is taken relative to `cwd`. Otherwise the manifest is
/// `package.json` inside `cwd`.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use runpick_core::config::get_manifest_path;
///
/// let default_path = get_manifest_path(&None, Path::new("/project"));
/// assert_eq!(default_path, Path::new("/project/package.json"));
///
/// let custom_path = get_manifest_path(&Some("/other/package.json".to_string()), Path::new("/project"));
/// assert_eq!(custom_path, Path::new("/other/package.json"));
/// ```
pub fn get_manifest_path(manifest_path_arg: &Option<String>, cwd: &Path) -> PathBuf {
    match manifest_path_arg {
        Some(manifest_path) => {
            let expanded = PathBuf::from(shellexpand::tilde(manifest_path).as_ref());
            if expanded.is_absolute() {
                expanded
            } else {
                cwd.join(expanded)
            }
        }
        None => cwd.join(DEFAULT_MANIFEST_NAME),
    }
}

/// Resolves the runner program.
///
/// Precedence is the command-line argument, then the value of
/// [`RUNNER_ENV_VAR`], then [`DEFAULT_RUNNER`]. Blank values are skipped.
pub fn get_runner_program(runner_arg: &Option<String>, runner_env: Option<String>) -> String {
    runner_arg
        .iter()
        .cloned()
        .chain(runner_env)
        .map(|runner| runner.trim().to_string())
        .find(|runner| !runner.is_empty())
        .unwrap_or_else(|| DEFAULT_RUNNER.to_string())
}

/// Directory the script runs in: the one holding the manifest.
pub fn manifest_directory(manifest_path: &Path) -> Option<PathBuf> {
    manifest_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_manifest_path_with_none() {
        let result = get_manifest_path(&None, Path::new("/work/app"));
        assert_eq!(result, PathBuf::from("/work/app/package.json"));
    }

    #[test]
    fn test_get_manifest_path_with_absolute_path() {
        let custom = Some("/custom/path/package.json".to_string());
        let result = get_manifest_path(&custom, Path::new("/work/app"));
        assert_eq!(result, PathBuf::from("/custom/path/package.json"));
    }

    #[test]
    fn test_get_manifest_path_with_relative_path() {
        let custom = Some("packages/web/package.json".to_string());
        let result = get_manifest_path(&custom, Path::new("/work/app"));
        assert_eq!(
            result,
            PathBuf::from("/work/app/packages/web/package.json")
        );
    }

    #[test]
    fn test_get_manifest_path_with_tilde() {
        let custom = Some("~/project/package.json".to_string());
        let result = get_manifest_path(&custom, Path::new("/work/app"));
        assert!(!result.to_string_lossy().starts_with('~'));
        assert!(result.ends_with("project/package.json"));
    }

    #[test]
    fn test_get_runner_program_prefers_argument() {
        let result = get_runner_program(&Some("pnpm".to_string()), Some("yarn".to_string()));
        assert_eq!(result, "pnpm");
    }

    #[test]
    fn test_get_runner_program_falls_back_to_env() {
        let result = get_runner_program(&None, Some("yarn".to_string()));
        assert_eq!(result, "yarn");
    }

    #[test]
    fn test_get_runner_program_skips_blank_values() {
        let result = get_runner_program(&Some("  ".to_string()), Some(String::new()));
        assert_eq!(result, DEFAULT_RUNNER);
    }

    #[test]
    fn test_manifest_directory() {
        let dir = manifest_directory(Path::new("/work/app/package.json"));
        assert_eq!(dir, Some(PathBuf::from("/work/app")));

        assert_eq!(manifest_directory(Path::new("package.json")), None);
    }
}
