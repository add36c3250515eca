//! Precondition checks.
//!
//! A precondition decides whether a stage's work is already done. Checks
//! look at the filesystem every time they are called; nothing is cached,
//! so deleting an artifact between runs forces that stage to run again.

use std::path::{Path, PathBuf};

/// Result of running a precondition check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    /// Whether the check passed (stage work can be skipped).
    pub complete: bool,

    /// Description of what was checked.
    pub description: String,

    /// The artifact that satisfied the check, if any.
    pub found: Option<PathBuf>,
}

impl CheckResult {
    /// Create a complete result.
    pub fn complete(description: impl Into<String>, found: PathBuf) -> Self {
        Self {
            complete: true,
            description: description.into(),
            found: Some(found),
        }
    }

    /// Create an incomplete result.
    pub fn incomplete(description: impl Into<String>) -> Self {
        Self {
            complete: false,
            description: description.into(),
            found: None,
        }
    }
}

/// Whether `path` exists and is a regular file (symlinks are followed).
pub fn file_exists(path: &Path) -> bool {
    path.is_file()
}

/// The first candidate that exists as a regular file.
pub fn first_existing<P: AsRef<Path>>(candidates: &[P]) -> Option<&Path> {
    candidates
        .iter()
        .map(AsRef::as_ref)
        .find(|path| file_exists(path))
}

/// Check that at least one candidate exists as a regular file.
pub fn check_any_file<P: AsRef<Path>>(candidates: &[P]) -> CheckResult {
    match first_existing(candidates) {
        Some(path) => CheckResult::complete(
            format!("File exists: {}", path.display()),
            path.to_path_buf(),
        ),
        None => CheckResult::incomplete(format!(
            "None of {} files exist: {}",
            candidates.len(),
            candidates
                .iter()
                .map(|p| p.as_ref().display().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        )),
    }
}

/// Check that a single file exists.
pub fn check_file(path: &Path) -> CheckResult {
    if file_exists(path) {
        CheckResult::complete(format!("File exists: {}", path.display()), path.to_path_buf())
    } else {
        CheckResult::incomplete(format!("File missing: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn file_exists_for_regular_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("se_model.dat");
        fs::write(&path, "weights").unwrap();
        assert!(file_exists(&path));
    }

    #[test]
    fn directories_do_not_count() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("cesar");
        fs::create_dir(&path).unwrap();
        assert!(!file_exists(&path));
        assert!(!check_file(&path).complete);
    }

    #[test]
    fn any_file_is_satisfied_by_second_candidate() {
        let temp = TempDir::new().unwrap();
        let first = temp.path().join("se_model.dat");
        let second = temp.path().join("me_model.dat");
        fs::write(&second, "").unwrap();

        let result = check_any_file(&[&first, &second]);
        assert!(result.complete);
        assert_eq!(result.found, Some(second));
    }

    #[test]
    fn any_file_prefers_first_candidate() {
        let temp = TempDir::new().unwrap();
        let first = temp.path().join("a");
        let second = temp.path().join("b");
        fs::write(&first, "").unwrap();
        fs::write(&second, "").unwrap();

        assert_eq!(first_existing(&[&first, &second]), Some(first.as_path()));
    }

    #[test]
    fn any_file_incomplete_lists_candidates() {
        let temp = TempDir::new().unwrap();
        let result = check_any_file(&[temp.path().join("x"), temp.path().join("y")]);
        assert!(!result.complete);
        assert!(result.description.contains("None of 2 files exist"));
        assert!(result.found.is_none());
    }

    #[test]
    fn check_is_not_cached() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("cesar");

        assert!(!check_file(&path).complete);
        fs::write(&path, "#!/bin/sh").unwrap();
        assert!(check_file(&path).complete);
        fs::remove_file(&path).unwrap();
        assert!(!check_file(&path).complete);
    }
}
