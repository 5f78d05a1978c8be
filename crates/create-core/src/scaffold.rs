//! Scaffold request assembly and destination preparation

use crate::error::ScaffoldError;
use crate::templates::TemplateId;
use std::path::{Path, PathBuf};

/// A fully resolved scaffold request.
///
/// Built step by step by the prompt flow, one value per step; immutable once
/// the copy step begins.
#[derive(Debug, Clone)]
pub struct ScaffoldRequest {
    pub project_name: String,
    pub template: TemplateId,
    pub destination: PathBuf,
}

/// Validate a candidate project name.
///
/// Accepts ASCII letters, digits, `-` and `_`; rejects everything else,
/// including the empty string. Applied identically to positional arguments
/// and interactive input.
pub fn validate_project_name(name: &str) -> Result<(), ScaffoldError> {
    if name.is_empty() {
        return Err(ScaffoldError::Validation(
            "project name is required".to_string(),
        ));
    }
    let valid = name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !valid {
        return Err(ScaffoldError::Validation(format!(
            "'{name}' may only contain letters, digits, '-' and '_'"
        )));
    }
    Ok(())
}

/// Join the project name onto the working directory. Pure, no I/O.
pub fn resolve_destination(project_name: &str, cwd: &Path) -> PathBuf {
    cwd.join(project_name)
}

/// Make sure the destination is safe to write into.
///
/// An existing path is only removed after `confirm` returns true; a decline
/// leaves the filesystem untouched and cancels the run. The removal must
/// complete before any new content is written so stale and fresh files never
/// interleave.
pub fn prepare_destination<F>(path: &Path, confirm: F) -> Result<(), ScaffoldError>
where
    F: FnOnce() -> Result<bool, ScaffoldError>,
{
    if !path.exists() {
        return Ok(());
    }

    if !confirm()? {
        return Err(ScaffoldError::Cancelled);
    }

    if path.is_dir() {
        std::fs::remove_dir_all(path)?;
    } else {
        std::fs::remove_file(path)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn valid_names_accepted_unchanged() {
        for name in ["demo-app", "my_app", "App2", "a", "XYZ-9_x", "my-float-app"] {
            assert!(validate_project_name(name).is_ok(), "rejected {name}");
        }
    }

    #[test]
    fn invalid_names_rejected() {
        for name in ["", "my app", "app!", "a/b", "app.name", "naïve", "café"] {
            assert!(
                matches!(
                    validate_project_name(name),
                    Err(ScaffoldError::Validation(_))
                ),
                "accepted {name:?}"
            );
        }
    }

    #[test]
    fn destination_joins_cwd_and_name() {
        let dest = resolve_destination("my-app", Path::new("/home/u"));
        assert_eq!(dest, PathBuf::from("/home/u/my-app"));
    }

    #[test]
    fn missing_destination_skips_confirmation() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("fresh");

        let asked = Cell::new(false);
        prepare_destination(&target, || {
            asked.set(true);
            Ok(true)
        })
        .unwrap();

        assert!(!asked.get());
    }

    #[test]
    fn declined_overwrite_cancels_without_mutation() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("existing");
        std::fs::create_dir(&target).unwrap();
        std::fs::write(target.join("keep.txt"), "data").unwrap();

        let err = prepare_destination(&target, || Ok(false)).unwrap_err();

        assert!(matches!(err, ScaffoldError::Cancelled));
        assert_eq!(
            std::fs::read_to_string(target.join("keep.txt")).unwrap(),
            "data"
        );
    }

    #[test]
    fn confirmed_overwrite_removes_tree() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("existing");
        std::fs::create_dir_all(target.join("nested")).unwrap();
        std::fs::write(target.join("nested/old.txt"), "stale").unwrap();

        prepare_destination(&target, || Ok(true)).unwrap();

        assert!(!target.exists());
    }

    #[test]
    fn confirmed_overwrite_removes_plain_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("existing");
        std::fs::write(&target, "not a directory").unwrap();

        prepare_destination(&target, || Ok(true)).unwrap();

        assert!(!target.exists());
    }
}
