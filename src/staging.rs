//! Scratch-area management.
//!
//! One pipeline run owns one scratch directory. Projects are copied in,
//! decoded in place, and the directory is optionally cleared at the end
//! of the run. The directory path is always passed explicitly; no module
//! holds it as hidden state.

use crate::errors::PlugstatsError;
use std::fs;
use std::path::{Path, PathBuf};

/// Files successfully copied into the scratch directory, plus the
/// per-file failures encountered along the way.
#[derive(Debug, Default)]
pub struct StageOutcome {
    pub staged: Vec<PathBuf>,
    pub failures: Vec<PlugstatsError>,
}

/// Ensure the scratch directory exists. Idempotent.
///
/// Failure here is fatal: without a scratch area no file work can start.
pub fn prepare(working_dir: &Path) -> Result<(), PlugstatsError> {
    fs::create_dir_all(working_dir).map_err(|source| PlugstatsError::Setup {
        path: working_dir.to_path_buf(),
        source,
    })
}

/// Copy each source project into the scratch directory, preserving the
/// file name. An empty source list is a no-op.
///
/// An unreadable source becomes a [`PlugstatsError::Staging`] in the
/// outcome; the remaining sources are still staged (skip-and-continue).
pub fn stage(sources: &[PathBuf], working_dir: &Path) -> StageOutcome {
    let mut outcome = StageOutcome::default();

    for source in sources {
        match stage_file(source, working_dir) {
            Ok(dest) => {
                log::debug!("staged {} -> {}", source.display(), dest.display());
                outcome.staged.push(dest);
            }
            Err(err) => {
                log::warn!("{err}");
                outcome.failures.push(err);
            }
        }
    }

    outcome
}

fn stage_file(source: &Path, working_dir: &Path) -> Result<PathBuf, PlugstatsError> {
    let file_name = source
        .file_name()
        .ok_or_else(|| PlugstatsError::Staging {
            path: source.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "path has no file name"),
        })?;
    let dest = working_dir.join(file_name);

    fs::copy(source, &dest).map_err(|source_err| PlugstatsError::Staging {
        path: source.to_path_buf(),
        source: source_err,
    })?;

    Ok(dest)
}

/// Remove every entry inside `dir` without removing `dir` itself.
///
/// A directory that no longer exists is treated as already clear.
pub fn clear(dir: &Path) -> std::io::Result<()> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e),
    };

    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_dir() {
            fs::remove_dir_all(&path)?;
        } else {
            fs::remove_file(&path)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepare_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let working = dir.path().join("temp");
        prepare(&working).unwrap();
        prepare(&working).unwrap();
        assert!(working.is_dir());
    }

    #[test]
    fn stage_copies_preserving_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("set.als");
        fs::write(&source, b"payload").unwrap();
        let working = dir.path().join("temp");
        prepare(&working).unwrap();

        let outcome = stage(&[source], &working);
        assert!(outcome.failures.is_empty());
        assert_eq!(outcome.staged, vec![working.join("set.als")]);
        assert_eq!(fs::read(working.join("set.als")).unwrap(), b"payload");
    }

    #[test]
    fn stage_with_no_sources_is_a_noop() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = stage(&[], dir.path());
        assert!(outcome.staged.is_empty());
        assert!(outcome.failures.is_empty());
    }

    #[test]
    fn unreadable_source_is_skipped_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.als");
        fs::write(&good, b"ok").unwrap();
        let missing = dir.path().join("missing.als");
        let working = dir.path().join("temp");
        prepare(&working).unwrap();

        let outcome = stage(&[missing.clone(), good], &working);
        assert_eq!(outcome.staged.len(), 1);
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].path(), Some(missing.as_path()));
        assert!(!outcome.failures[0].is_fatal());
    }

    #[test]
    fn clear_empties_directory_recursively() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.xml"), b"x").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested/b.gzip"), b"y").unwrap();

        clear(dir.path()).unwrap();
        assert!(dir.path().is_dir());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn clear_on_missing_directory_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let gone = dir.path().join("never-created");
        clear(&gone).unwrap();
    }
}
