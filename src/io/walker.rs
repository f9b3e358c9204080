use crate::decode::PROJECT_EXT;
use anyhow::Result;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Name of the directory Live uses for automatic set backups. Any path
/// with a directory component exactly equal to this is excluded from
/// discovery; the match is case-sensitive and whole-segment only, so
/// `BackupX/` is not excluded.
const BACKUP_DIR: &str = "Backup";

/// Recursive project-file discovery under a root directory.
pub struct ProjectWalker {
    root: PathBuf,
}

impl ProjectWalker {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Collect every project file under the root, sorted by path so
    /// discovery order is stable across runs.
    pub fn walk(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(&self.root).sort_by_file_name() {
            let entry = entry?;
            let path = entry.path();
            if entry.file_type().is_file() && should_process(path) {
                files.push(path.to_path_buf());
            }
        }
        Ok(files)
    }
}

pub fn find_project_files(root: &Path) -> Result<Vec<PathBuf>> {
    ProjectWalker::new(root.to_path_buf()).walk()
}

fn should_process(path: &Path) -> bool {
    has_project_extension(path) && !in_backup_dir(path)
}

fn has_project_extension(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == PROJECT_EXT)
}

fn in_backup_dir(path: &Path) -> bool {
    path.parent()
        .map(|parent| {
            parent
                .components()
                .any(|component| component.as_os_str() == OsStr::new(BACKUP_DIR))
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn backup_segment_is_excluded_exactly() {
        assert!(in_backup_dir(Path::new("sets/Backup/foo.als")));
        assert!(!in_backup_dir(Path::new("sets/BackupX/foo.als")));
        assert!(!in_backup_dir(Path::new("sets/backup/foo.als")));
        assert!(!in_backup_dir(Path::new("sets/MyBackup/foo.als")));
        assert!(!in_backup_dir(Path::new("foo.als")));
    }

    #[test]
    fn only_project_extension_is_processed() {
        assert!(should_process(Path::new("sets/foo.als")));
        assert!(!should_process(Path::new("sets/foo.xml")));
        assert!(!should_process(Path::new("sets/foo")));
        assert!(!should_process(Path::new("sets/Backup/foo.als")));
    }

    #[test]
    fn walk_finds_nested_projects_and_skips_backups() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("album/Backup")).unwrap();
        fs::create_dir_all(dir.path().join("album/BackupX")).unwrap();
        fs::write(dir.path().join("top.als"), b"x").unwrap();
        fs::write(dir.path().join("album/track.als"), b"x").unwrap();
        fs::write(dir.path().join("album/Backup/track.als"), b"x").unwrap();
        fs::write(dir.path().join("album/BackupX/track.als"), b"x").unwrap();
        fs::write(dir.path().join("album/notes.txt"), b"x").unwrap();

        let found = find_project_files(dir.path()).unwrap();
        assert_eq!(found.len(), 3);
        assert!(found.contains(&dir.path().join("top.als")));
        assert!(found.contains(&dir.path().join("album/track.als")));
        assert!(found.contains(&dir.path().join("album/BackupX/track.als")));
        assert!(!found.iter().any(|p| p.starts_with(dir.path().join("album/Backup"))));
    }

    #[test]
    fn walk_order_is_stable() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.als"), b"x").unwrap();
        fs::write(dir.path().join("a.als"), b"x").unwrap();
        let first = find_project_files(dir.path()).unwrap();
        let second = find_project_files(dir.path()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first[0].file_name(), Some(OsStr::new("a.als")));
    }
}
