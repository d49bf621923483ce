use crate::domain::{FileEntry, Mode};
use crate::error::BrowseError;
use std::fs::{self, Metadata};
use std::io;
use std::path::{Path, PathBuf};

pub trait FileSystem {
    fn list_children(&self, path: &Path) -> Result<Vec<FileEntry>, BrowseError>;
    fn resolve_home_directory(&self) -> Option<PathBuf>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl FileSystem for LocalFileSystem {
    fn list_children(&self, path: &Path) -> Result<Vec<FileEntry>, BrowseError> {
        let read_dir = fs::read_dir(path).map_err(|err| BrowseError::read_failure(path, err))?;

        let mut entries = Vec::new();
        for dir_entry in read_dir {
            let dir_entry = dir_entry.map_err(|err| BrowseError::read_failure(path, err))?;
            let child = dir_entry.path();
            match entry_from_path(&child) {
                Ok(entry) => entries.push(entry),
                // Removed between enumeration and stat.
                Err(err) if err.kind() == io::ErrorKind::NotFound => continue,
                Err(err) => return Err(BrowseError::read_failure(child, err)),
            }
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn resolve_home_directory(&self) -> Option<PathBuf> {
        dirs::home_dir().filter(|home| !home.as_os_str().is_empty())
    }
}

fn entry_from_path(path: &Path) -> io::Result<FileEntry> {
    let link_meta = fs::symlink_metadata(path)?;
    let is_symlink = link_meta.file_type().is_symlink();
    let meta = if is_symlink {
        // A dangling link is still listed, as a plain file.
        fs::metadata(path).unwrap_or(link_meta)
    } else {
        link_meta
    };

    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let is_dir = meta.is_dir();

    Ok(FileEntry {
        name,
        is_dir,
        is_symlink,
        size_bytes: if is_dir { 0 } else { meta.len() },
        modified_at: meta.modified().ok(),
        mode: mode_of(&meta),
    })
}

#[cfg(unix)]
fn mode_of(meta: &Metadata) -> Mode {
    use std::os::unix::fs::PermissionsExt;
    Mode::from_bits(meta.permissions().mode())
}

#[cfg(not(unix))]
fn mode_of(meta: &Metadata) -> Mode {
    let base = if meta.is_dir() { 0o755 } else { 0o644 };
    if meta.permissions().readonly() {
        Mode::from_bits(base & !0o222)
    } else {
        Mode::from_bits(base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn children_are_sorted_by_name() {
        let temp = tempfile::tempdir().expect("tempdir");
        for name in ["zeta", "alpha", "Mid"] {
            fs::write(temp.path().join(name), "").expect("write");
        }

        let names: Vec<String> = LocalFileSystem
            .list_children(temp.path())
            .expect("list")
            .into_iter()
            .map(|entry| entry.name)
            .collect();
        assert_eq!(names, vec!["Mid", "alpha", "zeta"]);
    }

    #[cfg(unix)]
    #[test]
    fn symlink_to_directory_counts_as_directory() {
        let temp = tempfile::tempdir().expect("tempdir");
        let target = temp.path().join("target");
        fs::create_dir(&target).expect("create target");
        std::os::unix::fs::symlink(&target, temp.path().join("link")).expect("symlink");
        std::os::unix::fs::symlink(temp.path().join("nowhere"), temp.path().join("broken"))
            .expect("dangling symlink");

        let entries = LocalFileSystem.list_children(temp.path()).expect("list");
        let link = entries.iter().find(|e| e.name == "link").expect("link");
        assert!(link.is_dir);
        assert!(link.is_symlink);

        let broken = entries.iter().find(|e| e.name == "broken").expect("broken");
        assert!(!broken.is_dir);
        assert!(broken.is_symlink);
    }

    #[cfg(unix)]
    #[test]
    fn mode_carries_permission_bits() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempfile::tempdir().expect("tempdir");
        let file = temp.path().join("script.sh");
        fs::write(&file, "#!/bin/sh").expect("write");
        fs::set_permissions(&file, fs::Permissions::from_mode(0o750)).expect("chmod");

        let entries = LocalFileSystem.list_children(temp.path()).expect("list");
        assert_eq!(entries[0].mode, Mode::from_bits(0o750));
    }

    #[test]
    fn missing_directory_reports_the_requested_path() {
        let temp = tempfile::tempdir().expect("tempdir");
        let missing = temp.path().join("gone");
        match LocalFileSystem.list_children(&missing) {
            Err(BrowseError::ReadFailure { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected read failure, got {other:?}"),
        }
    }
}
