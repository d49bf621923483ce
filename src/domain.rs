use crate::error::BrowseError;
use crate::infra::FileSystem;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mode(u32);

impl Mode {
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits & 0o7777)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String,
    pub is_dir: bool,
    pub is_symlink: bool,
    pub size_bytes: u64,
    pub modified_at: Option<SystemTime>,
    pub mode: Mode,
}

#[cfg(test)]
impl FileEntry {
    pub fn file(name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
            is_symlink: false,
            size_bytes,
            modified_at: None,
            mode: Mode::from_bits(0o644),
        }
    }

    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
            is_symlink: false,
            size_bytes: 0,
            modified_at: None,
            mode: Mode::from_bits(0o755),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryListing {
    source_path: PathBuf,
    entries: Vec<FileEntry>,
}

impl DirectoryListing {
    /// Reads `path` through `fs`. Either every child is captured or an error
    /// is returned; a partially built listing never escapes.
    pub fn load(fs: &dyn FileSystem, path: &Path) -> Result<Self, BrowseError> {
        let entries = fs.list_children(path)?;
        Ok(Self {
            source_path: path.to_path_buf(),
            entries,
        })
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&FileEntry> {
        self.entries.get(index)
    }

    pub fn find(&self, name: &str) -> Option<&FileEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    Ascend,
    Descend,
    JumpHome,
    JumpInitial,
    Resize { width: u16, height: u16 },
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::LocalFileSystem;
    use pretty_assertions::assert_eq;
    use std::fs;

    #[test]
    fn load_captures_every_child_of_the_directory() {
        let temp = tempfile::tempdir().expect("tempdir");
        fs::create_dir(temp.path().join("sub")).expect("create sub");
        fs::write(temp.path().join("a.txt"), "hello").expect("write a.txt");

        let listing = DirectoryListing::load(&LocalFileSystem, temp.path()).expect("load");
        assert_eq!(listing.source_path(), temp.path());
        assert_eq!(listing.len(), 2);

        let file = listing.find("a.txt").expect("a.txt listed");
        assert!(!file.is_dir);
        assert_eq!(file.size_bytes, 5);
        assert!(file.modified_at.is_some());

        let dir = listing.find("sub").expect("sub listed");
        assert!(dir.is_dir);
        assert_eq!(dir.size_bytes, 0);
    }

    #[test]
    fn load_of_missing_directory_is_a_read_failure() {
        let temp = tempfile::tempdir().expect("tempdir");
        let missing = temp.path().join("missing");

        let err = DirectoryListing::load(&LocalFileSystem, &missing).expect_err("must fail");
        assert!(matches!(err, BrowseError::ReadFailure { ref path, .. } if path == &missing));
    }

    #[test]
    fn load_of_regular_file_is_a_read_failure() {
        let temp = tempfile::tempdir().expect("tempdir");
        let file = temp.path().join("plain.txt");
        fs::write(&file, "x").expect("write file");

        let err = DirectoryListing::load(&LocalFileSystem, &file).expect_err("must fail");
        assert!(matches!(err, BrowseError::ReadFailure { .. }));
    }

    #[test]
    fn empty_directory_yields_empty_listing() {
        let temp = tempfile::tempdir().expect("tempdir");
        let listing = DirectoryListing::load(&LocalFileSystem, temp.path()).expect("load");
        assert!(listing.is_empty());
        assert!(listing.get(0).is_none());
    }
}
