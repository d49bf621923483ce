use crate::domain::DirectoryListing;
use crate::error::BrowseError;
use std::path::{Component, Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathCursor {
    current: PathBuf,
    home: Option<PathBuf>,
    initial: PathBuf,
}

impl PathCursor {
    pub fn new(initial: PathBuf, home: Option<PathBuf>) -> Self {
        let initial = normalize(&initial);
        let home = home
            .filter(|home| !home.as_os_str().is_empty())
            .map(|home| normalize(&home));
        Self {
            current: initial.clone(),
            home,
            initial,
        }
    }

    pub fn current(&self) -> &Path {
        &self.current
    }

    pub fn home(&self) -> Option<&Path> {
        self.home.as_deref()
    }

    pub fn initial(&self) -> &Path {
        &self.initial
    }

    pub fn ascend(&mut self) -> bool {
        match self.current.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                self.current = parent.to_path_buf();
                true
            }
            _ => false,
        }
    }

    pub fn descend(&mut self, child: &str, listing: &DirectoryListing) -> bool {
        if listing.source_path() != self.current {
            return false;
        }
        let is_dir = listing.find(child).is_some_and(|entry| entry.is_dir);
        if !is_dir || !is_plain_name(child) {
            return false;
        }
        self.current.push(child);
        true
    }

    pub fn jump_to(&mut self, target: &Path) -> bool {
        if target.as_os_str().is_empty() {
            return false;
        }
        self.current = normalize(target);
        true
    }

    pub fn home_target(&self) -> Result<&Path, BrowseError> {
        self.home().ok_or(BrowseError::UnresolvedPath)
    }

    pub fn jump_initial(&mut self) -> bool {
        let initial = self.initial().to_path_buf();
        self.jump_to(&initial)
    }
}

fn is_plain_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let stacked = matches!(out.components().next_back(), Some(Component::ParentDir));
                if stacked || out.as_os_str().is_empty() {
                    out.push("..");
                } else {
                    out.pop();
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}
