//! Filesystem collaborators
//!
//! Discovery only needs to list a directory and check entry types; execution
//! only needs three kinds of removal. Both are traits so runs can be driven
//! against an in-memory `MemoryTree` (feature `testing`) instead of the
//! local disk.

#[cfg(any(test, feature = "testing"))]
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

/// Read side: immediate children and type checks
pub trait DirLister {
    /// Immediate children of `dir` as full paths, sorted
    fn list(&self, dir: &Path) -> io::Result<Vec<PathBuf>>;

    fn is_dir(&self, path: &Path) -> bool;

    fn is_file(&self, path: &Path) -> bool;
}

/// Write side: the removals the executor performs
pub trait Remover {
    /// Remove a directory and everything below it
    fn remove_tree(&mut self, path: &Path) -> io::Result<()>;

    fn remove_file(&mut self, path: &Path) -> io::Result<()>;

    /// Remove a directory only if it is empty
    fn remove_empty_dir(&mut self, path: &Path) -> io::Result<()>;
}

/// The local filesystem
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFs;

impl DirLister for LocalFs {
    fn list(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        let mut children = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            children.push(entry?.path());
        }
        children.sort();
        Ok(children)
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}

impl Remover for LocalFs {
    fn remove_tree(&mut self, path: &Path) -> io::Result<()> {
        std::fs::remove_dir_all(path)
    }

    fn remove_file(&mut self, path: &Path) -> io::Result<()> {
        std::fs::remove_file(path)
    }

    fn remove_empty_dir(&mut self, path: &Path) -> io::Result<()> {
        std::fs::remove_dir(path)
    }
}

#[cfg(any(test, feature = "testing"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    Dir,
    File,
}

/// In-memory directory tree for tests, behind the `testing` feature
///
/// Parents are created implicitly. Paths registered with
/// [`MemoryTree::fail_removal`] reject every removal with `PermissionDenied`.
#[cfg(any(test, feature = "testing"))]
#[derive(Debug, Default, Clone)]
pub struct MemoryTree {
    entries: BTreeMap<PathBuf, EntryKind>,
    failing: BTreeSet<PathBuf>,
    removals: Vec<PathBuf>,
}

#[cfg(any(test, feature = "testing"))]
impl MemoryTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_dir(&mut self, path: impl AsRef<Path>) -> &mut Self {
        self.insert(path.as_ref(), EntryKind::Dir);
        self
    }

    pub fn add_file(&mut self, path: impl AsRef<Path>) -> &mut Self {
        self.insert(path.as_ref(), EntryKind::File);
        self
    }

    pub fn fail_removal(&mut self, path: impl AsRef<Path>) -> &mut Self {
        self.failing.insert(path.as_ref().to_path_buf());
        self
    }

    pub fn exists(&self, path: impl AsRef<Path>) -> bool {
        self.entries.contains_key(path.as_ref())
    }

    /// Every path a removal was attempted on, in call order
    pub fn removals(&self) -> &[PathBuf] {
        &self.removals
    }

    fn insert(&mut self, path: &Path, kind: EntryKind) {
        for ancestor in path.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            self.entries
                .entry(ancestor.to_path_buf())
                .or_insert(EntryKind::Dir);
        }
        self.entries.insert(path.to_path_buf(), kind);
    }

    fn children(&self, dir: &Path) -> Vec<PathBuf> {
        self.entries
            .keys()
            .filter(|path| path.parent() == Some(dir))
            .cloned()
            .collect()
    }

    fn begin_removal(&mut self, path: &Path, expected: EntryKind) -> io::Result<()> {
        self.removals.push(path.to_path_buf());

        if self.failing.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "permission denied",
            ));
        }

        match self.entries.get(path) {
            Some(kind) if *kind == expected => Ok(()),
            Some(_) => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "wrong entry type",
            )),
            None => Err(io::Error::new(io::ErrorKind::NotFound, "no such entry")),
        }
    }
}

#[cfg(any(test, feature = "testing"))]
impl DirLister for MemoryTree {
    fn list(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        if !self.is_dir(dir) {
            return Err(io::Error::new(io::ErrorKind::NotFound, "no such directory"));
        }
        Ok(self.children(dir))
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.entries.get(path) == Some(&EntryKind::Dir)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.entries.get(path) == Some(&EntryKind::File)
    }
}

#[cfg(any(test, feature = "testing"))]
impl Remover for MemoryTree {
    fn remove_tree(&mut self, path: &Path) -> io::Result<()> {
        self.begin_removal(path, EntryKind::Dir)?;
        self.entries
            .retain(|entry, _| !entry.starts_with(path));
        Ok(())
    }

    fn remove_file(&mut self, path: &Path) -> io::Result<()> {
        self.begin_removal(path, EntryKind::File)?;
        self.entries.remove(path);
        Ok(())
    }

    fn remove_empty_dir(&mut self, path: &Path) -> io::Result<()> {
        self.begin_removal(path, EntryKind::Dir)?;
        if !self.children(path).is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                "directory not empty",
            ));
        }
        self.entries.remove(path);
        Ok(())
    }
}
