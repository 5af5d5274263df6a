//! In-memory filesystem adapter for testing.

use std::{
    collections::BTreeMap,
    io,
    path::{Path, PathBuf},
    sync::{Arc, PoisonError, RwLock},
};

use draftkit_core::{
    application::ports::{Filesystem, Walk, WalkEntry, WalkError},
    domain::PathKind,
};

#[derive(Debug, Clone)]
enum Node {
    File(String),
    Directory,
    /// Present but unreadable; walks fail when they reach it.
    Denied,
}

/// In-memory filesystem for testing.
///
/// Paths are kept in a `BTreeMap`, whose component-wise ordering is exactly
/// the depth-first, name-sorted order that [`Filesystem::walk`] promises.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<BTreeMap<PathBuf, Node>>>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, creating its parent directories.
    pub fn with_file(self, path: impl AsRef<Path>, content: impl Into<String>) -> Self {
        self.add_file(path, content);
        self
    }

    /// Add a directory and its parents.
    pub fn with_dir(self, path: impl AsRef<Path>) -> Self {
        self.add_dir(path);
        self
    }

    /// Add an entry that cannot be read.
    pub fn with_denied(self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            self.add_dir(parent);
        }
        self.write().insert(path.to_path_buf(), Node::Denied);
        self
    }

    pub fn add_file(&self, path: impl AsRef<Path>, content: impl Into<String>) {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            self.add_dir(parent);
        }
        self.write()
            .insert(path.to_path_buf(), Node::File(content.into()));
    }

    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let mut inner = self.write();
        let mut current = PathBuf::new();
        for component in path.as_ref().components() {
            current.push(component);
            inner.entry(current.clone()).or_insert(Node::Directory);
        }
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.read()
            .iter()
            .filter(|(_, node)| matches!(node, Node::File(_)))
            .map(|(path, _)| path.clone())
            .collect()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, BTreeMap<PathBuf, Node>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, BTreeMap<PathBuf, Node>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Filesystem for MemoryFilesystem {
    fn classify(&self, path: &Path) -> io::Result<PathKind> {
        match self.read().get(path) {
            Some(Node::File(_)) => Ok(PathKind::File),
            Some(Node::Directory) => Ok(PathKind::Directory),
            Some(Node::Denied) => Err(io::Error::from(io::ErrorKind::PermissionDenied)),
            None => Err(io::Error::from(io::ErrorKind::NotFound)),
        }
    }

    fn walk(&self, root: &Path) -> Walk {
        let inner = self.read();

        if !inner.contains_key(root) {
            let missing = WalkError {
                path: root.to_path_buf(),
                source: io::Error::from(io::ErrorKind::NotFound),
            };
            return Box::new(std::iter::once(Err(missing)));
        }

        let entries: Vec<Result<WalkEntry, WalkError>> = inner
            .range(root.to_path_buf()..)
            .take_while(|(path, _)| path.starts_with(root))
            .map(|(path, node)| match node {
                Node::File(_) => Ok(WalkEntry::file(path)),
                Node::Directory => Ok(WalkEntry::dir(path)),
                Node::Denied => Err(WalkError {
                    path: path.clone(),
                    source: io::Error::from(io::ErrorKind::PermissionDenied),
                }),
            })
            .collect();

        Box::new(entries.into_iter())
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        match self.read().get(path) {
            Some(Node::File(content)) => Ok(content.clone()),
            Some(Node::Directory) => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "is a directory",
            )),
            Some(Node::Denied) => Err(io::Error::from(io::ErrorKind::PermissionDenied)),
            None => Err(io::Error::from(io::ErrorKind::NotFound)),
        }
    }
}
