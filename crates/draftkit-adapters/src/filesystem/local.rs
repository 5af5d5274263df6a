//! Local filesystem adapter using std::fs and walkdir.

use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use draftkit_core::{
    application::ports::{Filesystem, Walk, WalkEntry, WalkError},
    domain::PathKind,
};

/// Production filesystem implementation.
///
/// Walks are depth-first with the entries of each directory sorted by file
/// name, so the same tree always yields the same order.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn classify(&self, path: &Path) -> io::Result<PathKind> {
        let metadata = std::fs::metadata(path)?;
        Ok(if metadata.is_dir() {
            PathKind::Directory
        } else {
            PathKind::File
        })
    }

    fn walk(&self, root: &Path) -> Walk {
        let root = root.to_path_buf();
        let walker = WalkDir::new(&root).sort_by_file_name().into_iter();

        Box::new(walker.map(move |entry| match entry {
            Ok(entry) => {
                let kind = if entry.file_type().is_dir() {
                    PathKind::Directory
                } else {
                    PathKind::File
                };
                Ok(WalkEntry {
                    path: entry.into_path(),
                    kind,
                })
            }
            Err(e) => Err(map_walk_error(&root, e)),
        }))
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

fn map_walk_error(root: &Path, e: walkdir::Error) -> WalkError {
    let path = e
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(root));
    WalkError {
        path,
        source: io::Error::from(e),
    }
}
