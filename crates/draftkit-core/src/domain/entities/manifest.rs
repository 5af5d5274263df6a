//! Manifest sets and what the rule engine says about them.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Ordered paths believed to be deployment manifests.
///
/// Order is the discovery order and is never re-sorted; it becomes the
/// default order of reported findings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestSet {
    root: PathBuf,
    paths: Vec<PathBuf>,
}

impl ManifestSet {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            paths: Vec::new(),
        }
    }

    /// Set containing exactly one file, rooted at that file.
    pub fn single(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            root: path.clone(),
            paths: vec![path],
        }
    }

    pub fn push(&mut self, path: impl Into<PathBuf>) {
        self.paths.push(path.into());
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter().map(PathBuf::as_path)
    }
}

/// One rule finding against one manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub path: PathBuf,
    pub rule: String,
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: [{}] {}", self.path.display(), self.rule, self.message)
    }
}

/// Summary of a passing validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub manifests_checked: usize,
    pub documents_checked: usize,
}

/// A failed validation run, exactly as the rule engine reported it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationFailure {
    pub message: String,
    pub violations: Vec<Violation>,
}

impl ValidationFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            violations: Vec::new(),
        }
    }

    pub fn with_violations(message: impl Into<String>, violations: Vec<Violation>) -> Self {
        Self {
            message: message.into(),
            violations,
        }
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        for v in &self.violations {
            write!(f, "\n  {v}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationFailure {}
