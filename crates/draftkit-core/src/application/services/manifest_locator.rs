//! Manifest discovery.
//!
//! Walks a subtree and collects every non-directory entry in walk order.
//! The walk is all-or-nothing: the first error discards everything found so
//! far.

use std::path::Path;

use tracing::{debug, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::ManifestSet,
    error::DraftResult,
};

/// Collect candidate manifests under `root`.
#[instrument(skip_all, fields(root = %root.display()))]
pub fn locate_manifests(fs: &dyn Filesystem, root: &Path) -> DraftResult<ManifestSet> {
    let mut manifests = ManifestSet::new(root);

    for entry in fs.walk(root) {
        let entry = entry.map_err(|e| {
            ApplicationError::path_error("walk directory", e.path, e.source)
        })?;

        if entry.kind.is_dir() {
            debug!(path = %entry.path.display(), "directory, skipping");
            continue;
        }

        debug!(path = %entry.path.display(), "appending to manifests");
        manifests.push(entry.path);
    }

    debug!(count = manifests.len(), "manifests located");
    Ok(manifests)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ApplicationError;
    use crate::application::services::test_support::FakeFilesystem;
    use crate::error::DraftError;
    use std::path::PathBuf;

    #[test]
    fn returns_only_files_in_walk_order() {
        let fs = FakeFilesystem::new()
            .dir("k8s")
            .dir("k8s/base")
            .file("k8s/base/deployment.yaml")
            .file("k8s/base/service.yaml")
            .dir("k8s/overlays")
            .file("k8s/overlays/prod.yaml")
            .file("k8s/z.yaml");

        let set = locate_manifests(&fs, Path::new("k8s")).unwrap();

        assert_eq!(
            set.paths(),
            &[
                PathBuf::from("k8s/base/deployment.yaml"),
                PathBuf::from("k8s/base/service.yaml"),
                PathBuf::from("k8s/overlays/prod.yaml"),
                PathBuf::from("k8s/z.yaml"),
            ]
        );
        assert_eq!(set.root(), Path::new("k8s"));
    }

    #[test]
    fn empty_directory_yields_empty_set() {
        let fs = FakeFilesystem::new().dir("empty");
        let set = locate_manifests(&fs, Path::new("empty")).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn repeated_walks_are_stable() {
        let fs = FakeFilesystem::new()
            .dir("m")
            .file("m/a.yaml")
            .dir("m/sub")
            .file("m/sub/b.yaml");

        let first = locate_manifests(&fs, Path::new("m")).unwrap();
        let second = locate_manifests(&fs, Path::new("m")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn walk_error_discards_partial_results() {
        let fs = FakeFilesystem::new()
            .dir("m")
            .file("m/a.yaml")
            .denied("m/locked")
            .file("m/z.yaml");

        let err = locate_manifests(&fs, Path::new("m")).unwrap_err();
        match err {
            DraftError::Application(ApplicationError::PathError { path, operation, .. }) => {
                assert_eq!(path, PathBuf::from("m/locked"));
                assert_eq!(operation, "walk directory");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
