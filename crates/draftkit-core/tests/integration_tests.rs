//! Integration tests for draftkit-core, wired to the real adapters.

use std::fs;
use std::path::Path;

use draftkit_adapters::{
    ExtensionClassifier, LocalFilesystem, ManifestRuleEngine, MarkerSignalProbe, MemoryFilesystem,
    ProfileCatalog,
};
use draftkit_core::{
    application::ApplicationError,
    domain::{GO_MODULE_VARIANT_SIGNAL, ProfileSource},
    prelude::*,
};
use tempfile::TempDir;

fn resolver(probe: MarkerSignalProbe) -> ResolveService {
    ResolveService::new(
        Box::new(ExtensionClassifier::new()),
        Box::new(ProfileCatalog::new()),
        Box::new(probe),
    )
}

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

// ── Resolution ───────────────────────────────────────────────────────────────

#[test]
fn go_module_without_operator_flag_resolves_to_go() {
    let proj = TempDir::new().unwrap();
    write(proj.path(), "main.go", "package main\n\nfunc main() {}\n");
    write(proj.path(), "go.mod", "module example.com/proj\n");

    let resolved = resolver(MarkerSignalProbe::new())
        .resolve(proj.path(), None)
        .unwrap();

    assert_eq!(resolved.identifier.as_str(), "go");
    assert_eq!(resolved.profile.id.as_str(), "go");
}

#[test]
fn go_module_with_operator_flag_resolves_to_gomodule() {
    let proj = TempDir::new().unwrap();
    write(proj.path(), "main.go", "package main\n");
    write(proj.path(), "go.mod", "module example.com/proj\n");

    let probe = MarkerSignalProbe::new().with_declared([GO_MODULE_VARIANT_SIGNAL]);
    let resolved = resolver(probe).resolve(proj.path(), None).unwrap();

    assert_eq!(resolved.identifier.as_str(), "gomodule");
}

#[test]
fn typescript_is_aliased_to_javascript() {
    let proj = TempDir::new().unwrap();
    write(proj.path(), "src/index.ts", "export const x = 1;\n");

    let resolved = resolver(MarkerSignalProbe::new())
        .resolve(proj.path(), None)
        .unwrap();

    assert_eq!(resolved.identifier.as_str(), "javascript");
}

#[test]
fn unsupported_leader_falls_back_to_next_candidate() {
    let proj = TempDir::new().unwrap();
    write(proj.path(), "lib.c", &"x".repeat(500));
    write(proj.path(), "tool.py", &"x".repeat(100));

    let resolved = resolver(MarkerSignalProbe::new())
        .resolve(proj.path(), None)
        .unwrap();

    assert_eq!(resolved.identifier.as_str(), "python");
}

#[test]
fn empty_project_detects_nothing() {
    let proj = TempDir::new().unwrap();
    write(proj.path(), "README.md", "# nothing to see\n");

    let err = resolver(MarkerSignalProbe::new())
        .resolve(proj.path(), None)
        .unwrap_err();

    assert!(matches!(
        err,
        DraftError::Application(ApplicationError::NoLanguageDetected { .. })
    ));
}

#[test]
fn override_uses_local_profile_and_skips_detection() {
    let proj = TempDir::new().unwrap();
    write(proj.path(), "main.go", "package main\n");
    write(
        proj.path(),
        ".draftkit/profiles/elixir/profile.toml",
        "[profile]\nname = \"Elixir\"\n",
    );

    let resolved = resolver(MarkerSignalProbe::new())
        .resolve(proj.path(), Some("Elixir"))
        .unwrap();

    assert_eq!(resolved.identifier.as_str(), "elixir");
    assert!(matches!(resolved.profile.source, ProfileSource::Local(_)));
}

#[test]
fn unknown_override_is_not_detected() {
    let proj = TempDir::new().unwrap();
    write(proj.path(), "main.go", "package main\n");

    let err = resolver(MarkerSignalProbe::new())
        .resolve(proj.path(), Some("cobol"))
        .unwrap_err();

    assert!(matches!(
        err,
        DraftError::Application(ApplicationError::NoLanguageDetected { .. })
    ));
}

#[test]
fn supported_languages_include_local_profiles() {
    let proj = TempDir::new().unwrap();
    write(
        proj.path(),
        ".draftkit/profiles/zig/profile.toml",
        "[profile]\nname = \"Zig\"\n",
    );

    let langs = resolver(MarkerSignalProbe::new())
        .supported_languages(proj.path())
        .unwrap();
    let ids: Vec<&str> = langs.iter().map(LanguageId::as_str).collect();

    assert!(ids.contains(&"go"));
    assert!(ids.contains(&"zig"));
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
}

// ── Validation ───────────────────────────────────────────────────────────────

const PINNED: &str = "kind: Pod\nmetadata: {name: ok}\nspec:\n  containers:\n    - name: c\n      image: alpine:3.20\n      resources: {limits: {cpu: 10m}}\n";
const LATEST: &str = "kind: Pod\nmetadata: {name: bad}\nspec:\n  containers:\n    - name: c\n      image: alpine:latest\n      resources: {limits: {cpu: 10m}}\n";

#[test]
fn validates_a_directory_on_disk() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "base/pod.yaml", PINNED);
    write(dir.path(), "overlays/prod/pod.yaml", PINNED);

    let service = ValidationService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(ManifestRuleEngine::new()),
    );
    let report = service.run(dir.path()).unwrap();

    assert_eq!(report.manifests_checked, 2);
}

#[test]
fn failing_directory_reports_engine_findings() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "a.yaml", PINNED);
    write(dir.path(), "b.yaml", LATEST);

    let service = ValidationService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(ManifestRuleEngine::new()),
    );
    let err = service.run(dir.path()).unwrap_err();

    let failure = err.as_validation_failure().unwrap();
    assert_eq!(failure.violations.len(), 1);
    assert_eq!(failure.violations[0].path, dir.path().join("b.yaml"));
    assert!(err.to_string().contains("no-latest-tag"));
}

#[test]
fn single_file_is_validated_in_memory() {
    let fs = MemoryFilesystem::new().with_file("deploy/pod.yaml", LATEST);
    let service = ValidationService::new(Box::new(fs), Box::new(ManifestRuleEngine::new()));

    assert!(service.run("deploy/pod.yaml").is_err());
}

#[test]
fn missing_manifest_path_is_a_path_error() {
    let dir = TempDir::new().unwrap();
    let service = ValidationService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(ManifestRuleEngine::new()),
    );

    let err = service.run(dir.path().join("missing")).unwrap_err();
    assert!(matches!(
        err,
        DraftError::Application(ApplicationError::PathError { .. })
    ));
}
