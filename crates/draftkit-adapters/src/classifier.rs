//! Extension-based source language classifier.
//!
//! Walks a project tree and weighs each language by the bytes of source found
//! in files with a recognised extension. Hidden directories and common
//! dependency/build output directories are skipped.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, instrument, trace};
use walkdir::{DirEntry, WalkDir};

use draftkit_core::{
    application::{ApplicationError, ports::LanguageClassifier},
    domain::DetectedLanguage,
    error::DraftResult,
};

// ── Language table ───────────────────────────────────────────────────────────

/// `(extension, language name, color)`. Names follow linguist conventions so
/// that the alias table can canonicalize them.
const LANGUAGES: &[(&str, &str, &str)] = &[
    ("c", "C", "#555555"),
    ("h", "C", "#555555"),
    ("cc", "C++", "#f34b7d"),
    ("cpp", "C++", "#f34b7d"),
    ("hpp", "C++", "#f34b7d"),
    ("clj", "Clojure", "#db5855"),
    ("cljs", "Clojure", "#db5855"),
    ("cljc", "Clojure", "#db5855"),
    ("cs", "C#", "#178600"),
    ("erl", "Erlang", "#B83998"),
    ("hrl", "Erlang", "#B83998"),
    ("fs", "F#", "#b845fc"),
    ("go", "Go", "#00ADD8"),
    ("groovy", "Groovy", "#4298b8"),
    ("gradle", "Groovy", "#4298b8"),
    ("java", "Java", "#b07219"),
    ("jsp", "Java Server Pages", "#2A6277"),
    ("js", "JavaScript", "#f1e05a"),
    ("mjs", "JavaScript", "#f1e05a"),
    ("cjs", "JavaScript", "#f1e05a"),
    ("jsx", "JavaScript", "#f1e05a"),
    ("ipynb", "Jupyter Notebook", "#DA5B0B"),
    ("kt", "Kotlin", "#A97BFF"),
    ("kts", "Kotlin", "#A97BFF"),
    ("php", "PHP", "#4F5D95"),
    ("py", "Python", "#3572A5"),
    ("rb", "Ruby", "#701516"),
    ("erb", "Ruby", "#701516"),
    ("rs", "Rust", "#dea584"),
    ("swift", "Swift", "#F05138"),
    ("ts", "TypeScript", "#3178c6"),
    ("tsx", "TSX", "#3178c6"),
    ("vue", "Vue", "#41b883"),
];

/// Directory names never descended into.
const SKIPPED_DIRS: &[&str] = &[
    "node_modules",
    "vendor",
    "target",
    "dist",
    "build",
    "__pycache__",
];

fn lookup(extension: &str) -> Option<(&'static str, &'static str)> {
    let extension = extension.to_ascii_lowercase();
    LANGUAGES
        .iter()
        .find(|(ext, _, _)| *ext == extension)
        .map(|(_, name, color)| (*name, *color))
}

fn is_skipped(entry: &DirEntry) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || SKIPPED_DIRS.contains(&name.as_ref())
}

// ── Classifier ───────────────────────────────────────────────────────────────

/// [`LanguageClassifier`] that ranks languages by bytes per file extension.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtensionClassifier;

impl ExtensionClassifier {
    pub fn new() -> Self {
        Self
    }
}

impl LanguageClassifier for ExtensionClassifier {
    #[instrument(skip(self), fields(dir = %dir.display()))]
    fn process_dir(&self, dir: &Path) -> DraftResult<Vec<DetectedLanguage>> {
        let mut bytes: BTreeMap<&'static str, (u64, &'static str)> = BTreeMap::new();
        let mut total: u64 = 0;

        let walker = WalkDir::new(dir)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !is_skipped(e));

        for entry in walker {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(dir).to_path_buf();
                ApplicationError::path_error("walk directory", path, e)
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            let Some((name, color)) = entry
                .path()
                .extension()
                .and_then(|ext| ext.to_str())
                .and_then(lookup)
            else {
                continue;
            };

            let size = entry
                .metadata()
                .map_err(|e| ApplicationError::path_error("read metadata of", entry.path(), e))?
                .len();

            trace!(path = %entry.path().display(), language = name, size, "counted");
            let slot = bytes.entry(name).or_insert((0, color));
            slot.0 += size;
            total += size;
        }

        if total == 0 {
            debug!("no recognised source files");
            return Ok(Vec::new());
        }

        let mut detected: Vec<DetectedLanguage> = bytes
            .into_iter()
            .filter(|(_, (size, _))| *size > 0)
            .map(|(name, (size, color))| {
                let percent = size as f64 * 100.0 / total as f64;
                DetectedLanguage::new(name, percent, color)
            })
            .collect();

        detected.sort_by(|a, b| {
            b.percent
                .total_cmp(&a.percent)
                .then_with(|| a.name.cmp(&b.name))
        });

        debug!(count = detected.len(), "classified");
        Ok(detected)
    }
}
