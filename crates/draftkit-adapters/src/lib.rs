//! Infrastructure adapters for draftkit.
//!
//! This crate implements the ports defined in `draftkit-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod builtin_profiles;
pub mod classifier;
pub mod filesystem;
pub mod profile_loader;
pub mod profile_store;
pub mod rules;
pub mod signals;

// Re-export commonly used adapters
pub use classifier::ExtensionClassifier;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use profile_store::{InMemoryRegistry, ProfileCatalog};
pub use rules::ManifestRuleEngine;
pub use signals::MarkerSignalProbe;
