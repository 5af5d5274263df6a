// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for draftkit.
//!
//! This module contains pure logic with no I/O. Classifiers, registries,
//! filesystems and rule engines are reached through ports (traits) defined in
//! the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No global state**: alias and variant tables are explicit values
//! - **Immutable entities**: All domain objects are Clone + PartialEq
//!
// Public API - what the world sees
pub mod aliases;
pub mod entities;
pub mod error;
pub mod value_objects;
pub mod variants;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use aliases::{AliasTable, AliasTableBuilder};
pub use entities::{
    ManifestSet, Profile, ProfileSource, ResolvedProfile, ValidationFailure, ValidationReport,
    Violation,
};
pub use error::{DomainError, ErrorCategory};
pub use value_objects::{DetectedLanguage, LanguageId, PathKind};
pub use variants::{
    GO_MODULE_SIGNAL, GO_MODULE_VARIANT_SIGNAL, ProjectSignals, VariantRule, VariantRules,
};

pub use validation::DomainValidator;
