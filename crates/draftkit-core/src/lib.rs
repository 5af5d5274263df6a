//! draftkit Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for draftkit:
//! resolving a project directory to a scaffolding profile, and validating
//! deployment manifests through a pluggable rule engine.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           draftkit-cli (CLI)            │
//! │     (detect, validate, list, ...)       │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (ResolveService, ValidationService)    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Classifier, Registry, Probe, Engine,   │
//! │  Filesystem)                            │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    draftkit-adapters (Infrastructure)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (LanguageId, AliasTable, VariantRules,  │
//! │  Profile, ManifestSet)                  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use draftkit_core::application::{ResolveService, ValidationService};
//!
//! // 1. Resolve a profile (adapters injected)
//! let resolver = ResolveService::new(classifier, registries, probe);
//! let resolved = resolver.resolve("./my-service", None).unwrap();
//! println!("{}", resolved.identifier);
//!
//! // 2. Validate manifests
//! let validator = ValidationService::new(filesystem, engine);
//! validator.run("./manifests").unwrap();
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CancelToken, ResolveService, ValidationContext, ValidationService,
        ports::{
            Filesystem, LanguageClassifier, ProfileRegistry, RegistryFactory, RuleEngine,
            SignalProbe, Walk, WalkEntry, WalkError,
        },
    };
    pub use crate::domain::{
        AliasTable, DetectedLanguage, LanguageId, ManifestSet, PathKind, Profile,
        ProjectSignals, ResolvedProfile, ValidationFailure, ValidationReport, VariantRule,
        VariantRules, Violation,
    };
    pub use crate::error::{DraftError, DraftResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
