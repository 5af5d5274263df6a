//! Application layer for draftkit.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ResolveService, ValidationService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Context**: Cancellation passed through to the rule engine
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but owns no I/O.

pub mod context;
pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{ResolveService, ValidationService, locate_manifests};

// Re-export port traits (for adapter implementation)
pub use ports::{
    Filesystem, LanguageClassifier, ProfileRegistry, RegistryFactory, RuleEngine, SignalProbe,
};

pub use context::{CancelToken, ValidationContext};
pub use error::ApplicationError;
