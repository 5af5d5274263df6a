//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "resolve a profile" or "validate manifests".

pub mod manifest_locator;
pub mod resolve_service;
pub mod validation_service;

pub use manifest_locator::locate_manifests;
pub use resolve_service::ResolveService;
pub use validation_service::ValidationService;
