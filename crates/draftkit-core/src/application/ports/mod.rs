//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `draftkit-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: stat, walk and read
//!   - `LanguageClassifier`: ranked language detection
//!   - `RegistryFactory` / `ProfileRegistry`: installable profiles per root
//!   - `SignalProbe`: named project signals
//!   - `RuleEngine`: manifest validation
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{
    Filesystem, LanguageClassifier, ProfileRegistry, RegistryFactory, RuleEngine, SignalProbe,
    Walk, WalkEntry, WalkError,
};

#[cfg(test)]
pub use output::{
    MockLanguageClassifier, MockProfileRegistry, MockRegistryFactory, MockSignalProbe,
};
