pub mod manifest;
pub mod profile;

pub use crate::domain::DomainError;
pub use manifest::{ManifestSet, ValidationFailure, ValidationReport, Violation};
pub use profile::{Profile, ProfileSource, ResolvedProfile};
