use crate::domain::{
    entities::Profile,
    error::DomainError,
    value_objects::DetectedLanguage,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across services.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_profile(profile: &Profile) -> Result<(), DomainError> {
        profile.validate()
    }

    pub fn validate_detected(detected: &DetectedLanguage) -> Result<(), DomainError> {
        detected.validate()
    }
}
