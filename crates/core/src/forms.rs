//! Submission rules for citizen-facing forms.
//!
//! Field presence and length limits are declared with `validator` derives on
//! the request DTOs; the rules here cover what a derive cannot express
//! (blank text, temporal constraints, cross-field checks).

use crate::error::CoreError;
use crate::types::Timestamp;

/// Maximum length of the free-text application details.
pub const MAX_APPLICATION_DATA_LEN: usize = 10_000;

/// Error text for an appointment that is not strictly in the future.
pub const ERR_DATETIME_NOT_FUTURE: &str = "datetime must be in the future";

/// Error text for an office that does not offer the chosen service.
pub const ERR_SERVICE_NOT_OFFERED: &str = "service is not offered at the selected office";

/// Validate the free-text part of an application.
pub fn validate_application_data(data: &str) -> Result<(), CoreError> {
    if data.trim().is_empty() {
        return Err(CoreError::Validation(
            "application_data must not be empty".into(),
        ));
    }
    if data.chars().count() > MAX_APPLICATION_DATA_LEN {
        return Err(CoreError::Validation(format!(
            "application_data must be at most {MAX_APPLICATION_DATA_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate an appointment time against the submission time `now`.
///
/// The datetime must be strictly greater than `now`.
pub fn validate_appointment_datetime(at: Timestamp, now: Timestamp) -> Result<(), CoreError> {
    if at <= now {
        return Err(CoreError::Validation(ERR_DATETIME_NOT_FUTURE.into()));
    }
    Ok(())
}

/// Require that the chosen office actually offers the chosen service.
pub fn ensure_service_offered(offered: bool) -> Result<(), CoreError> {
    if offered {
        Ok(())
    } else {
        Err(CoreError::Validation(ERR_SERVICE_NOT_OFFERED.into()))
    }
}

/// Reject blank required text fields on staff-managed records.
pub fn require_text(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}
