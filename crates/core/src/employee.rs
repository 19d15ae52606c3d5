//! Employee position vocabulary.

use crate::error::CoreError;

pub const POSITION_SPECIALIST: &str = "specialist";
pub const POSITION_MANAGER: &str = "manager";
pub const POSITION_CONSULTANT: &str = "consultant";
pub const POSITION_OPERATOR: &str = "operator";

/// All valid positions, matching the `employees.position` CHECK constraint.
pub const VALID_POSITIONS: &[&str] = &[
    POSITION_SPECIALIST,
    POSITION_MANAGER,
    POSITION_CONSULTANT,
    POSITION_OPERATOR,
];

/// Display label for a stored position value.
pub fn position_label(position: &str) -> Option<&'static str> {
    match position {
        POSITION_SPECIALIST => Some("Специалист"),
        POSITION_MANAGER => Some("Управляющий"),
        POSITION_CONSULTANT => Some("Консультант"),
        POSITION_OPERATOR => Some("Оператор"),
        _ => None,
    }
}

/// Validate a position value before it reaches the database.
pub fn validate_position(position: &str) -> Result<(), CoreError> {
    if VALID_POSITIONS.contains(&position) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unknown position '{position}'. Valid positions: {}",
            VALID_POSITIONS.join(", ")
        )))
    }
}
