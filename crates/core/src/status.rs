//! Application and appointment status workflows.
//!
//! Application statuses live in the `application_statuses` lookup table;
//! the well-known rows are mirrored by [`ApplicationState`] whose
//! discriminants match the seed order. Appointment statuses are a plain
//! text column mirrored by [`AppointmentState`].

use crate::error::CoreError;

/// Status ID type matching SMALLINT/SMALLSERIAL in the database.
pub type StatusId = i16;

// ---------------------------------------------------------------------------
// Application status
// ---------------------------------------------------------------------------

/// Application lifecycle: Submitted -> InProgress -> {Completed | Rejected}.
#[repr(i16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationState {
    Submitted = 1,
    InProgress = 2,
    Completed = 3,
    Rejected = 4,
}

impl ApplicationState {
    /// Return the database status ID.
    pub fn id(self) -> StatusId {
        self as StatusId
    }

    /// Seeded display name of the status row.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Submitted => "Подано",
            Self::InProgress => "В работе",
            Self::Completed => "Выполнено",
            Self::Rejected => "Отклонено",
        }
    }

    /// Map a status id back to a well-known state.
    ///
    /// Returns `None` for staff-defined statuses outside the seeded set.
    pub fn from_id(id: StatusId) -> Option<Self> {
        match id {
            1 => Some(Self::Submitted),
            2 => Some(Self::InProgress),
            3 => Some(Self::Completed),
            4 => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Completed and Rejected accept no further transitions.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Rejected)
    }

    /// Whether a single-step staff transition `self -> next` is legal.
    pub fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Submitted, Self::InProgress)
                | (Self::InProgress, Self::Completed)
                | (Self::InProgress, Self::Rejected)
        )
    }

    /// Validate `from -> to`, producing a conflict error when illegal.
    pub fn check_transition(from: StatusId, to: StatusId) -> Result<Self, CoreError> {
        let next = Self::from_id(to)
            .ok_or_else(|| CoreError::Validation(format!("Unknown application status id {to}")))?;
        match Self::from_id(from) {
            Some(current) if current.can_transition_to(next) => Ok(next),
            Some(current) => Err(CoreError::Conflict(format!(
                "Cannot move application from '{}' to '{}'",
                current.display_name(),
                next.display_name()
            ))),
            // Custom statuses may only be left towards the regular workflow.
            None => Ok(next),
        }
    }

    /// Ids of statuses a bulk action may still act on.
    pub fn open_ids() -> [StatusId; 2] {
        [Self::Submitted.id(), Self::InProgress.id()]
    }
}

impl From<ApplicationState> for StatusId {
    fn from(value: ApplicationState) -> Self {
        value as StatusId
    }
}

// ---------------------------------------------------------------------------
// Appointment status
// ---------------------------------------------------------------------------

pub const APPOINTMENT_ACTIVE: &str = "active";
pub const APPOINTMENT_COMPLETED: &str = "completed";
pub const APPOINTMENT_CANCELLED: &str = "cancelled";

/// All valid appointment statuses.
pub const VALID_APPOINTMENT_STATUSES: &[&str] = &[
    APPOINTMENT_ACTIVE,
    APPOINTMENT_COMPLETED,
    APPOINTMENT_CANCELLED,
];

/// Appointment lifecycle: Active -> {Completed | Cancelled}, terminal once non-active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentState {
    Active,
    Completed,
    Cancelled,
}

impl AppointmentState {
    /// Return the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => APPOINTMENT_ACTIVE,
            Self::Completed => APPOINTMENT_COMPLETED,
            Self::Cancelled => APPOINTMENT_CANCELLED,
        }
    }

    /// Parse from a string, returning an error for unknown statuses.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            APPOINTMENT_ACTIVE => Ok(Self::Active),
            APPOINTMENT_COMPLETED => Ok(Self::Completed),
            APPOINTMENT_CANCELLED => Ok(Self::Cancelled),
            other => Err(CoreError::Validation(format!(
                "Unknown appointment status: '{other}'. Valid statuses: {}",
                VALID_APPOINTMENT_STATUSES.join(", ")
            ))),
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Активна",
            Self::Completed => "Выполнена",
            Self::Cancelled => "Отменена",
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Active)
    }

    /// Require the appointment to still be active before `action`.
    pub fn ensure_active(&self, action: &str) -> Result<(), CoreError> {
        if self.is_terminal() {
            return Err(CoreError::Conflict(format!(
                "Cannot {action} an appointment that is already {}",
                self.as_str()
            )));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Bulk staff actions
// ---------------------------------------------------------------------------

/// Staff bulk actions over selected rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkAction {
    ApplicationsCompleted,
    ApplicationsRejected,
    AppointmentsCompleted,
    AppointmentsCancelled,
}

impl BulkAction {
    /// Confirmation message shown to staff after the action.
    pub fn message(self, updated: u64) -> String {
        match self {
            Self::ApplicationsCompleted => {
                format!("{updated} заявлений помечено как выполненные.")
            }
            Self::ApplicationsRejected => {
                format!("{updated} заявлений помечено как отклоненные.")
            }
            Self::AppointmentsCompleted => format!("{updated} записей помечено как выполненные."),
            Self::AppointmentsCancelled => format!("{updated} записей отменено."),
        }
    }
}
