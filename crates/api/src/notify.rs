//! Citizen notifications sent after a committed write.
//!
//! Handlers call the `spawn_*` functions once their write has succeeded.
//! Looking up the recipient and delivering both happen on a detached task,
//! so neither can change the response. A lookup failure is logged at `warn`
//! and the notification is skipped.
//!
//! The tasks are not tracked: notifications still in flight when the server
//! shuts down are dropped.

use std::sync::Arc;

use mfc_core::types::DbId;
use mfc_db::repositories::{ApplicationRepo, AppointmentRepo};
use mfc_db::DbPool;
use mfc_notifications::message::{application_status_changed, appointment_confirmation};
use mfc_notifications::{Notification, Notifier};

use crate::state::AppState;

/// Send the booking confirmation for `appointment_id` in the background.
pub(crate) fn spawn_booking_confirmation(state: &AppState, appointment_id: DbId) {
    let pool = state.pool.clone();
    let notifier = Arc::clone(&state.notifier);
    tokio::spawn(async move {
        deliver_booking_confirmation(&pool, &notifier, appointment_id).await;
    });
}

/// Send one status-change notice per application in the background.
pub(crate) fn spawn_status_notices(state: &AppState, application_ids: Vec<DbId>) {
    if application_ids.is_empty() {
        return;
    }
    let pool = state.pool.clone();
    let notifier = Arc::clone(&state.notifier);
    tokio::spawn(async move {
        deliver_status_notices(&pool, &notifier, &application_ids).await;
    });
}

/// Look up and dispatch the confirmation for one appointment.
///
/// Returns the number of notifications handed to the notifier.
pub async fn deliver_booking_confirmation(
    pool: &DbPool,
    notifier: &Notifier,
    appointment_id: DbId,
) -> usize {
    let notice = match AppointmentRepo::notice(pool, appointment_id).await {
        Ok(Some(notice)) => notice,
        Ok(None) => return 0,
        Err(e) => {
            tracing::warn!(
                appointment_id,
                error = %e,
                "Skipping booking confirmation, recipient lookup failed"
            );
            return 0;
        }
    };

    let notifications = vec![appointment_confirmation(
        &notice.email,
        &notice.service_name,
        &notice.office_name,
        notice.appointment_datetime,
    )];
    dispatch(notifier, &notifications).await
}

/// Look up and dispatch status-change notices for `application_ids`.
///
/// Returns the number of notifications handed to the notifier.
pub async fn deliver_status_notices(
    pool: &DbPool,
    notifier: &Notifier,
    application_ids: &[DbId],
) -> usize {
    let notices = match ApplicationRepo::notices(pool, application_ids).await {
        Ok(notices) => notices,
        Err(e) => {
            tracing::warn!(
                count = application_ids.len(),
                error = %e,
                "Skipping status notices, recipient lookup failed"
            );
            return 0;
        }
    };

    let notifications: Vec<Notification> = notices
        .iter()
        .map(|n| application_status_changed(&n.email, &n.service_name, &n.status_name))
        .collect();
    dispatch(notifier, &notifications).await
}

async fn dispatch(notifier: &Notifier, notifications: &[Notification]) -> usize {
    let sent = notifier.notify_all(notifications).await;
    tracing::debug!(total = notifications.len(), sent, "Notifications dispatched");
    notifications.len()
}
