//! Notification texts sent to citizens.

use mfc_core::types::Timestamp;

pub const APPOINTMENT_CONFIRMED_SUBJECT: &str = "Запись на прием в МФЦ подтверждена";
pub const APPLICATION_STATUS_SUBJECT: &str = "Статус заявления изменен";

/// A fully formatted message ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Recipient email address. May be empty for accounts without one.
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

/// Confirmation sent after a citizen books an appointment.
pub fn appointment_confirmation(
    recipient: &str,
    service: &str,
    office: &str,
    at: Timestamp,
) -> Notification {
    Notification {
        recipient: recipient.to_string(),
        subject: APPOINTMENT_CONFIRMED_SUBJECT.to_string(),
        body: format!(
            "Услуга: {service}\nОфис: {office}\nВремя: {}",
            at.format("%d.%m.%Y %H:%M UTC")
        ),
    }
}

/// Sent whenever staff change the status of an application.
pub fn application_status_changed(recipient: &str, service: &str, status: &str) -> Notification {
    Notification {
        recipient: recipient.to_string(),
        subject: APPLICATION_STATUS_SUBJECT.to_string(),
        body: format!("Заявление: {service}\nНовый статус: {status}"),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    #[test]
    fn appointment_confirmation_lists_service_office_and_time() {
        let at = Utc.with_ymd_and_hms(2026, 11, 2, 9, 30, 0).unwrap();
        let n = appointment_confirmation(
            "user1@example.com",
            "Получение ИНН",
            "МФЦ на Мира",
            at,
        );
        assert_eq!(n.subject, "Запись на прием в МФЦ подтверждена");
        assert_eq!(n.recipient, "user1@example.com");
        assert_eq!(
            n.body,
            "Услуга: Получение ИНН\nОфис: МФЦ на Мира\nВремя: 02.11.2026 09:30 UTC"
        );
    }

    #[test]
    fn status_change_names_new_status() {
        let n = application_status_changed("a@b.c", "Оформление пенсии", "Выполнено");
        assert_eq!(n.subject, APPLICATION_STATUS_SUBJECT);
        assert!(n.body.ends_with("Новый статус: Выполнено"));
    }
}
