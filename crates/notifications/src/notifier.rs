//! Best-effort notification dispatch.

use crate::email::{EmailConfig, EmailDelivery};
use crate::message::Notification;

/// What happened to a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// Logged only: SMTP is not configured or the recipient has no address.
    Logged,
    /// Handed to the SMTP server.
    Sent,
    /// SMTP delivery failed; the failure was logged.
    Failed,
}

/// Logs every notification and mails it when SMTP is configured.
#[derive(Debug, Clone, Default)]
pub struct Notifier {
    email: Option<EmailDelivery>,
}

impl Notifier {
    /// Build from `SMTP_*` environment variables. Without `SMTP_HOST` the
    /// notifier only logs.
    pub fn from_env() -> Self {
        let email = EmailConfig::from_env().map(EmailDelivery::new);
        if email.is_none() {
            tracing::info!("SMTP_HOST not set, notifications will only be logged");
        }
        Self { email }
    }

    /// A notifier that never talks to SMTP.
    pub fn log_only() -> Self {
        Self { email: None }
    }

    pub fn with_email(config: EmailConfig) -> Self {
        Self {
            email: Some(EmailDelivery::new(config)),
        }
    }

    /// Whether SMTP delivery is enabled.
    pub fn email_enabled(&self) -> bool {
        self.email.is_some()
    }

    /// Dispatch one notification. Never fails.
    pub async fn notify(&self, notification: &Notification) -> DeliveryOutcome {
        tracing::info!(
            to = %notification.recipient,
            subject = %notification.subject,
            body = %notification.body,
            "Notification"
        );

        let Some(email) = &self.email else {
            return DeliveryOutcome::Logged;
        };
        if notification.recipient.trim().is_empty() {
            return DeliveryOutcome::Logged;
        }

        match email.deliver(notification).await {
            Ok(()) => DeliveryOutcome::Sent,
            Err(e) => {
                tracing::warn!(
                    to = %notification.recipient,
                    error = %e,
                    "Failed to deliver notification email"
                );
                DeliveryOutcome::Failed
            }
        }
    }

    /// Dispatch a batch sequentially, returning how many were handed to SMTP.
    pub async fn notify_all(&self, notifications: &[Notification]) -> usize {
        let mut sent = 0;
        for n in notifications {
            if self.notify(n).await == DeliveryOutcome::Sent {
                sent += 1;
            }
        }
        sent
    }
}
