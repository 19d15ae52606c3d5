//! Citizen notifications.
//!
//! Messages are formatted by [`message`] and handed to a [`Notifier`], which
//! always logs them and additionally mails them when SMTP is configured.
//! Delivery is best-effort: callers never see a delivery failure.

pub mod email;
pub mod message;
pub mod notifier;

pub use message::Notification;
pub use notifier::{DeliveryOutcome, Notifier};
