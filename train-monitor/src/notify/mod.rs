//! Notification building and delivery.
//!
//! The formatter renders a route's legs into a plain-text grid and an HTML
//! table and interpolates both into the configured templates; the notifier
//! delivers the result as one multipart email over an authenticated,
//! STARTTLS-upgraded SMTP session.

mod mailer;
mod message;
pub mod table;

pub use mailer::{NotifyError, SmtpNotifier};
pub use message::{DelayMessage, build_message, build_no_data_message};

/// A delivery channel for delay notifications.
///
/// One delivery attempt per call; failures propagate to the caller.
pub trait Notify {
    /// Deliver the message.
    fn send(
        &self,
        message: &DelayMessage,
    ) -> impl std::future::Future<Output = Result<(), NotifyError>>;
}
