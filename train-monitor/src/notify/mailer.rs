//! SMTP delivery of delay notifications.
//!
//! One message per call over a STARTTLS-upgraded, authenticated session.
//! No queueing and no retry: a transport failure propagates to the caller,
//! which logs it and moves on.

use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::{ConfigError, MailConfig};

use super::message::DelayMessage;
use super::Notify;

/// Errors raised while building or delivering a notification email.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    /// Mail configuration is invalid (bad relay address).
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// From/to address does not parse.
    #[error("invalid mail address: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The message itself could not be assembled.
    #[error("failed to build email: {0}")]
    Message(#[from] lettre::error::Error),

    /// SMTP transport failure (connect, TLS, auth, delivery).
    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

/// Notifier that delivers messages through an SMTP relay.
pub struct SmtpNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
}

impl SmtpNotifier {
    /// Create a notifier from the mail configuration.
    ///
    /// Validates the relay address and the from/to addresses; no
    /// connection is opened until the first send.
    pub fn new(config: &MailConfig) -> Result<Self, NotifyError> {
        let (host, port) = config.relay_parts()?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&host)?
            .port(port)
            .credentials(Credentials::new(
                config.login.clone(),
                config.password.clone(),
            ))
            .build();

        Ok(Self {
            transport,
            from: config.from.parse()?,
            to: config.to.parse()?,
        })
    }

    /// Assemble the multipart (plain + HTML) email.
    fn build_email(&self, message: &DelayMessage) -> Result<Message, NotifyError> {
        let email = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(&message.subject)
            .multipart(MultiPart::alternative_plain_html(
                message.text.clone(),
                message.html.clone(),
            ))?;
        Ok(email)
    }
}

impl Notify for SmtpNotifier {
    async fn send(&self, message: &DelayMessage) -> Result<(), NotifyError> {
        let email = self.build_email(message)?;
        self.transport.send(email).await?;
        Ok(())
    }
}
