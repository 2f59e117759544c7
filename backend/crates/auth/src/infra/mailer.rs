//! Outbound Mail
//!
//! Verification and password reset mails, either written to the log
//! (development) or delivered through an SMTP relay with STARTTLS (lettre).

#[cfg(test)]
use std::sync::{Arc, Mutex};

use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, header::ContentType},
    transport::smtp::{Error as SmtpError, authentication::Credentials},
};
use thiserror::Error;

use crate::domain::value_object::email::Email;

/// Errors that can occur when sending mail.
#[derive(Debug, Error)]
pub enum MailError {
    /// SMTP transport error.
    #[error("SMTP error: {0}")]
    Smtp(#[from] SmtpError),

    /// Failed to build the message.
    #[error("Failed to build message: {0}")]
    MessageBuild(#[from] lettre::error::Error),

    /// Sender or recipient is not a valid mailbox.
    #[error("Invalid email address: {0}")]
    InvalidAddress(String),
}

/// SMTP relay settings.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    /// `From:` mailbox, e.g. `Store <no-reply@example.com>`
    pub from: String,
}

/// A rendered mail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// SMTP delivery via lettre.
#[derive(Clone)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn new(config: &SmtpConfig) -> Result<Self, MailError> {
        let from: Mailbox = config
            .from
            .parse()
            .map_err(|_| MailError::InvalidAddress(config.from.clone()))?;

        let mut builder =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?.port(config.port);

        if let (Some(username), Some(password)) = (&config.username, &config.password) {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        Ok(Self {
            transport: builder.build(),
            from,
        })
    }

    async fn send(&self, mail: &OutgoingMail) -> Result<(), MailError> {
        let to: Mailbox = mail
            .to
            .parse()
            .map_err(|_| MailError::InvalidAddress(mail.to.clone()))?;

        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(mail.subject.clone())
            .header(ContentType::TEXT_PLAIN)
            .body(mail.body.clone())?;

        self.transport.send(message).await?;
        Ok(())
    }
}

/// In-memory mailbox the router tests read links from.
#[cfg(test)]
#[derive(Clone, Default)]
pub struct Outbox {
    sent: Arc<Mutex<Vec<OutgoingMail>>>,
}

#[cfg(test)]
impl Outbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every mail sent so far, oldest first.
    pub fn sent(&self) -> Vec<OutgoingMail> {
        self.sent.lock().map(|v| v.clone()).unwrap_or_default()
    }

    /// Most recent mail to `to`.
    pub fn last_to(&self, to: &str) -> Option<OutgoingMail> {
        self.sent().into_iter().rev().find(|m| m.to == to)
    }

    fn push(&self, mail: OutgoingMail) {
        if let Ok(mut sent) = self.sent.lock() {
            sent.push(mail);
        }
    }
}

/// Mail backend chosen at start-up.
#[derive(Clone, Default)]
pub enum Mailer {
    #[default]
    Log,
    Smtp(SmtpMailer),
    #[cfg(test)]
    Outbox(Outbox),
}

impl Mailer {
    pub async fn send_verification(&self, to: &Email, link: &str) -> Result<(), MailError> {
        self.deliver(OutgoingMail {
            to: to.as_str().to_string(),
            subject: "Verify your email address".to_string(),
            body: format!(
                "Welcome!\n\nPlease confirm your email address by opening the link below:\n\n{}\n",
                link
            ),
        })
        .await
    }

    pub async fn send_password_reset(&self, to: &Email, link: &str) -> Result<(), MailError> {
        self.deliver(OutgoingMail {
            to: to.as_str().to_string(),
            subject: "Reset your password".to_string(),
            body: format!(
                "We received a request to reset your password.\n\n\
                 Open the link below within one hour to choose a new one:\n\n{}\n\n\
                 If you did not request this, you can ignore this mail.\n",
                link
            ),
        })
        .await
    }

    async fn deliver(&self, mail: OutgoingMail) -> Result<(), MailError> {
        match self {
            Mailer::Log => {
                tracing::info!(to = %mail.to, subject = %mail.subject, body = %mail.body, "Mail (log backend)");
                Ok(())
            }
            Mailer::Smtp(smtp) => {
                smtp.send(&mail).await?;
                tracing::debug!(to = %mail.to, subject = %mail.subject, "Mail sent");
                Ok(())
            }
            #[cfg(test)]
            Mailer::Outbox(outbox) => {
                outbox.push(mail);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_outbox_records_links() {
        let outbox = Outbox::new();
        let mailer = Mailer::Outbox(outbox.clone());
        let to = Email::new("alice@example.com").unwrap();

        mailer
            .send_verification(&to, "http://shop/verify-email?token=abc")
            .await
            .unwrap();
        mailer
            .send_password_reset(&to, "http://shop/reset-password/def")
            .await
            .unwrap();

        assert_eq!(outbox.sent().len(), 2);
        let last = outbox.last_to("alice@example.com").unwrap();
        assert!(last.body.contains("http://shop/reset-password/def"));
    }

    #[tokio::test]
    async fn test_log_backend_succeeds() {
        let to = Email::new("bob@example.com").unwrap();
        assert!(Mailer::Log.send_verification(&to, "link").await.is_ok());
    }

    #[test]
    fn test_smtp_rejects_bad_sender() {
        let config = SmtpConfig {
            host: "localhost".to_string(),
            port: 587,
            username: None,
            password: None,
            from: "not a mailbox".to_string(),
        };
        assert!(matches!(
            SmtpMailer::new(&config),
            Err(MailError::InvalidAddress(_))
        ));
    }
}
