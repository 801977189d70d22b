//! Outgoing mail abstraction
//!
//! Sending is behind the [`MailSender`] trait so services stay testable.
//! The default implementation logs the message instead of talking to an
//! SMTP relay.

use async_trait::async_trait;

use crate::config::MailConfig;
use crate::error::AppError;

/// An outgoing email message
#[derive(Debug, Clone)]
pub struct MailMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Trait for sending email
#[async_trait]
pub trait MailSender: Send + Sync {
    async fn send(&self, message: MailMessage) -> Result<(), AppError>;
}

/// Mail sender that writes messages to the tracing log
///
/// Used in development and tests where no SMTP relay is available.
#[derive(Debug, Clone, Default)]
pub struct TracingMailSender;

#[async_trait]
impl MailSender for TracingMailSender {
    async fn send(&self, message: MailMessage) -> Result<(), AppError> {
        tracing::info!(
            to = %message.to,
            subject = %message.subject,
            "outgoing mail"
        );
        tracing::debug!(body = %message.body, "mail body");
        Ok(())
    }
}

/// Build the account verification email for a freshly registered user
#[must_use]
pub fn verification_email(
    config: &MailConfig,
    username: &str,
    to: &str,
    token: &str,
) -> MailMessage {
    let link = format!("{}/api/v1/users/verify/{}", config.base_url, token);
    MailMessage {
        to: to.to_string(),
        subject: "Activate your Authors Haven account".to_string(),
        body: format!(
            "Hi {username},\n\nWelcome to Authors Haven! Follow the link below to \
             activate your account:\n\n{link}\n\nThe link expires in 24 hours."
        ),
    }
}

/// Build the password reset email
#[must_use]
pub fn password_reset_email(
    config: &MailConfig,
    username: &str,
    to: &str,
    token: &str,
) -> MailMessage {
    let link = format!("{}/api/v1/users/password/reset/{}", config.base_url, token);
    MailMessage {
        to: to.to_string(),
        subject: "Reset your Authors Haven password".to_string(),
        body: format!(
            "Hi {username},\n\nSomeone requested a password reset for your account. \
             Follow the link below to choose a new password:\n\n{link}\n\n\
             The link expires in 30 minutes. If you did not request this, you can \
             safely ignore this email."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> MailConfig {
        MailConfig {
            from_address: "noreply@test.local".to_string(),
            base_url: "http://localhost:8080".to_string(),
        }
    }

    #[test]
    fn test_verification_email_contains_link() {
        let msg = verification_email(&test_config(), "jacob", "jacob@example.com", "tok123");

        assert_eq!(msg.to, "jacob@example.com");
        assert!(msg.body.contains("http://localhost:8080/api/v1/users/verify/tok123"));
        assert!(msg.body.contains("jacob"));
    }

    #[test]
    fn test_password_reset_email_contains_link() {
        let msg = password_reset_email(&test_config(), "jacob", "jacob@example.com", "tok456");

        assert_eq!(msg.to, "jacob@example.com");
        assert!(msg
            .body
            .contains("http://localhost:8080/api/v1/users/password/reset/tok456"));
        assert!(msg.body.contains("30 minutes"));
    }

    #[tokio::test]
    async fn test_tracing_sender_succeeds() {
        let sender = TracingMailSender;
        let msg = verification_email(&test_config(), "jacob", "jacob@example.com", "tok123");
        assert!(sender.send(msg).await.is_ok());
    }
}
