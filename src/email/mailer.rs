/**
 * SMTP Mailer
 *
 * This module wraps the lettre async SMTP transport behind the four
 * notification sends the site performs. The mailer is built once at startup
 * from the SMTP configuration; when SMTP is not configured the server runs
 * without a mailer and callers skip their sends.
 *
 * # Delivery Semantics
 *
 * Every send is fire-and-forget from the caller's perspective: errors are
 * returned so the caller can log them, but no caller lets a failed send
 * fail the triggering request. Alert sends silently no-op when no
 * `ALERT_EMAIL` is configured.
 */

use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;

use crate::email::templates::{
    contact_alert_body, contact_alert_subject, contact_confirmation_body,
    contact_confirmation_subject, signup_alert_body, signup_alert_subject,
    signup_confirmation_body, ContactMessage, SignupNotification, SIGNUP_CONFIRMATION_SUBJECT,
};
use crate::server::config::AppConfig;

/// Mailer error types
#[derive(Debug, Error)]
pub enum MailerError {
    #[error("Invalid mailbox address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("Failed to build message: {0}")]
    Build(#[from] lettre::error::Error),

    #[error("SMTP send failed: {0}")]
    Send(#[from] lettre::transport::smtp::Error),
}

/// Outbound SMTP mailer
pub struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    alert_to: Option<Mailbox>,
    site_url: String,
}

impl Mailer {
    /// Build the mailer from the loaded configuration
    ///
    /// Returns `None` when SMTP is not configured or the configuration is
    /// unusable (bad relay host or unparseable mailbox); the reason is
    /// logged and the server runs without outbound email.
    pub fn from_config(config: &AppConfig) -> Option<Mailer> {
        let smtp = config.smtp.as_ref()?;

        let from: Mailbox = match smtp.from.parse() {
            Ok(mailbox) => mailbox,
            Err(e) => {
                tracing::error!("Invalid SMTP_FROM address: {e}. Outbound email disabled.");
                return None;
            }
        };

        let alert_to = match &config.alert_email {
            Some(raw) => match raw.parse::<Mailbox>() {
                Ok(mailbox) => Some(mailbox),
                Err(e) => {
                    tracing::warn!("Invalid ALERT_EMAIL address: {e}. Alert emails disabled.");
                    None
                }
            },
            None => None,
        };

        let mut builder =
            match AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&smtp.host) {
                Ok(builder) => builder.port(smtp.port),
                Err(e) => {
                    tracing::error!("Invalid SMTP relay '{}': {e}. Outbound email disabled.", smtp.host);
                    return None;
                }
            };
        if let (Some(username), Some(password)) = (&smtp.username, &smtp.password) {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        Some(Mailer {
            transport: builder.build(),
            from,
            alert_to,
            site_url: config.site_url.clone(),
        })
    }

    /// Send the welcome/confirmation email to a newly signed-up student
    pub async fn send_signup_confirmation(
        &self,
        signup: &SignupNotification,
    ) -> Result<(), MailerError> {
        let to: Mailbox = signup.email.parse()?;
        let (plain, html) = signup_confirmation_body(signup, &self.site_url);
        self.send(to, SIGNUP_CONFIRMATION_SUBJECT.to_string(), plain, html)
            .await?;
        tracing::info!("Confirmation email sent to {}", signup.email);
        Ok(())
    }

    /// Alert the admin address about a new signup
    ///
    /// No-op when `ALERT_EMAIL` is not configured.
    pub async fn send_signup_alert(&self, signup: &SignupNotification) -> Result<(), MailerError> {
        let Some(alert_to) = &self.alert_to else {
            tracing::warn!("ALERT_EMAIL not configured, skipping alert email");
            return Ok(());
        };
        let (plain, html) = signup_alert_body(signup);
        self.send(alert_to.clone(), signup_alert_subject(signup), plain, html)
            .await
    }

    /// Send the confirmation email back to a contact form sender
    pub async fn send_contact_confirmation(
        &self,
        contact: &ContactMessage,
    ) -> Result<(), MailerError> {
        let to: Mailbox = contact.email.parse()?;
        let (plain, html) = contact_confirmation_body(contact, &self.site_url);
        self.send(to, contact_confirmation_subject(contact), plain, html)
            .await?;
        tracing::info!("Contact confirmation email sent to {}", contact.email);
        Ok(())
    }

    /// Alert the admin address about a contact form submission
    ///
    /// No-op when `ALERT_EMAIL` is not configured.
    pub async fn send_contact_alert(&self, contact: &ContactMessage) -> Result<(), MailerError> {
        let Some(alert_to) = &self.alert_to else {
            tracing::warn!("ALERT_EMAIL not configured, skipping contact alert email");
            return Ok(());
        };
        let (plain, html) = contact_alert_body(contact);
        self.send(alert_to.clone(), contact_alert_subject(contact), plain, html)
            .await
    }

    async fn send(
        &self,
        to: Mailbox,
        subject: String,
        plain: String,
        html: String,
    ) -> Result<(), MailerError> {
        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(subject)
            .multipart(MultiPart::alternative_plain_html(plain, html))?;

        self.transport.send(message).await?;
        Ok(())
    }
}
