//! Outbound notification email.
//!
//! A [`Notifier`] owns the envelope (sender, recipient, application name) and
//! an injected [`MailTransport`]. Production uses [`SmtpTransport`], a lettre
//! `AsyncSmtpTransport` built once at startup from `SMTP_*` configuration; when
//! `SMTP_HOST` is empty a [`LogTransport`] is used instead and mail is only
//! logged.
//!
//! Delivery is fire-and-forget: [`Notifier::notify_new_comment`] spawns a
//! detached task whose outcome is observed only by the logger. Callers must
//! not await it on the request path.

use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
};
use std::sync::Arc;
use tokio::task::JoinHandle;
use util::config;

#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("invalid address `{address}`: {source}")]
    Address {
        address: String,
        #[source]
        source: lettre::address::AddressError,
    },

    #[error("failed to build message: {0}")]
    Build(#[from] lettre::error::Error),

    #[error("SMTP transport error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

/// A fully composed email, independent of any transport.
#[derive(Debug, Clone, PartialEq)]
pub struct Mail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub text: String,
    pub html: String,
}

#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, mail: Mail) -> Result<(), MailError>;
}

/// SMTP delivery through lettre.
pub struct SmtpTransport {
    inner: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpTransport {
    /// Port 465 uses implicit TLS, every other port negotiates STARTTLS.
    /// Credentials are attached only when `user` is non-empty.
    pub fn new(host: &str, port: u16, user: &str, password: &str) -> Result<Self, MailError> {
        let builder = if port == 465 {
            AsyncSmtpTransport::<Tokio1Executor>::relay(host)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)?
        }
        .port(port);

        let builder = if user.is_empty() {
            builder
        } else {
            builder.credentials(Credentials::new(user.to_owned(), password.to_owned()))
        };

        Ok(Self {
            inner: builder.build(),
        })
    }
}

fn mailbox(address: &str) -> Result<Mailbox, MailError> {
    address.parse().map_err(|source| MailError::Address {
        address: address.to_owned(),
        source,
    })
}

#[async_trait]
impl MailTransport for SmtpTransport {
    async fn send(&self, mail: Mail) -> Result<(), MailError> {
        let message = Message::builder()
            .from(mailbox(&mail.from)?)
            .to(mailbox(&mail.to)?)
            .subject(mail.subject)
            .multipart(MultiPart::alternative_plain_html(mail.text, mail.html))?;

        self.inner.send(message).await?;
        Ok(())
    }
}

/// Stand-in used when no SMTP host is configured.
pub struct LogTransport;

#[async_trait]
impl MailTransport for LogTransport {
    async fn send(&self, mail: Mail) -> Result<(), MailError> {
        tracing::info!(
            subject = %mail.subject,
            to = %mail.to,
            "SMTP not configured; skipping delivery"
        );
        Ok(())
    }
}

/// Picks the transport described by the current configuration.
pub fn transport_from_config() -> Result<Arc<dyn MailTransport>, MailError> {
    let host = config::smtp_host();
    if host.trim().is_empty() {
        tracing::warn!("SMTP_HOST not set; notification emails will only be logged");
        return Ok(Arc::new(LogTransport));
    }

    let transport = SmtpTransport::new(
        &host,
        config::smtp_port(),
        &config::smtp_user(),
        &config::smtp_password(),
    )?;
    Ok(Arc::new(transport))
}

#[derive(Clone)]
pub struct Notifier {
    transport: Arc<dyn MailTransport>,
    app_name: String,
    from: String,
    to: String,
}

impl Notifier {
    pub fn new(
        transport: Arc<dyn MailTransport>,
        app_name: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            app_name: app_name.into(),
            from: from.into(),
            to: to.into(),
        }
    }

    /// Builds a notifier from `APP_NAME`, `SMTP_FROM`, `SMTP_TO` and the
    /// configured transport.
    pub fn from_config() -> Result<Self, MailError> {
        Ok(Self::new(
            transport_from_config()?,
            config::app_name(),
            config::smtp_from(),
            config::smtp_to(),
        ))
    }

    /// The fixed "New comment" message. It deliberately carries no comment
    /// content or author details.
    pub fn new_comment_mail(&self) -> Mail {
        Mail {
            from: self.from.clone(),
            to: self.to.clone(),
            subject: "New comment".into(),
            text: format!("A new comment has been posted on {}.", self.app_name),
            html: format!("<p>A new comment has been posted on {}.</p>", self.app_name),
        }
    }

    /// Sends the "New comment" mail on a detached task.
    ///
    /// The returned handle may be dropped; the task keeps running and logs
    /// its outcome. Nothing is retried.
    pub fn notify_new_comment(&self) -> JoinHandle<()> {
        let transport = Arc::clone(&self.transport);
        let mail = self.new_comment_mail();

        tokio::spawn(async move {
            match transport.send(mail).await {
                Ok(()) => tracing::info!("Email sent"),
                Err(e) => tracing::error!(error = %e, "Failed to send comment notification"),
            }
        })
    }
}
