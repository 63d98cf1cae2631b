use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::{error, info};

use crate::errors::ServiceError;

/// Outbound mail seam. The booking workflow and the `/email` relay only see
/// this trait; the SMTP transport stays an injected collaborator.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, to: &str, subject: &str, html: &str) -> Result<(), ServiceError>;
}

/// SMTP-backed mailer on top of lettre's async transport.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    /// Build the transport from config. `secure` selects implicit TLS,
    /// otherwise STARTTLS is attempted on the configured port.
    pub fn from_config(cfg: &configs::SmtpConfig) -> Result<Self, ServiceError> {
        let builder = if cfg.secure {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&cfg.host)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&cfg.host)
        }
        .map_err(|e| ServiceError::Email(format!("invalid smtp relay: {e}")))?;

        let mut builder = builder.port(cfg.port);
        if !cfg.user.trim().is_empty() {
            builder = builder.credentials(Credentials::new(cfg.user.clone(), cfg.password.clone()));
        }

        let from = cfg
            .from
            .parse::<Mailbox>()
            .map_err(|e| ServiceError::Email(format!("invalid smtp.from address: {e}")))?;

        Ok(Self { transport: builder.build(), from })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, to: &str, subject: &str, html: &str) -> Result<(), ServiceError> {
        let to = to
            .parse::<Mailbox>()
            .map_err(|e| ServiceError::Email(format!("invalid recipient address: {e}")))?;
        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(html.to_string())
            .map_err(|e| ServiceError::Email(format!("cannot build message: {e}")))?;

        self.transport.send(message).await.map_err(|e| {
            error!(error = %e, "failed to send email");
            ServiceError::Email("failed to send email".into())
        })?;
        Ok(())
    }
}

/// Fallback used when no SMTP relay is configured: outbound mail is logged
/// and dropped so the rest of the workflow still works in dev setups.
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, to: &str, subject: &str, _html: &str) -> Result<(), ServiceError> {
        info!(%to, %subject, "smtp not configured; dropping outbound email");
        Ok(())
    }
}
