//! Email delivery: one PDF attachment per message over SMTP.
//!
//! The pipelines talk to the [`Mailer`] trait; [`SmtpMailer`] is the real
//! transport. Everything is attempt-once; no retries belong here.

pub mod message;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, Message, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{SmtpTransport, Transport};

#[derive(Debug, Clone)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
    pub attachment_name: String,
    pub attachment: Vec<u8>,
}

pub trait Mailer {
    fn send(&self, email: &OutgoingEmail) -> AppResult<()>;
}

/// SMTP transport built from the config file settings.
pub struct SmtpMailer {
    host: String,
    port: u16,
    user: String,
    password: String,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        let smtp = &cfg.smtp;
        if smtp.host.trim().is_empty() {
            return Err(AppError::Config(
                "SMTP is not configured: missing host (run `tutorbill config --edit`)".into(),
            ));
        }
        if cfg.sender.email.trim().is_empty() {
            return Err(AppError::Config(
                "SMTP is not configured: missing sender email".into(),
            ));
        }
        let from: Mailbox = format!("{} <{}>", cfg.sender.name, cfg.sender.email)
            .parse()
            .map_err(|_| {
                AppError::Config(format!("invalid sender address '{}'", cfg.sender.email))
            })?;

        Ok(Self {
            host: smtp.host.clone(),
            port: smtp.port,
            user: smtp.user.clone(),
            password: smtp.password.clone(),
            from,
        })
    }

    fn transport(&self) -> AppResult<SmtpTransport> {
        let mut builder = SmtpTransport::relay(&self.host)
            .map_err(|e| AppError::Email(format!("invalid SMTP host: {e}")))?
            .port(self.port);

        if !self.user.trim().is_empty() {
            builder = builder.credentials(Credentials::new(
                self.user.clone(),
                self.password.clone(),
            ));
        }

        Ok(builder.build())
    }
}

impl Mailer for SmtpMailer {
    fn send(&self, email: &OutgoingEmail) -> AppResult<()> {
        let to: Mailbox = email
            .to
            .parse()
            .map_err(|_| AppError::Email(format!("invalid recipient address '{}'", email.to)))?;

        let pdf_type = ContentType::parse("application/pdf")
            .map_err(|e| AppError::Email(format!("attachment content type: {e}")))?;
        let attachment =
            Attachment::new(email.attachment_name.clone()).body(email.attachment.clone(), pdf_type);

        let msg = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(email.subject.clone())
            .multipart(
                MultiPart::mixed()
                    .singlepart(SinglePart::plain(email.body.clone()))
                    .singlepart(attachment),
            )
            .map_err(|e| AppError::Email(format!("failed to build email: {e}")))?;

        self.transport()?
            .send(&msg)
            .map_err(|e| AppError::Email(format!("send failed: {e}")))?;
        Ok(())
    }
}

/// Dry-run stand-in: accepts every message and delivers nothing.
pub struct NoopMailer;

impl Mailer for NoopMailer {
    fn send(&self, _email: &OutgoingEmail) -> AppResult<()> {
        Ok(())
    }
}
