//! Delivery of the rendered documents by email.

pub mod emailjs;

pub use emailjs::EmailJsTransport;

use crate::errors::{AppError, AppResult};

/// A binary file attached to an outgoing email.
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    pub filename: String,
    pub content_type: String,
    pub content: Vec<u8>,
}

impl Attachment {
    pub fn pdf(filename: &str, content: Vec<u8>) -> Self {
        Self {
            filename: filename.to_string(),
            content_type: "application/pdf".to_string(),
            content,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingEmail {
    pub to: Vec<String>,
    pub subject: String,
    pub message: String,
    pub attachments: Vec<Attachment>,
}

/// Seam to the external delivery provider.
pub trait MailTransport {
    fn deliver(&self, email: &OutgoingEmail) -> AppResult<()>;
}

pub struct Notifier<T: MailTransport> {
    transport: T,
}

impl<T: MailTransport> Notifier<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Submit recipients, subject and documents to the provider.
    /// Provider failures are returned to the caller as they are.
    pub fn submit(
        &self,
        to: &[String],
        subject: &str,
        message: &str,
        attachments: Vec<Attachment>,
    ) -> AppResult<()> {
        if to.is_empty() {
            return Err(AppError::NoRecipients);
        }

        let email = OutgoingEmail {
            to: to.to_vec(),
            subject: subject.to_string(),
            message: message.to_string(),
            attachments,
        };

        self.transport.deliver(&email)
    }
}
