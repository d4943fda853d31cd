use crate::config::EmailConfig;
use crate::errors::{AppError, AppResult};
use crate::notify::{MailTransport, OutgoingEmail};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use reqwest::blocking::Client;
use serde::Serialize;

#[derive(Serialize)]
struct AttachmentParam<'a> {
    filename: &'a str,
    content_type: &'a str,
    /// base64-encoded file content
    content: String,
}

#[derive(Serialize)]
struct TemplateParams<'a> {
    to_email: String,
    subject: &'a str,
    message: &'a str,
    attachments: Vec<AttachmentParam<'a>>,
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

/// EmailJS REST transport, identified by service, template and user ids.
pub struct EmailJsTransport {
    client: Client,
    config: EmailConfig,
}

impl EmailJsTransport {
    pub fn new(config: EmailConfig) -> AppResult<Self> {
        if !config.is_configured() {
            return Err(AppError::Config(
                "email.service_id, email.template_id and email.user_id must be set".to_string(),
            ));
        }

        let client = Client::builder()
            .build()
            .map_err(|e| AppError::Email(e.to_string()))?;

        Ok(Self { client, config })
    }
}

impl MailTransport for EmailJsTransport {
    fn deliver(&self, email: &OutgoingEmail) -> AppResult<()> {
        let request = SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.user_id,
            template_params: TemplateParams {
                to_email: email.to.join(", "),
                subject: &email.subject,
                message: &email.message,
                attachments: email
                    .attachments
                    .iter()
                    .map(|a| AttachmentParam {
                        filename: &a.filename,
                        content_type: &a.content_type,
                        content: STANDARD.encode(&a.content),
                    })
                    .collect(),
            },
        };

        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&request)
            .send()
            .map_err(|e| AppError::Email(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(AppError::Email(format!("{}: {}", status, body.trim())));
        }

        Ok(())
    }
}
