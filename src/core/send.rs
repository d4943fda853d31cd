use crate::core::documents::DocumentLogic;
use crate::core::store::{EntryStore, StateStorage};
use crate::errors::{AppError, AppResult};
use crate::notify::{Attachment, MailTransport, Notifier};
use crate::render::Language;
use chrono::NaiveDate;

/// What was shipped by [`SendLogic::send`].
#[derive(Debug, Clone, PartialEq)]
pub struct SendReport {
    pub recipients: Vec<String>,
    pub subject: String,
    pub invoice_number: String,
}

pub struct SendLogic;

impl SendLogic {
    /// Render the activity report and the invoice for `month` and email both
    /// to the configured client addresses.
    pub fn send<S: StateStorage, T: MailTransport>(
        store: &mut EntryStore<S>,
        notifier: &Notifier<T>,
        month: NaiveDate,
        lang: Language,
        issued_on: NaiveDate,
    ) -> AppResult<SendReport> {
        let recipients = store.settings().client_emails.clone();
        if recipients.is_empty() {
            return Err(AppError::NoRecipients);
        }

        let report = DocumentLogic::activity_report(store, month, lang);
        let (invoice, invoice_number) = DocumentLogic::invoice(store, month, lang, issued_on);

        let subject = lang.report_subject(month);
        let attachments = vec![
            Attachment::pdf(&report.file_name, report.bytes),
            Attachment::pdf(&invoice.file_name, invoice.bytes),
        ];

        notifier.submit(&recipients, &subject, lang.labels().email_body, attachments)?;
        DocumentLogic::issue_invoice(store, month)?;

        Ok(SendReport {
            recipients,
            subject,
            invoice_number,
        })
    }
}
