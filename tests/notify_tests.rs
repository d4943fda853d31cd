use chrono::NaiveDate;
use freelance_tracker::config::EmailConfig;
use freelance_tracker::core::send::SendLogic;
use freelance_tracker::core::store::{EntryStore, MemoryStorage};
use freelance_tracker::errors::{AppError, AppResult};
use freelance_tracker::models::{SettingsUpdate, WorkType};
use freelance_tracker::notify::{
    Attachment, EmailJsTransport, MailTransport, Notifier, OutgoingEmail,
};
use freelance_tracker::render::Language;
use std::cell::RefCell;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

/// Records every email instead of delivering it; optionally fails.
#[derive(Default)]
struct RecordingTransport {
    sent: RefCell<Vec<OutgoingEmail>>,
    fail_with: Option<String>,
}

impl MailTransport for RecordingTransport {
    fn deliver(&self, email: &OutgoingEmail) -> AppResult<()> {
        if let Some(msg) = &self.fail_with {
            return Err(AppError::Email(msg.clone()));
        }
        self.sent.borrow_mut().push(email.clone());
        Ok(())
    }
}

fn store_with_march() -> EntryStore<MemoryStorage> {
    let mut store = EntryStore::open(MemoryStorage::new()).unwrap();
    store
        .upsert_entry(d(2024, 3, 5), WorkType::Daily, 1.0, None)
        .unwrap();
    store
        .upsert_entry(d(2024, 3, 12), WorkType::Hourly, 4.0, None)
        .unwrap();
    store
}

#[test]
fn test_submit_passes_email_to_transport() {
    let notifier = Notifier::new(RecordingTransport::default());
    let to = vec!["client@example.com".to_string()];

    notifier
        .submit(
            &to,
            "Subject",
            "Body",
            vec![Attachment::pdf("a.pdf", b"%PDF-1.7".to_vec())],
        )
        .unwrap();

    let sent = notifier.transport().sent.borrow();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, to);
    assert_eq!(sent[0].attachments[0].content_type, "application/pdf");
}

#[test]
fn test_submit_without_recipients_never_calls_transport() {
    let notifier = Notifier::new(RecordingTransport::default());
    let result = notifier.submit(&[], "Subject", "Body", Vec::new());

    assert!(matches!(result, Err(AppError::NoRecipients)));
    assert!(notifier.transport().sent.borrow().is_empty());
}

#[test]
fn test_transport_failure_is_propagated() {
    let notifier = Notifier::new(RecordingTransport {
        fail_with: Some("401 Unauthorized".into()),
        ..Default::default()
    });

    let result = notifier.submit(&["a@b.c".to_string()], "S", "B", Vec::new());
    match result {
        Err(AppError::Email(msg)) => assert!(msg.contains("401")),
        other => panic!("unexpected result: {:?}", other.err()),
    }
}

#[test]
fn test_send_ships_both_documents() {
    let mut store = store_with_march();
    store
        .update_settings(SettingsUpdate {
            client_emails: Some(vec!["client@example.com".into(), "boss@example.com".into()]),
            daily_rate: Some(500.0),
            ..Default::default()
        })
        .unwrap();

    let notifier = Notifier::new(RecordingTransport::default());
    let report =
        SendLogic::send(&mut store, &notifier, d(2024, 3, 1), Language::Fr, d(2024, 3, 31))
            .unwrap();

    assert_eq!(report.subject, "Rapport d'activité - mars 2024");
    assert_eq!(report.invoice_number, "202403-001");

    let sent = notifier.transport().sent.borrow();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to.len(), 2);

    let names: Vec<&str> = sent[0].attachments.iter().map(|a| a.filename.as_str()).collect();
    assert_eq!(names, vec!["activity-report-2024-03.pdf", "invoice-2024-03.pdf"]);
    assert!(sent[0].attachments.iter().all(|a| a.content.starts_with(b"%PDF")));
}

#[test]
fn test_send_without_client_emails_fails_early() {
    let mut store = store_with_march();
    let notifier = Notifier::new(RecordingTransport::default());

    let result =
        SendLogic::send(&mut store, &notifier, d(2024, 3, 1), Language::En, d(2024, 3, 31));

    assert!(matches!(result, Err(AppError::NoRecipients)));
    assert!(notifier.transport().sent.borrow().is_empty());
    // no invoice number was consumed
    assert!(store.state().invoice_counters.is_empty());
}

#[test]
fn test_failed_deliveries_do_not_consume_invoice_numbers() {
    let mut store = store_with_march();
    store
        .update_settings(SettingsUpdate {
            client_emails: Some(vec!["client@example.com".into()]),
            ..Default::default()
        })
        .unwrap();

    let failing = Notifier::new(RecordingTransport {
        fail_with: Some("boom".into()),
        ..Default::default()
    });
    for _ in 0..3 {
        let result =
            SendLogic::send(&mut store, &failing, d(2024, 3, 1), Language::En, d(2024, 3, 31));
        assert!(matches!(result, Err(AppError::Email(_))));
    }
    assert_eq!(store.state().invoice_counters.get("2024-03"), None);

    let notifier = Notifier::new(RecordingTransport::default());
    let report =
        SendLogic::send(&mut store, &notifier, d(2024, 3, 1), Language::En, d(2024, 3, 31))
            .unwrap();
    assert_eq!(report.invoice_number, "202403-001");
    assert_eq!(store.state().invoice_counters.get("2024-03"), Some(&1));
}

#[test]
fn test_emailjs_requires_credentials() {
    let result = EmailJsTransport::new(EmailConfig::default());
    assert!(matches!(result, Err(AppError::Config(_))));
}
