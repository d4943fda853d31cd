//! PDF rendering of the monthly documents.

pub mod activity_report;
pub mod invoice;
pub mod labels;
pub mod money;
pub mod pdf;

pub use activity_report::render_activity_report;
pub use invoice::{InvoiceHeader, render_invoice};
pub use labels::Language;

use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    ActivityReport,
    Invoice,
}

impl DocumentKind {
    /// `activity-report-YYYY-MM.pdf` / `invoice-YYYY-MM.pdf`
    pub fn file_name(&self, month: NaiveDate) -> String {
        let prefix = match self {
            DocumentKind::ActivityReport => "activity-report",
            DocumentKind::Invoice => "invoice",
        };
        format!("{}-{}.pdf", prefix, month.format("%Y-%m"))
    }

    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::ActivityReport => "Activity report",
            DocumentKind::Invoice => "Invoice",
        }
    }
}

/// A rendered PDF and the name it is saved or attached under.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub kind: DocumentKind,
    pub file_name: String,
    pub bytes: Vec<u8>,
}
