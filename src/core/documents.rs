use crate::core::aggregate::Aggregator;
use crate::core::store::{EntryStore, StateStorage};
use crate::errors::AppResult;
use crate::models::MonthSummary;
use crate::render::{
    DocumentKind, InvoiceHeader, Language, RenderedDocument, render_activity_report,
    render_invoice,
};
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

pub struct DocumentLogic;

impl DocumentLogic {
    pub fn summarize<S: StateStorage>(store: &EntryStore<S>, month: NaiveDate) -> MonthSummary {
        Aggregator::summarize(store.entries(), month, store.settings())
    }

    pub fn activity_report<S: StateStorage>(
        store: &EntryStore<S>,
        month: NaiveDate,
        lang: Language,
    ) -> RenderedDocument {
        let summary = Self::summarize(store, month);
        RenderedDocument {
            kind: DocumentKind::ActivityReport,
            file_name: DocumentKind::ActivityReport.file_name(month),
            bytes: render_activity_report(&summary, lang),
        }
    }

    /// Render the invoice under the next free number of the month.
    /// Returns the document and the number printed on it; the number is only
    /// consumed by [`DocumentLogic::issue_invoice`].
    pub fn invoice<S: StateStorage>(
        store: &EntryStore<S>,
        month: NaiveDate,
        lang: Language,
        issued_on: NaiveDate,
    ) -> (RenderedDocument, String) {
        let number = store.peek_invoice_number(month);
        let summary = Self::summarize(store, month);

        let header = InvoiceHeader {
            number: &number,
            issued_on,
            settings: store.settings(),
        };

        let doc = RenderedDocument {
            kind: DocumentKind::Invoice,
            file_name: DocumentKind::Invoice.file_name(month),
            bytes: render_invoice(&summary, &header, lang),
        };

        (doc, number)
    }

    /// Mark the invoice rendered by [`DocumentLogic::invoice`] as issued.
    pub fn issue_invoice<S: StateStorage>(
        store: &mut EntryStore<S>,
        month: NaiveDate,
    ) -> AppResult<String> {
        store.commit_invoice_number(month)
    }

    /// Target path of a document kind inside `dir`.
    pub fn target_path(dir: &Path, kind: DocumentKind, month: NaiveDate) -> PathBuf {
        dir.join(kind.file_name(month))
    }

    /// Write the document under `dir` (created if missing).
    pub fn write(doc: &RenderedDocument, dir: &Path) -> AppResult<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(&doc.file_name);
        fs::write(&path, &doc.bytes)?;
        Ok(path)
    }
}
