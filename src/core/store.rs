//! Entry store: owns the work entries and the settings, and writes a full
//! snapshot to the injected storage after every mutation.

use crate::errors::AppResult;
use crate::models::{FreelanceSettings, PersistedState, SettingsUpdate, WorkEntry, WorkType};
use chrono::NaiveDate;
use std::collections::HashMap;

/// Fixed namespace under which the snapshot is stored.
pub const STORAGE_NAMESPACE: &str = "freelance-storage";

/// Durable key-value storage with load/save semantics.
pub trait StateStorage {
    fn load(&self, namespace: &str) -> AppResult<Option<String>>;
    fn save(&mut self, namespace: &str, snapshot: &str) -> AppResult<()>;
}

/// In-process storage, used by tests and embedders that persist elsewhere.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    records: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, namespace: &str) -> Option<&str> {
        self.records.get(namespace).map(String::as_str)
    }
}

impl StateStorage for MemoryStorage {
    fn load(&self, namespace: &str) -> AppResult<Option<String>> {
        Ok(self.records.get(namespace).cloned())
    }

    fn save(&mut self, namespace: &str, snapshot: &str) -> AppResult<()> {
        self.records.insert(namespace.to_string(), snapshot.to_string());
        Ok(())
    }
}

impl<S: StateStorage + ?Sized> StateStorage for &mut S {
    fn load(&self, namespace: &str) -> AppResult<Option<String>> {
        (**self).load(namespace)
    }

    fn save(&mut self, namespace: &str, snapshot: &str) -> AppResult<()> {
        (**self).save(namespace, snapshot)
    }
}

fn format_invoice_number(month: NaiveDate, seq: u32) -> String {
    format!("{}-{:03}", month.format("%Y%m"), seq)
}

/// Result of [`EntryStore::upsert_entry`].
#[derive(Debug, Clone, PartialEq)]
pub enum UpsertOutcome {
    Created(WorkEntry),
    Updated(WorkEntry),
    Removed(usize),
    Unchanged,
}

pub struct EntryStore<S: StateStorage> {
    storage: S,
    state: PersistedState,
}

impl<S: StateStorage> EntryStore<S> {
    /// Hydrate from the storage namespace, or start empty when nothing was saved yet.
    pub fn open(storage: S) -> AppResult<Self> {
        let mut state = match storage.load(STORAGE_NAMESPACE)? {
            Some(raw) if !raw.trim().is_empty() => serde_json::from_str::<PersistedState>(&raw)?,
            _ => PersistedState::default(),
        };
        state.settings = state.settings.normalized();

        Ok(Self { storage, state })
    }

    pub fn entries(&self) -> &[WorkEntry] {
        &self.state.entries
    }

    pub fn settings(&self) -> &FreelanceSettings {
        &self.state.settings
    }

    pub fn state(&self) -> &PersistedState {
        &self.state
    }

    pub fn entry_for(&self, date: NaiveDate, work_type: WorkType) -> Option<&WorkEntry> {
        self.state
            .entries
            .iter()
            .find(|e| e.matches(date, work_type))
    }

    /// Append unconditionally; deduplication is the caller's business.
    pub fn add_entry(&mut self, entry: WorkEntry) -> AppResult<()> {
        self.state.entries.push(entry);
        self.persist()
    }

    /// Remove the entry with this id. Returns false (list untouched) when absent.
    pub fn remove_entry(&mut self, id: &str) -> AppResult<bool> {
        let before = self.state.entries.len();
        self.state.entries.retain(|e| e.id != id);
        let removed = self.state.entries.len() != before;
        self.persist()?;
        Ok(removed)
    }

    pub fn update_settings(&mut self, update: SettingsUpdate) -> AppResult<()> {
        let mut settings = self.state.settings.clone();
        settings.merge(update);
        self.state.settings = settings.normalized();
        self.persist()
    }

    /// Record `amount` for the (date, type) slot.
    ///
    /// Zero removes the slot; otherwise the first matching entry is updated in
    /// place and any further duplicates are dropped, so at most one entry per
    /// (date, type) survives.
    pub fn upsert_entry(
        &mut self,
        date: NaiveDate,
        work_type: WorkType,
        amount: f64,
        notes: Option<String>,
    ) -> AppResult<UpsertOutcome> {
        if amount == 0.0 {
            let before = self.state.entries.len();
            self.state.entries.retain(|e| !e.matches(date, work_type));
            let removed = before - self.state.entries.len();
            if removed == 0 {
                return Ok(UpsertOutcome::Unchanged);
            }
            self.persist()?;
            return Ok(UpsertOutcome::Removed(removed));
        }

        let mut kept: Option<usize> = None;
        let mut idx = 0;
        self.state.entries.retain(|e| {
            let keep = if e.matches(date, work_type) {
                if kept.is_none() {
                    kept = Some(idx);
                    true
                } else {
                    false
                }
            } else {
                true
            };
            if keep {
                idx += 1;
            }
            keep
        });

        let outcome = match kept {
            Some(i) => {
                let entry = &mut self.state.entries[i];
                entry.amount = amount;
                if notes.is_some() {
                    entry.notes = notes;
                }
                UpsertOutcome::Updated(entry.clone())
            }
            None => {
                let entry = WorkEntry::new(date, work_type, amount, notes);
                self.state.entries.push(entry.clone());
                UpsertOutcome::Created(entry)
            }
        };

        self.persist()?;
        Ok(outcome)
    }

    /// Number the next invoice of the month containing `month` will carry:
    /// `YYYYMM-NNN`, NNN being one past the persisted per-month counter.
    /// Nothing is recorded until [`EntryStore::commit_invoice_number`].
    pub fn peek_invoice_number(&self, month: NaiveDate) -> String {
        let issued = self
            .state
            .invoice_counters
            .get(&month.format("%Y-%m").to_string())
            .copied()
            .unwrap_or(0);
        format_invoice_number(month, issued + 1)
    }

    /// Record the peeked number as issued, once the invoice left the process.
    pub fn commit_invoice_number(&mut self, month: NaiveDate) -> AppResult<String> {
        let key = month.format("%Y-%m").to_string();
        let counter = self.state.invoice_counters.entry(key).or_insert(0);
        *counter += 1;
        let number = format_invoice_number(month, *counter);
        self.persist()?;
        Ok(number)
    }

    fn persist(&mut self) -> AppResult<()> {
        let snapshot = serde_json::to_string(&self.state)?;
        self.storage.save(STORAGE_NAMESPACE, &snapshot)
    }
}
