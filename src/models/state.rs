use crate::models::entry::WorkEntry;
use crate::models::settings::FreelanceSettings;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The single namespaced record written to storage on every mutation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    #[serde(default)]
    pub entries: Vec<WorkEntry>,
    #[serde(default)]
    pub settings: FreelanceSettings,
    /// Last invoice sequence number issued per month, keyed `YYYY-MM`.
    #[serde(default)]
    pub invoice_counters: BTreeMap<String, u32>,
}
