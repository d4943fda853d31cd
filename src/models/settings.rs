use serde::{Deserialize, Serialize};

fn default_currency() -> String {
    "EUR".to_string()
}

/// The freelancer's billing configuration and identity.
///
/// Rates are stored as concrete values: an absent rate in a persisted record
/// deserializes to 0, and [`FreelanceSettings::normalized`] clamps anything
/// that is not a finite, non-negative number back to 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreelanceSettings {
    /// TJM (daily billing rate)
    #[serde(default)]
    pub daily_rate: f64,
    #[serde(default)]
    pub hourly_rate: f64,
    #[serde(default)]
    pub client_emails: Vec<String>,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub siret: String,
}

impl Default for FreelanceSettings {
    fn default() -> Self {
        Self {
            daily_rate: 0.0,
            hourly_rate: 0.0,
            client_emails: Vec::new(),
            currency: default_currency(),
            full_name: String::new(),
            address: String::new(),
            siret: String::new(),
        }
    }
}

fn normalize_rate(rate: f64) -> f64 {
    if rate.is_finite() && rate > 0.0 { rate } else { 0.0 }
}

impl FreelanceSettings {
    /// Single normalization step applied whenever settings enter the store.
    pub fn normalized(mut self) -> Self {
        self.daily_rate = normalize_rate(self.daily_rate);
        self.hourly_rate = normalize_rate(self.hourly_rate);
        self.currency = self.currency.trim().to_uppercase();
        if self.currency.is_empty() {
            self.currency = default_currency();
        }
        self.client_emails = self
            .client_emails
            .into_iter()
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty())
            .collect();
        self
    }

    /// Shallow merge: every field present in `update` replaces the current one.
    pub fn merge(&mut self, update: SettingsUpdate) {
        if let Some(v) = update.daily_rate {
            self.daily_rate = v;
        }
        if let Some(v) = update.hourly_rate {
            self.hourly_rate = v;
        }
        if let Some(v) = update.client_emails {
            self.client_emails = v;
        }
        if let Some(v) = update.currency {
            self.currency = v;
        }
        if let Some(v) = update.full_name {
            self.full_name = v;
        }
        if let Some(v) = update.address {
            self.address = v;
        }
        if let Some(v) = update.siret {
            self.siret = v;
        }
    }
}

/// Partial settings, as submitted by the `settings` command.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsUpdate {
    pub daily_rate: Option<f64>,
    pub hourly_rate: Option<f64>,
    pub client_emails: Option<Vec<String>>,
    pub currency: Option<String>,
    pub full_name: Option<String>,
    pub address: Option<String>,
    pub siret: Option<String>,
}

impl SettingsUpdate {
    pub fn is_empty(&self) -> bool {
        *self == SettingsUpdate::default()
    }
}

/// Split a comma-separated list of addresses, trimming each one.
pub fn parse_email_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|e| e.trim().to_string())
        .filter(|e| !e.is_empty())
        .collect()
}
