//! Document and message wording for the supported languages.

use crate::models::WorkType;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Fr,
    En,
}

pub struct Labels {
    pub report_title: &'static str,
    pub col_date: &'static str,
    pub col_type: &'static str,
    pub col_quantity: &'static str,
    pub daily: &'static str,
    pub hourly: &'static str,
    pub full_day: &'static str,
    pub half_day: &'static str,
    pub day: &'static str,
    pub days: &'static str,
    pub hour: &'static str,
    pub hours: &'static str,
    pub not_worked: &'static str,
    pub total_days: &'static str,
    pub total_hours: &'static str,
    pub total_amount: &'static str,
    pub invoice_title: &'static str,
    pub issue_date: &'static str,
    pub period: &'static str,
    pub col_description: &'static str,
    pub col_unit_price: &'static str,
    pub col_total: &'static str,
    pub daily_service: &'static str,
    pub hourly_service: &'static str,
    pub total: &'static str,
    pub siret: &'static str,
    pub tax_notice: &'static str,
    pub email_body: &'static str,
    pub page: &'static str,
    pub date_format: &'static str,
}

const FR: Labels = Labels {
    report_title: "Rapport d'activité",
    col_date: "Date",
    col_type: "Type",
    col_quantity: "Quantité",
    daily: "Journalier",
    hourly: "Horaire",
    full_day: "Journée complète",
    half_day: "Demi-journée",
    day: "jour",
    days: "jours",
    hour: "heure",
    hours: "heures",
    not_worked: "Pas travaillé",
    total_days: "Total jours",
    total_hours: "Total heures",
    total_amount: "Montant total",
    invoice_title: "Facture N°",
    issue_date: "Date",
    period: "Période",
    col_description: "Description",
    col_unit_price: "Prix unitaire",
    col_total: "Total",
    daily_service: "Prestation journalière",
    hourly_service: "Prestation horaire",
    total: "Total",
    siret: "SIRET",
    tax_notice: "TVA non applicable, art. 293 B du CGI",
    email_body: "Veuillez trouver ci-joint le rapport d'activité et la facture du mois.",
    page: "Page",
    date_format: "%d/%m/%Y",
};

const EN: Labels = Labels {
    report_title: "Activity report",
    col_date: "Date",
    col_type: "Type",
    col_quantity: "Quantity",
    daily: "Daily",
    hourly: "Hourly",
    full_day: "Full day",
    half_day: "Half day",
    day: "day",
    days: "days",
    hour: "hour",
    hours: "hours",
    not_worked: "Not worked",
    total_days: "Total days",
    total_hours: "Total hours",
    total_amount: "Total amount",
    invoice_title: "Invoice No.",
    issue_date: "Date",
    period: "Period",
    col_description: "Description",
    col_unit_price: "Unit price",
    col_total: "Total",
    daily_service: "Daily services",
    hourly_service: "Hourly services",
    total: "Total",
    siret: "SIRET",
    tax_notice: "VAT not applicable, art. 293 B of the French General Tax Code",
    email_body: "Please find attached the activity report and the invoice for the month.",
    page: "Page",
    date_format: "%Y-%m-%d",
};

impl Language {
    pub fn labels(&self) -> &'static Labels {
        match self {
            Language::Fr => &FR,
            Language::En => &EN,
        }
    }

    /// Month name and year, e.g. "mars 2024" or "March 2024".
    pub fn month_year(&self, month: NaiveDate) -> String {
        match self {
            Language::Fr => month
                .and_time(NaiveTime::MIN)
                .and_utc()
                .format_localized("%B %Y", chrono::Locale::fr_FR)
                .to_string(),
            Language::En => month.format("%B %Y").to_string(),
        }
    }

    pub fn format_date(&self, date: NaiveDate) -> String {
        date.format(self.labels().date_format).to_string()
    }

    pub fn work_type(&self, work_type: WorkType) -> &'static str {
        match work_type {
            WorkType::Daily => self.labels().daily,
            WorkType::Hourly => self.labels().hourly,
        }
    }

    /// Email subject and report title for a month.
    pub fn report_subject(&self, month: NaiveDate) -> String {
        format!("{} - {}", self.labels().report_title, self.month_year(month))
    }
}
