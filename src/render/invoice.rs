use crate::models::{FreelanceSettings, MonthSummary};
use crate::render::labels::Language;
use crate::render::money::{format_money, format_quantity};
use crate::render::pdf::{Align, PdfManager};
use chrono::NaiveDate;

/// Everything printed on an invoice besides the month summary.
pub struct InvoiceHeader<'a> {
    pub number: &'a str,
    pub issued_on: NaiveDate,
    pub settings: &'a FreelanceSettings,
}

/// One row per work-type category that has billed work:
/// description, quantity, unit price, line total.
pub fn line_items(
    summary: &MonthSummary,
    settings: &FreelanceSettings,
    lang: Language,
) -> Vec<Vec<String>> {
    let l = lang.labels();
    let money = |v: f64| format_money(v, &settings.currency, lang);
    let mut rows = Vec::new();

    if summary.has_daily() {
        rows.push(vec![
            l.daily_service.to_string(),
            format_quantity(summary.total_days, lang),
            money(summary.daily_rate),
            money(summary.daily_amount),
        ]);
    }

    if summary.has_hourly() {
        rows.push(vec![
            l.hourly_service.to_string(),
            format_quantity(summary.total_hours, lang),
            money(summary.hourly_rate),
            money(summary.hourly_amount),
        ]);
    }

    rows
}

/// Render the monthly invoice as PDF bytes.
pub fn render_invoice(
    summary: &MonthSummary,
    header: &InvoiceHeader<'_>,
    lang: Language,
) -> Vec<u8> {
    let l = lang.labels();
    let settings = header.settings;
    let mut pdf = PdfManager::new(l.page);

    // billing identity
    pdf.text(&settings.full_name, 10.0, true, Align::Left);
    pdf.wrapped_text(&settings.address, 10.0);
    pdf.text(&format!("{}: {}", l.siret, settings.siret), 10.0, false, Align::Left);
    pdf.space(30.0);

    pdf.text(
        &format!("{} {}", l.invoice_title, header.number),
        20.0,
        true,
        Align::Left,
    );
    pdf.space(10.0);
    pdf.text(
        &format!("{}: {}", l.issue_date, lang.format_date(header.issued_on)),
        10.0,
        false,
        Align::Left,
    );
    pdf.text(
        &format!("{}: {}", l.period, lang.month_year(summary.start)),
        10.0,
        false,
        Align::Left,
    );
    pdf.space(10.0);

    let rows = line_items(summary, settings, lang);
    pdf.table(
        &[l.col_description, l.col_quantity, l.col_unit_price, l.col_total],
        &rows,
    );

    pdf.space(20.0);
    pdf.text(
        &format!(
            "{}: {}",
            l.total,
            format_money(summary.total_amount, &settings.currency, lang)
        ),
        14.0,
        true,
        Align::Right,
    );

    pdf.space(40.0);
    pdf.text(l.tax_notice, 10.0, false, Align::Left);

    pdf.finish()
}
