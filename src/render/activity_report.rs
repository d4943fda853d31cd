use crate::models::{MonthSummary, WorkEntry, WorkType};
use crate::render::labels::Language;
use crate::render::money::format_quantity;
use crate::render::pdf::{Align, PdfManager};

/// Human readable quantity of one entry: "Journée complète", "Demi-journée",
/// "3 heures"...
pub fn quantity_label(entry: &WorkEntry, lang: Language) -> String {
    let l = lang.labels();
    match entry.work_type {
        WorkType::Daily if entry.amount == 1.0 => l.full_day.to_string(),
        WorkType::Daily if entry.amount == 0.5 => l.half_day.to_string(),
        WorkType::Daily => {
            let unit = if entry.amount > 1.0 { l.days } else { l.day };
            format!("{} {}", format_quantity(entry.amount, lang), unit)
        }
        WorkType::Hourly => {
            let unit = if entry.amount > 1.0 { l.hours } else { l.hour };
            format!("{} {}", format_quantity(entry.amount, lang), unit)
        }
    }
}

/// Table rows (date, type, quantity) for the month's entries, in date order.
pub fn report_rows(summary: &MonthSummary, lang: Language) -> Vec<Vec<String>> {
    let mut entries: Vec<&WorkEntry> = summary.entries.iter().collect();
    entries.sort_by_key(|e| e.date);

    entries
        .into_iter()
        .map(|e| {
            vec![
                lang.format_date(e.date),
                lang.work_type(e.work_type).to_string(),
                quantity_label(e, lang),
            ]
        })
        .collect()
}

/// Render the monthly activity report as PDF bytes.
pub fn render_activity_report(summary: &MonthSummary, lang: Language) -> Vec<u8> {
    let l = lang.labels();
    let mut pdf = PdfManager::new(l.page);

    pdf.text(&lang.report_subject(summary.start), 20.0, true, Align::Center);
    pdf.space(20.0);

    let rows = report_rows(summary, lang);
    pdf.table(&[l.col_date, l.col_type, l.col_quantity], &rows);

    pdf.space(20.0);
    pdf.text(
        &format!("{} : {}", l.total_days, format_quantity(summary.total_days, lang)),
        14.0,
        false,
        Align::Right,
    );
    if summary.total_hours > 0.0 {
        pdf.text(
            &format!("{} : {}", l.total_hours, format_quantity(summary.total_hours, lang)),
            14.0,
            false,
            Align::Right,
        );
    }

    pdf.finish()
}
