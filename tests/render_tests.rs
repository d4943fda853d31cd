use chrono::NaiveDate;
use freelance_tracker::core::aggregate::Aggregator;
use freelance_tracker::models::{FreelanceSettings, WorkEntry, WorkType};
use freelance_tracker::render::activity_report::{quantity_label, report_rows};
use freelance_tracker::render::invoice::line_items;
use freelance_tracker::render::money::{format_money, format_quantity};
use freelance_tracker::render::pdf::win_ansi;
use freelance_tracker::render::{
    DocumentKind, InvoiceHeader, Language, render_activity_report, render_invoice,
};
use num_format::Locale;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn settings() -> FreelanceSettings {
    FreelanceSettings {
        daily_rate: 500.0,
        hourly_rate: 50.0,
        full_name: "Jeanne Martin".into(),
        address: "12 rue des Lilas\n75011 Paris".into(),
        siret: "123 456 789 00012".into(),
        ..Default::default()
    }
}

fn is_pdf(bytes: &[u8]) -> bool {
    bytes.starts_with(b"%PDF") && bytes.windows(5).any(|w| w == b"%%EOF")
}

#[test]
fn test_money_fr() {
    let expected = format!(
        "1{}234{}50\u{a0}€",
        Locale::fr.separator(),
        Locale::fr.decimal()
    );
    assert_eq!(format_money(1234.5, "EUR", Language::Fr), expected);
}

#[test]
fn test_money_en() {
    assert_eq!(format_money(1234.5, "EUR", Language::En), "€1,234.50");
    assert_eq!(format_money(0.0, "eur", Language::En), "€0.00");
}

#[test]
fn test_money_unknown_code_keeps_code() {
    assert_eq!(format_money(12.0, "XYZ", Language::En), "XYZ12.00");
}

#[test]
fn test_quantity_drops_trailing_zeros() {
    assert_eq!(format_quantity(1.0, Language::En), "1");
    assert_eq!(format_quantity(1.5, Language::En), "1.5");
    assert_eq!(format_quantity(1.5, Language::Fr), format!("1{}5", Locale::fr.decimal()));
}

#[test]
fn test_quantity_labels() {
    let full = WorkEntry::new(d(2024, 3, 4), WorkType::Daily, 1.0, None);
    let half = WorkEntry::new(d(2024, 3, 5), WorkType::Daily, 0.5, None);
    let one_hour = WorkEntry::new(d(2024, 3, 6), WorkType::Hourly, 1.0, None);
    let hours = WorkEntry::new(d(2024, 3, 7), WorkType::Hourly, 4.0, None);

    assert_eq!(quantity_label(&full, Language::Fr), "Journée complète");
    assert_eq!(quantity_label(&half, Language::Fr), "Demi-journée");
    assert_eq!(quantity_label(&one_hour, Language::Fr), "1 heure");
    assert_eq!(quantity_label(&hours, Language::Fr), "4 heures");
    assert_eq!(quantity_label(&full, Language::En), "Full day");
    assert_eq!(quantity_label(&hours, Language::En), "4 hours");
}

#[test]
fn test_month_names_localized() {
    assert_eq!(Language::Fr.month_year(d(2024, 3, 1)), "mars 2024");
    assert_eq!(Language::En.month_year(d(2024, 3, 1)), "March 2024");
    assert_eq!(
        Language::En.report_subject(d(2024, 3, 1)),
        "Activity report - March 2024"
    );
}

#[test]
fn test_report_rows_in_date_order() {
    let entries = vec![
        WorkEntry::new(d(2024, 3, 12), WorkType::Hourly, 4.0, None),
        WorkEntry::new(d(2024, 3, 5), WorkType::Daily, 1.0, None),
    ];
    let summary = Aggregator::summarize(&entries, d(2024, 3, 1), &settings());

    let rows = report_rows(&summary, Language::En);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], vec!["2024-03-05", "Daily", "Full day"]);
    assert_eq!(rows[1], vec!["2024-03-12", "Hourly", "4 hours"]);
}

#[test]
fn test_invoice_lines_only_for_billed_categories() {
    let entries = vec![WorkEntry::new(d(2024, 3, 5), WorkType::Daily, 1.0, None)];
    let summary = Aggregator::summarize(&entries, d(2024, 3, 1), &settings());

    let rows = line_items(&summary, &settings(), Language::En);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0], vec!["Daily services", "1", "€500.00", "€500.00"]);
}

#[test]
fn test_activity_report_is_pdf() {
    let entries = vec![
        WorkEntry::new(d(2024, 3, 5), WorkType::Daily, 1.0, None),
        WorkEntry::new(d(2024, 3, 12), WorkType::Hourly, 4.0, None),
    ];
    let summary = Aggregator::summarize(&entries, d(2024, 3, 1), &settings());

    assert!(is_pdf(&render_activity_report(&summary, Language::Fr)));
}

#[test]
fn test_empty_month_still_renders() {
    let summary = Aggregator::summarize(&[], d(2024, 3, 1), &FreelanceSettings::default());
    assert!(is_pdf(&render_activity_report(&summary, Language::En)));

    let s = FreelanceSettings::default();
    let header = InvoiceHeader {
        number: "202403-001",
        issued_on: d(2024, 3, 31),
        settings: &s,
    };
    assert!(is_pdf(&render_invoice(&summary, &header, Language::En)));
}

#[test]
fn test_long_report_paginates() {
    let entries: Vec<WorkEntry> = (1..=31)
        .flat_map(|day| {
            [
                WorkEntry::new(d(2024, 3, day), WorkType::Daily, 1.0, None),
                WorkEntry::new(d(2024, 3, day), WorkType::Hourly, 2.0, None),
            ]
        })
        .collect();
    let summary = Aggregator::summarize(&entries, d(2024, 3, 1), &settings());

    let s = settings();
    let header = InvoiceHeader {
        number: "202403-002",
        issued_on: d(2024, 4, 1),
        settings: &s,
    };

    assert!(is_pdf(&render_activity_report(&summary, Language::Fr)));
    assert!(is_pdf(&render_invoice(&summary, &header, Language::Fr)));
}

#[test]
fn test_win_ansi_maps_accents() {
    assert_eq!(win_ansi("é"), vec![0xE9]);
    assert_eq!(win_ansi("€"), vec![0x80]);
    assert_eq!(win_ansi("A"), vec![b'A']);
}

#[test]
fn test_document_file_names() {
    assert_eq!(
        DocumentKind::ActivityReport.file_name(d(2024, 3, 15)),
        "activity-report-2024-03.pdf"
    );
    assert_eq!(DocumentKind::Invoice.file_name(d(2024, 3, 15)), "invoice-2024-03.pdf");
}
