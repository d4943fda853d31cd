use chrono::NaiveDate;
use freelance_tracker::core::aggregate::{Aggregator, month_bounds, select_month, sum_by_type};
use freelance_tracker::models::{FreelanceSettings, WorkEntry, WorkType};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn rates(daily: f64, hourly: f64) -> FreelanceSettings {
    FreelanceSettings {
        daily_rate: daily,
        hourly_rate: hourly,
        ..Default::default()
    }
}

fn sample() -> Vec<WorkEntry> {
    vec![
        WorkEntry::new(d(2024, 3, 5), WorkType::Daily, 1.0, None),
        WorkEntry::new(d(2024, 3, 12), WorkType::Hourly, 4.0, None),
    ]
}

#[test]
fn test_march_totals() {
    let s = Aggregator::summarize(&sample(), d(2024, 3, 1), &rates(500.0, 50.0));

    assert_eq!(s.total_days, 1.0);
    assert_eq!(s.total_hours, 4.0);
    assert_eq!(s.daily_amount, 500.0);
    assert_eq!(s.hourly_amount, 200.0);
    assert_eq!(s.total_amount, 700.0);
    assert_eq!(s.month_key(), "2024-03");
}

#[test]
fn test_month_bounds_are_inclusive() {
    let entries = vec![
        WorkEntry::new(d(2024, 2, 29), WorkType::Daily, 1.0, None),
        WorkEntry::new(d(2024, 3, 1), WorkType::Daily, 1.0, None),
        WorkEntry::new(d(2024, 3, 31), WorkType::Daily, 0.5, None),
        WorkEntry::new(d(2024, 4, 1), WorkType::Daily, 1.0, None),
    ];

    let (start, end) = month_bounds(d(2024, 3, 17));
    assert_eq!(start, d(2024, 3, 1));
    assert_eq!(end, d(2024, 3, 31));

    let selected = select_month(&entries, d(2024, 3, 17));
    let dates: Vec<NaiveDate> = selected.iter().map(|e| e.date).collect();
    assert_eq!(dates, vec![d(2024, 3, 1), d(2024, 3, 31)]);
}

#[test]
fn test_february_leap_year_end() {
    let (_, end) = month_bounds(d(2024, 2, 10));
    assert_eq!(end, d(2024, 2, 29));
}

#[test]
fn test_selection_is_sorted_by_date() {
    let entries = vec![
        WorkEntry::new(d(2024, 3, 20), WorkType::Daily, 1.0, None),
        WorkEntry::new(d(2024, 3, 4), WorkType::Hourly, 2.0, None),
        WorkEntry::new(d(2024, 3, 11), WorkType::Daily, 0.5, None),
    ];

    let selected = select_month(&entries, d(2024, 3, 1));
    assert!(selected.windows(2).all(|w| w[0].date <= w[1].date));
}

#[test]
fn test_empty_month_totals_zero() {
    let s = Aggregator::summarize(&[], d(2024, 3, 1), &rates(500.0, 50.0));
    assert!(s.is_empty());
    assert_eq!(s.total_amount, 0.0);
}

#[test]
fn test_zero_rates_total_zero() {
    let s = Aggregator::summarize(&sample(), d(2024, 3, 1), &FreelanceSettings::default());
    assert_eq!(s.total_days, 1.0);
    assert_eq!(s.total_hours, 4.0);
    assert_eq!(s.total_amount, 0.0);
}

#[test]
fn test_partitions_recombine() {
    let entries = vec![
        WorkEntry::new(d(2024, 3, 4), WorkType::Daily, 1.0, None),
        WorkEntry::new(d(2024, 3, 5), WorkType::Daily, 0.5, None),
        WorkEntry::new(d(2024, 3, 5), WorkType::Hourly, 3.0, None),
        WorkEntry::new(d(2024, 3, 6), WorkType::Hourly, 5.0, None),
    ];

    let (daily, hourly): (Vec<WorkEntry>, Vec<WorkEntry>) =
        entries.iter().cloned().partition(|e| e.work_type == WorkType::Daily);

    assert_eq!(
        sum_by_type(&daily, WorkType::Daily) + sum_by_type(&hourly, WorkType::Daily),
        sum_by_type(&entries, WorkType::Daily)
    );
    assert_eq!(
        sum_by_type(&daily, WorkType::Hourly) + sum_by_type(&hourly, WorkType::Hourly),
        sum_by_type(&entries, WorkType::Hourly)
    );
    assert_eq!(sum_by_type(&entries, WorkType::Daily), 1.5);
    assert_eq!(sum_by_type(&entries, WorkType::Hourly), 8.0);
}
