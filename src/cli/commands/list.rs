use crate::cli::commands::month_arg;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregate::select_month;
use crate::core::store::EntryStore;
use crate::db::kv::SqliteStorage;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::{WorkEntry, WorkType};
use crate::render::Language;
use crate::render::activity_report::quantity_label;
use crate::ui::messages::{header, info};
use crate::utils::colors::{RESET, color_for_amount, color_for_day};
use crate::utils::date::{all_days_of_month, is_weekend};
use crate::utils::table::Table;
use chrono::{Datelike, NaiveDate};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        month,
        work_type,
        entries,
    } = cmd
    {
        let month = month_arg(month)?;

        let pool = DbPool::open_ready(&cfg.database)?;
        let store = EntryStore::open(SqliteStorage::new(&pool.conn))?;
        let selected = select_month(store.entries(), month);

        header(cfg.language.month_year(month));

        if *entries {
            print_entries(&selected, cfg.language);
        } else {
            print_calendar(&selected, month, *work_type, cfg.language);
        }
    }

    Ok(())
}

/// Raw entries of the month, with the ids accepted by `del`.
fn print_entries(entries: &[WorkEntry], lang: Language) {
    if entries.is_empty() {
        info("No entries recorded for this month.");
        return;
    }

    let mut table = Table::new(&["ID", "DATE", "TYPE", "AMOUNT", "NOTE"]);
    for e in entries {
        table.add_row(vec![
            e.id.clone(),
            e.date.to_string(),
            lang.work_type(e.work_type).to_string(),
            quantity_label(e, lang),
            e.notes.clone().unwrap_or_default(),
        ]);
    }
    print!("{}", table.render());
}

/// One line per calendar day for a single work type; weekends in grey.
fn print_calendar(entries: &[WorkEntry], month: NaiveDate, work_type: WorkType, lang: Language) {
    let labels = lang.labels();
    println!("{}\n", lang.work_type(work_type));

    for day in all_days_of_month(month.year(), month.month()) {
        let entry = entries.iter().find(|e| e.matches(day, work_type));
        let weekend = is_weekend(day);

        let (amount, text) = match entry {
            Some(e) => (e.amount, quantity_label(e, lang)),
            None => (0.0, labels.not_worked.to_string()),
        };

        let note = entry
            .and_then(|e| e.notes.as_deref())
            .map(|n| format!("  ({})", n))
            .unwrap_or_default();

        let color = if weekend { color_for_day(true) } else { color_for_amount(amount) };
        println!(
            "{}{} {}  {}{}{}",
            color,
            day.format("%a"),
            lang.format_date(day),
            text,
            note,
            RESET
        );
    }
}
