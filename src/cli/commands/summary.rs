use crate::cli::commands::month_arg;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregate::Aggregator;
use crate::core::store::EntryStore;
use crate::db::kv::SqliteStorage;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::render::money::{format_money, format_quantity};
use crate::ui::messages::{header, info};
use crate::utils::formatting::{bold, pad_left, pad_right};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { month } = cmd {
        let month = month_arg(month)?;

        let pool = DbPool::open_ready(&cfg.database)?;
        let store = EntryStore::open(SqliteStorage::new(&pool.conn))?;

        let lang = cfg.language;
        let labels = lang.labels();
        let currency = &store.settings().currency;
        let summary = Aggregator::summarize(store.entries(), month, store.settings());

        header(lang.month_year(month));

        if summary.is_empty() {
            info("No entries recorded for this month.");
        }

        let rows = [
            (labels.total_days, format_quantity(summary.total_days, lang)),
            (labels.total_hours, format_quantity(summary.total_hours, lang)),
            (
                labels.daily_service,
                format_money(summary.daily_amount, currency, lang),
            ),
            (
                labels.hourly_service,
                format_money(summary.hourly_amount, currency, lang),
            ),
        ];

        for (label, value) in rows {
            println!("{} {}", pad_right(label, 24), pad_left(&value, 16));
        }
        println!(
            "{} {}",
            bold(&pad_right(labels.total_amount, 24)),
            bold(&pad_left(&format_money(summary.total_amount, currency, lang), 16))
        );
    }

    Ok(())
}
