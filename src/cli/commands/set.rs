use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::{EntryStore, UpsertOutcome};
use crate::core::track::TrackLogic;
use crate::db::kv::SqliteStorage;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::render::activity_report::quantity_label;
use crate::ui::messages::{info, success};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Set {
        date: date_str,
        amount,
        work_type,
        note,
        weekend,
    } = cmd
    {
        let d = date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.into()))?;

        let pool = DbPool::open_ready(&cfg.database)?;
        let mut store = EntryStore::open(SqliteStorage::new(&pool.conn))?;

        let outcome =
            TrackLogic::apply(&mut store, d, *work_type, *amount, note.clone(), *weekend)?;

        let message = match &outcome {
            UpsertOutcome::Created(e) => {
                let m = format!("{} {}: {}", d, work_type, quantity_label(e, cfg.language));
                success(format!("Recorded {}", m));
                Some(m)
            }
            UpsertOutcome::Updated(e) => {
                let m = format!("{} {}: {}", d, work_type, quantity_label(e, cfg.language));
                success(format!("Updated {}", m));
                Some(m)
            }
            UpsertOutcome::Removed(n) => {
                success(format!("Cleared {} {} ({} entry removed).", d, work_type, n));
                Some(format!("{} {} cleared", d, work_type))
            }
            UpsertOutcome::Unchanged => {
                info(format!("Nothing recorded for {} {}.", d, work_type));
                None
            }
        };

        if let Some(m) = message {
            ttlog_quiet(&pool.conn, "set", &d.to_string(), &m);
        }
    }

    Ok(())
}
