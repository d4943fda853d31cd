use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::EntryStore;
use crate::db::kv::SqliteStorage;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id } = cmd {
        let pool = DbPool::open_ready(&cfg.database)?;
        let mut store = EntryStore::open(SqliteStorage::new(&pool.conn))?;

        let described = store
            .entries()
            .iter()
            .find(|e| &e.id == id)
            .map(|e| format!("{} {} {}", e.date, e.work_type, e.amount));

        if !store.remove_entry(id)? {
            return Err(AppError::EntryNotFound(id.clone()));
        }

        let described = described.unwrap_or_default();
        success(format!("Entry {} ({}) has been deleted.", id, described));
        ttlog_quiet(&pool.conn, "del", id, &format!("Deleted {}", described));
    }

    Ok(())
}
