use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::EntryStore;
use crate::db::kv::SqliteStorage;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let pool = DbPool::open_ready(&cfg.database)?;
        let store = EntryStore::open(SqliteStorage::new(&pool.conn))?;

        let count = ExportLogic::export(store.entries(), *format, file, range, *force)?;

        if count > 0 {
            ttlog_quiet(
                &pool.conn,
                "export",
                file,
                &format!("{} entries exported as {}", count, format.as_str()),
            );
        }
    }
    Ok(())
}
