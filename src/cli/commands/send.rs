use crate::cli::commands::month_arg;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::send::SendLogic;
use crate::core::store::EntryStore;
use crate::db::kv::SqliteStorage;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::notify::{EmailJsTransport, Notifier};
use crate::ui::messages::success;
use crate::utils::date::today;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Send { month } = cmd {
        let month = month_arg(month)?;

        let pool = DbPool::open_ready(&cfg.database)?;
        let mut store = EntryStore::open(SqliteStorage::new(&pool.conn))?;

        let notifier = Notifier::new(EmailJsTransport::new(cfg.email.clone())?);
        let report = SendLogic::send(&mut store, &notifier, month, cfg.language, today())?;

        let recipients = report.recipients.join(", ");
        success(format!(
            "Documents sent to {} (invoice {})",
            recipients, report.invoice_number
        ));
        ttlog_quiet(
            &pool.conn,
            "send",
            &month.format("%Y-%m").to_string(),
            &format!(
                "{} (invoice {}) sent to {}",
                report.subject, report.invoice_number, recipients
            ),
        );
    }

    Ok(())
}
