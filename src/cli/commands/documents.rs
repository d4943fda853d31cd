//! `report` and `invoice`: render a month's PDF into the output directory.

use crate::cli::commands::month_arg;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::documents::DocumentLogic;
use crate::core::store::EntryStore;
use crate::db::kv::SqliteStorage;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::render::DocumentKind;
use crate::ui::messages::{success, warning};
use crate::utils::date::today;
use crate::utils::path::expand_tilde;
use std::path::PathBuf;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let (kind, month, out, force) = match cmd {
        Commands::Report { month, out, force } => (DocumentKind::ActivityReport, month, out, force),
        Commands::Invoice { month, out, force } => (DocumentKind::Invoice, month, out, force),
        _ => return Ok(()),
    };

    let month = month_arg(month)?;
    let dir: PathBuf = match out {
        Some(d) => expand_tilde(d),
        None => cfg.output_path(),
    };

    let target = DocumentLogic::target_path(&dir, kind, month);
    ensure_writable(&target, *force)?;

    let pool = DbPool::open_ready(&cfg.database)?;
    let mut store = EntryStore::open(SqliteStorage::new(&pool.conn))?;

    let summary = DocumentLogic::summarize(&store, month);
    if summary.is_empty() {
        warning(format!(
            "No entries recorded for {}: the document will be empty.",
            month.format("%Y-%m")
        ));
    }

    let (doc, detail) = match kind {
        DocumentKind::ActivityReport => (
            DocumentLogic::activity_report(&store, month, cfg.language),
            format!("{} generated", kind.label()),
        ),
        DocumentKind::Invoice => {
            let (doc, number) = DocumentLogic::invoice(&store, month, cfg.language, today());
            (doc, format!("{} {} generated", kind.label(), number))
        }
    };

    let path = DocumentLogic::write(&doc, &dir)?;
    if kind == DocumentKind::Invoice {
        DocumentLogic::issue_invoice(&mut store, month)?;
    }
    success(format!("{}: {}", detail, path.display()));

    let op = match kind {
        DocumentKind::ActivityReport => "report",
        DocumentKind::Invoice => "invoice",
    };
    ttlog_quiet(&pool.conn, op, &month.format("%Y-%m").to_string(), &detail);

    Ok(())
}
