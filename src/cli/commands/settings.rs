use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::EntryStore;
use crate::db::kv::SqliteStorage;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::settings::parse_email_list;
use crate::models::{FreelanceSettings, SettingsUpdate};
use crate::render::money::format_money;
use crate::ui::messages::{header, success, warning};
use crate::utils::formatting::bold;

fn print_settings(s: &FreelanceSettings, cfg: &Config) {
    let or_dash = |v: &str| if v.is_empty() { "-".to_string() } else { v.to_string() };
    let money = |v: f64| format_money(v, &s.currency, cfg.language);

    header("Settings");
    println!("{:<14} {}", bold("Daily rate"), money(s.daily_rate));
    println!("{:<14} {}", bold("Hourly rate"), money(s.hourly_rate));
    println!("{:<14} {}", bold("Currency"), s.currency);
    println!("{:<14} {}", bold("Name"), or_dash(&s.full_name));
    println!("{:<14} {}", bold("Address"), or_dash(&s.address));
    println!("{:<14} {}", bold("SIRET"), or_dash(&s.siret));
    println!("{:<14} {}", bold("Client emails"), or_dash(&s.client_emails.join(", ")));
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Settings {
        daily_rate,
        hourly_rate,
        currency,
        name,
        address,
        siret,
        emails,
    } = cmd
    {
        let update = SettingsUpdate {
            daily_rate: *daily_rate,
            hourly_rate: *hourly_rate,
            client_emails: emails.as_deref().map(parse_email_list),
            currency: currency.clone(),
            full_name: name.clone(),
            address: address.clone(),
            siret: siret.clone(),
        };

        let pool = DbPool::open_ready(&cfg.database)?;
        let mut store = EntryStore::open(SqliteStorage::new(&pool.conn))?;

        if update.is_empty() {
            print_settings(store.settings(), cfg);
            return Ok(());
        }

        for (label, rate) in [("daily", daily_rate), ("hourly", hourly_rate)] {
            if let Some(r) = rate
                && (!r.is_finite() || *r < 0.0)
            {
                warning(format!("Invalid {} rate {}: stored as 0.", label, r));
            }
        }

        store.update_settings(update)?;
        success("Settings updated.");
        print_settings(store.settings(), cfg);

        ttlog_quiet(&pool.conn, "settings", "", "Settings updated");
    }

    Ok(())
}
