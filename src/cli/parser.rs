use crate::export::ExportFormat;
use crate::models::WorkType;
use clap::{Parser, Subcommand};

fn parse_work_type(s: &str) -> Result<WorkType, String> {
    s.parse::<WorkType>().map_err(|e| e.to_string())
}

/// Command-line interface definition for ftracker
/// CLI application to track freelance days and hours, and bill them
#[derive(Parser)]
#[command(
    name = "ftracker",
    version = env!("CARGO_PKG_VERSION"),
    about = "A freelance time tracker: record worked days and hours, print activity reports and invoices",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "fix",
            requires = "check",
            help = "Write missing fields with their default values (with --check)"
        )]
        fix: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show or update billing rates and personal/client details
    Settings {
        #[arg(long = "daily-rate", help = "Daily billing rate (TJM)")]
        daily_rate: Option<f64>,

        #[arg(long = "hourly-rate", help = "Hourly billing rate")]
        hourly_rate: Option<f64>,

        #[arg(long, help = "ISO 4217 currency code (EUR, USD, ...)")]
        currency: Option<String>,

        #[arg(long, help = "Full name printed on the documents")]
        name: Option<String>,

        #[arg(long, help = "Postal address printed on the invoice")]
        address: Option<String>,

        #[arg(long, help = "SIRET number printed on the invoice")]
        siret: Option<String>,

        #[arg(long, help = "Comma-separated client email addresses")]
        emails: Option<String>,
    },

    /// Record the amount worked on a day (0 removes it)
    Set {
        /// Date worked (YYYY-MM-DD)
        date: String,

        /// Days (0, 0.5, 1) or hours (0..=12)
        amount: f64,

        #[arg(long = "type", value_parser = parse_work_type, default_value = "daily")]
        work_type: WorkType,

        #[arg(long = "note", help = "Free-text note stored with the entry")]
        note: Option<String>,

        #[arg(long = "weekend", help = "Allow recording on a Saturday or Sunday")]
        weekend: bool,
    },

    /// Delete an entry by ID
    Del {
        /// Entry id (see `list --entries`)
        id: String,
    },

    /// List a month, day by day, for one work type
    List {
        #[arg(long, short, value_name = "YYYY-MM", help = "Month to show (default: current)")]
        month: Option<String>,

        #[arg(long = "type", value_parser = parse_work_type, default_value = "daily")]
        work_type: WorkType,

        #[arg(long = "entries", help = "List the raw entries of the month with their ids")]
        entries: bool,
    },

    /// Show the month totals
    Summary {
        #[arg(long, short, value_name = "YYYY-MM")]
        month: Option<String>,
    },

    /// Generate the activity report PDF
    Report {
        #[arg(long, short, value_name = "YYYY-MM")]
        month: Option<String>,

        #[arg(long, value_name = "DIR", help = "Output directory (default: output_dir)")]
        out: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Generate the invoice PDF
    Invoice {
        #[arg(long, short, value_name = "YYYY-MM")]
        month: Option<String>,

        #[arg(long, value_name = "DIR", help = "Output directory (default: output_dir)")]
        out: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Email the activity report and the invoice to the client
    Send {
        #[arg(long, short, value_name = "YYYY-MM")]
        month: Option<String>,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Export recorded entries
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
