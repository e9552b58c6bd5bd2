use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for hourtracker
#[derive(Parser)]
#[command(
    name = "hourtracker",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log working hours and travel time, see summaries, export to CSV/Excel",
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

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use instead of the default")]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Add a time entry
    Add {
        /// Date of the entry (YYYY-MM-DD, `today` or `yesterday`)
        date: String,

        #[arg(long = "type", short = 't', help = "Category or custom tag")]
        entry_type: String,

        #[arg(long = "hours", short = 'H', help = "Hours worked (decimal)")]
        hours: f64,

        #[arg(long = "travel", default_value_t = 0.0, help = "Travel time in hours")]
        travel: f64,

        #[arg(long = "name", short = 'n', help = "Optional name / description")]
        name: Option<String>,

        #[arg(long = "notes", help = "Optional free-form notes")]
        notes: Option<String>,

        #[arg(long = "recorded", short = 'r', help = "Mark as already recorded")]
        recorded: bool,
    },

    /// Edit an existing entry by id (unspecified fields keep their value)
    Edit {
        id: i64,

        #[arg(long = "date")]
        date: Option<String>,

        #[arg(long = "type", short = 't')]
        entry_type: Option<String>,

        #[arg(long = "hours", short = 'H')]
        hours: Option<f64>,

        #[arg(long = "travel")]
        travel: Option<f64>,

        #[arg(long = "name", short = 'n')]
        name: Option<String>,

        #[arg(long = "notes")]
        notes: Option<String>,

        #[arg(long = "recorded", conflicts_with = "unrecorded", help = "Mark as recorded")]
        recorded: bool,

        #[arg(long = "unrecorded", help = "Mark as not recorded")]
        unrecorded: bool,
    },

    /// Delete an entry by id
    Del {
        id: i64,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List entries, newest first
    List {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,

        #[arg(long = "type", short = 't', help = "Only entries of this type")]
        entry_type: Option<String>,

        #[arg(long = "recorded", conflicts_with = "unrecorded")]
        recorded: bool,

        #[arg(long = "unrecorded")]
        unrecorded: bool,
    },

    /// Show totals per type, overall and by recorded status
    Summary {
        #[arg(long, short, help = "Restrict to year/month/day or a custom range")]
        period: Option<String>,
    },

    /// Delete ALL entries (irreversible)
    Reset {
        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Export entries to CSV or XLSX
    Export {
        #[arg(long, value_enum, help = "Output format (default: from file extension)")]
        format: Option<ExportFormat>,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'x', help = "Include Name and Notes columns (CSV)")]
        extended: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Import entries from a CSV file (rows are always appended)
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,
    },
}
