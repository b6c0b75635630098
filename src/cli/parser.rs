use crate::config::Backend;
use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for lessonlog
#[derive(Parser)]
#[command(
    name = "lessonlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log paid lessons and report earnings per kid and per day",
    long_about = None
)]
pub struct Cli {
    /// Override store path (useful for tests or a second ledger)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the store backend
    #[arg(global = true, long = "backend", value_enum)]
    pub backend: Option<Backend>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Participant / date filter shared by the reporting commands.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Only lessons of this kid ("All" for every kid)
    #[arg(long)]
    pub kid: Option<String>,

    /// First day to include (YYYY-MM-DD), default: earliest lesson
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub from: Option<String>,

    /// Last day to include (YYYY-MM-DD), default: latest lesson
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub to: Option<String>,

    #[arg(
        long,
        short,
        value_name = "RANGE",
        help = "Filter by year/month/day or a custom range (YYYY, YYYY-MM, YYYY-MM-DD, A:B)"
    )]
    pub period: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the store and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

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

    /// Log a new lesson
    Add {
        /// Kid's name
        #[arg(long)]
        kid: String,

        /// Lesson date (YYYY-MM-DD), default: today
        #[arg(long, value_name = "YYYY-MM-DD")]
        date: Option<String>,

        /// Amount paid, default: `default_amount` from the config
        #[arg(long, allow_hyphen_values = true)]
        amount: Option<String>,

        /// Free-text notes (feedback, drills, ...)
        #[arg(long)]
        notes: Option<String>,
    },

    /// Show the lesson log, newest first
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Show totals, earnings per kid and lessons per day
    Report {
        #[command(flatten)]
        filter: FilterArgs,

        #[arg(long, help = "Print the report as JSON")]
        json: bool,
    },

    /// List every kid with at least one lesson
    Kids,

    /// Export lessons to a file
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[command(flatten)]
        filter: FilterArgs,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Create a backup copy of the store file
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Print the internal operations log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
