use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rCheckin
/// CLI application to track event attendee check-ins with SQLite
#[derive(Parser)]
#[command(
    name = "rcheckin",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple event check-in CLI: track attendee arrivals and departures using SQLite",
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

    /// Manage the configuration file (view or check)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Run configuration file migrations if needed")]
        migrate: bool,
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

    /// Bulk-load events and attendees from a JSON file
    Load {
        /// Path of the JSON file (communities + people)
        file: String,

        #[arg(long = "replace", help = "Clear existing events and attendees first")]
        replace: bool,
    },

    /// List the known events
    Events,

    /// Print the attendee roster of an event
    Roster {
        /// Event id (falls back to default_event from the config)
        event: Option<String>,
    },

    /// Check an attendee in
    Checkin {
        /// Attendee id
        attendee: String,
    },

    /// Check an attendee out
    Checkout {
        /// Attendee id
        attendee: String,

        #[arg(
            long = "force",
            help = "Check out even within the post-check-in grace interval"
        )]
        force: bool,
    },

    /// Print the roster summary of an event (present, missing, by company)
    Summary {
        /// Event id (falls back to default_event from the config)
        event: Option<String>,
    },

    /// Export a roster to file
    Export {
        /// Output format
        #[arg(value_enum)]
        format: ExportFormat,

        /// Absolute path of the output file
        file: String,

        /// Restrict to one event id
        #[arg(long = "event")]
        event: Option<String>,

        #[arg(long = "force", help = "Overwrite the output file without asking")]
        force: bool,
    },
}
