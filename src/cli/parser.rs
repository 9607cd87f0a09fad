use crate::core::generate::MAX_WEEKS;
use crate::export::ExportFormat;
use crate::models::periodicity::Periodicity;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rHabits
/// CLI application to track daily and weekly habits with SQLite
#[derive(Parser)]
#[command(
    name = "rhabits",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple habit tracker CLI: define daily or weekly habits, check them off and follow your streaks",
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

fn parse_periodicity(s: &str) -> Result<Periodicity, String> {
    Periodicity::from_code(s).ok_or_else(|| format!("'{s}' is not a periodicity (daily, weekly)"))
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
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

    /// Create a new habit
    Create {
        /// Habit name
        name: String,

        #[arg(long, short = 'd', help = "Optional description")]
        description: Option<String>,

        #[arg(
            long,
            short = 'p',
            default_value = "daily",
            value_parser = parse_periodicity,
            help = "How often the habit is due: daily or weekly"
        )]
        periodicity: Periodicity,
    },

    /// List habits
    List {
        #[arg(
            long,
            short = 'p',
            value_parser = parse_periodicity,
            help = "Only show habits with this periodicity"
        )]
        periodicity: Option<Periodicity>,
    },

    /// Show a habit with its statistics
    Details {
        /// Habit id
        id: i64,
    },

    /// Check off a habit
    Check {
        /// Habit id
        id: i64,

        #[arg(
            long = "at",
            value_name = "DATETIME",
            help = "Check-off time (YYYY-MM-DD, YYYY-MM-DD HH:MM[:SS]); defaults to now"
        )]
        at: Option<String>,
    },

    /// Show the last check-off of a habit
    Last {
        /// Habit id
        id: i64,
    },

    /// List check-offs (all habits, or one with --habit)
    CheckOffs {
        #[arg(long = "habit", value_name = "ID", help = "Only check-offs of this habit")]
        habit: Option<i64>,
    },

    /// Show streaks of a habit, or the longest streak of all habits
    Streak {
        /// Habit id
        #[arg(required_unless_present = "all", conflicts_with = "all")]
        id: Option<i64>,

        #[arg(long = "all", help = "Longest streak across all habits")]
        all: bool,
    },

    /// Delete a habit (and its check-offs), or every habit with --all
    Delete {
        /// Habit id
        #[arg(required_unless_present = "all", conflicts_with = "all")]
        id: Option<i64>,

        #[arg(long = "all", help = "Delete every habit and check-off")]
        all: bool,

        #[arg(long, short = 'f', help = "Do not ask for confirmation")]
        force: bool,
    },

    /// Generate example habits with a synthetic history
    Generate {
        /// First day of the generated history (YYYY-MM-DD)
        start_date: String,

        #[arg(
            long,
            short = 'w',
            value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_WEEKS)),
            help = "Weeks of history to generate (default from config)"
        )]
        weeks: Option<u32>,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Export check-offs
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long = "habit", value_name = "ID", help = "Only check-offs of this habit")]
        habit: Option<i64>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
