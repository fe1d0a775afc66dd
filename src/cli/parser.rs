use crate::export::ExportFormat;
use crate::models::break_window::BreakKind;
use clap::{Parser, Subcommand};

/// Command-line interface definition for studiosched
#[derive(Parser)]
#[command(
    name = "studiosched",
    version = env!("CARGO_PKG_VERSION"),
    about = "Book studio shooting slots, detect lunch/dinner break conflicts and split bookings around breaks",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Act as this role (admin, manager, professor, staff, student)
    #[arg(global = true, long = "role")]
    pub role: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "check",
            help = "Check the configuration file for missing fields and invalid break windows"
        )]
        check: bool,

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

    /// Check an interval against the lunch and dinner windows
    Check {
        /// Start time (HH:MM)
        start: String,

        /// End time (HH:MM)
        end: String,

        #[arg(long = "all", help = "Report every overlapping window, not just the first")]
        all: bool,
    },

    /// Show how an interval would be split around a break
    Split {
        /// Start time (HH:MM)
        start: String,

        /// End time (HH:MM)
        end: String,

        #[arg(long = "break", value_enum, help = "Break window to split around (default: the conflicting one)")]
        break_kind: Option<BreakKind>,

        #[arg(long = "skip-break", help = "Keep the interval whole")]
        skip_break: bool,
    },

    /// Compute worked minutes excluding a break window
    Duration {
        /// Start time (HH:MM)
        start: String,

        /// End time (HH:MM)
        end: String,

        #[arg(long = "break", value_enum, help = "Break window to subtract (default: none)")]
        break_kind: Option<BreakKind>,
    },

    /// Book a studio slot, splitting around breaks when needed
    Book {
        /// Date of the booking (YYYY-MM-DD)
        date: String,

        /// Start time (HH:MM)
        start: String,

        /// End time (HH:MM)
        end: String,

        #[arg(long = "studio", help = "Studio to book (default from config)")]
        studio: Option<String>,

        #[arg(long = "title", help = "Short description of the shoot")]
        title: Option<String>,

        #[arg(long = "break", value_enum, help = "Split around this break window")]
        break_kind: Option<BreakKind>,

        #[arg(long = "skip-break", help = "Keep the booking whole, even across a break")]
        skip_break: bool,
    },

    /// List bookings
    List {
        #[arg(long, short, help = "Filter by year/month/day, a custom range A:B, or 'all'")]
        period: Option<String>,

        #[arg(long = "today", help = "Show only today's bookings")]
        now: bool,

        #[arg(long = "studio", help = "Show only this studio")]
        studio: Option<String>,
    },

    /// Delete bookings for a date
    Del {
        /// Date of the booking (YYYY-MM-DD)
        date: String,

        #[arg(long = "id", conflicts_with = "group", help = "Row id to delete")]
        id: Option<i32>,

        #[arg(long = "group", help = "Booking group to delete (both halves of a split)")]
        group: Option<i32>,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Export bookings
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
