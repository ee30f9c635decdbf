use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for staffclock
#[derive(Parser)]
#[command(
    name = "staffclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "Geofenced staff attendance: clock in/out near the salon and track weekly hours",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Use this configuration file instead of ~/.staffclock/staffclock.conf
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Allow clock actions regardless of distance to the site
    #[arg(global = true, long = "no-distance-check")]
    pub no_distance_check: bool,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Who is clocking, where they are, and (optionally) when.
#[derive(Args, Debug, Clone)]
pub struct ClockArgs {
    /// Staff identifier (defaults to `staff_id` from the configuration)
    #[arg(long = "staff")]
    pub staff: Option<String>,

    /// Current latitude in decimal degrees
    #[arg(long = "lat", allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Current longitude in decimal degrees
    #[arg(long = "lng", allow_negative_numbers = true)]
    pub lng: Option<f64>,

    /// Evaluate at this local time instead of now (YYYY-MM-DD HH:MM)
    #[arg(long = "at", value_name = "DATETIME")]
    pub at: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view, check, migrate or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Show the current attendance status and the next allowed action
    Status(ClockArgs),

    /// Clock in at the current position
    In(ClockArgs),

    /// Clock out at the current position
    Out(ClockArgs),

    /// Show hours worked in a Sunday–Saturday week
    Week {
        #[arg(long = "staff")]
        staff: Option<String>,

        /// Any date inside the week (YYYY-MM-DD, default today)
        #[arg(long = "date")]
        date: Option<String>,
    },

    /// List recorded events
    List {
        #[arg(long = "staff")]
        staff: Option<String>,

        #[arg(long, short, help = "Filter by year/month/day or a custom range (A:B)")]
        period: Option<String>,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Export recorded events
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long = "staff")]
        staff: Option<String>,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range (A:B)"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
