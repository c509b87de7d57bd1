use crate::export::ExportFormat;
use crate::models::PermissionFlag;
use clap::{Parser, Subcommand};

/// Command-line interface definition for attendo
/// CLI application to manage employee attendance over a local JSON store
#[derive(Parser)]
#[command(
    name = "attendo",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple attendance CLI: clock in/out, approve entries, report and manage the company directory",
    long_about = None
)]
pub struct Cli {
    /// Override data directory (useful for tests or portable setups)
    #[arg(global = true, long = "data")]
    pub data: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and data directory
    Init,

    /// Manage the configuration file (view or check)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Record a clock event for a user
    Clock {
        /// Clock action: in | out
        action: String,

        /// User id to record the event for
        #[arg(long = "user")]
        user: i64,
    },

    /// Self-service kiosk entry (single action, terse output)
    Kiosk {
        /// Clock action: in | out
        action: String,

        #[arg(long = "user")]
        user: i64,
    },

    /// Approve an attendance record
    Approve {
        /// Record id to approve
        record_id: i64,
    },

    /// Manage users
    User {
        #[command(subcommand)]
        action: UserCmd,
    },

    /// Manage companies
    Company {
        #[command(subcommand)]
        action: CompanyCmd,
    },

    /// Attendance report: counts and paginated history
    Report {
        /// Page of the history listing (page size 10)
        #[arg(long, default_value_t = 1)]
        page: usize,

        #[arg(long, help = "List only records waiting for approval")]
        pending: bool,

        #[arg(long, help = "Print the monthly hours chart data")]
        monthly: bool,
    },

    /// View or change system settings
    Settings {
        #[arg(long = "print", help = "Print the current settings")]
        print: bool,

        /// Workday start time (HH:MM)
        #[arg(long = "start", value_name = "HH:MM")]
        start: Option<String>,

        /// Workday end time (HH:MM)
        #[arg(long = "end", value_name = "HH:MM")]
        end: Option<String>,

        /// Work week length in days (1-7)
        #[arg(long = "week-days", value_name = "N")]
        week_days: Option<u8>,

        /// Flip a single permission flag
        #[arg(long = "toggle", value_enum)]
        toggle: Option<PermissionFlag>,
    },

    /// Export attendance records
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the data directory
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },
}

#[derive(Subcommand)]
pub enum UserCmd {
    /// Add a new user
    Add {
        #[arg(long)]
        name: String,

        /// Owning company id
        #[arg(long = "company")]
        company: i64,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        role: Option<String>,
    },

    /// List users, optionally narrowed to one company
    List {
        #[arg(long = "company")]
        company: Option<i64>,
    },

    /// Delete a user by id
    Del { id: i64 },

    /// Reassign a user to another company
    Assign {
        id: i64,

        #[arg(long = "company")]
        company: i64,
    },

    /// Toggle a user's active flag
    Toggle { id: i64 },
}

#[derive(Subcommand)]
pub enum CompanyCmd {
    /// Add a new company
    Add {
        #[arg(long)]
        name: String,

        #[arg(long = "reg-number")]
        reg_number: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        address: Option<String>,
    },

    /// List companies
    List,

    /// Delete a company (refused while users are assigned to it)
    Del { id: i64 },

    /// Edit company fields in place
    Edit {
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long = "reg-number")]
        reg_number: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        address: Option<String>,

        #[arg(long, value_name = "BOOL")]
        active: Option<bool>,
    },
}
