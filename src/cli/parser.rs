use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for mushtrace
#[derive(Parser)]
#[command(
    name = "mushtrace",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log mushroom shipments, print traceability labels, export logs and submit invoices",
    long_about = None
)]
pub struct Cli {
    /// Use a different configuration file
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Override the shipment log file (JSON list of labels)
    #[arg(global = true, long = "log-file", value_name = "FILE")]
    pub log_file: Option<String>,

    /// Override the settings file
    #[arg(global = true, long = "settings", value_name = "FILE")]
    pub settings: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and an empty log
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

        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },

    /// Show the mushroom type and restaurant catalogs
    Catalog,

    /// View or change user settings
    Settings {
        #[arg(long = "print", help = "Print the current settings")]
        print: bool,

        /// Set a value, e.g. `--set export_folder=/srv/exports` (repeatable)
        #[arg(long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,

        #[arg(long = "toggle-theme", help = "Switch between the dark and light theme")]
        toggle_theme: bool,
    },

    /// Add a shipment entry
    Add {
        /// Mushroom type id (see `mushtrace catalog`)
        mushroom: String,

        /// Box number
        #[arg(value_name = "BOX")]
        box_number: String,

        /// Pack date (YYYY-MM-DD)
        pack_date: String,

        /// Ship date (YYYY-MM-DD)
        ship_date: String,

        /// Restaurant id (defaults to the `default_restaurant_id` setting)
        #[arg(long, short)]
        restaurant: Option<String>,
    },

    /// List (and search) logged shipments
    List {
        /// Case-insensitive text to search for
        #[arg(long, short)]
        search: Option<String>,

        /// Earliest pack date (YYYY-MM-DD, inclusive)
        #[arg(long)]
        from: Option<String>,

        /// Latest pack date (YYYY-MM-DD, inclusive)
        #[arg(long)]
        to: Option<String>,

        /// Show only the first N matches
        #[arg(long, short)]
        limit: Option<usize>,
    },

    /// Delete one entry by its position (as shown by `list`)
    Del {
        /// 1-based position
        position: usize,

        /// Do not ask for confirmation
        #[arg(long, short)]
        yes: bool,
    },

    /// Delete all entries (a backup is written first)
    Clear {
        /// Do not ask for confirmation
        #[arg(long, short)]
        yes: bool,
    },

    /// Delivery statistics per mushroom type and per pack date
    Stats,

    /// Write a timestamped backup of the log
    Backup {
        /// Compress the backup as .zip
        #[arg(long)]
        compress: bool,
    },

    /// List or delete backups
    Backups {
        /// Delete the named backup file
        #[arg(long, value_name = "FILE")]
        delete: Option<String>,
    },

    /// Replace the log with the contents of a backup file
    Restore {
        /// Backup file name (inside the backups folder) or path
        file: String,
    },

    /// Export the log (csv, excel, or a pdf invoice of the latest entry)
    Export {
        /// Export format (defaults to the `default_export_format` setting)
        #[arg(long, value_enum)]
        format: Option<ExportFormat>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Export a PDF summary report with counts and the full table
    Report {
        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Submit invoices to the payments gateway
    Invoice {
        /// Only the most recent entry
        #[arg(long)]
        latest: bool,

        /// Use the live gateway for this run
        #[arg(long, conflicts_with = "mock")]
        live: bool,

        /// Use the mock gateway for this run
        #[arg(long)]
        mock: bool,
    },

    /// Show gateway mode and log status
    Status,
}
