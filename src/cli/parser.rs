use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for siteflow
/// Productivity and flow analytics for construction site activities
#[derive(Parser)]
#[command(
    name = "siteflow",
    version = env!("CARGO_PKG_VERSION"),
    about = "Lean-construction analytics: man-hours, RUP and flow anomalies of a site activity",
    long_about = None
)]
pub struct Cli {
    /// Override the configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Override the activity's analysis interval (minutes)
    #[arg(global = true, long = "interval", value_name = "MINUTES")]
    pub interval: Option<i64>,

    /// Disable coloured output
    #[arg(global = true, long = "no-color")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file with default values
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
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

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show man-hours, machine hours, RUP and productivity rate
    Metrics {
        /// Activity file (.json, .yml, .yaml)
        file: String,
    },

    /// Show the flow anomaly blocks of the shift
    Flow {
        /// Activity file (.json, .yml, .yaml)
        file: String,
    },

    /// Metrics and flow together
    Analyze {
        /// Activity file (.json, .yml, .yaml)
        file: String,

        #[arg(long = "json", help = "Print the report as JSON")]
        json: bool,
    },

    /// Validate an activity before saving it
    Check {
        /// Activity file (.json, .yml, .yaml)
        file: String,
    },

    /// Sort sub-steps and merge duplicate crew assignments
    Normalize {
        /// Activity file (.json, .yml, .yaml)
        file: String,

        #[arg(long = "write", help = "Save the result back into the file")]
        write: bool,
    },

    /// Print the structured input for the narrative report generator
    Narrative {
        /// Activity file (.json, .yml, .yaml)
        file: String,
    },

    /// Export the activity report
    Export {
        /// Activity file (.json, .yml, .yaml)
        file: String,

        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        #[arg(long = "out", value_name = "FILE")]
        out: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
