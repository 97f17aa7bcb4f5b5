use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "nsmeta",
    bin_name = "nsmeta",
    version,
    disable_help_subcommand = true
)]
#[command(about = "Query NetSuite metadata exported under .netsuite-metadata/", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Environment to query, e.g. qa or prod (defaults to active_env.json)
    #[arg(long, global = true, help_heading = "Options")]
    pub env: Option<String>,

    /// Directory holding the exported metadata
    #[arg(
        long,
        global = true,
        value_name = "PATH",
        env = "NSMETA_METADATA_DIR",
        help_heading = "Options"
    )]
    pub metadata_dir: Option<PathBuf>,

    /// Log diagnostics to stderr
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// List every record key in the environment's index
    #[command(display_order = 1)]
    ListRecords,

    /// Print a record definition as stored
    #[command(display_order = 2)]
    GetRecord { record_key: String },

    /// List the field ids defined on a record
    #[command(display_order = 3)]
    ListFields { record_key: String },

    /// Find every record that defines a field
    #[command(display_order = 4)]
    FindField { field_id: String },

    /// Build a SuiteQL SELECT for a record and some of its fields
    #[command(display_order = 5)]
    SuggestSuiteql {
        record_key: String,

        /// Comma-separated field ids, in the order the columns should appear
        #[arg(long, value_name = "F1,F2,...")]
        fields: String,
    },
}

pub fn print_usage() {
    let mut cmd = Cli::command();
    print!("{}", cmd.render_help());
}
