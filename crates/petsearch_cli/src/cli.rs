//! Command-line configuration.
//!
//! Every store and logging setting can also come from the environment so
//! the binary runs unchanged under a process supervisor.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "petsearch", version, about = "Query pet records by breed or location")]
pub struct Cli {
    #[arg(
        long,
        global = true,
        env = "PETSEARCH_DB",
        help = "SQLite store holding the pets collection"
    )]
    pub db: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        env = "PETSEARCH_LOG_LEVEL",
        help = "trace|debug|info|warn|error (defaults by build mode)"
    )]
    pub log_level: Option<String>,
    #[arg(
        long,
        global = true,
        env = "PETSEARCH_LOG_DIR",
        help = "Absolute directory for rolling log files; stderr when unset"
    )]
    pub log_dir: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Execute a GraphQL document and print the JSON response.
    Query {
        document: String,
        #[arg(long, help = "Variables as a JSON object")]
        variables: Option<String>,
    },
    /// Print pets whose breed contains TEXT.
    Breed { text: String },
    /// Print pets whose location contains TEXT.
    Location { text: String },
    /// Print the GraphQL schema.
    Sdl,
    Version,
}
