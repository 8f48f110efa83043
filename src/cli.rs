use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// parkplan - plan a theme park day from plain text and follow live wait times
#[derive(Debug, Parser)]
#[command(name = "parkplan")]
#[command(about = "Plan a theme park day from plain text and follow live wait times", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute (if not specified, enters interactive mode)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Park slug to use instead of the configured one
    #[arg(long, global = true)]
    pub park: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Show the plan
    #[command(alias = "ls")]
    List {
        /// Add current wait times to each item
        #[arg(long)]
        live: bool,
    },

    /// Add an activity, e.g. `parkplan add 9am Rope drop at Space Mountain`
    Add {
        /// Activity text, optionally with a time before or after it
        #[arg(required = true, num_args = 1..)]
        entry: Vec<String>,

        /// Time slot (10pm, 22:00, 2200, 7pm-8pm, 19:00-20:00)
        #[arg(long, short)]
        time: Option<String>,
    },

    /// Change the name or time of an item
    Edit {
        /// Item id or a unique prefix of it
        id: String,

        #[arg(long, short)]
        name: Option<String>,

        /// New time slot; an empty string removes it
        #[arg(long, short, allow_hyphen_values = true)]
        time: Option<String>,
    },

    /// Remove an item
    #[command(alias = "rm")]
    Remove {
        /// Item id or a unique prefix of it
        id: String,
    },

    /// Remove every item
    Clear,

    /// Import a schedule from a text, CSV or TSV file (stdin when omitted)
    Import {
        file: Option<PathBuf>,

        /// Replace the current plan instead of appending
        #[arg(long)]
        replace: bool,
    },

    /// Show current wait times for the park
    Waits {
        /// Only show attractions whose name contains this text
        #[arg(long, short)]
        filter: Option<String>,

        /// Keep refreshing until interrupted
        #[arg(long, short)]
        watch: bool,
    },

    /// Show how soon each timed item starts
    #[command(alias = "res")]
    Reservations,

    /// List supported parks
    Parks,

    /// View or modify configuration
    Config {
        #[command(subcommand)]
        action: ConfigActions,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum ConfigActions {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key
        #[arg(required = true)]
        key: String,

        /// Configuration value
        #[arg(required = true, allow_hyphen_values = true)]
        value: String,
    },
}
