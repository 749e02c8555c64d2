use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(version)]
#[command(about = "File-backed student roster manager", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the roster data file (defaults to the user data dir)
    #[arg(short, long, global = true)]
    pub dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a student to the roster
    #[command(alias = "a")]
    Add {
        /// Unique student ID (e.g. STU001)
        id: String,

        /// Full name
        name: String,

        /// Age in years
        age: u32,

        /// Grade label (free-form, e.g. A or "B+")
        grade: String,
    },

    /// List all students
    #[command(alias = "ls")]
    List,

    /// Look up a student by ID
    #[command(alias = "find")]
    Get {
        /// Student ID to look up
        id: String,
    },

    /// Update a student; omitted fields keep their current value
    #[command(alias = "up")]
    Update {
        /// Student ID to update
        id: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New age
        #[arg(long)]
        age: Option<u32>,

        /// New grade
        #[arg(long)]
        grade: Option<String>,
    },

    /// Delete a student
    #[command(alias = "rm")]
    Delete {
        /// Student ID to delete
        id: String,
    },

    /// Show roster statistics
    Stats,

    /// Generate random passwords
    #[command(alias = "pw")]
    Passwd {
        /// Password length
        #[arg(short, long, default_value_t = 16)]
        length: usize,

        /// How many passwords to generate
        #[arg(short, long, default_value_t = 1)]
        count: usize,

        /// Character classes to draw from: upper, lower, digits, special.
        /// Repeatable; all four when omitted.
        #[arg(long = "class", value_name = "CLASS")]
        classes: Vec<String>,
    },

    /// Show or set configuration values
    Config {
        /// Config key (currently: data-file)
        key: Option<String>,

        /// New value for the key
        value: Option<String>,
    },
}
