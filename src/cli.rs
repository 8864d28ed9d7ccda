//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - The global --json flag is inherited by all subcommands
//! - Running without a subcommand is equivalent to `all`

use clap::{Parser, Subcommand};

/// taskmodel - task domain model demonstrations
#[derive(Parser, Debug)]
#[command(name = "taskmodel")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output reports as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show that value copies are independent
    Values,
    /// Show that cloned handles alias one record
    References,
    /// Show the three parameter-passing modes
    Passing,
    /// Show indexed and sequential traversal of the sample list
    Loops,
    /// Show boxing and checked unboxing
    Boxing,
    /// Run every demonstration
    All,
}
