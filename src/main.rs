//! taskmodel CLI - demonstration harness
//!
//! Usage: taskmodel [COMMAND]
//!
//! Commands:
//!   values      Show that value copies are independent
//!   references  Show that cloned handles alias one record
//!   passing     Show the three parameter-passing modes
//!   loops       Show indexed and sequential traversal
//!   boxing      Show boxing and checked unboxing
//!   all         Run every demonstration (default)

use anyhow::Result;
use clap::Parser;

use taskmodel::demo;

mod cli;
use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let reports = match cli.command.unwrap_or(Commands::All) {
        Commands::Values => vec![demo::value_semantics()],
        Commands::References => vec![demo::reference_semantics()],
        Commands::Passing => vec![demo::passing_modes()],
        Commands::Loops => vec![demo::loops()],
        Commands::Boxing => vec![demo::boxing()?],
        Commands::All => demo::all()?,
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            println!("{}", report.render());
        }
    }

    Ok(())
}
