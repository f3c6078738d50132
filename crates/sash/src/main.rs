//! sash - Entry Point
//!
//! Binary entry point for the Lattice administration shell.

// Force-link sash-commands to ensure linkme module registrations are included
extern crate sash_commands;

use clap::Parser;

/// Command line interface for the sash administration shell
#[derive(Parser, Debug)]
#[command(name = "sash")]
#[command(about = "sash - administration shell for the Lattice platform")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Command to run, followed by its arguments; defaults to `list`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub invocation: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let output = sash::run(cli.config.as_deref(), &cli.invocation).await?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
