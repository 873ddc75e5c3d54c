//! xferplan CLI - Bulk data transfer time estimator.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

mod commands;
mod display;
mod logging;

use commands::estimate::EstimateArgs;

#[derive(Parser)]
#[command(name = "xferplan")]
#[command(about = "Estimate bulk data transfer time and daily window schedules", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate transfer duration and daily windows
    Estimate(EstimateArgs),

    /// List network profile presets
    Profiles,

    /// Prompt for every parameter, then estimate
    Interactive,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Estimate(args) => commands::estimate::estimate(&args, cli.quiet),
        Commands::Profiles => commands::profiles::list_profiles(),
        Commands::Interactive => commands::interactive::interactive(),
    }
}
