use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

/// Stop hook for Claude Code that blocks stopping while issues remain.
#[derive(Debug, Parser)]
#[command(name = "bonzai-burn-hook", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run as a Claude Code Stop hook (reads stdin, writes stdout, exits 0 or 2)
    Hook {
        /// Path to the KDL config file listing issues
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Validate a config file and report what the hook would do
    Check {
        /// Path to the KDL config file to validate
        #[arg(long)]
        config: PathBuf,
    },
}

fn main() -> ExitCode {
    bonzai_burn_hook::init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Hook { config } => bonzai_burn_hook::run_hook(config.as_deref()),
        Commands::Check { config } => bonzai_burn_hook::run_check(&config),
    }
}
