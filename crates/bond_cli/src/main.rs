//! bondpricer - Monte Carlo bond pricing from the command line.

use std::path::PathBuf;
use std::process::ExitCode;

use bond_cli::commands::{self, price::PriceArgs};
use bond_cli::config::PricerConfig;
use bond_cli::Result;
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Monte Carlo bond pricer
#[derive(Parser)]
#[command(name = "bondpricer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "bondpricer.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a bond described by command-line flags
    Price(PriceArgs),

    /// Enter the bond interactively
    Interactive,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins; --verbose only raises the fallback level
    let fallback = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("An error occurred: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let config = PricerConfig::load_with_env_and_validate(&cli.config)?;
    debug!(path = %cli.config.display(), ?config, "configuration loaded");

    match cli.command {
        Commands::Price(args) => {
            commands::price::run(&args, &config, &mut std::io::stdout().lock())
        }
        Commands::Interactive => commands::interactive::run_stdio(&config),
    }
}
