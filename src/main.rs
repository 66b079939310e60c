use clap::{Parser, Subcommand};
use gousdbrl::cli::{setup, ui};
use gousdbrl::core::log::init_logging;
use std::process::ExitCode;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the current rate and compare it with the last one (default)
    Check,
    /// Show the last stored rate
    Last,
    /// Create default configuration
    Setup,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command.unwrap_or(Commands::Check) {
        Commands::Check => {
            gousdbrl::run_command(gousdbrl::AppCommand::Check, cli.config_path.as_deref()).await
        }
        Commands::Last => {
            gousdbrl::run_command(gousdbrl::AppCommand::Last, cli.config_path.as_deref()).await
        }
        Commands::Setup => setup::setup().map(|path| {
            println!("Created default configuration at {}", path.display());
        }),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Application failed");
            println!("{}", ui::style_text(&format!("Error: {e:#}"), ui::StyleType::Error));
            ExitCode::FAILURE
        }
    }
}
