pub mod check_config;
pub mod run;
pub mod serve;

use crate::Config;
use clap::Subcommand;
use std::path::PathBuf;

pub type CommandResult = Result<(), lambda_runtime::Error>;

#[derive(Subcommand)]
pub enum Commands {
    /// Serve Lambda invocations (default)
    Serve,
    /// Run a single analysis locally and print the response envelope
    Run {
        #[arg(short, long, help = "Read the sales CSV from this file instead of S3")]
        file: Option<PathBuf>,
    },
    /// Validate the configuration and print it with secrets masked
    CheckConfig,
}

pub async fn handle_command(command: Commands, config: Config) -> CommandResult {
    match command {
        Commands::Serve => serve::handle_serve_command(config).await,
        Commands::Run { file } => run::handle_run_command(config, file).await,
        Commands::CheckConfig => check_config::handle_check_config_command(&config),
    }
}
