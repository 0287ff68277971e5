use clap::Parser;
use sales_insight::commands::{Commands, handle_command};
use sales_insight::{Config, logging};
use tracing::error;

#[derive(Parser)]
#[command(name = "sales-insight")]
#[command(about = "Aggregate sales CSV data from S3 and summarize it with AWS Bedrock")]
struct Cli {
    #[arg(short, long, help = "Path to configuration file")]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from_file(path),
        None => Config::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    logging::init(&config.logging);

    let command = cli.command.unwrap_or(Commands::Serve);
    if let Err(e) = handle_command(command, config).await {
        error!("Command failed: {}", e);
        std::process::exit(1);
    }
}
