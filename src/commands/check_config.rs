use super::CommandResult;
use crate::Config;
use tracing::info;

pub fn handle_check_config_command(config: &Config) -> CommandResult {
    config.validate()?;
    info!("Configuration is valid");
    println!("{}", serde_json::to_string_pretty(&config.redacted())?);
    Ok(())
}
