use crate::error::{CliError, Result, ResultExt};
use crate::logging;
use account_check::{normalize_username, BatchRunner, CheckerConfig, HikerClient, NoDelay};
use tokio::runtime::Runtime;

#[derive(Debug, Clone)]
pub struct LookupArgs {
    pub username: String,
    pub config_path: String,
    pub verbose: bool,
}

pub fn execute(args: LookupArgs) -> Result<()> {
    logging::init("warn", args.verbose);

    let rt = Runtime::new()
        .map_err(|e| CliError::Other(format!("Failed to create async runtime: {}", e)))?;

    let output = rt.block_on(execute_async(args))?;
    println!("{output}");
    Ok(())
}

/// Classify one username and render the verdict as pretty JSON
async fn execute_async(args: LookupArgs) -> Result<String> {
    let username = normalize_username(&args.username)
        .ok_or_else(|| CliError::Other("Username must not be empty".to_string()))?;

    let config = CheckerConfig::load(&args.config_path)
        .with_context(|| format!("Failed to load configuration from {}", args.config_path))?;

    let client = HikerClient::new(&config.provider)?;
    let runner = BatchRunner::new(client, NoDelay).with_profile_url_base(config.profile_url_base);

    let verdict = runner.check_one(username).await;
    Ok(serde_json::to_string_pretty(&verdict)?)
}
