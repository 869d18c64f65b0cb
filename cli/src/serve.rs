use crate::error::{CliError, Result, ResultExt};
use crate::{logging, ui};
use account_check::CheckerConfig;
use tokio::runtime::Runtime;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone)]
pub struct ServeArgs {
    pub config_path: String,
    pub port: Option<u16>,
    pub verbose: bool,
}

pub fn execute(args: ServeArgs) -> Result<()> {
    logging::init("info", args.verbose);

    let rt = Runtime::new()
        .map_err(|e| CliError::Other(format!("Failed to create async runtime: {}", e)))?;

    rt.block_on(execute_async(args))
}

fn load_config(args: &ServeArgs) -> Result<CheckerConfig> {
    let mut config = CheckerConfig::load(&args.config_path)
        .with_context(|| format!("Failed to load configuration from {}", args.config_path))?;

    if let Some(port) = args.port {
        config.server.port = port;
    }

    Ok(config)
}

async fn execute_async(args: ServeArgs) -> Result<()> {
    let config = load_config(&args)?;
    let server = account_check::api_server(&config)?;

    let shutdown = CancellationToken::new();
    let ctrl_c_token = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c_token.cancel();
        }
    });

    ui::section_header("Account Live Checker API");
    ui::info_message(&format!(
        "Serving on http://{} (Ctrl-C to stop)",
        config.server.bind_address()
    ));

    server
        .start(shutdown)
        .await
        .with_context(|| format!("Failed to serve on {}", config.server.bind_address()))?;

    ui::success_message("Server stopped");
    Ok(())
}
