use crate::error::{CliError, Result, ResultExt};
use crate::progress::BatchProgress;
use crate::{logging, ui};
use account_check::{load_usernames, render_summary, summarize, CheckerConfig, CsvReporter};
use std::path::PathBuf;
use tokio::runtime::Runtime;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone)]
pub struct CheckArgs {
    pub config_path: String,
    pub input: Option<String>,
    pub output_dir: Option<String>,
    pub verbose: bool,
}

pub fn execute(args: CheckArgs) -> Result<()> {
    logging::init("warn", args.verbose);

    let rt = Runtime::new()
        .map_err(|e| CliError::Other(format!("Failed to create async runtime: {}", e)))?;

    rt.block_on(execute_async(args))
}

/// Load configuration and apply command line overrides
fn load_config(args: &CheckArgs) -> Result<CheckerConfig> {
    let mut config = CheckerConfig::load(&args.config_path)
        .with_context(|| format!("Failed to load configuration from {}", args.config_path))?;

    if let Some(ref input) = args.input {
        config.batch.usernames_file = PathBuf::from(input);
    }
    if let Some(ref output_dir) = args.output_dir {
        config.batch.output_dir = PathBuf::from(output_dir);
    }

    Ok(config)
}

async fn execute_async(args: CheckArgs) -> Result<()> {
    ui::section_header("Account Live Checker");

    ui::status_message("Loading configuration");
    let config = load_config(&args)?;

    let usernames_file = config.batch.usernames_file.clone();
    let usernames = match load_usernames(&usernames_file) {
        Ok(usernames) if usernames.is_empty() => {
            ui::warning_message(&format!(
                "No usernames found in {}",
                usernames_file.display()
            ));
            return Ok(());
        }
        Ok(usernames) => usernames,
        Err(err) if err.is_input_missing() => {
            ui::warning_message(&err.to_string());
            ui::info_message(&format!(
                "Create {} with one username per line",
                usernames_file.display()
            ));
            return Ok(());
        }
        Err(err) => {
            return Err(CliError::from(err)
                .with_context(format!("Failed to read {}", usernames_file.display())))
        }
    };
    ui::success_message(&format!(
        "Loaded {} usernames from {}",
        usernames.len(),
        usernames_file.display()
    ));

    let cancel = CancellationToken::new();
    let runner = account_check::batch_runner(&config)?.with_cancellation(cancel.clone());

    let ctrl_c_token = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c_token.cancel();
        }
    });

    if args.verbose {
        let (min, max) = config.batch.delay_bounds();
        ui::info_message(&format!(
            "Pausing {:.1}-{:.1}s between lookups",
            min.as_secs_f64(),
            max.as_secs_f64()
        ));
    }

    let progress = BatchProgress::new(usernames.len(), args.verbose);
    let run = runner
        .run_with_progress(&usernames, Some(progress.callback()))
        .await?;
    progress.finish(run.len(), usernames.len());

    let summary = summarize(&run);
    ui::section_header("Summary");
    print!("{}", render_summary(&summary, &run));

    ui::section_header("Reports");
    let reporter = CsvReporter::new(&config.batch.output_dir, config.profile_url_base.clone());
    let exported = reporter.export(&run).with_context(|| {
        format!(
            "Failed to write CSV reports to {}",
            config.batch.output_dir.display()
        )
    })?;

    match exported.live {
        Some(path) => ui::success_message(&format!("Live accounts saved to {}", path.display())),
        None => ui::info_message("No live accounts to save"),
    }
    match exported.dead {
        Some(path) => ui::success_message(&format!(
            "Unavailable accounts saved to {}",
            path.display()
        )),
        None => ui::info_message("No unavailable accounts to save"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn args(config_path: String, input: String) -> CheckArgs {
        CheckArgs {
            config_path,
            input: Some(input),
            output_dir: None,
            verbose: false,
        }
    }

    #[test]
    fn test_flags_override_config() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("account-check.toml");
        fs::write(
            &config_path,
            "[batch]\nusernames_file = \"from-config.txt\"\noutput_dir = \"config-out\"\n",
        )
        .unwrap();

        let mut check_args = args(
            config_path.to_string_lossy().to_string(),
            "from-flag.txt".to_string(),
        );
        check_args.output_dir = Some("flag-out".to_string());

        let config = load_config(&check_args).unwrap();
        assert_eq!(config.batch.usernames_file, PathBuf::from("from-flag.txt"));
        assert_eq!(config.batch.output_dir, PathBuf::from("flag-out"));
    }

    #[tokio::test]
    async fn test_missing_usernames_file_is_a_no_op() {
        let temp_dir = tempdir().unwrap();
        let missing = temp_dir.path().join("usernames.txt");

        let result = execute_async(args(
            temp_dir.path().join("none.toml").to_string_lossy().to_string(),
            missing.to_string_lossy().to_string(),
        ))
        .await;

        assert!(result.is_ok());
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_blank_usernames_file_is_a_no_op() {
        let temp_dir = tempdir().unwrap();
        let input = temp_dir.path().join("usernames.txt");
        fs::write(&input, "\n   \n\n").unwrap();

        let result = execute_async(args(
            temp_dir.path().join("none.toml").to_string_lossy().to_string(),
            input.to_string_lossy().to_string(),
        ))
        .await;

        assert!(result.is_ok());
    }
}
