use tracing_subscriber::{fmt, EnvFilter};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise our crates log at `default_level`, or
/// `debug` with `verbose`. Logs go to stderr so stdout stays clean for
/// reports and JSON.
pub fn init(default_level: &str, verbose: bool) {
    let level = if verbose { "debug" } else { default_level };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,account_check={level},acheck={level},tower_http={level}"
        ))
    });

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
