use clap::{Parser, Subcommand};

/// Configuration file read when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "account-check.toml";

#[derive(Parser)]
#[command(name = "acheck")]
#[command(
    author,
    version,
    about = "Check whether social media accounts are live"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check every username listed in a file and export CSV reports
    Check {
        /// Configuration file path (defaults are used when it does not exist)
        #[clap(short, long, default_value = DEFAULT_CONFIG_FILE)]
        config: String,

        /// Newline-delimited username list (overrides batch.usernames_file)
        #[clap(short, long)]
        input: Option<String>,

        /// Directory receiving the CSV reports (overrides batch.output_dir)
        #[clap(short, long)]
        output_dir: Option<String>,

        /// Enable verbose output with additional information
        #[clap(short, long, default_value_t = false)]
        verbose: bool,
    },

    /// Look up a single username and print its verdict as JSON
    Lookup {
        /// Username to check, with or without a leading @
        username: String,

        /// Configuration file path (defaults are used when it does not exist)
        #[clap(short, long, default_value = DEFAULT_CONFIG_FILE)]
        config: String,

        /// Enable verbose output with additional information
        #[clap(short, long, default_value_t = false)]
        verbose: bool,
    },

    /// Serve the HTTP API and the interactive page
    Serve {
        /// Configuration file path (defaults are used when it does not exist)
        #[clap(short, long, default_value = DEFAULT_CONFIG_FILE)]
        config: String,

        /// Port to listen on (overrides server.port and PORT)
        #[clap(short, long)]
        port: Option<u16>,

        /// Enable verbose output with additional information
        #[clap(short, long, default_value_t = false)]
        verbose: bool,
    },
}
