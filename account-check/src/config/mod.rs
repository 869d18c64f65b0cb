pub mod types;
pub mod loader;

pub use types::{
    profile_url, BatchConfig, CheckerConfig, ProviderConfig, ServerConfig, DEFAULT_PORT,
    DEFAULT_PROFILE_URL_BASE, DEFAULT_PROVIDER_URL, DEFAULT_USERNAMES_FILE,
};
pub use loader::{
    load_usernames, normalize_username, parse_usernames, PORT_ENV, PROVIDER_URL_ENV, TOKEN_ENV,
};
