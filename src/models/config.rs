//! Configuration model loaded from external sources.

use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Profile used when `APP_ENV` is not set.
pub const DEFAULT_APP_ENV: &str = "local";

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub domain: String,
    pub address: String,
    pub port: u16,
    pub templates_dir: String,
    /// Cookie signing key; at least 64 bytes.
    pub secret: String,
    /// Key an admin enters on the sign-in page.
    pub admin_access_key: String,
    pub api_base_url: String,
    pub api_secret: String,
    #[serde(default = "default_api_timeout_secs")]
    pub api_timeout_secs: u64,
}

fn default_api_timeout_secs() -> u64 {
    10
}

impl ServerConfig {
    /// Layers `{dir}/default`, the optional `{dir}/{app_env}` profile and
    /// `APP_`-prefixed environment variables, later sources winning.
    pub fn load(dir: &Path, app_env: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name(&dir.join("default").to_string_lossy()))
            .add_source(File::with_name(&dir.join(app_env).to_string_lossy()).required(false))
            .add_source(Environment::with_prefix("APP"))
            .build()?
            .try_deserialize()
    }
}
