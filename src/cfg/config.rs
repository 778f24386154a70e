// src/cfg/config.rs

use eyre::{eyre, Result};
use log::{debug, error};
use secure_string::SecureString;
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_CONFIG_FILE: &str = "mailhog-inbox.yml";

#[derive(Debug, Deserialize)]
pub struct Config {
    /// Scheme and host of the capture service, without port.
    #[serde(default = "default_url")]
    pub url: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    #[serde(alias = "delete-emails-after-scenario", default)]
    pub delete_emails_after_scenario: bool,

    #[serde(default)]
    pub username: Option<String>,

    #[serde(default, deserialize_with = "deserialize_password")]
    pub password: Option<SecureString>,

    /// Sent as-is with every request.
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

fn default_url() -> String {
    "http://127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8025
}

fn default_timeout() -> u64 {
    5
}

impl Default for Config {
    fn default() -> Self {
        Config {
            url: default_url(),
            port: default_port(),
            timeout: default_timeout(),
            delete_emails_after_scenario: false,
            username: None,
            password: None,
            headers: BTreeMap::new(),
        }
    }
}

impl Config {
    /// `url:port`, the prefix every API path is appended to.
    pub fn base_url(&self) -> String {
        format!("{}:{}", self.url.trim_end_matches('/'), self.port)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

/// Plain YAML string -> `SecureString`.
fn deserialize_password<'de, D>(deserializer: D) -> Result<Option<SecureString>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.map(SecureString::from))
}

/// Read the MailHog settings from `config_path`; missing keys take their defaults.
pub fn load_config(config_path: &Path) -> Result<Config> {
    let shown = config_path.display();
    debug!("Reading MailHog settings from {}", shown);

    let yaml = fs::read_to_string(config_path).map_err(|e| {
        error!("Cannot read {}: {}", shown, e);
        eyre!("Cannot read MailHog config {}: {}", shown, e)
    })?;
    let config: Config = serde_yaml::from_str(&yaml).map_err(|e| {
        error!("Invalid MailHog config {}: {}", shown, e);
        eyre!("Invalid MailHog config {}: {}", shown, e)
    })?;

    debug!("MailHog API configured at {}", config.base_url());
    Ok(config)
}

/// The given path if it exists, else the per-user copy under the config dir.
pub fn resolve_config_path(config_path: &Path) -> Option<PathBuf> {
    if config_path.exists() {
        return Some(config_path.to_path_buf());
    }
    let fallback = dirs::config_dir()?.join("mailhog-inbox").join(DEFAULT_CONFIG_FILE);
    debug!("{} not found, trying {}", config_path.display(), fallback.display());
    fallback.exists().then_some(fallback)
}
