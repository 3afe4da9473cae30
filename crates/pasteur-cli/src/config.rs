use std::path::{Path, PathBuf};

use pasteur_core::Paranoia;
use serde::{Deserialize, Serialize};

/// Server used when neither the config nor the command line names one.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000";

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct PasteurConfig {
    pub server: ServerSection,
    #[serde(default)]
    pub crypto: CryptoSection,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ServerSection {
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct CryptoSection {
    #[serde(default)]
    pub paranoia: Paranoia,
}

impl Default for PasteurConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SERVER_URL.to_string(), Paranoia::default())
    }
}

impl PasteurConfig {
    pub fn new(server_url: String, paranoia: Paranoia) -> Self {
        Self {
            server: ServerSection { url: server_url },
            crypto: CryptoSection { paranoia },
        }
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("PASTEUR_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Read the config file if it exists, falling back to defaults.
pub fn load_config() -> anyhow::Result<PasteurConfig> {
    let path = resolve_config_path()?;
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(PasteurConfig::default());
    }
    read_config(&path)
}

pub fn read_config(path: &Path) -> anyhow::Result<PasteurConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn write_config(path: &Path, config: &PasteurConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {}",
                parent.display(),
                e
            )
        })?;
    }
    let contents =
        toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    std::fs::write(path, contents)
        .map_err(|e| anyhow::anyhow!("Failed to write config {}: {}", path.display(), e))?;
    Ok(())
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("pasteur"));
        }
    }
    Ok(home_dir()?.join(".config").join("pasteur"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
