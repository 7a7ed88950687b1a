use crate::domain::error::MtError;
use crate::domain::model::{Backend, EndpointConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const APP_DIR: &str = "mt-connectors";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default)]
    pub logging: Logging,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub azure: AzureConfig,
    #[serde(default)]
    pub mtuoc: MtuocConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Logging {
    #[serde(default = "default_enable")]
    pub enable: bool,
    pub path: Option<String>,
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct HttpConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    pub proxy: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CacheConfig {
    #[serde(default = "default_enable")]
    pub enable: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AzureConfig {
    #[serde(default = "default_enable")]
    pub enabled: bool,
    #[serde(default = "default_azure_url")]
    pub url: String,
    pub region: Option<String>,
}

// MTUOC 引擎地址: url 与 port 分开保存
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MtuocConfig {
    #[serde(default = "default_enable")]
    pub enabled: bool,
    pub engine_url: Option<String>,
    pub engine_port: Option<String>,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            enable: true,
            path: None,
            level: default_log_level(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            proxy: None,
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { enable: true }
    }
}

impl Default for AzureConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            url: default_azure_url(),
            region: None,
        }
    }
}

impl Default for MtuocConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            engine_url: None,
            engine_port: None,
        }
    }
}

impl MtuocConfig {
    pub fn endpoint(&self) -> EndpointConfig {
        EndpointConfig::new(self.engine_url.clone(), self.engine_port.clone())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            logging: Logging::default(),
            http: HttpConfig::default(),
            cache: CacheConfig::default(),
            azure: AzureConfig::default(),
            mtuoc: MtuocConfig::default(),
        }
    }
}

impl Config {
    pub fn is_enabled(&self, backend: Backend) -> bool {
        match backend {
            Backend::Azure => self.azure.enabled,
            Backend::Mtuoc => self.mtuoc.enabled,
        }
    }
}

// Defaults
fn default_theme() -> String {
    "temp".to_string()
}
fn default_enable() -> bool {
    true
}
fn default_log_level() -> String {
    "WARN".to_string()
}
fn default_timeout_secs() -> u64 {
    30
}
fn default_user_agent() -> String {
    format!("mt-connectors/{}", env!("CARGO_PKG_VERSION"))
}
fn default_azure_url() -> String {
    "https://api.cognitive.microsofttranslator.com".to_string()
}

pub fn get_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join(APP_DIR))
}

pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|p| p.join("config.toml"))
}

/// Get credentials file path (next to config.toml)
pub fn get_credentials_path() -> PathBuf {
    get_config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("credentials.toml")
}

pub fn load_config() -> Result<Config, MtError> {
    match get_config_path() {
        Some(path) if path.exists() => load_config_from(&path),
        _ => Ok(Config::default()),
    }
}

/// Parse a config file; a broken file falls back to defaults with a warning
pub fn load_config_from(path: &Path) -> Result<Config, MtError> {
    let content = fs::read_to_string(path)?;
    match toml::from_str::<Config>(&content) {
        Ok(config) => Ok(config),
        Err(e) => {
            tracing::warn!(path = %path.display(), "failed to parse config file: {}", e);
            eprintln!(
                "Warning: Failed to parse config file: {}. Using defaults.",
                e
            );
            Ok(Config::default())
        }
    }
}

/// Parse a config file for editing; a broken file is an error, never defaults
pub fn load_config_strict(path: &Path) -> Result<Config, MtError> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str::<Config>(&content)?)
}

pub fn save_config_to(config: &Config, path: &Path) -> Result<(), MtError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let toml_content = toml::to_string_pretty(config)
        .map_err(|e| MtError::Config(format!("Failed to serialize config: {}", e)))?;
    fs::write(path, toml_content)?;
    Ok(())
}

pub fn generate_config_sample() -> Result<(), MtError> {
    let path = get_config_path()
        .ok_or_else(|| MtError::Config("Cannot determine config directory".to_string()))?;

    if path.exists() {
        eprintln!("Config file already exists at: {}", path.display());
        return Ok(());
    }

    save_config_to(&Config::default(), &path)?;
    println!("Generated config file at: {}", path.display());
    Ok(())
}
