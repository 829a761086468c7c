use crate::error::{ApkInfoError, Result};
use crate::icon::IconExtractor;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "config.toml";
const APKINFO_HOME_ENV: &str = "APKINFO_HOME";
const DEFAULT_HOME_DIR: &str = ".apkinfo";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApkInfoConfig {
    #[serde(default)]
    pub aapt: AaptConfig,

    #[serde(default)]
    pub icon: IconConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AaptConfig {
    /// Directory containing `bin/<Platform>/aapt_64`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_dir: Option<PathBuf>,

    /// Explicit aapt binary, bypassing the bundled layout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub executable: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct IconConfig {
    #[serde(default)]
    pub extractor: IconExtractor,
}

impl ApkInfoConfig {
    pub fn load(apkinfo_home: &Path) -> Result<Self> {
        let config_path = apkinfo_home.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            log::debug!("Config file not found at {config_path:?}, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&config_path)?;
        let config: ApkInfoConfig = toml::from_str(&contents).map_err(|e| {
            ApkInfoError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        log::debug!("Loaded config from {config_path:?}");
        Ok(config)
    }

    pub fn save(&self, apkinfo_home: &Path) -> Result<()> {
        let config_path = apkinfo_home.join(CONFIG_FILE_NAME);

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| ApkInfoError::ConfigError(format!("Failed to serialize config: {e}")))?;

        fs::write(&config_path, contents)?;
        log::debug!("Saved config to {config_path:?}");
        Ok(())
    }
}

/// `APKINFO_HOME`, or `~/.apkinfo` when unset.
pub fn resolve_apkinfo_home() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(APKINFO_HOME_ENV).filter(|value| !value.is_empty()) {
        return Ok(PathBuf::from(home));
    }

    dirs::home_dir()
        .map(|home| home.join(DEFAULT_HOME_DIR))
        .ok_or_else(|| {
            ApkInfoError::ConfigError(format!(
                "Cannot determine home directory; set {APKINFO_HOME_ENV}"
            ))
        })
}

/// Load the configuration from the resolved apkinfo home.
pub fn new_apkinfo_config() -> Result<ApkInfoConfig> {
    ApkInfoConfig::load(&resolve_apkinfo_home()?)
}
