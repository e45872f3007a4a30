//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.waresys/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use clap::ValueEnum;
use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::RadioMode;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct WaresysConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub capabilities: CapabilitiesConfig,
    #[serde(default)]
    pub account: AccountConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_level: Option<String>,
    pub restore_last_section: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CapabilitiesConfig {
    /// Unset means probe the device.
    pub short_range_radio: Option<bool>,
    pub nfc_sysfs_path: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AccountConfig {
    pub path: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;
pub const DEFAULT_NFC_SYSFS_PATH: &str = "/sys/class/nfc";
const ACCOUNT_FILE: &str = "account.json";
const STATE_FILE: &str = "state.json";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub log_level: LevelFilter,
    pub restore_last_section: bool,
    pub radio: RadioMode,
    pub nfc_sysfs_path: PathBuf,
    pub account_path: PathBuf,
    pub state_path: PathBuf,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.waresys/`.
pub fn waresys_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".waresys"))
}

/// Returns the path to `~/.waresys/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    waresys_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.waresys/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `WaresysConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<WaresysConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(WaresysConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<WaresysConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(WaresysConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: WaresysConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Waresys Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_level = "debug"                # Or set WARESYS_LOG_LEVEL env var
# restore_last_section = true        # Reopen the section shown at last exit

# [capabilities]
# short_range_radio = true           # Unset = probe; or WARESYS_NFC=on|off|auto, --nfc
# nfc_sysfs_path = "/sys/class/nfc"

# [account]
# path = "~/.waresys/account.json"   # Written by `waresys login`
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Environment overrides, read once at startup.
#[derive(Debug, Default, Clone)]
pub struct EnvOverrides {
    /// `WARESYS_LOG_LEVEL`
    pub log_level: Option<String>,
    /// `WARESYS_NFC`
    pub nfc: Option<String>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        Self {
            log_level: std::env::var("WARESYS_LOG_LEVEL").ok(),
            nfc: std::env::var("WARESYS_NFC").ok(),
        }
    }
}

/// Pick the log level from env, then config. `Err` carries a value that is
/// not a level name.
pub fn log_level_from(
    env: &EnvOverrides,
    config: &WaresysConfig,
) -> Result<Option<LevelFilter>, String> {
    match env.log_level.as_ref().or(config.general.log_level.as_ref()) {
        Some(level) => level.parse::<LevelFilter>().map(Some).map_err(|_| level.clone()),
        None => Ok(None),
    }
}

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_radio` is from the `--nfc` flag (None = not specified) and
/// `cli_fresh` from `--fresh`.
pub fn resolve(
    config: &WaresysConfig,
    env: &EnvOverrides,
    cli_radio: Option<RadioMode>,
    cli_fresh: bool,
) -> ResolvedConfig {
    let base_dir = waresys_dir().unwrap_or_else(|| PathBuf::from(".waresys"));

    // Log level: env → config → default
    let log_level = match log_level_from(env, config) {
        Ok(level) => level.unwrap_or(DEFAULT_LOG_LEVEL),
        Err(level) => {
            warn!("Unknown log level {:?}, using default", level);
            DEFAULT_LOG_LEVEL
        }
    };

    // Radio: CLI → env → config → auto
    let env_radio = env.nfc.as_deref().and_then(|mode| {
        RadioMode::from_str(mode, true)
            .inspect_err(|_| warn!("Unknown WARESYS_NFC value {:?}, ignoring", mode))
            .ok()
    });
    let radio = cli_radio
        .or(env_radio)
        .or_else(|| {
            config
                .capabilities
                .short_range_radio
                .map(|present| if present { RadioMode::On } else { RadioMode::Off })
        })
        .unwrap_or_default();

    let nfc_sysfs_path = config
        .capabilities
        .nfc_sysfs_path
        .as_deref()
        .map(expand_home)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_NFC_SYSFS_PATH));

    let account_path = config
        .account
        .path
        .as_deref()
        .map(expand_home)
        .unwrap_or_else(|| base_dir.join(ACCOUNT_FILE));

    ResolvedConfig {
        log_level,
        restore_last_section: !cli_fresh && config.general.restore_last_section.unwrap_or(true),
        radio,
        nfc_sysfs_path,
        account_path,
        state_path: base_dir.join(STATE_FILE),
    }
}

/// Expands a leading `~/` to the home directory.
fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}
