//! Configuration model.
//!
//! The rule catalog, the drive-letter fallback table and the offline
//! fixture are all product content, so they are supplied as data rather
//! than hard-coded. A missing or unreadable config file falls back to
//! the built-in defaults; an invalid rule pattern fails at rule-set
//! construction, not here.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// A single sanitization rule as configuration data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Display name; also used for ordering overrides.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Regular expression to match (applied case-insensitively).
    pub pattern: String,
    /// Replacement text; may reference captures with `$1` syntax.
    #[serde(default)]
    pub replacement: String,
    /// Whether the rule participates in a pipeline pass.
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Rule catalog; empty means "use the built-in catalog".
    #[serde(default)]
    pub rules: Vec<RuleConfig>,
    /// Last-resort network addresses per drive letter (e.g., "Z" ->
    /// "\\\\server\\share"), consulted when the platform lookup fails.
    #[serde(default)]
    pub drive_fallbacks: BTreeMap<String, String>,
    /// Folder names returned when a scan root is unreachable; empty
    /// means "use the built-in fixture".
    #[serde(default)]
    pub offline_fixture: Vec<String>,
}

/// Get the configuration directory path.
fn dirs_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("plex_sanitizer")
}

/// Load configuration from an explicit file, or from the default
/// location. Missing or malformed files yield the defaults.
pub fn load_config(path: Option<&Path>) -> Config {
    let config_path = match path {
        Some(p) => p.to_path_buf(),
        None => dirs_config_path().join("config.toml"),
    };

    if config_path.exists() {
        if let Ok(content) = std::fs::read_to_string(&config_path) {
            match toml::from_str(&content) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!("Ignoring malformed config {}: {}", config_path.display(), e);
                }
            }
        }
    }

    Config::default()
}

impl Config {
    /// Drive fallback table keyed by uppercase drive letter.
    pub fn drive_fallback_letters(&self) -> BTreeMap<char, String> {
        self.drive_fallbacks
            .iter()
            .filter_map(|(k, v)| {
                k.chars()
                    .next()
                    .map(|c| (c.to_ascii_uppercase(), v.clone()))
            })
            .collect()
    }
}
