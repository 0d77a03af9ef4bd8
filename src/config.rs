//! Configuration for the `docs-nav` tool.
//!
//! Loaded from `docs-nav.toml`. Every key is optional: stock defaults are
//! serialized to a TOML table and the user file is merged on top, so a config
//! file only needs the values it changes. Unknown keys are rejected to catch
//! typos early.
//!
//! ```toml
//! manifest = "developer-docs-links.yaml"
//!
//! [i18n]
//! locales_dir = "locales"
//! namespace = "page-developers-docs"
//! locale = "en"
//! fallback_locale = "en"
//!
//! [navigation]
//! unmatched = "first"       # "first" or "none"
//!
//! [render]
//! content_not_translated = false
//! ```

use crate::resolve::UnmatchedPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name looked up in the working directory when `--config` is not given.
pub const CONFIG_FILE: &str = "docs-nav.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavConfig {
    /// Path to the YAML link manifest.
    pub manifest: String,
    /// Message catalog lookup.
    pub i18n: I18nConfig,
    /// Resolution behavior.
    pub navigation: NavigationConfig,
    /// Rendering flags.
    pub render: RenderConfig,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            manifest: "developer-docs-links.yaml".to_string(),
            i18n: I18nConfig::default(),
            navigation: NavigationConfig::default(),
            render: RenderConfig::default(),
        }
    }
}

impl NavConfig {
    /// Manifest location. Relative paths are taken from the config file's directory.
    pub fn manifest_path(&self, config_dir: &Path) -> PathBuf {
        config_dir.join(&self.manifest)
    }

    /// Catalog directory. Relative paths are taken from the config file's directory.
    pub fn locales_dir(&self, config_dir: &Path) -> PathBuf {
        config_dir.join(&self.i18n.locales_dir)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("manifest", &self.manifest),
            ("i18n.namespace", &self.i18n.namespace),
            ("i18n.locale", &self.i18n.locale),
            ("i18n.fallback_locale", &self.i18n.fallback_locale),
        ];
        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!("{key} must not be empty")));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct I18nConfig {
    /// Directory holding `<locale>/<namespace>.json` catalogs.
    pub locales_dir: String,
    /// Catalog file name without extension.
    pub namespace: String,
    /// Active locale.
    pub locale: String,
    /// Locale consulted for keys the active locale lacks.
    pub fallback_locale: String,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            locales_dir: "locales".to_string(),
            namespace: "page-developers-docs".to_string(),
            locale: "en".to_string(),
            fallback_locale: "en".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavigationConfig {
    /// What to show for a path missing from the manifest.
    pub unmatched: UnmatchedPolicy,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// The page is shown in the fallback language; keep icons unmirrored.
    pub content_not_translated: bool,
}

// =============================================================================
// Loading and merging
// =============================================================================

/// Stock defaults as a TOML table, the base layer for merging.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(NavConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// Tables merge key by key; any other overlay value replaces the base value.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Directory that relative paths in the config file at `config_path` refer to.
pub fn config_dir(config_path: &Path) -> &Path {
    config_path.parent().unwrap_or(Path::new(""))
}

/// Read a config file as a raw TOML value. `Ok(None)` when it does not exist.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto `base`, deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<NavConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: NavConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load the config file at `path`, falling back to stock defaults if absent.
pub fn load_config(path: &Path) -> Result<NavConfig, ConfigError> {
    resolve_config(stock_defaults_value(), load_raw_config(path)?)
}

/// A fully commented stock `docs-nav.toml`, printed by `gen-config`.
pub fn stock_config_toml() -> &'static str {
    r##"# docs-nav configuration
# ======================
# All settings are optional. Values shown below are the defaults.
# Unknown keys cause an error.

# YAML link manifest: a list of { id, href?, items? } nodes.
manifest = "developer-docs-links.yaml"

# ---------------------------------------------------------------------------
# Message catalogs
# ---------------------------------------------------------------------------
[i18n]
# Catalogs live at <locales_dir>/<locale>/<namespace>.json
locales_dir = "locales"
namespace = "page-developers-docs"

# Active locale. Right-to-left locales (ar, fa, he, ur, ...) mirror the icons.
locale = "en"

# Consulted for keys the active locale does not define.
fallback_locale = "en"

# ---------------------------------------------------------------------------
# Navigation
# ---------------------------------------------------------------------------
[navigation]
# Current path not found in the manifest:
#   "first" - show the neighbors of the first page
#   "none"  - show no neighbors
unmatched = "first"

# ---------------------------------------------------------------------------
# Rendering
# ---------------------------------------------------------------------------
[render]
# The page is displayed in the fallback language. Icons stay unmirrored
# even for right-to-left locales.
content_not_translated = false
"##
}
