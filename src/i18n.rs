//! Message lookup and text direction.
//!
//! Catalogs are flat JSON objects stored one file per locale and namespace:
//!
//! ```text
//! locales/
//! ├── en/
//! │   └── page-developers-docs.json   {"previous": "Previous", ...}
//! └── ar/
//!     └── page-developers-docs.json
//! ```
//!
//! Lookups go active locale → fallback locale → the key itself, so a
//! partially translated locale still renders every card.

use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum I18nError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Primary language subtags written right-to-left.
const RTL_LANGUAGES: &[&str] = &["ar", "ckb", "dv", "fa", "he", "ps", "ur", "yi"];

/// Whether `locale` (e.g. `"ar"`, `"fa-IR"`) is written right-to-left.
pub fn is_rtl_locale(locale: &str) -> bool {
    let primary = locale
        .split(['-', '_'])
        .next()
        .unwrap_or(locale)
        .to_ascii_lowercase();
    RTL_LANGUAGES.contains(&primary.as_str())
}

/// Whether the directional icon should be flipped horizontally.
///
/// Untranslated content is shown in the fallback language's layout, so the
/// icon keeps its original orientation even on an RTL locale.
pub fn mirror_icon(is_rtl: bool, content_not_translated: bool) -> bool {
    is_rtl && !content_not_translated
}

/// Maps translation keys to display strings for the active locale.
pub trait Localizer {
    /// Display string for `key`.
    fn t(&self, key: &str) -> String;
    /// Whether the active locale is written right-to-left.
    fn is_rtl(&self) -> bool;
}

/// Message catalog for one locale, layered over a fallback catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    locale: String,
    messages: HashMap<String, String>,
    fallback: HashMap<String, String>,
}

impl Catalog {
    pub fn new(
        locale: impl Into<String>,
        messages: HashMap<String, String>,
        fallback: HashMap<String, String>,
    ) -> Self {
        Self {
            locale: locale.into(),
            messages,
            fallback,
        }
    }

    /// A catalog with no messages; every lookup returns the key.
    pub fn empty(locale: impl Into<String>) -> Self {
        Self::new(locale, HashMap::new(), HashMap::new())
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Whether the active locale itself (not the fallback) defines `key`.
    pub fn has_own(&self, key: &str) -> bool {
        self.messages.contains_key(key)
    }
}

impl Localizer for Catalog {
    fn t(&self, key: &str) -> String {
        self.messages
            .get(key)
            .or_else(|| self.fallback.get(key))
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    fn is_rtl(&self) -> bool {
        is_rtl_locale(&self.locale)
    }
}

/// Read `<dir>/<locale>/<namespace>.json`. A missing file yields an empty map.
pub fn load_messages(
    dir: &Path,
    locale: &str,
    namespace: &str,
) -> Result<HashMap<String, String>, I18nError> {
    let path = dir.join(locale).join(format!("{namespace}.json"));
    if !path.exists() {
        warn!(path = %path.display(), "no message catalog for locale");
        return Ok(HashMap::new());
    }
    let content = fs::read_to_string(&path)?;
    let messages: HashMap<String, String> =
        serde_json::from_str(&content).map_err(|source| I18nError::Json {
            path: path.display().to_string(),
            source,
        })?;
    debug!(path = %path.display(), keys = messages.len(), "loaded message catalog");
    Ok(messages)
}

/// Load the catalog for `locale`, layered over `fallback_locale`.
pub fn load_catalog(
    dir: &Path,
    locale: &str,
    namespace: &str,
    fallback_locale: &str,
) -> Result<Catalog, I18nError> {
    let messages = load_messages(dir, locale, namespace)?;
    let fallback = if fallback_locale == locale {
        HashMap::new()
    } else {
        load_messages(dir, fallback_locale, namespace)?
    };
    Ok(Catalog::new(locale, messages, fallback))
}

/// Locales under `dir` that carry a catalog for `namespace`, sorted.
pub fn available_locales(dir: &Path, namespace: &str) -> Result<Vec<String>, I18nError> {
    let file_name = format!("{namespace}.json");
    let mut locales = BTreeSet::new();
    for entry in WalkDir::new(dir).min_depth(2).max_depth(2) {
        let entry = entry?;
        if !entry.file_type().is_file() || entry.file_name().to_string_lossy() != file_name {
            continue;
        }
        if let Some(locale) = entry
            .path()
            .parent()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
        {
            locales.insert(locale);
        }
    }
    Ok(locales.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn write_catalog(dir: &Path, locale: &str, json: &str) {
        let locale_dir = dir.join(locale);
        fs::create_dir_all(&locale_dir).unwrap();
        fs::write(locale_dir.join("page-developers-docs.json"), json).unwrap();
    }

    // =========================================================================
    // Direction
    // =========================================================================

    #[test]
    fn rtl_locales() {
        assert!(is_rtl_locale("ar"));
        assert!(is_rtl_locale("fa-IR"));
        assert!(is_rtl_locale("he_IL"));
        assert!(is_rtl_locale("UR"));
        assert!(!is_rtl_locale("en"));
        assert!(!is_rtl_locale("zh-tw"));
        // Sorani is Arabic-script, Kurmanji is Latin-script
        assert!(is_rtl_locale("ckb"));
        assert!(!is_rtl_locale("ku"));
        assert!(!is_rtl_locale(""));
    }

    #[test]
    fn mirror_icon_only_for_translated_rtl() {
        assert!(mirror_icon(true, false));
        assert!(!mirror_icon(true, true));
        assert!(!mirror_icon(false, false));
        assert!(!mirror_icon(false, true));
    }

    // =========================================================================
    // Catalog lookup
    // =========================================================================

    #[test]
    fn lookup_falls_back_to_fallback_then_key() {
        let catalog = Catalog::new(
            "es",
            HashMap::from([("next".to_string(), "Siguiente".to_string())]),
            HashMap::from([
                ("next".to_string(), "Next".to_string()),
                ("previous".to_string(), "Previous".to_string()),
            ]),
        );
        assert_eq!(catalog.t("next"), "Siguiente");
        assert_eq!(catalog.t("previous"), "Previous");
        assert_eq!(catalog.t("docs-nav-unknown"), "docs-nav-unknown");
        assert!(catalog.has_own("next"));
        assert!(!catalog.has_own("previous"));
    }

    #[test]
    fn empty_catalog_returns_keys() {
        let catalog = Catalog::empty("ar");
        assert_eq!(catalog.t("previous"), "previous");
        assert!(catalog.is_rtl());
    }

    // =========================================================================
    // Loading
    // =========================================================================

    #[test]
    fn load_catalog_layers_locales() {
        let tmp = TempDir::new().unwrap();
        write_catalog(tmp.path(), "en", r#"{"previous": "Previous", "next": "Next"}"#);
        write_catalog(tmp.path(), "ar", r#"{"next": "التالي"}"#);

        let catalog = load_catalog(tmp.path(), "ar", "page-developers-docs", "en").unwrap();
        assert_eq!(catalog.locale(), "ar");
        assert_eq!(catalog.t("next"), "التالي");
        assert_eq!(catalog.t("previous"), "Previous");
    }

    #[test]
    fn load_catalog_missing_locale_uses_fallback() {
        let tmp = TempDir::new().unwrap();
        write_catalog(tmp.path(), "en", r#"{"previous": "Previous"}"#);

        let catalog = load_catalog(tmp.path(), "de", "page-developers-docs", "en").unwrap();
        assert_eq!(catalog.t("previous"), "Previous");
    }

    #[test]
    fn load_catalog_invalid_json_is_error() {
        let tmp = TempDir::new().unwrap();
        write_catalog(tmp.path(), "en", "{ not json");

        let result = load_catalog(tmp.path(), "en", "page-developers-docs", "en");
        assert!(matches!(result, Err(I18nError::Json { .. })));
    }

    #[test]
    fn available_locales_lists_namespace_dirs() {
        let tmp = TempDir::new().unwrap();
        write_catalog(tmp.path(), "fa", "{}");
        write_catalog(tmp.path(), "en", "{}");
        fs::create_dir_all(tmp.path().join("de")).unwrap();
        fs::write(tmp.path().join("de/other.json"), "{}").unwrap();

        let locales = available_locales(tmp.path(), "page-developers-docs").unwrap();
        assert_eq!(locales, vec!["en".to_string(), "fa".to_string()]);
    }
}
