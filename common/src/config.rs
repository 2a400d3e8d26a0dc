//! Configuration parsing – reads a `KEY=VALUE` file (`dexview.conf`).
//!
//! Missing files are not an error: the viewer runs against the public API
//! with the defaults below.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::format::IMAGE_URL_TEMPLATE;
use crate::view::{Paging, MAX_PAGE_BUTTONS, PAGE_SIZE};

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "DEXVIEW_CONFIG";

/// Application configuration for the web server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    // ── upstream ─────────────────────────────────────────────────────
    /// Base URL of the catalog API, without a trailing slash.
    pub api_base_url: String,
    /// Artwork URL template containing `{id}`.
    pub image_url_template: String,
    /// How many entries the full-catalog fetch asks for.
    pub catalog_limit: usize,
    pub request_timeout_secs: u64,

    // ── list view ────────────────────────────────────────────────────
    pub page_size: usize,
    pub max_page_buttons: usize,
    /// Upper bound on retained search matches; `None` keeps them all.
    pub search_limit: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "https://pokeapi.co/api/v2".into(),
            image_url_template: IMAGE_URL_TEMPLATE.into(),
            catalog_limit: 10_000,
            request_timeout_secs: 15,
            page_size: PAGE_SIZE,
            max_page_buttons: MAX_PAGE_BUTTONS,
            search_limit: None,
        }
    }
}

impl Config {
    /// Default config path.
    pub fn default_path() -> &'static str {
        "dexview.conf"
    }

    /// Path from `DEXVIEW_CONFIG`, else [`Config::default_path`].
    pub fn path_from_env() -> PathBuf {
        std::env::var(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(Self::default_path()))
    }

    /// List-view settings handed to the client.
    pub fn paging(&self) -> Paging {
        Paging {
            page_size: self.page_size,
            max_page_buttons: self.max_page_buttons,
            search_limit: self.search_limit,
        }
    }
}

/// Parse a `KEY=VALUE` configuration file.
///
/// Lines starting with `#` are comments.  Values may be optionally
/// double-quoted.  Unknown keys are silently ignored, and zero or
/// unparsable numbers fall back to the defaults.
pub fn load(path: &Path) -> Result<Config> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read config: {}", path.display()))?;

    let config = from_str(&text);
    info!("Loaded config from {}", path.display());
    Ok(config)
}

/// Like [`load`], but a missing file yields [`Config::default`].
pub fn load_or_default(path: &Path) -> Result<Config> {
    if !path.exists() {
        info!("No config at {}, using defaults", path.display());
        return Ok(Config::default());
    }
    load(path)
}

/// Build a [`Config`] from the text of a config file.
pub fn from_str(text: &str) -> Config {
    let map = parse_conf(text);
    let defaults = Config::default();

    let get = |key: &str| -> Option<String> { map.get(key).cloned().filter(|v| !v.is_empty()) };
    let get_usize = |key: &str| -> Option<usize> {
        get(key).and_then(|v| v.parse().ok()).filter(|&n: &usize| n > 0)
    };

    Config {
        api_base_url: get("API_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_base_url),
        image_url_template: get("IMAGE_URL_TEMPLATE")
            .filter(|t| t.contains("{id}"))
            .unwrap_or(defaults.image_url_template),
        catalog_limit: get_usize("CATALOG_LIMIT").unwrap_or(defaults.catalog_limit),
        request_timeout_secs: get("REQUEST_TIMEOUT_SECS")
            .and_then(|v| v.parse().ok())
            .filter(|&n: &u64| n > 0)
            .unwrap_or(defaults.request_timeout_secs),
        page_size: get_usize("PAGE_SIZE").unwrap_or(defaults.page_size),
        max_page_buttons: get_usize("MAX_PAGE_BUTTONS").unwrap_or(defaults.max_page_buttons),
        search_limit: get_usize("SEARCH_LIMIT"),
    }
}

/// Parse `KEY=VALUE` lines into a map, stripping optional double-quotes.
fn parse_conf(text: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, val)) = line.split_once('=') {
            let key = key.trim();
            let val = val.trim().trim_matches('"');
            map.insert(key.to_string(), val.to_string());
        }
    }
    map
}

// ─── tests ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_conf() {
        let text = r#"
# comment
API_BASE_URL="http://localhost:9000/api/v2/"
PAGE_SIZE=12
IMAGE_URL_TEMPLATE = /art/{id}.png
"#;
        let map = parse_conf(text);
        assert_eq!(map["API_BASE_URL"], "http://localhost:9000/api/v2/");
        assert_eq!(map["PAGE_SIZE"], "12");
        assert_eq!(map["IMAGE_URL_TEMPLATE"], "/art/{id}.png");
    }

    #[test]
    fn test_from_str_overrides_and_defaults() {
        let config = from_str(
            "API_BASE_URL=http://localhost:9000/api/v2/\nPAGE_SIZE=12\nSEARCH_LIMIT=50\n",
        );
        assert_eq!(config.api_base_url, "http://localhost:9000/api/v2");
        assert_eq!(config.page_size, 12);
        assert_eq!(config.search_limit, Some(50));
        assert_eq!(config.max_page_buttons, MAX_PAGE_BUTTONS);
        assert_eq!(config.catalog_limit, 10_000);
    }

    #[test]
    fn test_from_str_rejects_bad_values() {
        let config = from_str("PAGE_SIZE=0\nMAX_PAGE_BUTTONS=lots\nIMAGE_URL_TEMPLATE=/no-placeholder.png\n");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("dexview_test_missing.conf");
        let _ = std::fs::remove_file(&path);
        assert_eq!(load_or_default(&path).unwrap(), Config::default());
        assert!(load(&path).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let path = tempfile("REQUEST_TIMEOUT_SECS=3\nCATALOG_LIMIT=151\n");
        let config = load(&path).unwrap();
        assert_eq!(config.request_timeout_secs, 3);
        assert_eq!(config.catalog_limit, 151);
        assert_eq!(config.paging().page_size, PAGE_SIZE);
    }

    fn tempfile(content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("dexview_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("test.conf");
        std::fs::write(&path, content).unwrap();
        path
    }
}
