use crate::error::{Error, Result};
use serde::Deserialize;
use std::env;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub probe_timeout_secs: u64,
    pub probe_concurrency: usize,
    pub probe_limit: usize,
    pub user_agent: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let probe_timeout_secs = env::var("PROBE_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let probe_concurrency = env::var("PROBE_CONCURRENCY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        if probe_concurrency == 0 {
            return Err(Error::Config(
                "PROBE_CONCURRENCY must be at least 1".to_string(),
            ));
        }

        let probe_limit = env::var("PROBE_LIMIT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(50);

        let user_agent = env::var("PROBE_USER_AGENT")
            .unwrap_or_else(|_| format!("fediarchive/{}", env!("CARGO_PKG_VERSION")));

        Ok(Self {
            probe_timeout_secs,
            probe_concurrency,
            probe_limit,
            user_agent,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ProbeConfig {
    pub timeout: Duration,
    pub concurrency: usize,
    pub limit: usize,
    pub user_agent: String,
}

impl From<&Config> for ProbeConfig {
    fn from(config: &Config) -> Self {
        Self {
            timeout: Duration::from_secs(config.probe_timeout_secs),
            concurrency: config.probe_concurrency,
            limit: config.probe_limit,
            user_agent: config.user_agent.clone(),
        }
    }
}

/// Options for turning an archive into site generator posts.
///
/// Keys follow the plugin's historical config file, so `replytoself` and
/// `originalsource` keep their run-together spelling.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    pub followers_only: bool,
    pub replytoself: bool,
    pub originalsource: bool,
    pub watermark: bool,
    pub watermark_text: String,
    pub tags: TagFilter,
    pub site: SiteOptions,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            followers_only: false,
            replytoself: false,
            originalsource: true,
            watermark: false,
            watermark_text: String::new(),
            tags: TagFilter::default(),
            site: SiteOptions::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TagFilter {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteOptions {
    pub lang: String,
    pub title: String,
    pub url: String,
    pub descr: String,
    pub main_url: String,
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            lang: "en".to_string(),
            title: String::new(),
            url: String::new(),
            descr: String::new(),
            main_url: String::new(),
        }
    }
}

pub const DEFAULT_WATERMARK_TEXT: &str = "Don't copy that floppy!";

impl ImportConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::warn!(
                "Import config {} not found, using defaults",
                path.display()
            );
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let mut config: ImportConfig = toml::from_str(content)?;
        if config.site.lang.trim().is_empty() {
            config.site.lang = "en".to_string();
        }
        Ok(config)
    }

    pub fn watermark_text(&self) -> &str {
        if self.watermark_text.trim().is_empty() {
            DEFAULT_WATERMARK_TEXT
        } else {
            &self.watermark_text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_import_config_uses_defaults() {
        let config = ImportConfig::from_toml("").unwrap();
        assert!(!config.followers_only);
        assert!(!config.replytoself);
        assert!(config.originalsource);
        assert!(config.tags.include.is_empty());
        assert_eq!(config.site.lang, "en");
        assert_eq!(config.watermark_text(), DEFAULT_WATERMARK_TEXT);
    }

    #[test]
    fn test_import_config_from_toml() {
        let input = r#"
followers_only = true
replytoself = true
watermark = true
watermark_text = "mine"

[tags]
include = ["art", "photo"]

[site]
lang = ""
title = "Toots"
main_url = "https://example.org"
"#;
        let config = ImportConfig::from_toml(input).unwrap();
        assert!(config.followers_only);
        assert!(config.replytoself);
        assert_eq!(config.tags.include, vec!["art", "photo"]);
        assert!(config.tags.exclude.is_empty());
        assert_eq!(config.site.lang, "en");
        assert_eq!(config.site.title, "Toots");
        assert_eq!(config.watermark_text(), "mine");
    }

    #[test]
    fn test_malformed_import_config_is_an_error() {
        let result = ImportConfig::from_toml("followers_only = \"sometimes\"");
        assert!(matches!(result, Err(Error::ConfigParse(_))));
    }

    #[test]
    fn test_missing_import_config_falls_back_to_defaults() {
        let config = ImportConfig::load("/nonexistent/fediarchive/config.toml").unwrap();
        assert!(config.originalsource);
    }
}
