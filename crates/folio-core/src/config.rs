//! Configuration management for folio.
//!
//! Loads configuration from ${FOLIO_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::theme::ThemeMode;

/// Returns the default config template with comments.
///
/// This is embedded from default_config.toml at compile time.
/// To update, edit default_config.toml directly.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

/// Merges user config values into the default template.
///
/// New comments and sections from the template stay present while the
/// user's values win.
fn merge_with_template(user_config: &str) -> Result<String> {
    use toml_edit::DocumentMut;

    let mut doc: DocumentMut = default_config_template()
        .parse()
        .context("Failed to parse default config template")?;

    let user_doc: DocumentMut = user_config.parse().context("Failed to parse user config")?;

    merge_items(doc.as_table_mut(), user_doc.as_table());

    Ok(doc.to_string())
}

/// Recursively merges items from source table into target table.
fn merge_items(target: &mut toml_edit::Table, source: &toml_edit::Table) {
    use toml_edit::Item;

    for (key, value) in source.iter() {
        match value {
            Item::Value(v) => {
                target[key] = Item::Value(v.clone());
            }
            Item::Table(src_table) => {
                if let Some(Item::Table(target_table)) = target.get_mut(key) {
                    merge_items(target_table, src_table);
                } else {
                    target[key] = Item::Table(src_table.clone());
                }
            }
            Item::ArrayOfTables(src_arr) => {
                target[key] = Item::ArrayOfTables(src_arr.clone());
            }
            Item::None => {}
        }
    }
}

pub mod paths {
    //! Path resolution for folio configuration and data directories.
    //!
    //! FOLIO_HOME resolution order:
    //! 1. FOLIO_HOME environment variable (if set)
    //! 2. ~/.config/folio (default)

    use std::path::PathBuf;

    /// Returns the folio home directory.
    pub fn folio_home() -> PathBuf {
        if let Ok(home) = std::env::var("FOLIO_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("folio"))
            .unwrap_or_else(|| PathBuf::from(".folio"))
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        folio_home().join("config.toml")
    }

    /// Default directory of the static JSON content.
    pub fn data_dir() -> PathBuf {
        folio_home().join("data")
    }

    /// Directory of the TUI log files.
    pub fn logs_dir() -> PathBuf {
        folio_home().join("logs")
    }
}

/// GitHub repositories source.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubConfig {
    pub username: String,
    pub api_url: String,
    /// Optional token; public repositories don't need one.
    pub token: Option<String>,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            username: String::new(),
            api_url: Config::DEFAULT_GITHUB_API_URL.to_string(),
            token: None,
        }
    }
}

impl GithubConfig {
    /// Token from `GITHUB_TOKEN`, else the configured one, if non-empty.
    pub fn effective_token(&self) -> Option<String> {
        env_override("GITHUB_TOKEN").or_else(|| non_empty(self.token.as_deref()))
    }
}

/// Medium articles source (through an RSS-to-JSON service).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MediumConfig {
    pub username: String,
    pub rss_api_url: String,
}

impl Default for MediumConfig {
    fn default() -> Self {
        Self {
            username: String::new(),
            rss_api_url: Config::DEFAULT_RSS_API_URL.to_string(),
        }
    }
}

/// YouTube Data API source.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct YoutubeConfig {
    pub api_key: Option<String>,
    pub channel_id: String,
    pub channel_handle: Option<String>,
    pub api_url: String,
}

impl Default for YoutubeConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            channel_id: String::new(),
            channel_handle: None,
            api_url: Config::DEFAULT_YOUTUBE_API_URL.to_string(),
        }
    }
}

impl YoutubeConfig {
    /// Key from `YOUTUBE_API_KEY`, else the configured one, if non-empty.
    pub fn effective_api_key(&self) -> Option<String> {
        env_override("YOUTUBE_API_KEY").or_else(|| non_empty(self.api_key.as_deref()))
    }
}

fn env_override(var: &str) -> Option<String> {
    non_empty(std::env::var(var).ok().as_deref())
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the static JSON content (defaults to FOLIO_HOME/data)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<String>,

    /// Theme preference
    pub theme: ThemeMode,

    /// Timeout for HTTP requests in seconds (0 disables)
    pub http_timeout_secs: u64,

    /// Quiet period before a terminal resize re-chunks the carousels
    pub resize_debounce_ms: u64,

    pub github: GithubConfig,
    pub medium: MediumConfig,
    pub youtube: YoutubeConfig,
}

impl Config {
    const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;
    const DEFAULT_RESIZE_DEBOUNCE_MS: u64 = 250;
    const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";
    const DEFAULT_RSS_API_URL: &str = "https://api.rss2json.com/v1/api.json";
    const DEFAULT_YOUTUBE_API_URL: &str = "https://www.googleapis.com/youtube/v3";

    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Saves only the theme field to the config file.
    pub fn save_theme(mode: ThemeMode) -> Result<()> {
        Self::save_theme_to(&paths::config_path(), mode)
    }

    /// Saves only the theme field to a specific config file path.
    ///
    /// Creates the file with default template if it doesn't exist.
    /// If file exists, merges user values into the latest template.
    pub fn save_theme_to(path: &Path, mode: ThemeMode) -> Result<()> {
        use toml_edit::{DocumentMut, value};

        let contents = if path.exists() {
            let user_config = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            merge_with_template(&user_config)?
        } else {
            default_config_template().to_string()
        };

        let mut doc: DocumentMut = contents
            .parse()
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        doc["theme"] = value(mode.display_name());

        Self::write_config(path, &doc.to_string())
    }

    /// Static content directory, relative paths resolved against FOLIO_HOME.
    pub fn data_dir(&self) -> PathBuf {
        match self.data_dir.as_deref().map(str::trim) {
            Some(dir) if !dir.is_empty() => {
                let dir = PathBuf::from(dir);
                if dir.is_absolute() {
                    dir
                } else {
                    paths::folio_home().join(dir)
                }
            }
            _ => paths::data_dir(),
        }
    }

    pub fn http_timeout(&self) -> Option<Duration> {
        if self.http_timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.http_timeout_secs))
        }
    }

    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    /// Generates a fresh config TOML from Rust defaults.
    ///
    /// Used by `xtask update-default-config` to keep `default_config.toml`
    /// in sync with the values in [`Config::default`].
    pub fn generate() -> Result<String> {
        use toml_edit::DocumentMut;

        let generated_toml = toml::to_string(&Config::default())
            .context("Failed to serialize default config to TOML")?;

        let mut doc: DocumentMut = default_config_template()
            .parse()
            .context("Failed to parse default config template")?;

        let generated_doc: DocumentMut = generated_toml
            .parse()
            .context("Failed to parse generated config")?;

        merge_items(doc.as_table_mut(), generated_doc.as_table());

        Ok(doc.to_string())
    }

    /// Writes config content to a file, creating parent directories as needed.
    /// Uses atomic write (temp file + rename) to prevent corruption.
    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            theme: ThemeMode::default(),
            http_timeout_secs: Self::DEFAULT_HTTP_TIMEOUT_SECS,
            resize_debounce_ms: Self::DEFAULT_RESIZE_DEBOUNCE_MS,
            github: GithubConfig::default(),
            medium: MediumConfig::default(),
            youtube: YoutubeConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    /// Defaults: missing file yields defaults.
    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.theme, ThemeMode::Light);
        assert_eq!(config.http_timeout_secs, 10);
        assert_eq!(config.resize_debounce(), Duration::from_millis(250));
        assert_eq!(config.github.api_url, "https://api.github.com");
    }

    /// Partial files keep defaults for everything not set.
    #[test]
    fn test_partial_config_merges_with_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "theme = \"dark\"\n[github]\nusername = \"octocat\"\n[youtube]\nchannel_id = \"UC1\"\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.theme, ThemeMode::Dark);
        assert_eq!(config.github.username, "octocat");
        assert_eq!(config.github.api_url, "https://api.github.com");
        assert_eq!(config.youtube.channel_id, "UC1");
        assert_eq!(
            config.youtube.api_url,
            "https://www.googleapis.com/youtube/v3"
        );
    }

    /// Invalid TOML surfaces the path in the error.
    #[test]
    fn test_invalid_config_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "theme = [").unwrap();

        let err = format!("{:#}", Config::load_from(&path).unwrap_err());
        assert!(err.contains("Failed to parse config"));
        assert!(err.contains("config.toml"));
    }

    /// Config init: creates file from the template.
    #[test]
    fn test_init_writes_template() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        Config::init(&path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("# folio configuration"));
        assert!(contents.contains("http_timeout_secs = 10"));
        assert!(!path.with_extension("toml.tmp").exists());
    }

    /// Config init: fails if file exists (no silent overwrite).
    #[test]
    fn test_init_fails_if_exists() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "").unwrap();

        let err = Config::init(&path).unwrap_err().to_string();
        assert!(err.contains("already exists"));
    }

    /// save_theme: preserves other fields and brings in template comments.
    #[test]
    fn test_save_theme_preserves_other_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "http_timeout_secs = 3\n[github]\nusername = \"octocat\"\n").unwrap();

        Config::save_theme_to(&path, ThemeMode::Dark).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.theme, ThemeMode::Dark);
        assert_eq!(config.http_timeout_secs, 3);
        assert_eq!(config.github.username, "octocat");

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("# folio configuration"));
    }

    /// save_theme: creates the file with the template when missing.
    #[test]
    fn test_save_theme_creates_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        Config::save_theme_to(&path, ThemeMode::Auto).unwrap();

        assert_eq!(Config::load_from(&path).unwrap().theme, ThemeMode::Auto);
    }

    #[test]
    fn test_generate_contains_defaults() {
        let generated = Config::generate().unwrap();
        let parsed: Config = toml::from_str(&generated).unwrap();
        assert_eq!(parsed.http_timeout_secs, 10);
        assert_eq!(parsed.medium.rss_api_url, "https://api.rss2json.com/v1/api.json");
        assert!(generated.contains("# folio configuration"));
    }

    #[test]
    fn test_zero_timeout_disables() {
        let config = Config {
            http_timeout_secs: 0,
            ..Default::default()
        };
        assert_eq!(config.http_timeout(), None);
    }

    #[test]
    fn test_absolute_data_dir_is_kept() {
        let dir = tempdir().unwrap();
        let config = Config {
            data_dir: Some(dir.path().display().to_string()),
            ..Default::default()
        };
        assert_eq!(config.data_dir(), dir.path());
    }
}
