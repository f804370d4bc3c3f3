//! Theme preference store.
//!
//! The persisted preference is a [`ThemeMode`]; what the UI paints with is
//! the resolved [`Appearance`]. `Auto` follows the system preference through
//! a subscription that is re-established on every apply and dropped on
//! dispose.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::config::Config;

/// User-selected theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
    /// Follow the system preference.
    Auto,
}

impl ThemeMode {
    pub fn all() -> &'static [ThemeMode] {
        &[ThemeMode::Light, ThemeMode::Dark, ThemeMode::Auto]
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::Auto => "auto",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ThemeMode::Light => "Light background",
            ThemeMode::Dark => "Dark background",
            ThemeMode::Auto => "Follow the system preference",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ThemeMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "auto" | "system" => Ok(ThemeMode::Auto),
            other => anyhow::bail!("Unknown theme '{other}' (expected light, dark or auto)"),
        }
    }
}

/// Effective light/dark state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

impl Appearance {
    pub fn is_dark(self) -> bool {
        matches!(self, Appearance::Dark)
    }
}

/// Where the preference is kept between runs.
pub trait ThemePersistence {
    /// Stored preference, `None` when nothing was saved yet.
    fn load(&self) -> Result<Option<ThemeMode>>;
    fn save(&self, mode: ThemeMode) -> Result<()>;
}

/// Persists the preference as the `theme` key of `config.toml`.
#[derive(Debug, Clone)]
pub struct ConfigFilePersistence {
    path: PathBuf,
}

impl ConfigFilePersistence {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ThemePersistence for ConfigFilePersistence {
    fn load(&self) -> Result<Option<ThemeMode>> {
        if !self.path.exists() {
            return Ok(None);
        }
        Ok(Some(Config::load_from(&self.path)?.theme))
    }

    fn save(&self, mode: ThemeMode) -> Result<()> {
        Config::save_theme_to(&self.path, mode)
    }
}

/// Source of the system light/dark preference.
pub trait SystemAppearance {
    fn current(&self) -> Appearance;
}

/// Reads the terminal's preference from the environment.
///
/// `FOLIO_APPEARANCE` (`light`/`dark`) wins; otherwise the background colour
/// advertised in `COLORFGBG` decides. Light when neither is informative.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvAppearance;

impl SystemAppearance for EnvAppearance {
    fn current(&self) -> Appearance {
        if let Ok(value) = std::env::var("FOLIO_APPEARANCE") {
            match value.trim().to_ascii_lowercase().as_str() {
                "dark" => return Appearance::Dark,
                "light" => return Appearance::Light,
                _ => {}
            }
        }
        std::env::var("COLORFGBG")
            .ok()
            .and_then(|value| appearance_from_colorfgbg(&value))
            .unwrap_or_default()
    }
}

/// Parses `COLORFGBG` (`"fg;bg"` or `"fg;default;bg"`).
pub fn appearance_from_colorfgbg(value: &str) -> Option<Appearance> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    Some(if bg <= 6 || bg == 8 {
        Appearance::Dark
    } else {
        Appearance::Light
    })
}

/// Owns the theme preference and its system-preference subscription.
pub struct ThemeStore<P, S = EnvAppearance> {
    persistence: P,
    system: S,
    mode: ThemeMode,
    appearance: Appearance,
    /// Last system appearance seen while subscribed (`Auto` only).
    subscription: Option<Appearance>,
}

impl<P: ThemePersistence, S: SystemAppearance> ThemeStore<P, S> {
    /// Reads the stored preference (default `light`) and applies it.
    pub fn init(persistence: P, system: S) -> Self {
        let mode = match persistence.load() {
            Ok(saved) => saved.unwrap_or_default(),
            Err(err) => {
                tracing::warn!("Failed to load theme preference: {err:#}");
                ThemeMode::default()
            }
        };
        let mut store = Self {
            persistence,
            system,
            mode,
            appearance: Appearance::default(),
            subscription: None,
        };
        store.apply(mode);
        tracing::debug!(mode = %mode, "theme initialized");
        store
    }

    /// Resolves `mode` to an appearance, replacing any previous subscription.
    pub fn apply(&mut self, mode: ThemeMode) -> Appearance {
        self.dispose();
        self.mode = mode;
        self.appearance = match mode {
            ThemeMode::Light => Appearance::Light,
            ThemeMode::Dark => Appearance::Dark,
            ThemeMode::Auto => {
                let current = self.system.current();
                self.subscription = Some(current);
                current
            }
        };
        tracing::info!(mode = %mode, dark = self.appearance.is_dark(), "theme applied");
        self.appearance
    }

    /// Persists `mode` and applies it. A failed save is logged, not fatal.
    pub fn set(&mut self, mode: ThemeMode) -> Appearance {
        if let Err(err) = self.persistence.save(mode) {
            tracing::warn!("Failed to save theme preference: {err:#}");
        }
        self.apply(mode)
    }

    /// Checks the system preference; returns the new appearance on change.
    ///
    /// Does nothing unless subscribed.
    pub fn poll_system(&mut self) -> Option<Appearance> {
        let last = self.subscription?;
        let current = self.system.current();
        if current == last {
            return None;
        }
        self.subscription = Some(current);
        self.appearance = current;
        tracing::debug!(dark = current.is_dark(), "system theme changed");
        Some(current)
    }

    /// Drops the system-preference subscription.
    pub fn dispose(&mut self) {
        self.subscription = None;
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn appearance(&self) -> Appearance {
        self.appearance
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }
}
