//! Theme preference command.

use anyhow::{Context, Result};
use folio_core::config::{Config, paths};
use folio_core::theme::ThemeMode;

pub fn run(mode: Option<ThemeMode>) -> Result<()> {
    let Some(mode) = mode else {
        let config = Config::load().context("load config")?;
        println!("{} ({})", config.theme, config.theme.description());
        return Ok(());
    };

    Config::save_theme(mode)
        .with_context(|| format!("save theme to {}", paths::config_path().display()))?;
    println!("Theme set to {mode}");
    Ok(())
}
