//! Full-screen portfolio viewer.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod hit;
pub mod overlays;
pub mod palette;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, Write, stderr};

use anyhow::Result;
use folio_core::config::Config;
pub use runtime::TuiRuntime;

/// Runs the portfolio viewer until the user quits.
pub async fn run_portfolio(config: &Config) -> Result<()> {
    if !stderr().is_terminal() {
        anyhow::bail!(
            "The portfolio viewer requires a terminal.\n\
             Use `folio pages <section>` for non-interactive output."
        );
    }

    let mut runtime = TuiRuntime::new(config)?;
    runtime.run()?;

    writeln!(stderr(), "Goodbye!")?;
    Ok(())
}
