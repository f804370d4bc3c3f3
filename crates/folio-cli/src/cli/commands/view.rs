//! Interactive viewer command.

use anyhow::Result;
use folio_core::config::{Config, paths};
use folio_core::logging::{self, LogTarget};

pub async fn run(config: &Config) -> Result<()> {
    // The viewer owns the terminal; records go to the log file.
    let _guard = logging::init(&LogTarget::File(paths::logs_dir()))?;
    tracing::info!("starting portfolio viewer");
    folio_tui::run_portfolio(config).await
}
