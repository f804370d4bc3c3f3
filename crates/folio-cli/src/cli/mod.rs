//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use folio_core::config;
use folio_core::sections::Section;
use folio_core::theme::ThemeMode;

mod commands;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Terminal portfolio viewer")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Print one page of a section as a table
    Pages {
        /// Section to list (expertise, research, projects, publications, videos, tiktok,
        /// recommendations)
        #[arg(value_name = "SECTION")]
        section: Section,

        /// Items per page (defaults to the section's desktop layout)
        #[arg(long, value_name = "N")]
        per_page: Option<usize>,

        /// Page to print, starting at 1
        #[arg(long, value_name = "K", default_value_t = 1)]
        page: usize,
    },

    /// Show or set the theme preference
    Theme {
        /// New preference (light, dark or auto)
        #[arg(value_name = "MODE")]
        mode: Option<ThemeMode>,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
    /// Generate a fresh config from Rust defaults (for xtask)
    Generate,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    // default to the viewer
    let Some(command) = cli.command else {
        let config = config::Config::load().context("load config")?;
        return commands::view::run(&config).await;
    };

    match command {
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
            ConfigCommands::Generate => commands::config::generate(),
        },
        Commands::Pages {
            section,
            per_page,
            page,
        } => {
            let config = config::Config::load().context("load config")?;
            commands::pages::run(&config, section, per_page, page).await
        }
        Commands::Theme { mode } => commands::theme::run(mode),
    }
}
