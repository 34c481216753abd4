use crate::config::toml_config::PickerConfig;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "watchlist-picker")]
#[command(about = "Search movies and build a watch-list from the terminal")]
pub struct CliConfig {
    #[arg(long, help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, env = "MOVIE_API_BASE", help = "Base URL of the movie search API")]
    pub api_base: Option<String>,

    #[arg(long, help = "Search request timeout in seconds")]
    pub timeout_secs: Option<u64>,

    #[arg(long, help = "Placeholder image URL template, must contain {id}")]
    pub placeholder_image: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Interactive search-and-select session (default)
    Interactive,
    /// Print the suggestions for a query and exit
    Search { query: String },
}

impl CliConfig {
    /// 先讀檔案（沒有就用預設值），再套用命令列參數
    pub fn resolve(&self) -> Result<PickerConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path.display());
                PickerConfig::from_file(path)?
            }
            None => PickerConfig::default(),
        };

        if let Some(api_base) = &self.api_base {
            config.api.base_url = api_base.clone();
        }
        if let Some(timeout) = self.timeout_secs {
            config.api.timeout_seconds = Some(timeout);
        }
        if let Some(template) = &self.placeholder_image {
            config.display.placeholder_image = Some(template.clone());
        }

        Ok(config)
    }

    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Interactive)
    }
}
