pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::http::HttpMovieSearch;
pub use app::page::Page;
pub use config::toml_config::PickerConfig;
pub use self::core::{search_control::SearchControl, selection::SelectionStore};
pub use domain::model::{Movie, SearchHit};
pub use utils::error::{PickerError, Result};
