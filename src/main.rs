use clap::Parser;
use tokio::io::BufReader;
use watchlist_picker::app::session::run_session;
use watchlist_picker::config::cli::Command;
use watchlist_picker::core::search_control::SearchControl;
use watchlist_picker::core::{ConfigProvider, MovieSearch};
use watchlist_picker::utils::error::{ErrorSeverity, PickerError};
use watchlist_picker::utils::{logger, validation::Validate};
use watchlist_picker::{CliConfig, HttpMovieSearch, Page};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(&cli).await {
        tracing::error!(
            "❌ watchlist-picker failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

async fn run(cli: &CliConfig) -> Result<(), PickerError> {
    let config = cli.resolve()?;
    config.validate()?;
    tracing::info!("Using movie search API at {}", config.api_base());

    let search = HttpMovieSearch::new(&config)?;

    match cli.command() {
        Command::Search { query } => {
            // 單次查詢：直接印出排序後的建議
            let hits = search.search(&query).await?;
            let mut control = SearchControl::new(config.placeholder_image());
            if let Some(request) = control.set_query(&query) {
                control.apply_suggestions(&request, Ok(hits));
            }
            if control.suggestions().is_empty() {
                println!("No movies found for '{}'", query);
            }
            for hit in control.suggestions() {
                match hit.year.as_ref().and_then(|y| y.as_year()) {
                    Some(year) => println!("{}\t{} ({})", hit.id, hit.title, year),
                    None => println!("{}\t{}", hit.id, hit.title),
                }
            }
        }
        Command::Interactive => {
            let mut page = Page::new(search, config.placeholder_image());
            let stdin = BufReader::new(tokio::io::stdin());
            let mut stdout = tokio::io::stdout();
            run_session(&mut page, stdin, &mut stdout).await?;

            println!("✅ {} movies in your watch-list", page.store().len());
        }
    }

    Ok(())
}
