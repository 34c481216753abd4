use anyhow::Result;
use httpmock::prelude::*;
use watchlist_picker::app::session::run_session;
use watchlist_picker::{HttpMovieSearch, Page, PickerConfig};

const FIXTURE: &str = include_str!("fixtures/movies.json");

async fn run_script(server: &MockServer, script: &str) -> Result<(String, Vec<String>)> {
    let mut config = PickerConfig::default();
    config.api.base_url = server.url("/api");
    let search = HttpMovieSearch::new(&config)?;
    let mut page = Page::new(search, "https://posters.example/{id}.jpg");

    let mut output = Vec::new();
    run_session(&mut page, script.as_bytes(), &mut output).await?;

    let titles = page
        .store()
        .movies()
        .iter()
        .map(|m| m.title.clone())
        .collect();
    Ok((String::from_utf8(output)?, titles))
}

#[tokio::test]
async fn test_scripted_session_adds_likes_and_removes() -> Result<()> {
    let fixture: serde_json::Value = serde_json::from_str(FIXTURE)?;
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/movie/search");
        then.status(200).json_body(fixture);
    });

    let script = "Inc\n:down\n:down\n\nInception\n:add\n:like 1375666\n:list\n:rm 111161\n:quit\nThe Room\n";
    let (output, titles) = run_script(&server, script).await?;

    assert!(output.contains("  > [2] The Shawshank Redemption"));
    assert!(output.contains("Liked 1375666"));
    assert!(output.contains(" 1. The Shawshank Redemption (1994)\n 2. Inception (2010)"));
    assert!(output.contains("Selected (1):"));
    // :quit 之後的輸入不會被處理
    assert!(!output.contains("Search: The Room"));
    assert_eq!(titles, vec!["Inception"]);
    Ok(())
}

#[tokio::test]
async fn test_session_reports_warnings_and_unknown_commands() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/movie/search");
        then.status(200).json_body(serde_json::json!([]));
    });

    let script = "Shrek\n\n:pick 3\n:rm 9\n:dance\n";
    let (output, titles) = run_script(&server, script).await?;

    assert!(output.contains("! Shrek not found. Please check your spelling."));
    assert!(output.contains("No suggestion #3"));
    assert!(output.contains("No movie with id 9 in the watch-list"));
    assert!(output.contains("Unknown command: :dance (try :help)"));
    assert!(titles.is_empty());
    Ok(())
}
