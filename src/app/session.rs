use crate::app::page::Page;
use crate::core::list_view::{Reaction, SelectionListView};
use crate::core::search_control::SubmitOutcome;
use crate::core::{MovieSearch, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

pub const HELP: &str = "\
Type text to search. Commands:
  (empty line) | :add   add the highlighted suggestion or the typed title
  :down | :up           move through the suggestions
  :pick <n>             copy suggestion n into the search field
  :rm <id>              remove a movie from the watch-list
  :like <id>            toggle like on a card
  :dislike <id>         toggle dislike on a card
  :list                 compact listing of the watch-list
  :help                 show this help
  :quit                 leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Type(String),
    Enter,
    Down,
    Up,
    Pick(usize),
    Remove(String),
    Like(String),
    Dislike(String),
    List,
    Help,
    Quit,
    Unknown(String),
}

impl SessionCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            return SessionCommand::Enter;
        }
        let Some(command) = line.strip_prefix(':') else {
            return SessionCommand::Type(line.to_string());
        };

        let mut parts = command.trim().splitn(2, char::is_whitespace);
        let name = parts.next().unwrap_or_default();
        let arg = parts.next().map(str::trim).filter(|a| !a.is_empty());

        match (name, arg) {
            ("add", None) => SessionCommand::Enter,
            ("down", None) => SessionCommand::Down,
            ("up", None) => SessionCommand::Up,
            ("pick", Some(n)) => match n.parse::<usize>() {
                Ok(n) if n > 0 => SessionCommand::Pick(n - 1),
                _ => SessionCommand::Unknown(line.to_string()),
            },
            ("rm", Some(id)) => SessionCommand::Remove(id.to_string()),
            ("like", Some(id)) => SessionCommand::Like(id.to_string()),
            ("dislike", Some(id)) => SessionCommand::Dislike(id.to_string()),
            ("list", None) => SessionCommand::List,
            ("help", None) => SessionCommand::Help,
            ("quit" | "q", None) => SessionCommand::Quit,
            _ => SessionCommand::Unknown(line.to_string()),
        }
    }
}

/// 逐行讀取輸入並驅動頁面，直到 `:quit` 或輸入結束
pub async fn run_session<S, R, W>(page: &mut Page<S>, input: R, output: &mut W) -> Result<()>
where
    S: MovieSearch,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    write_block(output, HELP).await?;

    while let Some(line) = lines.next_line().await? {
        let command = SessionCommand::parse(&line);
        tracing::debug!("Session command: {:?}", command);

        let text = match command {
            SessionCommand::Quit => break,
            SessionCommand::Type(text) => {
                page.type_text(&text).await;
                page.render_search()
            }
            SessionCommand::Down => {
                page.key_down();
                page.render_search()
            }
            SessionCommand::Up => {
                page.key_up();
                page.render_search()
            }
            SessionCommand::Pick(index) => {
                if page.click_suggestion(index) {
                    page.render_search()
                } else {
                    format!("No suggestion #{}", index + 1)
                }
            }
            SessionCommand::Enter => match page.press_enter().await {
                SubmitOutcome::Added(_) => page.render(),
                _ => page.render_search(),
            },
            SessionCommand::Remove(id) => {
                if page.remove(&id) {
                    page.render()
                } else {
                    format!("No movie with id {} in the watch-list", id)
                }
            }
            SessionCommand::Like(id) => reaction_message(&id, page.like(&id)),
            SessionCommand::Dislike(id) => reaction_message(&id, page.dislike(&id)),
            SessionCommand::List => SelectionListView::render_compact(page.store().movies()),
            SessionCommand::Help => HELP.to_string(),
            SessionCommand::Unknown(raw) => format!("Unknown command: {} (try :help)", raw),
        };

        write_block(output, &text).await?;
    }

    tracing::info!("Session finished with {} movies selected", page.store().len());
    Ok(())
}

fn reaction_message(id: &str, reaction: Option<Reaction>) -> String {
    match reaction {
        Some(Reaction::Liked) => format!("Liked {}", id),
        Some(Reaction::Disliked) => format!("Disliked {}", id),
        Some(Reaction::None) => format!("Cleared reaction on {}", id),
        None => format!("No movie with id {} in the watch-list", id),
    }
}

async fn write_block<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> Result<()> {
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n").await?;
    output.flush().await?;
    Ok(())
}
