use crate::core::selection::SelectionStore;
use crate::domain::model::Movie;
use std::collections::HashMap;
use std::fmt;

/// 卡片上的喜歡／不喜歡，只是畫面狀態，不會送到任何地方
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reaction {
    #[default]
    None,
    Liked,
    Disliked,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: String,
    pub title: String,
    pub image: String,
    pub year: Option<i32>,
    pub reaction: Reaction,
}

impl Card {
    pub fn year_label(&self) -> String {
        self.year.map(|y| y.to_string()).unwrap_or_else(|| "----".to_string())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let badge = match self.reaction {
            Reaction::None => "",
            Reaction::Liked => " [+1]",
            Reaction::Disliked => " [-1]",
        };
        writeln!(f, "+ {}{}", self.title, badge)?;
        writeln!(f, "| {}", self.image)?;
        write!(f, "+ {}   (remove: :rm {})", self.year_label(), self.id)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SelectionListView {
    reactions: HashMap<String, Reaction>,
}

impl SelectionListView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cards(&self, store: &SelectionStore) -> Vec<Card> {
        store
            .movies()
            .iter()
            .map(|movie| Card {
                id: movie.id.clone(),
                title: movie.title.clone(),
                image: movie.image.clone(),
                year: movie.year,
                reaction: self.reaction(&movie.id),
            })
            .collect()
    }

    pub fn render(&self, store: &SelectionStore) -> String {
        if store.is_empty() {
            return "(no movies selected yet)".to_string();
        }
        self.cards(store)
            .iter()
            .map(Card::to_string)
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// 精簡列表，只有標題與年份
    pub fn render_compact(movies: &[Movie]) -> String {
        movies
            .iter()
            .enumerate()
            .map(|(i, movie)| match movie.year {
                Some(year) => format!("{:>2}. {} ({})", i + 1, movie.title, year),
                None => format!("{:>2}. {}", i + 1, movie.title),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// 卡片上的移除按鈕
    pub fn remove(&mut self, store: &mut SelectionStore, id: &str) -> bool {
        self.reactions.remove(id);
        store.remove(id)
    }

    pub fn reaction(&self, id: &str) -> Reaction {
        self.reactions.get(id).copied().unwrap_or_default()
    }

    pub fn toggle_like(&mut self, id: &str) -> Reaction {
        self.toggle(id, Reaction::Liked)
    }

    pub fn toggle_dislike(&mut self, id: &str) -> Reaction {
        self.toggle(id, Reaction::Disliked)
    }

    fn toggle(&mut self, id: &str, target: Reaction) -> Reaction {
        let next = if self.reaction(id) == target {
            Reaction::None
        } else {
            target
        };
        if next == Reaction::None {
            self.reactions.remove(id);
        } else {
            self.reactions.insert(id.to_string(), next);
        }
        next
    }
}
