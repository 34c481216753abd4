use crate::domain::model::Movie;

/// 使用者選取的電影清單，只存在記憶體中
///
/// `add` 不檢查重複，重複判斷由 [`SearchControl`](crate::core::search_control::SearchControl) 負責。
#[derive(Debug, Clone, Default)]
pub struct SelectionStore {
    movies: Vec<Movie>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_movies(movies: Vec<Movie>) -> Self {
        Self { movies }
    }

    pub fn add(&mut self, movie: Movie) {
        tracing::debug!("Adding '{}' ({}) to selection", movie.title, movie.id);
        self.movies.push(movie);
    }

    /// 移除指定 id；不存在時不做任何事並回傳 false
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.movies.len();
        self.movies.retain(|movie| movie.id != id);
        let removed = self.movies.len() != before;
        if removed {
            tracing::debug!("Removed {} from selection", id);
        }
        removed
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn get(&self, id: &str) -> Option<&Movie> {
        self.movies.iter().find(|movie| movie.id == id)
    }

    pub fn contains_title(&self, title: &str) -> bool {
        self.movies.iter().any(|movie| movie.same_title(title))
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}
