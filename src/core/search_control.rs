//! Search field with autocomplete suggestions and the "add movie" submission.
//!
//! Every text change issues a [`SuggestionRequest`] tagged with a generation
//! number. Fetches run asynchronously and may finish out of order, so
//! [`SearchControl::apply_suggestions`] only accepts the response for the most
//! recently issued request.

use crate::core::selection::SelectionStore;
use crate::domain::model::{titles_match, Movie, SearchHit};
use crate::domain::ports::MovieSearch;
use crate::utils::error::Result;

pub const SEARCH_FAILED_WARNING: &str = "Failed to search for movie: database might be down";

pub fn not_found_warning(query: &str) -> String {
    format!("{} not found. Please check your spelling.", query)
}

pub fn already_added_warning(title: &str) -> String {
    format!("{} already added.", title)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionRequest {
    pub generation: u64,
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Added(Movie),
    NotFound,
    Duplicate,
    SearchFailed,
    /// 空白查詢且沒有反白的建議
    Ignored,
}

#[derive(Debug, Clone)]
pub struct SearchControl {
    query: String,
    suggestions: Vec<SearchHit>,
    highlighted: Option<usize>,
    warning: Option<String>,
    latest_generation: u64,
    placeholder_template: String,
}

impl SearchControl {
    pub fn new(placeholder_template: impl Into<String>) -> Self {
        Self {
            query: String::new(),
            suggestions: Vec::new(),
            highlighted: None,
            warning: None,
            latest_generation: 0,
            placeholder_template: placeholder_template.into(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn suggestions(&self) -> &[SearchHit] {
        &self.suggestions
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn highlighted_suggestion(&self) -> Option<&SearchHit> {
        self.highlighted.and_then(|i| self.suggestions.get(i))
    }

    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    /// 文字變更：更新查詢並回傳需要發出的建議請求；空白查詢直接清空建議
    pub fn set_query(&mut self, text: &str) -> Option<SuggestionRequest> {
        self.query = text.to_string();
        self.highlighted = None;
        self.latest_generation += 1;

        if text.trim().is_empty() {
            self.suggestions.clear();
            return None;
        }

        Some(SuggestionRequest {
            generation: self.latest_generation,
            query: text.to_string(),
        })
    }

    /// 套用建議結果；過期的回應會被丟棄並回傳 false
    pub fn apply_suggestions(
        &mut self,
        request: &SuggestionRequest,
        result: Result<Vec<SearchHit>>,
    ) -> bool {
        if request.generation != self.latest_generation {
            tracing::debug!(
                "Discarding stale suggestions for '{}' (generation {}, latest {})",
                request.query,
                request.generation,
                self.latest_generation
            );
            return false;
        }

        match result {
            Ok(mut hits) => {
                sort_by_title(&mut hits);
                self.suggestions = hits;
            }
            Err(e) => {
                tracing::warn!("Failed to fetch suggestions for '{}': {}", request.query, e);
                self.suggestions.clear();
            }
        }
        self.highlighted = None;
        true
    }

    /// 依序處理：變更文字後立即抓取建議
    pub async fn refresh_suggestions<S>(&mut self, search: &S, text: &str)
    where
        S: MovieSearch + ?Sized,
    {
        if let Some(request) = self.set_query(text) {
            let result = search.search(&request.query).await;
            self.apply_suggestions(&request, result);
        }
    }

    pub fn highlight_next(&mut self) {
        let len = self.suggestions.len();
        if len == 0 {
            return;
        }
        self.highlighted = Some(match self.highlighted {
            Some(i) => (i + 1) % len,
            None => 0,
        });
    }

    pub fn highlight_prev(&mut self) {
        let len = self.suggestions.len();
        if len == 0 {
            return;
        }
        self.highlighted = Some(match self.highlighted {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        });
    }

    /// 點選建議：把標題填入輸入框並關閉下拉選單
    pub fn select_suggestion(&mut self, index: usize) -> bool {
        let Some(hit) = self.suggestions.get(index) else {
            return false;
        };
        self.query = hit.title.clone();
        self.suggestions.clear();
        self.highlighted = None;
        // 讓還在途中的建議請求失效
        self.latest_generation += 1;
        true
    }

    pub async fn submit<S>(&mut self, search: &S, store: &mut SelectionStore) -> SubmitOutcome
    where
        S: MovieSearch + ?Sized,
    {
        let candidate = match self.highlighted_suggestion().cloned() {
            Some(hit) => hit,
            None => {
                let query = self.query.trim().to_string();
                if query.is_empty() {
                    return SubmitOutcome::Ignored;
                }

                let hits = match search.search(&query).await {
                    Ok(hits) => hits,
                    Err(e) => {
                        tracing::error!("Search for '{}' failed: {}", query, e);
                        self.warning = Some(SEARCH_FAILED_WARNING.to_string());
                        return SubmitOutcome::SearchFailed;
                    }
                };

                match hits.into_iter().find(|hit| titles_match(&hit.title, &query)) {
                    Some(hit) => hit,
                    None => {
                        tracing::info!("No exact match for '{}'", query);
                        self.warning = Some(not_found_warning(&query));
                        return SubmitOutcome::NotFound;
                    }
                }
            }
        };

        if store.contains_title(&candidate.title) {
            tracing::info!("'{}' is already in the selection", candidate.title);
            self.warning = Some(already_added_warning(&candidate.title));
            return SubmitOutcome::Duplicate;
        }

        let movie = Movie::from_hit(&candidate, &self.placeholder_template);
        store.add(movie.clone());
        tracing::info!("Added '{}' to the watch-list", movie.title);

        self.query.clear();
        self.suggestions.clear();
        self.highlighted = None;
        self.warning = None;
        self.latest_generation += 1;

        SubmitOutcome::Added(movie)
    }
}

fn sort_by_title(hits: &mut [SearchHit]) {
    hits.sort_by(|a, b| {
        a.title
            .to_lowercase()
            .cmp(&b.title.to_lowercase())
            .then_with(|| a.title.cmp(&b.title))
    });
}
