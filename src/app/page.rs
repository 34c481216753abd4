use crate::core::list_view::{Reaction, SelectionListView};
use crate::core::search_control::{SearchControl, SubmitOutcome, SuggestionRequest};
use crate::core::selection::SelectionStore;
use crate::core::{MovieSearch, Result, SearchHit};

/// 搜尋欄、選取清單與卡片列表組合成的頁面
pub struct Page<S: MovieSearch> {
    search: S,
    store: SelectionStore,
    control: SearchControl,
    view: SelectionListView,
}

impl<S: MovieSearch> Page<S> {
    pub fn new(search: S, placeholder_template: &str) -> Self {
        Self {
            search,
            store: SelectionStore::new(),
            control: SearchControl::new(placeholder_template),
            view: SelectionListView::new(),
        }
    }

    pub fn search(&self) -> &S {
        &self.search
    }

    pub fn store(&self) -> &SelectionStore {
        &self.store
    }

    pub fn control(&self) -> &SearchControl {
        &self.control
    }

    pub fn view(&self) -> &SelectionListView {
        &self.view
    }

    /// 輸入文字並等待建議回來
    pub async fn type_text(&mut self, text: &str) {
        self.control.refresh_suggestions(&self.search, text).await;
    }

    /// 只變更文字，抓取交給呼叫端；回應用 [`Page::receive_suggestions`] 送回
    pub fn begin_typing(&mut self, text: &str) -> Option<SuggestionRequest> {
        self.control.set_query(text)
    }

    pub fn receive_suggestions(
        &mut self,
        request: &SuggestionRequest,
        result: Result<Vec<SearchHit>>,
    ) -> bool {
        self.control.apply_suggestions(request, result)
    }

    pub fn key_down(&mut self) {
        self.control.highlight_next();
    }

    pub fn key_up(&mut self) {
        self.control.highlight_prev();
    }

    pub fn click_suggestion(&mut self, index: usize) -> bool {
        self.control.select_suggestion(index)
    }

    pub async fn press_enter(&mut self) -> SubmitOutcome {
        self.control.submit(&self.search, &mut self.store).await
    }

    pub fn remove(&mut self, id: &str) -> bool {
        self.view.remove(&mut self.store, id)
    }

    pub fn like(&mut self, id: &str) -> Option<Reaction> {
        self.store.get(id)?;
        Some(self.view.toggle_like(id))
    }

    pub fn dislike(&mut self, id: &str) -> Option<Reaction> {
        self.store.get(id)?;
        Some(self.view.toggle_dislike(id))
    }

    pub fn render_search(&self) -> String {
        let mut lines = vec![format!("Search: {}", self.control.query())];
        let highlighted = self.control.highlighted();
        for (i, hit) in self.control.suggestions().iter().enumerate() {
            let marker = if highlighted == Some(i) { '>' } else { ' ' };
            lines.push(format!("  {} [{}] {}", marker, i + 1, hit.title));
        }
        if let Some(warning) = self.control.warning() {
            lines.push(format!("! {}", warning));
        }
        lines.join("\n")
    }

    pub fn render(&self) -> String {
        format!(
            "{}\n\nSelected ({}):\n{}",
            self.render_search(),
            self.store.len(),
            self.view.render(&self.store)
        )
    }
}
