use crate::domain::model::SearchHit;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn api_base(&self) -> &str;
    fn request_timeout_secs(&self) -> u64;
    fn placeholder_image(&self) -> &str;
}

/// 遠端電影搜尋；排序與過濾由服務端決定，這裡不重試
#[async_trait]
pub trait MovieSearch: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>>;
}
