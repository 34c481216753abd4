use serde::{Deserialize, Serialize};

/// 已加入清單的電影，建立後不再修改
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub year: Option<i32>,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
}

impl Movie {
    /// 把搜尋結果正規化成清單使用的形狀：id 轉字串、年份轉數字、沒有圖片時用佔位圖
    pub fn from_hit(hit: &SearchHit, placeholder_template: &str) -> Self {
        let id = hit.id.to_string();
        let image = match hit.image.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => placeholder_image(placeholder_template, &id),
        };

        Self {
            year: hit.year.as_ref().and_then(RawYear::as_year),
            title: hit.title.clone(),
            genre: hit.genre.clone(),
            director: hit.director.clone(),
            image,
            id,
        }
    }

    pub fn same_title(&self, title: &str) -> bool {
        titles_match(&self.title, title)
    }
}

pub fn placeholder_image(template: &str, id: &str) -> String {
    template.replace("{id}", id)
}

/// 標題比對一律不分大小寫
pub fn titles_match(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// 搜尋服務回傳的原始資料；不同版本的 API 對 id 與 year 的型別不一致
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub id: RawId,
    pub title: String,
    #[serde(default)]
    pub year: Option<RawYear>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub director: Option<String>,
}

impl SearchHit {
    pub fn new(id: impl Into<String>, title: impl Into<String>, year: Option<i32>) -> Self {
        Self {
            id: RawId::Text(id.into()),
            title: title.into(),
            year: year.map(|y| RawYear::Number(i64::from(y))),
            image: None,
            genre: None,
            director: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Text(String),
    Number(serde_json::Number),
}

impl std::fmt::Display for RawId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RawId::Text(s) => write!(f, "{}", s),
            RawId::Number(n) => write!(f, "{}", n),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawYear {
    Number(i64),
    Text(String),
}

impl RawYear {
    pub fn as_year(&self) -> Option<i32> {
        match self {
            RawYear::Number(n) => i32::try_from(*n).ok(),
            RawYear::Text(s) => s.trim().parse().ok(),
        }
    }
}
