use crate::domain::model::SearchHit;
use crate::domain::ports::{ConfigProvider, MovieSearch};
use crate::utils::error::{PickerError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

const SEARCH_PATH: &str = "/v1/movie/search";

#[derive(Debug, Clone)]
pub struct HttpMovieSearch {
    client: Client,
    search_url: String,
}

impl HttpMovieSearch {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs()))
            .build()?;

        Ok(Self {
            client,
            search_url: search_url(config.api_base()),
        })
    }

    pub fn search_url(&self) -> &str {
        &self.search_url
    }
}

fn search_url(api_base: &str) -> String {
    format!("{}{}", api_base.trim_end_matches('/'), SEARCH_PATH)
}

#[async_trait]
impl MovieSearch for HttpMovieSearch {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>> {
        tracing::debug!("Searching movies: GET {}?q={}", self.search_url, query);
        let response = self
            .client
            .get(&self.search_url)
            .query(&[("q", query)])
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Search response status: {}", status);

        if !status.is_success() {
            return Err(PickerError::SearchStatus {
                status: status.as_u16(),
                url: self.search_url.clone(),
            });
        }

        let body = response.bytes().await?;
        let hits: Vec<SearchHit> = serde_json::from_slice(&body)?;
        tracing::debug!("Search for '{}' returned {} hits", query, hits.len());
        Ok(hits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    struct MockConfig {
        api_base: String,
    }

    impl ConfigProvider for MockConfig {
        fn api_base(&self) -> &str {
            &self.api_base
        }

        fn request_timeout_secs(&self) -> u64 {
            5
        }

        fn placeholder_image(&self) -> &str {
            "https://posters.example/{id}.jpg"
        }
    }

    fn client_for(server: &MockServer) -> HttpMovieSearch {
        let config = MockConfig {
            api_base: server.url("/api/"),
        };
        HttpMovieSearch::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_search_sends_query_parameter() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/v1/movie/search")
                .query_param("q", "The Room");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([
                    {"id": 1, "title": "The Room", "year": 2003}
                ]));
        });

        let hits = client_for(&server).search("The Room").await.unwrap();

        api_mock.assert();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "The Room");
        assert_eq!(hits[0].id.to_string(), "1");
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/api/v1/movie/search");
            then.status(400)
                .json_body(serde_json::json!({"error": "Query parameter 'q' is required."}));
        });

        let err = client_for(&server).search("x").await.unwrap_err();

        api_mock.assert();
        assert!(matches!(err, PickerError::SearchStatus { status: 400, .. }));
    }

    #[tokio::test]
    async fn test_non_array_body_is_a_serialization_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/v1/movie/search");
            then.status(200).json_body(serde_json::json!({"movies": []}));
        });

        let err = client_for(&server).search("x").await.unwrap_err();
        assert!(matches!(err, PickerError::SerializationError(_)));
    }

    #[test]
    fn test_search_url_joins_base_without_double_slash() {
        assert_eq!(
            search_url("http://127.0.0.1:5000/api/"),
            "http://127.0.0.1:5000/api/v1/movie/search"
        );
        assert_eq!(
            search_url("http://localhost:3000/api"),
            "http://localhost:3000/api/v1/movie/search"
        );
    }
}
