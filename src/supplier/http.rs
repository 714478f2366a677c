//! Word source backed by the HTTP word API

use super::{NetworkError, WordRecord, WordSource};
use crate::config::ApiConfig;
use anyhow::{Context, Result};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Client for `GET {base}/categories` and `GET {base}/words?category=...`
#[derive(Debug, Clone)]
pub struct HttpWordSource {
    client: Client,
    categories_url: Url,
    words_url: Url,
}

impl HttpWordSource {
    /// Build a source for the API described by `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed or the
    /// endpoint URLs cannot be derived from the base URL.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut builder =
            Client::builder().user_agent(concat!("hangman/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("failed to build HTTP client")?;
        debug!(base = %config.base_url(), timeout = ?config.timeout(), "word API client ready");

        Ok(Self {
            client,
            categories_url: config.endpoint("categories")?,
            words_url: config.endpoint("words")?,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, NetworkError> {
        debug!(%url, "GET");

        let response = match self.client.get(url.clone()).send().await {
            Ok(response) => response,
            Err(source) => {
                warn!(%url, error = %source, "request failed");
                return Err(NetworkError::Transport { url, source });
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(%url, %status, "non-success response");
            return Err(NetworkError::Status { url, status });
        }

        let body = match response.bytes().await {
            Ok(body) => body,
            Err(source) => return Err(NetworkError::Transport { url, source }),
        };

        serde_json::from_slice(&body).map_err(|source| {
            warn!(%url, error = %source, "undecodable body");
            NetworkError::Decode { url, source }
        })
    }
}

impl WordSource for HttpWordSource {
    async fn categories(&self) -> Result<Vec<String>, NetworkError> {
        self.get_json(self.categories_url.clone()).await
    }

    async fn words(&self, category: &str) -> Result<Vec<WordRecord>, NetworkError> {
        let mut url = self.words_url.clone();
        url.query_pairs_mut().append_pair("category", category);
        self.get_json(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Json, Router,
        extract::Query,
        http::StatusCode,
        routing::get,
    };
    use serde_json::{Value, json};
    use std::collections::HashMap;

    async fn serve(api: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = Router::new().nest("/api/v1", api);
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}/api/v1")
    }

    fn source(base: &str) -> HttpWordSource {
        HttpWordSource::new(&ApiConfig::new(base).unwrap()).unwrap()
    }

    async fn words_by_category(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
        match params.get("category").map(String::as_str) {
            Some("animals") => Json(json!([
                { "id": 1, "word": "tiger", "category": "animals", "numLetters": 5 },
                { "id": 2, "word": "elephant", "category": "animals", "numLetters": 8 },
            ])),
            Some("sea creatures") => Json(json!([{ "word": "octopus" }])),
            _ => Json(json!([])),
        }
    }

    #[tokio::test]
    async fn fetches_categories() {
        let api = Router::new().route(
            "/categories",
            get(|| async { Json(json!(["animals", "food", "sports"])) }),
        );
        let base = serve(api).await;

        let categories = source(&base).categories().await.unwrap();
        assert_eq!(categories, ["animals", "food", "sports"]);
    }

    #[tokio::test]
    async fn fetches_words_ignoring_extra_fields() {
        let api = Router::new().route("/words", get(words_by_category));
        let base = serve(api).await;

        let words = source(&base).words("animals").await.unwrap();
        assert_eq!(
            words,
            [WordRecord::new("tiger"), WordRecord::new("elephant")]
        );
    }

    #[tokio::test]
    async fn category_is_sent_as_query_parameter() {
        let api = Router::new().route("/words", get(words_by_category));
        let base = serve(api).await;

        let words = source(&base).words("sea creatures").await.unwrap();
        assert_eq!(words, [WordRecord::new("octopus")]);
    }

    #[tokio::test]
    async fn non_success_status_is_network_error() {
        let api = Router::new().route(
            "/categories",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let base = serve(api).await;

        let err = source(&base).categories().await.unwrap_err();
        match err {
            NetworkError::Status { status, url } => {
                assert_eq!(status.as_u16(), 500);
                assert!(url.as_str().ends_with("/api/v1/categories"));
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_route_is_network_error() {
        let api = Router::new().route("/categories", get(|| async { Json(json!(["animals"])) }));
        let base = serve(api).await;

        let err = source(&base).words("animals").await.unwrap_err();
        assert!(matches!(err, NetworkError::Status { status, .. } if status.as_u16() == 404));
    }

    #[tokio::test]
    async fn malformed_body_is_decode_error() {
        let api = Router::new().route("/categories", get(|| async { "definitely not json" }));
        let base = serve(api).await;

        let err = source(&base).categories().await.unwrap_err();
        assert!(matches!(err, NetworkError::Decode { .. }));
    }

    #[tokio::test]
    async fn records_without_word_field_are_decode_error() {
        let api = Router::new().route("/words", get(|| async { Json(json!([{ "name": "x" }])) }));
        let base = serve(api).await;

        let err = source(&base).words("animals").await.unwrap_err();
        assert!(matches!(err, NetworkError::Decode { .. }));
    }

    #[tokio::test]
    async fn refused_connection_is_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = source(&format!("http://{addr}"))
            .categories()
            .await
            .unwrap_err();
        assert!(matches!(err, NetworkError::Transport { .. }));
    }
}
