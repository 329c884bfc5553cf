//! Recommendation endpoint client
//!
//! Thin wrapper over one network call: POST the question as JSON, surface
//! non-success statuses as errors carrying the response body text, and parse
//! the JSON answer. No retries, no timeout, no cancellation here; the app
//! layer decides which responses are still worth displaying.

use async_trait::async_trait;
use reqwest::Client as HttpClient;

use crate::{
    error::{AppError, AppResult},
    models::{Mode, RecommendRequest, RecommendResponse},
};

/// Seam between the page controller and the recommendation endpoint
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecommendProvider: Send + Sync {
    async fn recommend(&self, question: &str) -> AppResult<RecommendResponse>;
}

/// HTTP implementation backed by the external `/recommend` service
#[derive(Clone)]
pub struct RecommendClient {
    http_client: HttpClient,
    recommend_url: String,
    mode: Mode,
}

impl RecommendClient {
    pub fn new(recommend_url: String, mode: Mode) -> Self {
        Self {
            http_client: HttpClient::new(),
            recommend_url,
            mode,
        }
    }
}

#[async_trait]
impl RecommendProvider for RecommendClient {
    async fn recommend(&self, question: &str) -> AppResult<RecommendResponse> {
        let request = RecommendRequest {
            question: question.to_string(),
            mode: self.mode,
        };

        let response = self
            .http_client
            .post(&self.recommend_url)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Recommendation endpoint returned status {}: {}",
                status, body
            )));
        }

        let recommendation: RecommendResponse = response.json().await?;

        tracing::info!(
            question = %question,
            answered = recommendation.answer.is_some(),
            "Recommendation fetched"
        );

        Ok(recommendation)
    }
}
