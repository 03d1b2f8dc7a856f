//! HTTP data source for jsonplaceholder-style post APIs.
//!
//! Endpoints:
//! - `GET  {base}/posts`
//! - `GET  {base}/posts/{id}`
//! - `GET  {base}/comments?postId={id}`
//! - `POST {base}/posts` with `{title, body}`, expects `201 Created`

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use super::source::{FetchError, PostsDataSource};
use super::types::{Comment, CreatedPost, ErrorBody, NewPostPayload, Post, PostId};

pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Post API client backed by `reqwest`.
pub struct HttpPostsSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpPostsSource {
    /// Creates a new HTTP data source.
    ///
    /// # Arguments
    /// * `base_url` - Optional custom base URL (defaults to jsonplaceholder)
    /// * `timeout` - Per-request timeout
    pub fn new(base_url: Option<String>, timeout: Duration) -> Self {
        let client = match reqwest::Client::builder().timeout(timeout).build() {
            Ok(client) => client,
            Err(e) => {
                warn!("Failed to build HTTP client with timeout, using defaults: {}", e);
                reqwest::Client::new()
            }
        };
        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        Self { base_url, client }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends a prepared request, mapping transport failures and error statuses.
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response, FetchError> {
        let response = request
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        debug!("Post API response status: {}", response.status());

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, FetchError> {
        let response = self.send(request).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}

/// Builds a [`FetchError`] from a non-success response, pulling the server's
/// `message` field out of a JSON body when one is present.
async fn error_from_response(response: reqwest::Response) -> FetchError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    warn!("Post API error: {} - {}", status, body);

    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty());

    if status == StatusCode::NOT_FOUND {
        FetchError::NotFound { message }
    } else {
        FetchError::Status {
            status: status.as_u16(),
            message,
        }
    }
}

#[async_trait]
impl PostsDataSource for HttpPostsSource {
    fn name(&self) -> &str {
        "http"
    }

    async fn list_posts(&self) -> Result<Vec<Post>, FetchError> {
        let url = format!("{}/posts", self.base_url);
        debug!("GET {}", url);
        let posts: Vec<Post> = self.get_json(self.client.get(url)).await?;
        info!("Fetched {} posts", posts.len());
        Ok(posts)
    }

    async fn get_post(&self, id: PostId) -> Result<Post, FetchError> {
        let url = format!("{}/posts/{}", self.base_url, id);
        debug!("GET {}", url);
        self.get_json(self.client.get(url)).await
    }

    async fn list_comments(&self, post_id: PostId) -> Result<Vec<Comment>, FetchError> {
        let url = format!("{}/comments", self.base_url);
        debug!("GET {}?postId={}", url, post_id);
        let comments: Vec<Comment> = self
            .get_json(self.client.get(url).query(&[("postId", post_id)]))
            .await?;
        info!("Fetched {} comments for post {}", comments.len(), post_id);
        Ok(comments)
    }

    async fn create_post(&self, title: &str, body: &str) -> Result<Post, FetchError> {
        let title = title.trim();
        let body = body.trim();
        let url = format!("{}/posts", self.base_url);
        debug!("POST {}", url);

        let response = self
            .send(self.client.post(url).json(&NewPostPayload { title, body }))
            .await?;

        // Only an explicit "created" counts as success.
        let status = response.status();
        if status != StatusCode::CREATED {
            warn!("Create post answered {} instead of 201", status);
            return Err(FetchError::Status {
                status: status.as_u16(),
                message: None,
            });
        }

        let created: CreatedPost = response
            .json()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;
        info!("Created post {}", created.id);

        Ok(Post {
            id: created.id,
            title: title.to_string(),
            body: body.to_string(),
        })
    }
}
