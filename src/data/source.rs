use std::fmt;

use async_trait::async_trait;

use super::types::{Comment, Post, PostId};

/// Errors surfaced by a data source. Nothing here is retried; callers decide
/// how to present them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The remote answered 404.
    NotFound { message: Option<String> },
    /// Any other non-success status (or a non-201 answer to a create).
    Status { status: u16, message: Option<String> },
    /// Transport failure: DNS, refused connection, timeout.
    Network(String),
    /// Success status but the body could not be decoded.
    Decode(String),
}

impl FetchError {
    /// HTTP status code, if the remote answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::NotFound { .. } => Some(404),
            FetchError::Status { status, .. } => Some(*status),
            FetchError::Network(_) | FetchError::Decode(_) => None,
        }
    }

    /// Message provided by the server in its error body, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            FetchError::NotFound { message } | FetchError::Status { message, .. } => {
                message.as_deref()
            }
            FetchError::Network(_) | FetchError::Decode(_) => None,
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::NotFound { .. } => write!(f, "not found (HTTP 404)"),
            FetchError::Status { status, message } => match message {
                Some(msg) => write!(f, "HTTP {status}: {msg}"),
                None => write!(f, "HTTP {status}"),
            },
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
            FetchError::Decode(msg) => write!(f, "decode error: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Read/write access to the remote post collection.
#[async_trait]
pub trait PostsDataSource: Send + Sync {
    /// Short identifier for logs.
    fn name(&self) -> &str;

    async fn list_posts(&self) -> Result<Vec<Post>, FetchError>;

    /// Fails with [`FetchError::NotFound`] when the remote has no such post.
    async fn get_post(&self, id: PostId) -> Result<Post, FetchError>;

    async fn list_comments(&self, post_id: PostId) -> Result<Vec<Comment>, FetchError>;

    /// Creates a post. The returned id comes from the remote; title and body
    /// are the caller's trimmed input, not the remote echo.
    async fn create_post(&self, title: &str, body: &str) -> Result<Post, FetchError>;
}
