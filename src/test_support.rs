//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Mutex;

use async_trait::async_trait;

use crate::data::{Comment, FetchError, Post, PostId, PostsDataSource};

pub fn post(id: PostId, title: &str, body: &str) -> Post {
    Post {
        id,
        title: title.to_string(),
        body: body.to_string(),
    }
}

pub fn comment(id: u64, post_id: PostId) -> Comment {
    Comment {
        id,
        post_id,
        email: format!("user{id}@example.com"),
        body: format!("comment {id}"),
    }
}

/// How many times each endpoint was hit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallCounts {
    pub list_posts: usize,
    pub get_post: usize,
    pub list_comments: usize,
    pub create_post: usize,
}

impl CallCounts {
    pub fn total(&self) -> usize {
        self.list_posts + self.get_post + self.list_comments + self.create_post
    }
}

#[derive(Default)]
struct Inner {
    posts: Vec<Post>,
    comments: Vec<Comment>,
    posts_error: Option<FetchError>,
    comments_error: Option<FetchError>,
    create_error: Option<FetchError>,
    next_id: PostId,
    calls: CallCounts,
}

/// In-memory data source with scripted failures and call counting.
#[derive(Default)]
pub struct MockSource {
    inner: Mutex<Inner>,
}

impl MockSource {
    pub fn with_posts(posts: Vec<Post>) -> Self {
        let source = Self::default();
        source.inner.lock().unwrap().posts = posts;
        source
    }

    pub fn set_comments(&self, comments: Vec<Comment>) {
        self.inner.lock().unwrap().comments = comments;
    }

    pub fn fail_posts(&self, err: FetchError) {
        self.inner.lock().unwrap().posts_error = Some(err);
    }

    pub fn fail_comments(&self, err: FetchError) {
        self.inner.lock().unwrap().comments_error = Some(err);
    }

    pub fn fail_create(&self, err: FetchError) {
        self.inner.lock().unwrap().create_error = Some(err);
    }

    pub fn calls(&self) -> CallCounts {
        self.inner.lock().unwrap().calls
    }
}

#[async_trait]
impl PostsDataSource for MockSource {
    fn name(&self) -> &str {
        "mock"
    }

    async fn list_posts(&self) -> Result<Vec<Post>, FetchError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.list_posts += 1;
        match &inner.posts_error {
            Some(e) => Err(e.clone()),
            None => Ok(inner.posts.clone()),
        }
    }

    async fn get_post(&self, id: PostId) -> Result<Post, FetchError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.get_post += 1;
        if let Some(e) = &inner.posts_error {
            return Err(e.clone());
        }
        inner
            .posts
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(FetchError::NotFound { message: None })
    }

    async fn list_comments(&self, post_id: PostId) -> Result<Vec<Comment>, FetchError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.list_comments += 1;
        match &inner.comments_error {
            Some(e) => Err(e.clone()),
            None => Ok(inner
                .comments
                .iter()
                .filter(|c| c.post_id == post_id)
                .cloned()
                .collect()),
        }
    }

    async fn create_post(&self, title: &str, body: &str) -> Result<Post, FetchError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.create_post += 1;
        if let Some(e) = &inner.create_error {
            return Err(e.clone());
        }
        inner.next_id += 1;
        Ok(post(100 + inner.next_id, title.trim(), body.trim()))
    }
}
