use serde::{Deserialize, Serialize};

pub type PostId = u64;

/// A title/body record. Extra fields on the wire (e.g. `userId`) are ignored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub body: String,
}

/// A read-only annotation attached to exactly one post.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: u64,
    #[serde(rename = "postId")]
    pub post_id: PostId,
    pub email: String,
    pub body: String,
}

/// Request body for `POST /posts`.
#[derive(Serialize, Debug)]
pub(crate) struct NewPostPayload<'a> {
    pub title: &'a str,
    pub body: &'a str,
}

/// The part of a create response we trust: only the assigned id.
#[derive(Deserialize, Debug)]
pub(crate) struct CreatedPost {
    pub id: PostId,
}

/// Error body shape. Only `message` is meaningful to us.
#[derive(Deserialize, Debug, Default)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
