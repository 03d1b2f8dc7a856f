//! # Data Access
//!
//! Everything that talks to the remote post API lives here. The rest of the
//! crate only sees the [`PostsDataSource`] trait and plain records.

pub mod http;
pub mod source;
pub mod types;

pub use http::HttpPostsSource;
pub use source::{FetchError, PostsDataSource};
pub use types::{Comment, Post, PostId};
