//! # Detail Controller
//!
//! Owns the single-post screen. The post may arrive by navigation (no fetch)
//! or be fetched by id; comments are always fetched.
//!
//! The post and comment fetches fail independently. A comment failure never
//! moves `load_status` to `Failed`, and when both fail the post error wins
//! regardless of which response arrives first.

use log::{info, warn};

use crate::core::action::{Effect, MountId};
use crate::core::errors::{COMMENTS_FAILED, POST_DETAILS_FAILED};
use crate::core::listing::LoadStatus;
use crate::data::{Comment, FetchError, Post, PostId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailState {
    pub post_id: PostId,
    pub post: Option<Post>,
    pub comments: Vec<Comment>,
    /// Status of the post itself.
    pub load_status: LoadStatus,
    /// Status of the comment fetch.
    pub comments_status: LoadStatus,
    pub post_error: Option<String>,
    pub comments_error: Option<String>,
}

impl DetailState {
    /// The error to show, post failures taking precedence over comment failures.
    pub fn last_error(&self) -> Option<&str> {
        self.post_error
            .as_deref()
            .or(self.comments_error.as_deref())
    }
}

pub struct DetailController {
    mount: MountId,
    state: DetailState,
}

impl DetailController {
    /// Mounts the controller for `post_id`. A post handed in by navigation is
    /// used as-is; otherwise it is fetched. Comments are requested either way.
    pub fn mount(mount: MountId, post_id: PostId, handed: Option<Post>) -> (Self, Vec<Effect>) {
        let mut effects = Vec::with_capacity(2);
        let load_status = if handed.is_some() {
            LoadStatus::Ready
        } else {
            effects.push(Effect::FetchPost { mount, id: post_id });
            LoadStatus::Loading
        };
        effects.push(Effect::FetchComments { mount, post_id });

        info!(
            "Mounting detail for post {} (mount={}, handed in: {})",
            post_id,
            mount,
            handed.is_some()
        );

        let controller = Self {
            mount,
            state: DetailState {
                post_id,
                post: handed,
                comments: Vec::new(),
                load_status,
                comments_status: LoadStatus::Loading,
                post_error: None,
                comments_error: None,
            },
        };
        (controller, effects)
    }

    pub fn mount_id(&self) -> MountId {
        self.mount
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn post_fetched(&mut self, result: Result<Post, FetchError>) {
        match result {
            Ok(post) => {
                self.state.post = Some(post);
                self.state.load_status = LoadStatus::Ready;
                self.state.post_error = None;
            }
            Err(e) => {
                warn!("Post {} failed to load: {}", self.state.post_id, e);
                self.state.load_status = LoadStatus::Failed;
                self.state.post_error = Some(POST_DETAILS_FAILED.to_string());
            }
        }
    }

    pub fn comments_fetched(&mut self, result: Result<Vec<Comment>, FetchError>) {
        match result {
            Ok(comments) => {
                self.state.comments = comments;
                self.state.comments_status = LoadStatus::Ready;
                self.state.comments_error = None;
            }
            Err(e) => {
                warn!(
                    "Comments for post {} failed to load: {}",
                    self.state.post_id, e
                );
                self.state.comments.clear();
                self.state.comments_status = LoadStatus::Failed;
                self.state.comments_error = Some(COMMENTS_FAILED.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{comment, post};

    #[test]
    fn test_handed_post_is_ready_and_only_comments_fetched() {
        let (controller, effects) = DetailController::mount(4, 7, Some(post(7, "T", "B")));
        assert_eq!(controller.state().load_status, LoadStatus::Ready);
        assert_eq!(controller.state().post, Some(post(7, "T", "B")));
        assert_eq!(effects, vec![Effect::FetchComments { mount: 4, post_id: 7 }]);
    }

    #[test]
    fn test_missing_post_fetches_post_and_comments() {
        let (controller, effects) = DetailController::mount(4, 42, None);
        assert_eq!(controller.state().load_status, LoadStatus::Loading);
        assert_eq!(
            effects,
            vec![
                Effect::FetchPost { mount: 4, id: 42 },
                Effect::FetchComments { mount: 4, post_id: 42 },
            ]
        );
    }

    #[test]
    fn test_post_failure_keeps_fetched_comments() {
        let (mut controller, _) = DetailController::mount(1, 42, None);
        controller.post_fetched(Err(FetchError::NotFound { message: None }));
        controller.comments_fetched(Ok(vec![comment(1, 42), comment(2, 42)]));

        let state = controller.state();
        assert_eq!(state.load_status, LoadStatus::Failed);
        assert_eq!(state.last_error(), Some("Failed to load post details."));
        assert_eq!(state.comments.len(), 2);
    }

    #[test]
    fn test_comment_failure_does_not_fail_loaded_post() {
        let (mut controller, _) = DetailController::mount(1, 7, Some(post(7, "T", "B")));
        controller.comments_fetched(Err(FetchError::Network("reset".into())));

        let state = controller.state();
        assert_eq!(state.load_status, LoadStatus::Ready);
        assert_eq!(state.comments_status, LoadStatus::Failed);
        assert_eq!(state.last_error(), Some("Failed to load comments."));
        assert!(state.comments.is_empty());
    }

    #[test]
    fn test_post_error_wins_regardless_of_order() {
        let (mut first, _) = DetailController::mount(1, 3, None);
        first.post_fetched(Err(FetchError::Network("x".into())));
        first.comments_fetched(Err(FetchError::Network("y".into())));

        let (mut second, _) = DetailController::mount(2, 3, None);
        second.comments_fetched(Err(FetchError::Network("y".into())));
        second.post_fetched(Err(FetchError::Network("x".into())));

        assert_eq!(first.state().last_error(), Some(POST_DETAILS_FAILED));
        assert_eq!(second.state().last_error(), Some(POST_DETAILS_FAILED));
    }

    #[test]
    fn test_fetched_post_becomes_ready() {
        let (mut controller, _) = DetailController::mount(1, 5, None);
        controller.post_fetched(Ok(post(5, "Fetched", "Body")));
        assert_eq!(controller.state().load_status, LoadStatus::Ready);
        assert_eq!(controller.state().post.as_ref().map(|p| p.id), Some(5));
        assert!(controller.state().last_error().is_none());
    }
}
