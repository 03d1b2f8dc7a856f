//! # Effect Runtime
//!
//! Carries out the [`Effect`]s returned by `update()` against a data source
//! and turns each outcome into the completion [`Action`] fed back to the
//! event loop.

use std::sync::{Arc, mpsc};

use log::{debug, info, warn};

use crate::core::action::{Action, Effect};
use crate::data::PostsDataSource;

/// Runs one effect to completion. `Quit` has no completion.
pub async fn perform(effect: Effect, source: &dyn PostsDataSource) -> Option<Action> {
    match effect {
        Effect::LoadPosts { mount, delay } => {
            if !delay.is_zero() {
                debug!("Holding posts load for {:?}", delay);
                tokio::time::sleep(delay).await;
            }
            let result = source.list_posts().await;
            Some(Action::PostsLoaded { mount, result })
        }
        Effect::CreatePost { mount, title, body } => {
            let result = source.create_post(&title, &body).await;
            Some(Action::PostCreated { mount, result })
        }
        Effect::FetchPost { mount, id } => {
            let result = source.get_post(id).await;
            Some(Action::PostFetched { mount, result })
        }
        Effect::FetchComments { mount, post_id } => {
            let result = source.list_comments(post_id).await;
            Some(Action::CommentsFetched { mount, result })
        }
        Effect::ExpireNotification {
            mount,
            token,
            after,
        } => {
            tokio::time::sleep(after).await;
            Some(Action::NotificationExpired { mount, token })
        }
        Effect::Quit => None,
    }
}

/// Spawns `effect` on the tokio runtime and sends its completion to `tx`.
pub fn spawn_effect(
    effect: Effect,
    source: Arc<dyn PostsDataSource>,
    tx: mpsc::Sender<Action>,
) -> tokio::task::AbortHandle {
    info!("Spawning effect via {}: {:?}", source.name(), effect);
    let handle = tokio::spawn(async move {
        if let Some(action) = perform(effect, source.as_ref()).await
            && tx.send(action).is_err()
        {
            warn!("Failed to deliver completion: receiver dropped");
        }
    });
    handle.abort_handle()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::FetchError;
    use crate::test_support::{MockSource, comment, post};
    use std::time::Duration;

    #[tokio::test]
    async fn test_load_posts_effect() {
        let source = MockSource::with_posts(vec![post(1, "Hello", "World")]);
        let action = perform(
            Effect::LoadPosts {
                mount: 3,
                delay: Duration::ZERO,
            },
            &source,
        )
        .await;
        match action {
            Some(Action::PostsLoaded { mount, result }) => {
                assert_eq!(mount, 3);
                assert_eq!(result, Ok(vec![post(1, "Hello", "World")]));
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(source.calls().list_posts, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_load_posts_waits_for_delay_before_fetching() {
        let source = Arc::new(MockSource::with_posts(vec![post(1, "Hello", "World")]));
        let start = tokio::time::Instant::now();
        let task = tokio::spawn({
            let source = Arc::clone(&source);
            async move {
                perform(
                    Effect::LoadPosts {
                        mount: 1,
                        delay: Duration::from_secs(3),
                    },
                    source.as_ref(),
                )
                .await
            }
        });

        tokio::task::yield_now().await;
        tokio::time::advance(Duration::from_millis(2999)).await;
        tokio::task::yield_now().await;
        assert_eq!(source.calls().list_posts, 0);

        tokio::time::advance(Duration::from_millis(1)).await;
        let action = task.await.unwrap();
        assert!(start.elapsed() >= Duration::from_secs(3));
        assert_eq!(source.calls().list_posts, 1);
        assert!(matches!(
            action,
            Some(Action::PostsLoaded { mount: 1, result: Ok(ref posts) }) if posts.len() == 1
        ));
    }

    #[tokio::test]
    async fn test_load_posts_effect_passes_error_through() {
        let source = MockSource::default();
        source.fail_posts(FetchError::Status {
            status: 500,
            message: None,
        });
        let action = perform(
            Effect::LoadPosts {
                mount: 1,
                delay: Duration::ZERO,
            },
            &source,
        )
        .await;
        assert!(matches!(
            action,
            Some(Action::PostsLoaded {
                result: Err(FetchError::Status { status: 500, .. }),
                ..
            })
        ));
        assert_eq!(source.calls().list_posts, 1);
    }

    #[tokio::test]
    async fn test_create_post_effect() {
        let source = MockSource::default();
        let action = perform(
            Effect::CreatePost {
                mount: 4,
                title: " Fresh ".to_string(),
                body: "Post\n".to_string(),
            },
            &source,
        )
        .await;
        match action {
            Some(Action::PostCreated { mount, result }) => {
                assert_eq!(mount, 4);
                assert_eq!(result, Ok(post(101, "Fresh", "Post")));
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(source.calls().create_post, 1);
        assert_eq!(source.calls().total(), 1);
    }

    #[tokio::test]
    async fn test_create_post_effect_passes_error_through() {
        let source = MockSource::default();
        source.fail_create(FetchError::Status {
            status: 422,
            message: Some("Title too long".to_string()),
        });
        let action = perform(
            Effect::CreatePost {
                mount: 4,
                title: "T".to_string(),
                body: "B".to_string(),
            },
            &source,
        )
        .await;
        match action {
            Some(Action::PostCreated { result: Err(err), .. }) => {
                assert_eq!(err.status(), Some(422));
                assert_eq!(err.server_message(), Some("Title too long"));
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(source.calls().create_post, 1);
    }

    #[tokio::test]
    async fn test_fetch_post_effect() {
        let source = MockSource::with_posts(vec![post(7, "Seven", "Body")]);
        let action = perform(Effect::FetchPost { mount: 2, id: 7 }, &source).await;
        match action {
            Some(Action::PostFetched { mount, result }) => {
                assert_eq!(mount, 2);
                assert_eq!(result, Ok(post(7, "Seven", "Body")));
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(source.calls().get_post, 1);
    }

    #[tokio::test]
    async fn test_fetch_post_effect_unknown_id_is_not_found() {
        let source = MockSource::with_posts(vec![post(7, "Seven", "Body")]);
        let action = perform(Effect::FetchPost { mount: 2, id: 8 }, &source).await;
        assert!(matches!(
            action,
            Some(Action::PostFetched {
                result: Err(FetchError::NotFound { message: None }),
                ..
            })
        ));
        assert_eq!(source.calls().get_post, 1);
    }

    #[tokio::test]
    async fn test_fetch_post_effect_passes_error_through() {
        let source = MockSource::with_posts(vec![post(7, "Seven", "Body")]);
        source.fail_posts(FetchError::Network("offline".into()));
        let action = perform(Effect::FetchPost { mount: 2, id: 7 }, &source).await;
        assert!(matches!(
            action,
            Some(Action::PostFetched {
                result: Err(FetchError::Network(_)),
                ..
            })
        ));
        assert_eq!(source.calls().get_post, 1);
        assert_eq!(source.calls().list_posts, 0);
    }

    #[tokio::test]
    async fn test_fetch_comments_effect_passes_error_through() {
        let source = MockSource::default();
        source.fail_comments(FetchError::Network("down".into()));
        let action = perform(Effect::FetchComments { mount: 1, post_id: 9 }, &source).await;
        assert!(matches!(
            action,
            Some(Action::CommentsFetched {
                result: Err(FetchError::Network(_)),
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_fetch_comments_effect() {
        let source = MockSource::default();
        source.set_comments(vec![comment(1, 9)]);
        let action = perform(Effect::FetchComments { mount: 1, post_id: 9 }, &source).await;
        assert!(matches!(
            action,
            Some(Action::CommentsFetched { result: Ok(ref c), .. }) if c.len() == 1
        ));
    }

    #[tokio::test]
    async fn test_quit_has_no_completion() {
        let source = MockSource::default();
        assert!(perform(Effect::Quit, &source).await.is_none());
        assert_eq!(source.calls().total(), 0);
    }

    #[tokio::test]
    async fn test_spawn_effect_delivers_to_channel() {
        let source: Arc<dyn PostsDataSource> = Arc::new(MockSource::default());
        let (tx, rx) = mpsc::channel();
        spawn_effect(
            Effect::ExpireNotification {
                mount: 2,
                token: 5,
                after: Duration::from_millis(1),
            },
            source,
            tx,
        );
        let action = tokio::task::spawn_blocking(move || rx.recv_timeout(Duration::from_secs(5)))
            .await
            .unwrap()
            .unwrap();
        assert!(matches!(
            action,
            Action::NotificationExpired { mount: 2, token: 5 }
        ));
    }
}
