//! # Actions
//!
//! Everything that can happen in Postboard becomes an `Action`.
//! User types a filter and presses Enter? That's `Action::ApplyFilter(term)`.
//! The post list arrives? That's `Action::PostsLoaded { .. }`.
//!
//! `update()` takes the current state and an action, mutates the state, and
//! returns the side effects to run. No I/O happens here.
//!
//! ```text
//! App + Action  →  update()  →  App' + [Effect]
//!                                    │
//!                     runtime executes effects, results come back as Actions
//! ```
//!
//! Completion actions carry the `MountId` of the controller that asked for
//! them. If that controller has since been unmounted the action is dropped,
//! so a late response can never touch discarded state.

use std::time::Duration;

use crate::core::state::{App, Screen};
use crate::data::{Comment, FetchError, Post, PostId};

/// Identifies one mounting of a screen controller.
pub type MountId = u64;

#[derive(Debug)]
pub enum Action {
    // User intents
    ApplyFilter(String),
    ToggleNewPostForm,
    SubmitNewPost { title: String, body: String },
    CancelNewPost,
    SelectPost(PostId),
    DismissNotification,
    GoBack,
    Quit,

    // Completions from background effects
    PostsLoaded {
        mount: MountId,
        result: Result<Vec<Post>, FetchError>,
    },
    PostCreated {
        mount: MountId,
        result: Result<Post, FetchError>,
    },
    PostFetched {
        mount: MountId,
        result: Result<Post, FetchError>,
    },
    CommentsFetched {
        mount: MountId,
        result: Result<Vec<Comment>, FetchError>,
    },
    NotificationExpired {
        mount: MountId,
        token: u64,
    },
}

/// Work requested by `update()` for the runtime to carry out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Wait `delay`, then list posts.
    LoadPosts { mount: MountId, delay: Duration },
    CreatePost {
        mount: MountId,
        title: String,
        body: String,
    },
    FetchPost { mount: MountId, id: PostId },
    FetchComments { mount: MountId, post_id: PostId },
    /// Fire `NotificationExpired` after `after`.
    ExpireNotification {
        mount: MountId,
        token: u64,
        after: Duration,
    },
    Quit,
}

/// Applies one action to the app. The only place state changes.
pub fn update(app: &mut App, action: Action) -> Vec<Effect> {
    match action {
        Action::Quit => vec![Effect::Quit],

        Action::ApplyFilter(term) => {
            if let Screen::Listing(listing) = &mut app.screen {
                listing.apply_filter(&term);
            }
            Vec::new()
        }
        Action::ToggleNewPostForm => {
            if let Screen::Listing(listing) = &mut app.screen {
                listing.toggle_new_post_form();
            }
            Vec::new()
        }
        Action::SubmitNewPost { title, body } => match &mut app.screen {
            Screen::Listing(listing) => listing.submit_new_post(&title, &body).into_iter().collect(),
            Screen::Detail(_) => Vec::new(),
        },
        Action::CancelNewPost => {
            if let Screen::Listing(listing) = &mut app.screen {
                listing.cancel_new_post();
            }
            Vec::new()
        }
        Action::DismissNotification => {
            if let Screen::Listing(listing) = &mut app.screen {
                listing.dismiss_notification();
            }
            Vec::new()
        }
        Action::SelectPost(id) => {
            let selected = match &app.screen {
                Screen::Listing(listing) => listing.select_post(id).ok(),
                Screen::Detail(_) => None,
            };
            match selected {
                Some(post) => app.mount_detail(id, Some(post)),
                None => Vec::new(),
            }
        }
        Action::GoBack => match app.screen {
            Screen::Detail(_) => app.mount_listing(),
            Screen::Listing(_) => Vec::new(),
        },

        Action::PostsLoaded { mount, result } => {
            if let Some(listing) = app.listing_mut(mount) {
                listing.posts_loaded(result);
            }
            Vec::new()
        }
        Action::PostCreated { mount, result } => app
            .listing_mut(mount)
            .and_then(|listing| listing.post_created(result))
            .into_iter()
            .collect(),
        Action::NotificationExpired { mount, token } => {
            if let Some(listing) = app.listing_mut(mount) {
                listing.notification_expired(token);
            }
            Vec::new()
        }
        Action::PostFetched { mount, result } => {
            if let Some(detail) = app.detail_mut(mount) {
                detail.post_fetched(result);
            }
            Vec::new()
        }
        Action::CommentsFetched { mount, result } => {
            if let Some(detail) = app.detail_mut(mount) {
                detail.comments_fetched(result);
            }
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::listing::{ListingSettings, LoadStatus};
    use crate::test_support::{comment, post};

    fn ready_app() -> App {
        let (mut app, _) = App::new(ListingSettings::default());
        let mount = app.mount_id();
        update(
            &mut app,
            Action::PostsLoaded {
                mount,
                result: Ok(vec![post(1, "Hello", "World"), post(2, "Other", "Body")]),
            },
        );
        app
    }

    #[test]
    fn test_quit_returns_quit_effect() {
        let mut app = ready_app();
        assert_eq!(update(&mut app, Action::Quit), vec![Effect::Quit]);
    }

    #[test]
    fn test_select_post_mounts_detail_with_copy() {
        let mut app = ready_app();
        let listing_mount = app.mount_id();
        let effects = update(&mut app, Action::SelectPost(2));

        let detail = app.detail().expect("detail screen");
        assert_eq!(detail.post, Some(post(2, "Other", "Body")));
        assert_eq!(detail.load_status, LoadStatus::Ready);
        assert_ne!(app.mount_id(), listing_mount);
        assert_eq!(
            effects,
            vec![Effect::FetchComments {
                mount: app.mount_id(),
                post_id: 2
            }]
        );
    }

    #[test]
    fn test_select_unknown_post_stays_on_listing() {
        let mut app = ready_app();
        let effects = update(&mut app, Action::SelectPost(77));
        assert!(effects.is_empty());
        assert!(app.listing().is_some());
    }

    #[test]
    fn test_go_back_remounts_listing_and_reloads() {
        let mut app = ready_app();
        update(&mut app, Action::SelectPost(1));
        let effects = update(&mut app, Action::GoBack);

        let listing = app.listing().expect("listing screen");
        assert_eq!(listing.load_status, LoadStatus::Loading);
        assert!(matches!(effects.as_slice(), [Effect::LoadPosts { .. }]));
    }

    #[test]
    fn test_late_comments_after_go_back_are_dropped() {
        let mut app = ready_app();
        update(&mut app, Action::SelectPost(1));
        let detail_mount = app.mount_id();
        update(&mut app, Action::GoBack);
        let before = app.listing().cloned();

        update(
            &mut app,
            Action::CommentsFetched {
                mount: detail_mount,
                result: Ok(vec![comment(1, 1)]),
            },
        );

        assert_eq!(app.listing().cloned(), before);
    }

    #[test]
    fn test_late_posts_for_old_listing_are_dropped() {
        let (mut app, _) = App::new(ListingSettings::default());
        let old_mount = app.mount_id();
        // Simulate leaving and returning before the first load resolved.
        app.mount_detail(1, Some(post(1, "Hello", "World")));
        app.mount_listing();

        update(
            &mut app,
            Action::PostsLoaded {
                mount: old_mount,
                result: Ok(vec![post(9, "Stale", "Data")]),
            },
        );

        let listing = app.listing().unwrap();
        assert_eq!(listing.load_status, LoadStatus::Loading);
        assert!(listing.all_posts.is_empty());
    }

    #[test]
    fn test_submit_validation_issues_no_effect() {
        let mut app = ready_app();
        let effects = update(
            &mut app,
            Action::SubmitNewPost {
                title: String::new(),
                body: "x".into(),
            },
        );
        assert!(effects.is_empty());
        assert_eq!(
            app.listing().unwrap().form.error.as_deref(),
            Some("Both title and body are required.")
        );
    }

    #[test]
    fn test_create_round_trip_through_update() {
        let mut app = ready_app();
        let mount = app.mount_id();
        update(&mut app, Action::ApplyFilter("zzz".into()));
        let effects = update(
            &mut app,
            Action::SubmitNewPost {
                title: "A".into(),
                body: "B".into(),
            },
        );
        assert!(matches!(effects.as_slice(), [Effect::CreatePost { .. }]));

        let effects = update(
            &mut app,
            Action::PostCreated {
                mount,
                result: Ok(post(101, "A", "B")),
            },
        );
        assert!(matches!(
            effects.as_slice(),
            [Effect::ExpireNotification { .. }]
        ));
        let listing = app.listing().unwrap();
        assert_eq!(listing.visible_posts, vec![post(101, "A", "B")]);
        assert_eq!(listing.all_posts[0].id, 101);
    }

    #[test]
    fn test_intents_for_other_screen_are_ignored() {
        let mut app = ready_app();
        update(&mut app, Action::SelectPost(1));
        assert!(update(&mut app, Action::ApplyFilter("x".into())).is_empty());
        assert!(update(&mut app, Action::SelectPost(2)).is_empty());
        assert!(app.detail().is_some());
    }
}
