//! # Listing Controller
//!
//! Owns the post list screen: initial load, title filter, new-post creation
//! and the success notification.
//!
//! ```text
//! mount ──► Loading ──(PostsLoaded Ok)──► Ready
//!                   └─(PostsLoaded Err)─► Failed
//! ```
//!
//! Invariant: `visible_posts` is always a subsequence of `all_posts` in the
//! same order; with no filter they are equal.
//!
//! Methods here never perform I/O. Anything that needs the network or a timer
//! is returned as an [`Effect`] for the runtime to execute.

use std::time::Duration;

use log::{debug, error, info, warn};

use crate::core::action::{Effect, MountId};
use crate::core::errors::{
    CREATE_POST_WORDING, InternalInvariantError, LOAD_POSTS_WORDING, SubmitError,
    ValidationError, describe_failure,
};
use crate::data::{FetchError, Post, PostId};

pub const DEFAULT_LOAD_DELAY: Duration = Duration::from_secs(3);
pub const DEFAULT_NOTIFICATION_TTL: Duration = Duration::from_secs(5);
pub const POST_CREATED_MESSAGE: &str = "Post created successfully!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Ready,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    /// Identifies which auto-dismiss timer may clear this notification.
    pub token: u64,
}

/// State of the "Create New Post" form. Failures stay here, not on the listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateFormState {
    pub open: bool,
    pub submitting: bool,
    pub error: Option<String>,
}

/// Timing knobs for the listing screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingSettings {
    /// Simulated latency before the initial fetch.
    pub load_delay: Duration,
    /// How long the success notification stays up.
    pub notification_ttl: Duration,
}

impl Default for ListingSettings {
    fn default() -> Self {
        Self {
            load_delay: DEFAULT_LOAD_DELAY,
            notification_ttl: DEFAULT_NOTIFICATION_TTL,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingState {
    pub all_posts: Vec<Post>,
    pub visible_posts: Vec<Post>,
    pub load_status: LoadStatus,
    pub last_error: Option<String>,
    pub notification: Option<Notification>,
    /// Last applied filter term (empty = no filter).
    pub filter: String,
    pub form: CreateFormState,
}

pub struct ListingController {
    mount: MountId,
    settings: ListingSettings,
    state: ListingState,
    next_token: u64,
}

impl ListingController {
    /// Mounts the controller in `Loading` and returns the delayed load effect.
    pub fn mount(mount: MountId, settings: ListingSettings) -> (Self, Effect) {
        info!(
            "Mounting listing (mount={}, load delay {:?})",
            mount, settings.load_delay
        );
        let controller = Self {
            mount,
            settings,
            state: ListingState {
                all_posts: Vec::new(),
                visible_posts: Vec::new(),
                load_status: LoadStatus::Loading,
                last_error: None,
                notification: None,
                filter: String::new(),
                form: CreateFormState::default(),
            },
            next_token: 0,
        };
        let effect = Effect::LoadPosts {
            mount,
            delay: settings.load_delay,
        };
        (controller, effect)
    }

    pub fn mount_id(&self) -> MountId {
        self.mount
    }

    /// Read-only snapshot for the presentation layer.
    pub fn state(&self) -> &ListingState {
        &self.state
    }

    /// Applies the result of the initial `list_posts` call.
    pub fn posts_loaded(&mut self, result: Result<Vec<Post>, FetchError>) {
        if self.state.load_status != LoadStatus::Loading {
            warn!("Ignoring duplicate posts load result");
            return;
        }
        match result {
            Ok(posts) => {
                info!("Listing ready with {} posts", posts.len());
                self.state.visible_posts = posts.clone();
                self.state.all_posts = posts;
                self.state.load_status = LoadStatus::Ready;
                self.state.last_error = None;
            }
            Err(e) => {
                warn!("Listing load failed: {}", e);
                self.state.load_status = LoadStatus::Failed;
                self.state.last_error = Some(describe_failure(&e, LOAD_POSTS_WORDING));
            }
        }
    }

    /// Projects `all_posts` onto posts whose title contains `term`
    /// (case-insensitive). A blank term resets to the full list.
    ///
    /// Returns `false` (and changes nothing) unless the listing is `Ready`.
    pub fn apply_filter(&mut self, term: &str) -> bool {
        if self.state.load_status != LoadStatus::Ready {
            debug!("Filter '{}' rejected: listing not ready", term);
            return false;
        }
        if term.trim().is_empty() {
            self.state.filter.clear();
            self.state.visible_posts = self.state.all_posts.clone();
        } else {
            let needle = term.to_lowercase();
            self.state.filter = term.to_string();
            self.state.visible_posts = self
                .state
                .all_posts
                .iter()
                .filter(|post| post.title.to_lowercase().contains(&needle))
                .cloned()
                .collect();
        }
        debug!(
            "Filter '{}' → {} of {} posts",
            term,
            self.state.visible_posts.len(),
            self.state.all_posts.len()
        );
        true
    }

    pub fn toggle_new_post_form(&mut self) {
        self.state.form.open = !self.state.form.open;
        if !self.state.form.open {
            self.state.form.error = None;
        }
    }

    /// Validates and starts a create request.
    ///
    /// Rejections are also recorded on the form so the user sees them.
    pub fn submit_new_post(&mut self, title: &str, body: &str) -> Result<Effect, SubmitError> {
        let outcome = self.check_submit(title, body);
        match outcome {
            Ok(()) => {
                self.state.form.submitting = true;
                self.state.form.error = None;
                info!("Submitting new post (mount={})", self.mount);
                Ok(Effect::CreatePost {
                    mount: self.mount,
                    title: title.trim().to_string(),
                    body: body.trim().to_string(),
                })
            }
            Err(e) => {
                debug!("Submit rejected: {:?}", e);
                self.state.form.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    fn check_submit(&self, title: &str, body: &str) -> Result<(), SubmitError> {
        if self.state.load_status != LoadStatus::Ready {
            return Err(SubmitError::NotReady);
        }
        if self.state.form.submitting {
            return Err(SubmitError::InFlight);
        }
        if title.trim().is_empty() || body.trim().is_empty() {
            return Err(ValidationError::MissingFields.into());
        }
        Ok(())
    }

    /// Applies the result of a create request.
    ///
    /// On success the new post is prepended to both lists whether or not it
    /// matches the active filter, and the returned effect schedules the
    /// notification's auto-dismiss.
    pub fn post_created(&mut self, result: Result<Post, FetchError>) -> Option<Effect> {
        self.state.form.submitting = false;
        match result {
            Ok(post) => {
                info!("Prepending created post {}", post.id);
                self.state.all_posts.insert(0, post.clone());
                self.state.visible_posts.insert(0, post);
                self.state.form.open = false;
                self.state.form.error = None;

                self.next_token += 1;
                let token = self.next_token;
                self.state.notification = Some(Notification {
                    message: POST_CREATED_MESSAGE.to_string(),
                    severity: Severity::Success,
                    token,
                });
                Some(Effect::ExpireNotification {
                    mount: self.mount,
                    token,
                    after: self.settings.notification_ttl,
                })
            }
            Err(e) => {
                warn!("Create post failed: {}", e);
                self.state.form.error = Some(describe_failure(&e, CREATE_POST_WORDING));
                None
            }
        }
    }

    /// Closes the form and clears its error. An in-flight create still lands.
    pub fn cancel_new_post(&mut self) {
        self.state.form.open = false;
        self.state.form.error = None;
    }

    pub fn dismiss_notification(&mut self) {
        self.state.notification = None;
    }

    /// Auto-dismiss timer fired. Only clears the notification it was set for.
    pub fn notification_expired(&mut self, token: u64) {
        if self
            .state
            .notification
            .as_ref()
            .is_some_and(|n| n.token == token)
        {
            self.state.notification = None;
        }
    }

    /// Looks up a post in the full collection and hands back a copy.
    ///
    /// Ids are not unique once posts are created: the API answers every
    /// create with the same id. The first match wins, which is the most
    /// recently prepended post.
    pub fn select_post(&self, id: PostId) -> Result<Post, InternalInvariantError> {
        match self.state.all_posts.iter().find(|post| post.id == id) {
            Some(post) => Ok(post.clone()),
            None => {
                let err = InternalInvariantError::UnknownPost(id);
                error!("Invariant violated: {}", err);
                Err(err)
            }
        }
    }
}
