//! # Application State
//!
//! Core business state for Postboard. Domain logic only, no TUI types.
//! Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── screen: Screen               // the one mounted controller
//! │   ├── Listing(ListingController)
//! │   └── Detail(DetailController)
//! ├── settings: ListingSettings     // load delay, notification ttl
//! └── next_mount: MountId           // generator for mount ids
//! ```
//!
//! Mounting a screen replaces the previous controller outright, so its state
//! is discarded and completions addressed to it no longer match.

use log::debug;

use crate::core::action::{Effect, MountId};
use crate::core::detail::{DetailController, DetailState};
use crate::core::listing::{ListingController, ListingSettings, ListingState};
use crate::data::{Post, PostId};

pub enum Screen {
    Listing(ListingController),
    Detail(DetailController),
}

impl Screen {
    fn mount_id(&self) -> MountId {
        match self {
            Screen::Listing(c) => c.mount_id(),
            Screen::Detail(c) => c.mount_id(),
        }
    }
}

pub struct App {
    pub screen: Screen,
    pub settings: ListingSettings,
    next_mount: MountId,
}

impl App {
    /// Starts on the post listing.
    pub fn new(settings: ListingSettings) -> (Self, Vec<Effect>) {
        let (listing, effect) = ListingController::mount(1, settings);
        let app = Self {
            screen: Screen::Listing(listing),
            settings,
            next_mount: 2,
        };
        (app, vec![effect])
    }

    /// Starts directly on one post, with nothing handed in.
    pub fn open_post(settings: ListingSettings, id: PostId) -> (Self, Vec<Effect>) {
        let (detail, effects) = DetailController::mount(1, id, None);
        let app = Self {
            screen: Screen::Detail(detail),
            settings,
            next_mount: 2,
        };
        (app, effects)
    }

    /// Mount id of the current screen.
    pub fn mount_id(&self) -> MountId {
        self.screen.mount_id()
    }

    pub fn listing(&self) -> Option<&ListingState> {
        match &self.screen {
            Screen::Listing(c) => Some(c.state()),
            Screen::Detail(_) => None,
        }
    }

    pub fn detail(&self) -> Option<&DetailState> {
        match &self.screen {
            Screen::Detail(c) => Some(c.state()),
            Screen::Listing(_) => None,
        }
    }

    pub(crate) fn mount_listing(&mut self) -> Vec<Effect> {
        let mount = self.allocate_mount();
        let (listing, effect) = ListingController::mount(mount, self.settings);
        self.screen = Screen::Listing(listing);
        vec![effect]
    }

    pub(crate) fn mount_detail(&mut self, id: PostId, handed: Option<Post>) -> Vec<Effect> {
        let mount = self.allocate_mount();
        let (detail, effects) = DetailController::mount(mount, id, handed);
        self.screen = Screen::Detail(detail);
        effects
    }

    /// The listing controller, only if it is the one `mount` addresses.
    pub(crate) fn listing_mut(&mut self, mount: MountId) -> Option<&mut ListingController> {
        match &mut self.screen {
            Screen::Listing(c) if c.mount_id() == mount => Some(c),
            _ => {
                debug!("Dropping completion for unmounted listing (mount={})", mount);
                None
            }
        }
    }

    /// The detail controller, only if it is the one `mount` addresses.
    pub(crate) fn detail_mut(&mut self, mount: MountId) -> Option<&mut DetailController> {
        match &mut self.screen {
            Screen::Detail(c) if c.mount_id() == mount => Some(c),
            _ => {
                debug!("Dropping completion for unmounted detail (mount={})", mount);
                None
            }
        }
    }

    fn allocate_mount(&mut self) -> MountId {
        let mount = self.next_mount;
        self.next_mount += 1;
        mount
    }
}
