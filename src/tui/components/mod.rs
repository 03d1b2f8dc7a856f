//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as fields:
//! - `TitleBar`: top status line
//! - `NotificationBanner`: transient success message
//! - `PostDetail`: post card and comments (scroll state borrowed)
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that keep local state and emit high-level events:
//! - `SearchBar`: filter input, emits `SearchEvent`
//! - `PostFormState`: new post fields, emits `FormEvent`
//! - `PostListState`: selection, emits `PostListEvent`
//!
//! Stateful components follow the persistent state + transient wrapper
//! pattern: the state lives in `TuiState`, a borrowed wrapper is built each
//! frame to render it.
//!
//! Components receive external data as props, never by reaching into the
//! core `App`. This keeps dependencies explicit and components testable.
//!
//! ```rust,ignore
//! // Good: dependencies are explicit
//! PostList { state: &mut tui.post_list, posts: &listing.visible_posts, focused }.render(frame, area);
//! ```

mod title_bar;
pub use title_bar::TitleBar;

pub mod notification;
pub mod post_detail;
pub mod post_form;
pub mod post_list;
pub mod search_bar;
pub mod text_field;

pub use notification::NotificationBanner;
pub use post_detail::PostDetail;
pub use post_form::{FormEvent, PostForm, PostFormState};
pub use post_list::{PostList, PostListEvent, PostListState};
pub use search_bar::{SearchBar, SearchEvent};
