//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! ```text
//! keys ──► route_event() ──► Action ──► update() ──► [Effect] ──► runtime::spawn_effect
//!                                           ▲                               │
//!                                           └──────── mpsc::Receiver ◄──────┘
//! ```
//!
//! The loop redraws every ~80ms while something is loading (spinner) and
//! otherwise only after input or a completed effect.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, EnableBracketedPaste, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use tokio::task::AbortHandle;
use tui_scrollview::ScrollViewState;

use crate::core::action::{Action, Effect, MountId, update};
use crate::core::config::ResolvedConfig;
use crate::core::listing::{ListingState, LoadStatus};
use crate::core::state::{App, Screen};
use crate::data::{HttpPostsSource, PostId, PostsDataSource};
use crate::runtime::spawn_effect;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    FormEvent, PostFormState, PostListEvent, PostListState, SearchBar, SearchEvent,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Which listing widget receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    List,
    Search,
    Form,
}

/// TUI-specific presentation state (not part of core business logic)
#[derive(Default)]
pub struct TuiState {
    // Persistent component states
    pub search: SearchBar,
    pub form: PostFormState,
    pub post_list: PostListState,
    pub detail_scroll: ScrollViewState,
    pub focus: Focus,
    /// Screen mount this state was built for.
    mount: MountId,
}

impl TuiState {
    /// Aligns presentation state with the core state before routing or drawing.
    pub fn sync(&mut self, app: &App) {
        if self.mount != app.mount_id() {
            debug!("Screen changed (mount={}), resetting TUI state", app.mount_id());
            *self = Self {
                mount: app.mount_id(),
                ..Self::default()
            };
        }

        if let Screen::Listing(listing) = &app.screen {
            let state = listing.state();
            if state.form.open {
                self.focus = Focus::Form;
            } else if self.focus == Focus::Form {
                self.form.reset();
                self.focus = Focus::List;
            }
            self.post_list.sync(&state.visible_posts);
        }
        self.search.focused = self.focus == Focus::Search;
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableBracketedPaste,
            Hide
        );
    }
}

/// Spawns effects and keeps the abort handles of the current screen's tasks.
struct EffectRunner {
    source: Arc<dyn PostsDataSource>,
    tx: mpsc::Sender<Action>,
    mount: MountId,
    handles: Vec<AbortHandle>,
}

impl EffectRunner {
    /// Returns `true` if one of the effects asks to quit.
    fn run(&mut self, app: &App, effects: Vec<Effect>) -> bool {
        if app.mount_id() != self.mount {
            if !self.handles.is_empty() {
                debug!(
                    "Aborting {} task(s) of unmounted screen (mount={})",
                    self.handles.len(),
                    self.mount
                );
            }
            for handle in self.handles.drain(..) {
                handle.abort();
            }
            self.mount = app.mount_id();
        }
        self.handles.retain(|h| !h.is_finished());

        let mut quit = false;
        for effect in effects {
            if effect == Effect::Quit {
                quit = true;
                continue;
            }
            let handle = spawn_effect(effect, self.source.clone(), self.tx.clone());
            self.handles.push(handle);
        }
        quit
    }
}

pub fn run(config: ResolvedConfig, start: Option<PostId>) -> std::io::Result<()> {
    let source: Arc<dyn PostsDataSource> = Arc::new(HttpPostsSource::new(
        Some(config.base_url.clone()),
        config.timeout,
    ));
    info!("Using data source '{}' at {}", source.name(), config.base_url);

    let (mut app, initial_effects) = match start {
        Some(id) => App::open_post(config.listing, id),
        None => App::new(config.listing),
    };
    let mut tui = TuiState::default();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = match TerminalModeGuard::new() {
        Ok(guard) => Some(guard),
        Err(e) => {
            warn!("Failed to enable terminal modes: {}", e);
            None
        }
    };

    // Channel for completions from background tasks
    let (tx, rx) = mpsc::channel();
    let mut runner = EffectRunner {
        source,
        tx,
        mount: app.mount_id(),
        handles: Vec::new(),
    };
    runner.run(&app, initial_effects);

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        tui.sync(&app);
        let animating = is_loading(&app);
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Short timeout keeps the spinner moving and completions prompt
        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(250)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if matches!(event, TuiEvent::Resize) {
                continue;
            }
            tui.sync(&app);
            if let Some(action) = route_event(&app, &mut tui, &event) {
                debug!("Dispatching {:?}", action);
                let effects = update(&mut app, action);
                if runner.run(&app, effects) {
                    should_quit = true;
                    break;
                }
            }
        }

        if should_quit {
            break;
        }

        // Handle completions from background effects
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effects = update(&mut app, action);
            runner.run(&app, effects);
        }
    }

    info!("Shutting down");
    ratatui::restore();
    Ok(())
}

fn is_loading(app: &App) -> bool {
    match &app.screen {
        Screen::Listing(listing) => {
            let state = listing.state();
            state.load_status == LoadStatus::Loading || state.form.submitting
        }
        Screen::Detail(detail) => {
            let state = detail.state();
            state.load_status == LoadStatus::Loading
                || state.comments_status == LoadStatus::Loading
        }
    }
}

/// Turns a key event into the action it stands for on the current screen.
fn route_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    // Ctrl+C always quits regardless of focus
    if matches!(event, TuiEvent::ForceQuit) {
        return Some(Action::Quit);
    }
    match &app.screen {
        Screen::Listing(listing) => route_listing(listing.state(), tui, event),
        Screen::Detail(_) => route_detail(tui, event),
    }
}

fn route_listing(state: &ListingState, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    match tui.focus {
        Focus::Form => match tui.form.handle_event(event)? {
            FormEvent::Submit { title, body } => Some(Action::SubmitNewPost { title, body }),
            FormEvent::Cancel => Some(Action::CancelNewPost),
        },
        Focus::Search => {
            let search_event = tui.search.handle_event(event)?;
            tui.focus = Focus::List;
            match search_event {
                SearchEvent::Apply(term) => Some(Action::ApplyFilter(term)),
                SearchEvent::Clear => Some(Action::ApplyFilter(String::new())),
            }
        }
        Focus::List => match event {
            TuiEvent::InputChar('q') => Some(Action::Quit),
            TuiEvent::InputChar('x') | TuiEvent::Escape => state
                .notification
                .as_ref()
                .map(|_| Action::DismissNotification),
            _ if state.load_status != LoadStatus::Ready => None,
            TuiEvent::InputChar('/') => {
                tui.focus = Focus::Search;
                None
            }
            TuiEvent::InputChar('n') => {
                tui.focus = Focus::Form;
                Some(Action::ToggleNewPostForm)
            }
            other => match tui.post_list.handle_event(other)? {
                PostListEvent::Open(id) => Some(Action::SelectPost(id)),
            },
        },
    }
}

fn route_detail(tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::Escape | TuiEvent::Backspace | TuiEvent::InputChar('b') => Some(Action::GoBack),
        TuiEvent::InputChar('q') => Some(Action::Quit),
        TuiEvent::CursorUp => {
            tui.detail_scroll.scroll_up();
            None
        }
        TuiEvent::CursorDown => {
            tui.detail_scroll.scroll_down();
            None
        }
        TuiEvent::PageUp => {
            tui.detail_scroll.scroll_page_up();
            None
        }
        TuiEvent::PageDown => {
            tui.detail_scroll.scroll_page_down();
            None
        }
        _ => None,
    }
}
