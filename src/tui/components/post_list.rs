//! # PostList Component
//!
//! Selectable list of post cards: bold title plus a two-line body preview.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `PostListState` lives in `TuiState`
//! - `PostList` is created each frame with borrowed state and posts

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState, Paragraph};

use crate::data::{Post, PostId};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const PREVIEW_LINES: usize = 2;
const PAGE: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostListEvent {
    Open(PostId),
}

#[derive(Debug, Default)]
pub struct PostListState {
    pub list_state: ListState,
    /// Ids of the posts currently shown, in order.
    ids: Vec<PostId>,
}

impl PostListState {
    /// Keeps the selection valid for the posts about to be shown.
    pub fn sync(&mut self, posts: &[Post]) {
        let changed = self.ids.len() != posts.len()
            || self.ids.iter().zip(posts).any(|(id, p)| *id != p.id);
        if !changed {
            return;
        }
        let previous = self
            .list_state
            .selected()
            .and_then(|i| self.ids.get(i).copied());
        self.ids = posts.iter().map(|p| p.id).collect();

        let selected = previous
            .and_then(|id| self.ids.iter().position(|x| *x == id))
            .or(if self.ids.is_empty() { None } else { Some(0) });
        self.list_state.select(selected);
    }

    pub fn selected_id(&self) -> Option<PostId> {
        self.list_state.selected().and_then(|i| self.ids.get(i).copied())
    }

    fn move_by(&mut self, delta: isize) {
        if self.ids.is_empty() {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0) as isize;
        let last = self.ids.len() as isize - 1;
        let next = (current + delta).clamp(0, last) as usize;
        self.list_state.select(Some(next));
    }
}

impl EventHandler for PostListState {
    type Event = PostListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<PostListEvent> {
        match event {
            TuiEvent::CursorUp => self.move_by(-1),
            TuiEvent::CursorDown => self.move_by(1),
            TuiEvent::PageUp => self.move_by(-(PAGE as isize)),
            TuiEvent::PageDown => self.move_by(PAGE as isize),
            TuiEvent::Submit => return self.selected_id().map(PostListEvent::Open),
            _ => {}
        }
        None
    }
}

/// Transient render wrapper for the post list.
pub struct PostList<'a> {
    pub state: &'a mut PostListState,
    pub posts: &'a [Post],
    pub focused: bool,
}

impl Component for PostList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border = if self.focused {
            Style::default().fg(Color::Gray)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .title(format!(" Posts ({}) ", self.posts.len()))
            .border_style(border);

        if self.posts.is_empty() {
            let empty = Paragraph::new(vec![
                Line::from(Span::styled(
                    "No posts found",
                    Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    "Try adjusting your search terms or browse all posts.",
                    Style::default().fg(Color::DarkGray),
                )),
            ])
            .alignment(Alignment::Center)
            .block(block);
            frame.render_widget(empty, area);
            return;
        }

        // borders + highlight symbol
        let text_width = area.width.saturating_sub(4).max(1) as usize;
        let items: Vec<ListItem> = self
            .posts
            .iter()
            .map(|post| post_card(post, text_width))
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::DarkGray))
            .highlight_symbol("▌ ");

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

fn post_card(post: &Post, width: usize) -> ListItem<'static> {
    let mut lines = vec![Line::from(Span::styled(
        post.title.clone(),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    ))];
    lines.extend(
        textwrap::wrap(&post.body, width)
            .into_iter()
            .take(PREVIEW_LINES)
            .map(|line| {
                Line::from(Span::styled(
                    line.into_owned(),
                    Style::default().fg(Color::Gray),
                ))
            }),
    );
    lines.push(Line::default());
    ListItem::new(lines)
}
