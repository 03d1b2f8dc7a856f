//! # SearchBar Component
//!
//! Filter input above the post list. Enter applies the term; Esc clears it
//! and resets the filter, like a "Clear" button.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Block;

use crate::tui::component::{Component, EventHandler};
use crate::tui::components::text_field::TextField;
use crate::tui::event::TuiEvent;

pub const PLACEHOLDER: &str = "Filter posts by title... (Press Enter to filter)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    Apply(String),
    Clear,
}

#[derive(Debug, Default)]
pub struct SearchBar {
    pub field: TextField,
    /// Prop: whether keystrokes go here.
    pub focused: bool,
}

impl EventHandler for SearchBar {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<SearchEvent> {
        match event {
            TuiEvent::Submit => Some(SearchEvent::Apply(self.field.value.clone())),
            TuiEvent::Escape => {
                self.field.clear();
                Some(SearchEvent::Clear)
            }
            other => {
                self.field.edit(other);
                None
            }
        }
    }
}

impl Component for SearchBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let title = if self.focused {
            " Filter (Enter apply, Esc clear) "
        } else {
            " Filter (/) "
        };
        let block = Block::bordered().title(title).border_style(border);
        self.field
            .render(frame, area, block, PLACEHOLDER, self.focused);
    }
}
