//! # TitleBar Component
//!
//! Top status line: app name, current screen heading, and a status message.
//!
//! Stateless: all fields are props supplied by the parent each frame.
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new("Posts", "Showing 3 of 100 | filter: \"rust\"");
//! title_bar.render(frame, area);
//! ```

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    /// Screen heading (e.g. "Posts", "Post #4")
    pub heading: String,
    /// Transient status (e.g. "Loading...", "Showing 3 of 100")
    pub status_message: String,
}

impl TitleBar {
    pub fn new(heading: impl Into<String>, status_message: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            status_message: status_message.into(),
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled(
                "Postboard",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" | {}", self.heading)),
        ];
        if !self.status_message.is_empty() {
            spans.push(Span::styled(
                format!(" | {}", self.status_message),
                Style::default().fg(Color::DarkGray),
            ));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
