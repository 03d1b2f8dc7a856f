//! # NotificationBanner Component
//!
//! One-line banner for transient listing notifications.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::listing::{Notification, Severity};
use crate::tui::component::Component;

pub struct NotificationBanner<'a> {
    pub notification: &'a Notification,
}

impl Component for NotificationBanner<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let (icon, style) = match self.notification.severity {
            Severity::Success => (
                "✓",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        };
        let line = Line::from(vec![
            Span::raw(format!(" {icon} {} ", self.notification.message)),
            Span::styled("(x to dismiss) ", style.remove_modifier(Modifier::BOLD)),
        ])
        .style(style)
        .centered();
        frame.render_widget(line, area);
    }
}
