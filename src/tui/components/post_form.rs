//! # PostForm Component
//!
//! Overlay for creating a post. Field contents live here; whether a request
//! is in flight and the form error come from the listing state as props.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `PostFormState` lives in `TuiState`
//! - `PostForm` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

use crate::tui::component::{Component, EventHandler};
use crate::tui::components::text_field::TextField;
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Body,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Submit { title: String, body: String },
    Cancel,
}

#[derive(Debug, Default)]
pub struct PostFormState {
    pub title: TextField,
    pub body: TextField,
    pub field: FormField,
}

impl PostFormState {
    pub fn reset(&mut self) {
        self.title.clear();
        self.body.clear();
        self.field = FormField::Title;
    }

    fn active(&mut self) -> &mut TextField {
        match self.field {
            FormField::Title => &mut self.title,
            FormField::Body => &mut self.body,
        }
    }
}

impl EventHandler for PostFormState {
    type Event = FormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<FormEvent> {
        match event {
            TuiEvent::Escape => Some(FormEvent::Cancel),
            TuiEvent::Tab | TuiEvent::CursorDown | TuiEvent::CursorUp => {
                self.field = match self.field {
                    FormField::Title => FormField::Body,
                    FormField::Body => FormField::Title,
                };
                None
            }
            TuiEvent::Submit if self.field == FormField::Title => {
                self.field = FormField::Body;
                None
            }
            TuiEvent::Submit => Some(FormEvent::Submit {
                title: self.title.value.clone(),
                body: self.body.value.clone(),
            }),
            other => {
                self.active().edit(other);
                None
            }
        }
    }
}

/// Transient render wrapper for the form overlay.
pub struct PostForm<'a> {
    pub state: &'a PostFormState,
    pub submitting: bool,
    pub error: Option<&'a str>,
}

impl Component for PostForm<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let error_height = if self.error.is_some() { 2 } else { 0 };
        let height = (9 + error_height).min(area.height);
        let width = area.width.saturating_mul(4) / 5;
        let overlay = Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + u16::from(area.height > height),
            width,
            height,
        };
        frame.render_widget(Clear, overlay);

        let help = if self.submitting {
            " Submitting... "
        } else {
            " Tab switch field  Enter next/submit  Esc cancel "
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Create New Post ")
            .title_bottom(Line::from(help).centered())
            .padding(Padding::horizontal(1));
        let inner = block.inner(overlay);
        frame.render_widget(block, overlay);

        let [error_area, title_area, body_area] = Layout::vertical([
            Constraint::Length(error_height),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .areas(inner);

        if let Some(error) = self.error {
            let error = Paragraph::new(error)
                .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
                .wrap(Wrap { trim: true });
            frame.render_widget(error, error_area);
        }

        let editable = !self.submitting;
        render_field(
            frame,
            title_area,
            &self.state.title,
            "Title",
            editable && self.state.field == FormField::Title,
        );
        render_field(
            frame,
            body_area,
            &self.state.body,
            "Body",
            editable && self.state.field == FormField::Body,
        );
    }
}

fn render_field(frame: &mut Frame, area: Rect, field: &TextField, label: &str, focused: bool) {
    let border = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::bordered().title(format!(" {label} ")).border_style(border);
    field.render(frame, area, block, "", focused);
}
