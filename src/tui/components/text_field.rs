//! # TextField
//!
//! Single-line text input shared by the search bar and the new post form.
//! The cursor always sits at the end of the value.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::event::TuiEvent;

#[derive(Debug, Default, Clone)]
pub struct TextField {
    pub value: String,
}

impl TextField {
    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Applies an editing event. Returns `true` if the event was an edit.
    pub fn edit(&mut self, event: &TuiEvent) -> bool {
        match event {
            TuiEvent::InputChar(c) => {
                self.value.push(*c);
                true
            }
            TuiEvent::Paste(text) => {
                // Single-line field: flatten pasted newlines
                self.value
                    .extend(text.chars().map(|c| if c == '\n' || c == '\r' { ' ' } else { c }));
                true
            }
            TuiEvent::Backspace => {
                self.value.pop();
                true
            }
            _ => false,
        }
    }

    /// Renders the field inside `block`. Shows `placeholder` when empty and
    /// places the terminal cursor when `focused`.
    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        block: Block,
        placeholder: &str,
        focused: bool,
    ) {
        let inner = block.inner(area);
        let content = if self.value.is_empty() {
            Span::styled(placeholder.to_string(), Style::default().fg(Color::DarkGray))
        } else {
            Span::raw(self.visible_tail(inner.width))
        };
        frame.render_widget(Paragraph::new(content).block(block), area);

        if focused && inner.width > 0 && inner.height > 0 {
            let used = if self.value.is_empty() {
                0
            } else {
                self.visible_tail(inner.width).width() as u16
            };
            frame.set_cursor_position((inner.x + used.min(inner.width - 1), inner.y));
        }
    }

    /// The end of the value that fits in `width` columns, leaving room for the cursor.
    fn visible_tail(&self, width: u16) -> String {
        let max = width.saturating_sub(1) as usize;
        if self.value.width() <= max {
            return self.value.clone();
        }
        let mut tail: Vec<char> = Vec::new();
        let mut used = 0;
        for c in self.value.chars().rev() {
            let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
            if used + w > max {
                break;
            }
            used += w;
            tail.push(c);
        }
        tail.into_iter().rev().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_and_backspace() {
        let mut field = TextField::default();
        assert!(field.edit(&TuiEvent::InputChar('h')));
        field.edit(&TuiEvent::InputChar('i'));
        field.edit(&TuiEvent::Backspace);
        assert_eq!(field.value, "h");
        assert!(!field.edit(&TuiEvent::Submit));
    }

    #[test]
    fn test_paste_flattens_newlines() {
        let mut field = TextField::default();
        field.edit(&TuiEvent::Paste("a\nb".to_string()));
        assert_eq!(field.value, "a b");
    }

    #[test]
    fn test_visible_tail_keeps_end() {
        let field = TextField {
            value: "abcdefghij".to_string(),
        };
        assert_eq!(field.visible_tail(5), "ghij");
        assert_eq!(field.visible_tail(20), "abcdefghij");
    }
}
