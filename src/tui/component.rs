use ratatui::Frame;
use ratatui::layout::Rect;

use super::event::TuiEvent;

/// Something that draws itself into a `Rect`.
///
/// Data comes in as props (struct fields). `render` takes `&mut self` so a
/// borrowed state (list selection, scroll offset) can be updated while
/// drawing, like ratatui's `StatefulWidget`.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that turns low-level `TuiEvent`s into its own events
/// (`SearchEvent`, `FormEvent`, `PostListEvent`), which the event loop maps
/// to core actions.
pub trait EventHandler {
    type Event;

    /// Returns `None` when the event was consumed locally or ignored.
    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}

/// Draws into an off-screen `TestBackend` and returns the buffer's symbols
/// concatenated row by row.
#[cfg(test)]
pub(crate) fn render_to_text(width: u16, height: u16, draw: impl FnOnce(&mut Frame)) -> String {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(draw).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect()
}
