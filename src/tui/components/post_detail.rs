//! # PostDetail Component
//!
//! Scrollable single-post view: the post card followed by its comments.
//! A failed comment fetch only affects the comment section.

use ratatui::Frame;
use ratatui::layout::{Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::detail::DetailState;
use crate::core::listing::LoadStatus;
use crate::tui::component::Component;

/// Transient render wrapper; scroll position persists in `TuiState`.
pub struct PostDetail<'a> {
    pub state: &'a DetailState,
    pub scroll: &'a mut ScrollViewState,
}

impl Component for PostDetail<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // leave a column for the scrollbar
        let width = area.width.saturating_sub(1);
        let blocks = self.sections();
        let (heights, total) = stack_heights(blocks.iter().map(|p| p.line_count(width)));

        let mut view = ScrollView::new(Size::new(width, total))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y = 0;
        for (paragraph, height) in blocks.into_iter().zip(heights) {
            view.render_widget(paragraph, Rect::new(0, y, width, height));
            y = y.saturating_add(height);
        }

        frame.render_stateful_widget(view, area, &mut *self.scroll);
    }
}

impl PostDetail<'_> {
    fn sections(&self) -> Vec<Paragraph<'static>> {
        let mut sections = Vec::new();

        if let Some(post) = &self.state.post {
            sections.push(
                Paragraph::new(post.body.clone())
                    .block(
                        Block::bordered()
                            .title(Span::styled(
                                format!(" {} ", post.title),
                                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                            ))
                            .border_style(Style::default().fg(Color::Cyan)),
                    )
                    .wrap(Wrap { trim: true }),
            );
        }

        let header = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
        sections.push(Paragraph::new(vec![
            Line::default(),
            Line::from(Span::styled(
                format!("Comments ({})", self.state.comments.len()),
                header,
            )),
        ]));

        match self.state.comments_status {
            LoadStatus::Loading => sections.push(muted("Loading comments...")),
            LoadStatus::Failed => sections.push(
                Paragraph::new(self.state.comments_error.clone().unwrap_or_default())
                    .style(Style::default().fg(Color::Red)),
            ),
            LoadStatus::Ready if self.state.comments.is_empty() => {
                sections.push(muted("No comments for this post yet."))
            }
            LoadStatus::Ready => {
                for comment in &self.state.comments {
                    sections.push(
                        Paragraph::new(comment.body.clone())
                            .block(
                                Block::bordered()
                                    .title(Span::styled(
                                        format!(" {} ", comment.email),
                                        Style::default().fg(Color::Cyan),
                                    ))
                                    .border_style(Style::default().fg(Color::DarkGray)),
                            )
                            .wrap(Wrap { trim: true }),
                    );
                }
            }
        }

        sections
    }
}

/// Clamps each section height and the running total to `u16::MAX`.
fn stack_heights(line_counts: impl Iterator<Item = usize>) -> (Vec<u16>, u16) {
    let heights: Vec<u16> = line_counts
        .map(|lines| u16::try_from(lines).unwrap_or(u16::MAX))
        .collect();
    let total = heights.iter().fold(0u16, |acc, h| acc.saturating_add(*h));
    (heights, total)
}

fn muted(text: &'static str) -> Paragraph<'static> {
    Paragraph::new(text).style(Style::default().fg(Color::DarkGray))
}
