use crate::core::detail::DetailState;
use crate::core::listing::{ListingState, LoadStatus};
use crate::core::state::{App, Screen};
use crate::tui::component::Component;
use crate::tui::components::{
    NotificationBanner, PostDetail, PostForm, PostList, TitleBar,
};
use crate::tui::{Focus, TuiState};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};

    let notification = app.listing().and_then(|l| l.notification.as_ref());
    let layout = Layout::vertical([
        Length(1),
        Length(u16::from(notification.is_some())),
        Min(0),
        Length(1),
    ]);
    let [title_area, notice_area, main_area, help_area] = layout.areas(frame.area());

    let (heading, status) = title_text(app);
    TitleBar::new(heading, status).render(frame, title_area);

    if let Some(notification) = notification {
        NotificationBanner { notification }.render(frame, notice_area);
    }

    match &app.screen {
        Screen::Listing(listing) => {
            draw_listing(frame, main_area, listing.state(), tui, spinner_frame)
        }
        Screen::Detail(detail) => {
            draw_detail(frame, main_area, detail.state(), tui, spinner_frame)
        }
    }

    let help = Paragraph::new(help_text(app, tui.focus))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, help_area);
}

fn title_text(app: &App) -> (String, String) {
    match &app.screen {
        Screen::Listing(listing) => {
            let state = listing.state();
            let status = match state.load_status {
                LoadStatus::Loading => "Loading...".to_string(),
                LoadStatus::Failed => "Unavailable".to_string(),
                LoadStatus::Ready if state.filter.is_empty() => {
                    format!("{} posts", state.all_posts.len())
                }
                LoadStatus::Ready => format!(
                    "Showing {} of {} | filter: {:?}",
                    state.visible_posts.len(),
                    state.all_posts.len(),
                    state.filter
                ),
            };
            ("Posts".to_string(), status)
        }
        Screen::Detail(detail) => {
            let state = detail.state();
            let status = match state.load_status {
                LoadStatus::Loading => "Loading...",
                LoadStatus::Failed => "Unavailable",
                LoadStatus::Ready => "",
            };
            (format!("Post #{}", state.post_id), status.to_string())
        }
    }
}

fn help_text(app: &App, focus: Focus) -> &'static str {
    match (&app.screen, focus) {
        (Screen::Detail(_), _) => " ↑/↓ scroll  Esc back to posts  q quit",
        (Screen::Listing(_), Focus::Search) => " Enter apply filter  Esc clear filter",
        (Screen::Listing(_), Focus::Form) => " Tab switch field  Enter next/submit  Esc cancel",
        (Screen::Listing(_), Focus::List) => {
            " ↑/↓ select  Enter open  / filter  n new post  x dismiss  q quit"
        }
    }
}

fn draw_listing(
    frame: &mut Frame,
    area: Rect,
    state: &ListingState,
    tui: &mut TuiState,
    spinner_frame: usize,
) {
    match state.load_status {
        LoadStatus::Loading => draw_loading(frame, area, "Loading posts...", spinner_frame),
        LoadStatus::Failed => {
            let message = state.last_error.as_deref().unwrap_or_default();
            draw_error_view(frame, area, message);
        }
        LoadStatus::Ready => {
            use Constraint::{Length, Min};
            let [search_area, list_area] = Layout::vertical([Length(3), Min(0)]).areas(area);

            tui.search.render(frame, search_area);
            PostList {
                state: &mut tui.post_list,
                posts: &state.visible_posts,
                focused: tui.focus == Focus::List,
            }
            .render(frame, list_area);

            if state.form.open {
                PostForm {
                    state: &tui.form,
                    submitting: state.form.submitting,
                    error: state.form.error.as_deref(),
                }
                .render(frame, area);
            }
        }
    }
}

fn draw_detail(
    frame: &mut Frame,
    area: Rect,
    state: &DetailState,
    tui: &mut TuiState,
    spinner_frame: usize,
) {
    match state.load_status {
        LoadStatus::Loading => draw_loading(frame, area, "Loading post...", spinner_frame),
        LoadStatus::Failed => {
            use Constraint::{Length, Min};
            let [back_area, error_area] = Layout::vertical([Length(1), Min(0)]).areas(area);
            let back = Line::from(Span::styled(
                "← Back to Posts (Esc)",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ));
            frame.render_widget(back, back_area);
            draw_error_view(frame, error_area, state.last_error().unwrap_or_default());
        }
        LoadStatus::Ready => PostDetail {
            state,
            scroll: &mut tui.detail_scroll,
        }
        .render(frame, area),
    }
}

fn draw_loading(frame: &mut Frame, area: Rect, label: &str, spinner_frame: usize) {
    let spinner = SPINNER[spinner_frame % SPINNER.len()];
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(area);
    let line = Line::from(vec![
        Span::styled(spinner, Style::default().fg(Color::Cyan)),
        Span::raw(format!(" {label}")),
    ])
    .centered();
    frame.render_widget(line, middle);
}

fn draw_error_view(frame: &mut Frame, area: Rect, error_msg: &str) {
    let error_paragraph = Paragraph::new(error_msg)
        .block(
            Block::bordered()
                .title("ERROR")
                .border_style(Style::default().fg(Color::Red)),
        )
        .style(Style::default().fg(Color::Red))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(error_paragraph, area);
}
