//! The profile screen.

use ratatui::layout::{Constraint, Layout};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::traits::HttpClient;
use crate::view_state::ProfileViewState;

pub fn render<C: HttpClient + 'static>(frame: &mut Frame, app: &App<C>) {
    let view = ProfileViewState::project(app.session.as_ref());

    let [body_area, footer_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());

    let lines = vec![
        Line::raw(""),
        Line::raw(format!("  Name:  {}", view.username)),
        Line::raw(format!("  Email: {}", view.email)),
    ];
    let body = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(view.title));
    frame.render_widget(body, body_area);

    frame.render_widget(
        Paragraph::new(Line::raw(" l: log out · Esc: back")),
        footer_area,
    );
}
