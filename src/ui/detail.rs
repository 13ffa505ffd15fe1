//! The single-entry detail screen.

use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::App;
use crate::traits::HttpClient;
use crate::view_state::DetailViewState;

pub fn render<C: HttpClient + 'static>(frame: &mut Frame, app: &App<C>) {
    let view = DetailViewState::project(app.detail.state());

    let [body_area, footer_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());

    let mut lines: Vec<Line> = view.body.lines().map(Line::raw).collect();
    if let Some(sprite) = &view.sprite_url {
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            format!("Sprite: {sprite}"),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(view.title));
    frame.render_widget(body, body_area);

    let footer = if let Some(error) = &view.error_text {
        Line::styled(
            format!(" {error}  (r to retry)"),
            Style::default().fg(Color::Red),
        )
    } else if view.loading {
        Line::raw(" Loading...")
    } else {
        Line::raw(" Esc: back")
    };
    frame.render_widget(Paragraph::new(footer), footer_area);
}
