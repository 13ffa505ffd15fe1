//! The paginated list screen.

use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::traits::HttpClient;
use crate::view_state::HomeViewState;

pub fn render<C: HttpClient + 'static>(frame: &mut Frame, app: &App<C>) {
    let view = HomeViewState::project(app.catalog.state());

    let [list_area, footer_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());

    if view.show_spinner {
        let loading = Paragraph::new("Loading...")
            .centered()
            .block(Block::default().borders(Borders::ALL).title(view.title.clone()));
        frame.render_widget(loading, list_area);
    } else {
        let items: Vec<ListItem> = view.rows.iter().map(|row| ListItem::new(row.as_str())).collect();
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(view.title.clone()))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        let mut state = ListState::default().with_selected(Some(app.selected));
        frame.render_stateful_widget(list, list_area, &mut state);
    }

    let footer = if let Some(error) = &view.error_text {
        Line::styled(
            format!(" {error}  (r to retry)"),
            Style::default().fg(Color::Red),
        )
    } else if view.loading_more {
        Line::raw(" Loading more...")
    } else if view.end_reached {
        Line::raw(" End of list · Enter: detail · p: profile · q: quit")
    } else {
        Line::raw(" ↑/↓: move · Enter: detail · p: profile · q: quit")
    };
    frame.render_widget(Paragraph::new(footer), footer_area);
}
