//! Screen rendering.
//!
//! Pure functions from projected view state to widgets; no application
//! logic lives here.

mod auth;
mod detail;
mod home;
mod profile;

use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::Frame;

use crate::app::{App, Screen};
use crate::traits::HttpClient;

pub fn render<C: HttpClient + 'static>(frame: &mut Frame, app: &App<C>) {
    match app.screen {
        Screen::Login => auth::render_login(frame, app),
        Screen::Register => auth::render_register(frame, app),
        Screen::Home => home::render(frame, app),
        Screen::Detail => detail::render(frame, app),
        Screen::Profile => profile::render(frame, app),
    }
}

/// A centered box of the given size, clamped to the frame.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    area
}
