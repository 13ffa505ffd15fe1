//! Login and registration forms.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{App, Form};
use crate::traits::HttpClient;

pub fn render_login<C: HttpClient + 'static>(frame: &mut Frame, app: &App<C>) {
    render_form(
        frame,
        "Sign in",
        &app.login_form,
        app.flash.as_deref(),
        " Enter: sign in · Ctrl+N: create account · Esc: quit",
    );
}

pub fn render_register<C: HttpClient + 'static>(frame: &mut Frame, app: &App<C>) {
    render_form(
        frame,
        "Create account",
        &app.register_form,
        app.flash.as_deref(),
        " Enter: register · Esc: back to sign in",
    );
}

fn render_form(frame: &mut Frame, title: &str, form: &Form, flash: Option<&str>, help: &str) {
    // Label, field and a blank line per field, plus flash and help rows.
    let height = (form.fields.len() as u16) * 3 + 4;
    let area = super::centered(frame.area(), 48, height);

    let mut lines: Vec<Line> = Vec::new();
    for (i, field) in form.fields.iter().enumerate() {
        let focused = i == form.focus;
        let marker = if focused { "> " } else { "  " };
        let shown = if field.masked {
            "•".repeat(field.value.chars().count())
        } else {
            field.value.clone()
        };
        let style = if focused {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::styled(format!("{marker}{}:", field.label), style));
        lines.push(Line::styled(format!("  {shown}{}", if focused { "_" } else { "" }), style));
        lines.push(Line::raw(""));
    }
    if let Some(flash) = flash {
        lines.push(Line::styled(flash.to_string(), Style::default().fg(Color::Red)));
    } else {
        lines.push(Line::raw(""));
    }

    let form_widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(title.to_string()));
    frame.render_widget(form_widget, area);

    let help_area = Rect {
        x: frame.area().x,
        y: frame.area().bottom().saturating_sub(1),
        width: frame.area().width,
        height: 1,
    };
    frame.render_widget(Paragraph::new(Line::raw(help.to_string())), help_area);
}
