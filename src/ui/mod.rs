pub mod components;
pub mod theme;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::state::{AppState, Focus};
use self::theme::*;
use self::components::{
    chat::{render_input, render_transcript},
    help::render_help,
    results::render_results,
};

/// Root render function — called every frame
pub fn render(f: &mut Frame, state: &AppState) {
    let size = f.area();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // title
            Constraint::Min(0),    // chat + results
            Constraint::Length(3), // input
            Constraint::Length(1), // status
        ])
        .split(size);

    render_header(f, rows[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(rows[1]);
    render_transcript(f, body[0], state);
    render_results(f, body[1], state);

    render_input(f, rows[2], state);
    render_status(f, rows[3], state);

    if state.show_help {
        render_help(f, size);
    }

    if let Some(ref notif) = state.notification {
        render_notification(f, size, notif.is_error, &notif.message);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled("🎵 Melobot: Your Music Recommendation Chatbot", title_style())),
        Line::from(Span::styled("Ask me to suggest you some songs!", dim_style())),
    ];
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_status(f: &mut Frame, area: Rect, state: &AppState) {
    let hint = match state.focus {
        Focus::Input => " Enter send · Esc results · Ctrl+C quit ",
        Focus::Results => " ↑↓ move · Enter open · / type · ? help · q quit ",
    };
    let mut spans = vec![Span::styled(hint, muted_style())];
    if let Some((ref intent, ref query)) = state.last_dispatch {
        spans.push(Span::styled(format!("│ {intent} "), accent_style()));
        spans.push(Span::styled(format!("│ searched: {query}"), dim_style()));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_notification(f: &mut Frame, area: Rect, is_error: bool, message: &str) {
    let toast_width = message.chars().count().min(60) as u16 + 4;
    let toast_area = Rect {
        x: area.width.saturating_sub(toast_width + 2),
        y: area.height.saturating_sub(8),
        width: toast_width.min(area.width),
        height: 3.min(area.height),
    };

    f.render_widget(Clear, toast_area);

    let style = if is_error { error_style() } else { bot_style() };
    let icon = if is_error { "✖ " } else { "✔ " };

    let para = Paragraph::new(Line::from(vec![
        Span::styled(icon, style),
        Span::styled(message.to_string(), style),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(style),
    )
    .alignment(Alignment::Left);

    f.render_widget(para, toast_area);
}

pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vert[1])[1]
}
