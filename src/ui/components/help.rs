use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use super::super::{centered_rect, theme::*};

pub fn render_help(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);
    f.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(Span::styled(" ❓ Keybindings ", title_style()))
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(border_style(true))
        .style(normal_style());

    let lines = vec![
        Line::from(Span::raw("")),
        Line::from(Span::styled("  Typing", hot_pink_style().add_modifier(Modifier::BOLD))),
        Line::from(Span::raw("")),
        key_line("Enter", "Get recommendations"),
        key_line("Ctrl+U", "Clear the request"),
        key_line("Esc / Tab", "Go to results"),
        Line::from(Span::raw("")),
        Line::from(Span::styled("  Results", hot_pink_style().add_modifier(Modifier::BOLD))),
        Line::from(Span::raw("")),
        key_line("↑ / k", "Move up"),
        key_line("↓ / j", "Move down"),
        key_line("Enter / o", "Open player in browser"),
        key_line("/ / i", "Type a new request"),
        Line::from(Span::raw("")),
        key_line("?", "Toggle this help"),
        key_line("q / Ctrl+C", "Quit"),
    ];

    f.render_widget(Paragraph::new(lines).block(block), popup_area);
}

fn key_line(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled("  ", muted_style()),
        Span::styled(format!("{key:<12}"), accent_style()),
        Span::styled(desc.to_string(), normal_style()),
    ])
}
