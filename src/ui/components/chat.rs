use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::state::{AppState, Focus, Speaker};
use super::super::theme::*;

pub fn render_transcript(f: &mut Frame, area: Rect, state: &AppState) {
    let mut lines: Vec<Line> = Vec::new();
    for msg in &state.transcript {
        let (who, who_style) = match msg.speaker {
            Speaker::User => ("you", hot_pink_style()),
            Speaker::Bot => ("melobot", bot_style()),
        };
        let text_style = if msg.is_error { error_style() } else { normal_style() };
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", msg.timestamp()), muted_style()),
            Span::styled(format!("{who}: "), who_style),
            Span::styled(msg.text.clone(), text_style),
        ]));
    }
    if state.is_loading {
        lines.push(Line::from(Span::styled("      melobot is searching...", dim_style())));
    }

    // Keep the newest messages in view, counting rows after wrapping.
    let para = Paragraph::new(lines).wrap(Wrap { trim: false });
    let inner_width = area.width.saturating_sub(2);
    let inner_height = area.height.saturating_sub(2) as usize;
    let scroll = para.line_count(inner_width).saturating_sub(inner_height);
    let scroll = u16::try_from(scroll).unwrap_or(u16::MAX);

    let para = para
        .scroll((scroll, 0))
        .block(
            Block::default()
                .title(Span::styled(" 💬 Chat ", title_style()))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border_style(false))
                .style(normal_style().bg(BG)),
        );
    f.render_widget(para, area);
}

pub fn render_input(f: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == Focus::Input;
    let cursor = if focused && state.cursor_visible() { "│" } else { "" };
    let block = Block::default()
        .title(Span::styled(" Enter your request ", title_style()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style(focused))
        .style(normal_style().bg(BG_ALT));

    let line = if state.input.is_empty() && !focused {
        Line::from(Span::styled(" press / to type a request", muted_style()))
    } else {
        Line::from(vec![
            Span::styled(" ", muted_style()),
            Span::styled(state.input.clone(), accent_style()),
            Span::styled(cursor, hot_pink_style()),
        ])
    };
    f.render_widget(Paragraph::new(line).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::ChatMessage;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn newest_message_stays_visible_when_lines_wrap() {
        let mut state = AppState::default();
        for _ in 0..3 {
            state.transcript.push(ChatMessage::user(
                "some very long request about upbeat songs for a rainy evening drive along the coast with friends",
            ));
        }
        state.transcript.push(ChatMessage::bot_error("LASTREPLY timed out"));

        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
        terminal.draw(|f| render_transcript(f, f.area(), &state)).unwrap();

        assert!(screen_text(&terminal).contains("LASTREPLY"));
    }

    #[test]
    fn short_transcript_is_not_scrolled() {
        let state = AppState::default();
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal.draw(|f| render_transcript(f, f.area(), &state)).unwrap();

        assert!(screen_text(&terminal).contains("Ask me to suggest"));
    }
}
