use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::state::{AppState, Focus};
use super::super::theme::*;

pub fn render_results(f: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == Focus::Results;

    if state.results.is_empty() {
        let placeholder = if state.is_loading {
            "  ✨ Finding songs..."
        } else {
            "  Type something like \"happy workout songs in Spanish\" and press Enter."
        };
        let para = Paragraph::new(Line::from(Span::styled(placeholder, muted_style())))
            .block(make_block(" Recommendations ".to_string(), focused));
        f.render_widget(para, area);
        return;
    }

    // Room for "  1. " and borders.
    let width = area.width.saturating_sub(8) as usize;
    let selected = state.selected;
    let items: Vec<ListItem> = state
        .results
        .iter()
        .enumerate()
        .map(|(i, track)| {
            let is_sel = i == selected;
            let prefix = if is_sel { "▶ ".to_string() } else { format!("{:>2}. ", i + 1) };
            let title = Line::from(vec![
                Span::styled(prefix, if is_sel { bot_style() } else { muted_style() }),
                Span::styled(track.name.clone(), if is_sel { selected_style() } else { normal_style() }),
                Span::styled(" by ", muted_style()),
                Span::styled(track.artist_line(), dim_style()),
            ]);
            let link = track
                .embed_url()
                .or_else(|| track.external_url.clone())
                .unwrap_or_else(|| "no player link".to_string());
            let link_line = Line::from(vec![
                Span::styled("    ", muted_style()),
                Span::styled(truncate(&link, width), muted_style()),
            ]);
            let item = ListItem::new(vec![title, link_line]);
            if is_sel {
                item.style(selected_style())
            } else {
                item
            }
        })
        .collect();

    let list = List::new(items)
        .block(make_block(format!(" Recommendations ({}) ", state.results.len()), focused))
        .highlight_style(selected_style());

    let mut list_state = ListState::default();
    list_state.select(Some(selected));
    f.render_stateful_widget(list, area, &mut list_state);
}

fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let budget = max_width.saturating_sub(1);
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

fn make_block(title: String, focused: bool) -> Block<'static> {
    Block::default()
        .title(Span::styled(title, title_style()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style(focused))
        .style(normal_style().bg(BG))
}
