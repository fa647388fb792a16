use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::{
    app::state::AppState,
    ui::i18n::strings,
    ui::theme::palette,
};

/// Modal fuzzy picker over the static spot table.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let pal = palette(state.prefs.theme);
    let txt = strings(state.prefs.lang);

    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", txt.picker_title))
        .border_style(Style::default().fg(pal.accent))
        .style(Style::default().bg(pal.bg).fg(pal.fg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("› ", Style::default().fg(pal.accent)),
            Span::styled(
                state.picker.query.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled("▏", Style::default().fg(pal.muted)),
        ]),
        Line::default(),
    ];

    for (idx, spot) in state.picker.results().iter().enumerate() {
        let selected = idx == state.picker.selected;
        let star = if state.prefs.is_favourite(&spot.slug()) {
            "★ "
        } else {
            "  "
        };
        let style = if selected {
            Style::default().fg(pal.bg).bg(pal.accent)
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::styled(star, Style::default().fg(pal.favourite)),
            Span::styled(format!("{} · {}", spot.name, spot.city), style),
        ]));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        txt.picker_hint,
        Style::default().fg(pal.muted),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}
