use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    app::state::AppState,
    domain::rating::rate,
    domain::summary::{DaySummary, summarize_week},
    ui::i18n::strings,
    ui::layout::visible_day_count,
    ui::theme::{palette, tone_color},
};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let pal = palette(state.prefs.theme);
    let txt = strings(state.prefs.lang);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", txt.weekly_title))
        .border_style(Style::default().fg(pal.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let week = match &state.marine {
        Some(bundle) => summarize_week(&bundle.hourly, state.today()),
        None => Vec::new(),
    };
    if week.is_empty() {
        frame.render_widget(
            Paragraph::new(txt.no_data).style(Style::default().fg(pal.muted)),
            inner,
        );
        return;
    }

    let show = visible_day_count(inner.width).min(week.len());
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, show as u32); show])
        .split(inner);

    for (day, column) in week.iter().take(show).zip(columns.iter()) {
        render_day_card(frame, *column, state, day);
    }
}

fn render_day_card(frame: &mut Frame, area: Rect, state: &AppState, day: &DaySummary) {
    let pal = palette(state.prefs.theme);
    let rating = rate(day.height_max, day.period_max, day.wind_wave_peak_max);
    let tone = tone_color(state.prefs.theme, rating.tone);

    let fmt = |v: Option<f32>, unit: &str| match v {
        Some(v) => format!("{v:.1}{unit}"),
        None => "--".to_string(),
    };

    let lines = vec![
        Line::from(Span::styled(
            day.label.clone(),
            Style::default().fg(pal.muted),
        )),
        Line::from(Span::styled(
            fmt(day.height_max, "m"),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(
            "{} · {}",
            fmt(day.period_max, "s"),
            day.dir_label
        )),
        Line::from(vec![
            Span::styled(
                format!(" {} ", rating.score),
                Style::default().fg(pal.bg).bg(tone),
            ),
            Span::raw(" "),
            Span::styled(
                rating.label.text(state.prefs.lang),
                Style::default().fg(tone),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}
