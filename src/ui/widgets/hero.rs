use chrono::Local;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    app::state::AppState,
    domain::rating::rate,
    ui::i18n::strings,
    ui::theme::{palette, tone_color},
};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let pal = palette(state.prefs.theme);
    let txt = strings(state.prefs.lang);

    let star = if state.is_current_favourite() {
        "★ "
    } else {
        ""
    };
    let title = format!(" {}{} · {} ", star, state.spot.name, state.spot.city);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(pal.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(bundle) = &state.marine else {
        let message = if let Some(error) = &state.last_error {
            format!("{} · {}", txt.no_data, error)
        } else if state.animate_ui {
            let dots = usize::try_from(state.frame_tick / 8 % 4).unwrap_or(0);
            format!("{}{}", txt.loading.trim_end_matches('.'), ".".repeat(dots))
        } else {
            txt.loading.to_string()
        };
        frame.render_widget(
            Paragraph::new(message).style(Style::default().fg(pal.muted)),
            inner,
        );
        return;
    };

    let now = Local::now().naive_local();
    let Some(snap) = bundle.now_snapshot(now) else {
        frame.render_widget(
            Paragraph::new(txt.no_data).style(Style::default().fg(pal.muted)),
            inner,
        );
        return;
    };

    let rating = rate(snap.wave_height, snap.wave_period, snap.wind_wave_peak_period);
    let tone = tone_color(state.prefs.theme, rating.tone);

    let fmt = |v: Option<f32>, unit: &str| match v {
        Some(v) => format!("{v:.1} {unit}"),
        None => "--".to_string(),
    };

    let metrics = Line::from(vec![
        Span::styled(
            format!("{}: ", txt.wave_height),
            Style::default().fg(pal.muted),
        ),
        Span::styled(
            fmt(snap.wave_height, &bundle.units.wave_height),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(
            format!("{}: ", txt.wave_period),
            Style::default().fg(pal.muted),
        ),
        Span::styled(
            fmt(snap.wave_period, &bundle.units.wave_period),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(
            format!("{}: ", txt.wave_direction),
            Style::default().fg(pal.muted),
        ),
        Span::styled(
            format!("{} {}", snap.wave_dir_label, fmt(snap.wave_dir_deg, "°")),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(
            format!("{}: ", txt.wind_wave_peak),
            Style::default().fg(pal.muted),
        ),
        Span::raw(fmt(
            snap.wind_wave_peak_period,
            &bundle.units.wind_wave_peak_period,
        )),
    ]);

    let rating_line = Line::from(vec![
        Span::styled(
            format!(" {} ", rating.score),
            Style::default()
                .fg(pal.bg)
                .bg(tone)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            rating.label.text(state.prefs.lang),
            Style::default().fg(tone).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(score_meter(rating.score), Style::default().fg(tone)),
    ]);

    let session_line = if state.session.authenticated {
        Line::from(vec![
            Span::styled(txt.signed_in_as, Style::default().fg(pal.muted)),
            Span::raw(" "),
            Span::styled(
                state.session.email.clone().unwrap_or_default(),
                Style::default().fg(pal.accent),
            ),
        ])
    } else {
        Line::from(Span::styled(txt.signed_out, Style::default().fg(pal.muted)))
    };

    let lines = vec![
        metrics,
        Line::default(),
        rating_line,
        session_line,
        Line::from(Span::styled(txt.key_hints, Style::default().fg(pal.muted))),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Ten-cell meter under the score, one filled cell per 10 points.
fn score_meter(score: u8) -> String {
    let filled = usize::from(score / 10).min(10);
    let mut out = String::with_capacity(10 * 3);
    for i in 0..10 {
        out.push(if i < filled { '■' } else { '□' });
    }
    out
}
