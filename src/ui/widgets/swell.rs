use chrono::Local;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    app::state::AppState,
    ui::geometry::build_bar_chart,
    ui::i18n::strings,
    ui::layout::swell_bar_count,
    ui::theme::palette,
};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let pal = palette(state.prefs.theme);
    let txt = strings(state.prefs.lang);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", txt.swell_title))
        .border_style(Style::default().fg(pal.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height < 3 {
        return;
    }

    let window = match &state.marine {
        Some(bundle) => bundle.swell_window(Local::now().naive_local()),
        None => Default::default(),
    };
    if window.is_empty() {
        frame.render_widget(
            Paragraph::new(txt.no_data).style(Style::default().fg(pal.muted)),
            inner,
        );
        return;
    }

    let show = swell_bar_count(inner.width).min(window.values.len());
    let values = &window.values[..show];

    // Bottom row carries the hour labels, the rest is chart.
    let chart_h = inner.height - 1;
    let bars = build_bar_chart(
        values,
        f32::from(inner.width),
        f32::from(chart_h),
        1.5,
        0.0,
        0.0,
    );

    let mut lines: Vec<Line> = Vec::with_capacity(inner.height as usize);
    for row in 0..chart_h {
        let mut cells = vec![' '; inner.width as usize];
        for bar in &bars {
            if f32::from(row) + 0.5 >= bar.y {
                let len = cells.len();
                let x0 = bar.x.round().max(0.0) as usize;
                let x1 = ((bar.x + bar.width).round() as usize).min(len);
                for cell in cells.iter_mut().take(x1).skip(x0.min(len)) {
                    *cell = '█';
                }
            }
        }
        lines.push(Line::from(Span::styled(
            cells.into_iter().collect::<String>(),
            Style::default().fg(pal.accent),
        )));
    }

    lines.push(hour_axis(&window.times[..show], inner.width));

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Hour labels under the bars, one every 6 samples.
fn hour_axis(times: &[chrono::NaiveDateTime], width: u16) -> Line<'static> {
    let mut axis = vec![' '; width as usize];
    if !times.is_empty() {
        let slot = f32::from(width) / times.len() as f32;
        for (i, t) in times.iter().enumerate().step_by(6) {
            let label = t.format("%Hh").to_string();
            let start = (i as f32 * slot) as usize;
            for (j, ch) in label.chars().enumerate() {
                if let Some(cell) = axis.get_mut(start + j) {
                    *cell = ch;
                }
            }
        }
    }
    Line::from(axis.into_iter().collect::<String>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::marine::parse_datetime;

    #[test]
    fn hour_axis_places_labels_every_six_samples() {
        let base = parse_datetime("2026-03-14T06:00").expect("valid fixed time");
        let times: Vec<_> = (0..12).map(|i| base + chrono::Duration::hours(i)).collect();
        let line = hour_axis(&times, 48);
        let rendered: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(rendered.contains("06h"));
        assert!(rendered.contains("12h"));
        assert!(!rendered.contains("07h"));
    }
}
