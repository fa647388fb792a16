use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    app::state::AppState,
    domain::rating::Tone,
    ui::geometry::{ExtremumKind, build_spark_path, tide_extrema},
    ui::i18n::strings,
    ui::theme::{palette, tone_color},
};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let pal = palette(state.prefs.theme);
    let txt = strings(state.prefs.lang);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", txt.tide_title))
        .border_style(Style::default().fg(pal.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height < 3 {
        return;
    }

    let window = match &state.marine {
        Some(bundle) => bundle.tide_window(),
        None => Default::default(),
    };
    if window.is_empty() {
        frame.render_widget(
            Paragraph::new(txt.no_data).style(Style::default().fg(pal.muted)),
            inner,
        );
        return;
    }

    let Some(spark) = build_spark_path(
        &window.values,
        f32::from(inner.width),
        f32::from(inner.height),
        1.0,
    ) else {
        return;
    };
    let extrema = tide_extrema(&window.values);

    let mut grid = vec![vec![(' ', pal.accent); inner.width as usize]; inner.height as usize];
    for pair in spark.points.windows(2) {
        plot_segment(&mut grid, pair[0], pair[1], pal.accent);
    }
    for e in &extrema {
        let (x, y) = spark.points[e.index];
        let (marker, label, color) = match e.kind {
            ExtremumKind::Peak => ('▲', txt.high_tide, tone_color(state.prefs.theme, Tone::Sky)),
            ExtremumKind::Trough => {
                ('▼', txt.low_tide, tone_color(state.prefs.theme, Tone::Amber))
            }
        };
        put(&mut grid, x.round() as isize, y.round() as isize, marker, color);
        for (j, ch) in label.chars().enumerate() {
            put(
                &mut grid,
                x.round() as isize + 2 + j as isize,
                y.round() as isize,
                ch,
                color,
            );
        }
    }

    let lines: Vec<Line> = grid
        .into_iter()
        .map(|row| {
            Line::from(
                row.into_iter()
                    .map(|(ch, color)| {
                        Span::styled(ch.to_string(), Style::default().fg(color))
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Walks the segment with enough steps that adjacent cells connect.
fn plot_segment(
    grid: &mut [Vec<(char, ratatui::style::Color)>],
    from: (f32, f32),
    to: (f32, f32),
    color: ratatui::style::Color,
) {
    let steps = ((to.0 - from.0).abs().max((to.1 - from.1).abs()).ceil() as usize).max(1);
    for s in 0..=steps {
        let t = s as f32 / steps as f32;
        let x = from.0 + (to.0 - from.0) * t;
        let y = from.1 + (to.1 - from.1) * t;
        put(grid, x.round() as isize, y.round() as isize, '·', color);
    }
}

fn put(
    grid: &mut [Vec<(char, ratatui::style::Color)>],
    x: isize,
    y: isize,
    ch: char,
    color: ratatui::style::Color,
) {
    if x < 0 || y < 0 {
        return;
    }
    if let Some(row) = grid.get_mut(y as usize)
        && let Some(cell) = row.get_mut(x as usize)
    {
        *cell = (ch, color);
    }
}
