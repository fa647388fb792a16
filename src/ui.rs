pub mod geometry;
pub mod i18n;
pub mod layout;
pub mod theme;
pub mod widgets;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    app::state::{AppMode, AppState},
    resilience::freshness::FreshnessState,
    ui::i18n::strings,
    ui::theme::palette,
};

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let pal = palette(state.prefs.theme);
    let txt = strings(state.prefs.lang);

    frame.render_widget(
        Block::default().style(Style::default().bg(pal.bg).fg(pal.fg)),
        area,
    );

    if area.width < 40 || area.height < 18 {
        let warning = Paragraph::new(txt.too_small)
            .block(Block::default().borders(Borders::ALL).title("swell-tui"));
        frame.render_widget(warning, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),
            Constraint::Min(10),
            Constraint::Length(9),
        ])
        .split(area);

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    widgets::hero::render(frame, chunks[0], state);
    widgets::swell::render(frame, charts[0], state);
    widgets::tide::render(frame, charts[1], state);
    widgets::weekly::render(frame, chunks[2], state);

    render_status_badge(frame, area, state);

    match state.mode {
        AppMode::PickingSpot => {
            widgets::spot_picker::render(frame, centered_rect(60, 60, area), state);
        }
        AppMode::Auth => {
            widgets::session::render(frame, centered_rect(50, 50, area), state);
        }
        _ => {}
    }
}

fn render_status_badge(frame: &mut Frame, area: Rect, state: &AppState) {
    let txt = strings(state.prefs.lang);
    let pal = palette(state.prefs.theme);
    let label = match state.refresh_meta.state {
        FreshnessState::Fresh => None,
        FreshnessState::Stale => Some((txt.stale_badge, pal.warn)),
        FreshnessState::Offline => Some((txt.offline_badge, pal.error)),
    };

    if let Some((text, color)) = label {
        let width = (text.chars().count() as u16 + 2).min(area.width);
        let badge_area = Rect {
            x: area.right().saturating_sub(width + 1),
            y: area.y,
            width,
            height: 1,
        };
        let badge = Paragraph::new(Line::from(text)).style(
            Style::default()
                .fg(color)
                .bg(pal.bg)
                .add_modifier(Modifier::BOLD),
        );
        frame.render_widget(badge, badge_area);
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
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
        .split(popup_layout[1])[1]
}
