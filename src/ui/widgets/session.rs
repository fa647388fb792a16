use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::{
    app::state::{AppState, AuthField, AuthIntent},
    ui::i18n::strings,
    ui::theme::palette,
};

/// Modal login/register form over the dashboard.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let pal = palette(state.prefs.theme);
    let txt = strings(state.prefs.lang);
    let form = &state.auth_form;

    let action = match form.intent {
        AuthIntent::Login => txt.login_action,
        AuthIntent::Register => txt.register_action,
    };

    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} · {} ", txt.session_title, action))
        .border_style(Style::default().fg(pal.accent))
        .style(Style::default().bg(pal.bg).fg(pal.fg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let field_line = |label: &'static str, value: String, active: bool| {
        let marker = if active { "▸ " } else { "  " };
        let style = if active {
            Style::default().fg(pal.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(pal.muted)
        };
        Line::from(vec![
            Span::styled(format!("{marker}{label}: "), style),
            Span::raw(value),
        ])
    };

    let mut lines = vec![
        Line::default(),
        field_line(
            txt.email_label,
            form.email.clone(),
            form.field == AuthField::Email,
        ),
        field_line(
            txt.password_label,
            "•".repeat(form.password.chars().count()),
            form.field == AuthField::Password,
        ),
        Line::default(),
    ];

    if form.busy {
        lines.push(Line::from(Span::styled(
            txt.loading,
            Style::default().fg(pal.muted),
        )));
    } else if let Some(error) = &form.error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(pal.error),
        )));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        txt.auth_hint,
        Style::default().fg(pal.muted),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}
