pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod resilience;
pub mod ui;

use std::io::{self, Stdout};

use anyhow::Result;
use app::events::{AppEvent, spawn_input_task};
use app::state::{AppMode, AppState};
use chrono::Local;
use cli::Cli;
use crossterm::{
    event::DisableMouseCapture,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;

pub async fn run(cli: Cli) -> Result<()> {
    if cli.one_shot {
        return run_one_shot(cli).await;
    }

    let mut terminal = setup_terminal()?;
    let result = run_inner(&mut terminal, cli).await;
    restore_terminal(&mut terminal)?;
    result
}

async fn run_inner(terminal: &mut Terminal<CrosstermBackend<Stdout>>, cli: Cli) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<AppEvent>(256);
    let input_stream = spawn_input_task();
    tokio::pin!(input_stream);
    let mut app = AppState::new(&cli);

    tx.send(AppEvent::Bootstrap).await?;

    while app.running {
        tokio::select! {
            maybe_input = input_stream.next() => {
                if let Some(input) = maybe_input {
                    app.handle_event(AppEvent::Input(input), &tx, &cli).await?;
                }
            }
            maybe_event = rx.recv() => {
                if let Some(event) = maybe_event {
                    app.handle_event(event, &tx, &cli).await?;
                }
            }
        }

        terminal.draw(|frame| ui::render(frame, &app))?;

        if app.mode == AppMode::Quit {
            app.running = false;
        }
    }

    Ok(())
}

/// Non-interactive path: fetch once, print a plain-text snapshot, exit.
async fn run_one_shot(cli: Cli) -> Result<()> {
    cli.validate()?;
    let state = AppState::new(&cli);
    let client = match &cli.marine_url {
        Some(url) => data::marine::MarineClient::with_base_url(url.clone()),
        None => data::marine::MarineClient::new(),
    };

    let bundle = client.fetch(state.spot.clone()).await?;
    let now = Local::now().naive_local();
    let txt = ui::i18n::strings(state.prefs.lang);

    println!("{} · {}", bundle.spot.name, bundle.spot.city);
    if let Some(snap) = bundle.now_snapshot(now) {
        let rating = rate_line(&snap, state.prefs.lang);
        let fmt = |v: Option<f32>| v.map_or("--".to_string(), |v| format!("{v:.1}"));
        println!(
            "{}: {} {}  {}: {} {}  {}: {}",
            txt.wave_height,
            fmt(snap.wave_height),
            bundle.units.wave_height,
            txt.wave_period,
            fmt(snap.wave_period),
            bundle.units.wave_period,
            txt.wave_direction,
            snap.wave_dir_label,
        );
        println!("{rating}");
    } else {
        println!("{}", txt.no_data);
    }

    for day in domain::summary::summarize_week(&bundle.hourly, now.date()) {
        let rating = domain::rating::rate(day.height_max, day.period_max, day.wind_wave_peak_max);
        println!(
            "{}  {}  {} ({})",
            day.label,
            day.height_max
                .map_or("--".to_string(), |v| format!("{v:.1}m")),
            rating.score,
            rating.label.text(state.prefs.lang),
        );
    }

    Ok(())
}

fn rate_line(snap: &domain::marine::NowSnapshot, lang: app::prefs::Lang) -> String {
    let rating = domain::rating::rate(
        snap.wave_height,
        snap.wave_period,
        snap.wind_wave_peak_period,
    );
    format!("{} / 100 · {}", rating.score, rating.label.text(lang))
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    install_panic_hook();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

fn install_panic_hook() {
    let existing = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture);
        existing(panic);
    }));
}
