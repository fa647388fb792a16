use std::num::NonZeroUsize;
use std::time::Instant;

use anyhow::Result;
use chrono::{Duration, Local, Utc};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use lru::LruCache;
use tokio::sync::mpsc;

use crate::{
    app::events::{AppEvent, schedule_retry, start_frame_task, start_refresh_task},
    app::prefs::{JsonFileStore, Lang, MemoryStore, Preferences, PrefsStore, ThemePref},
    cli::Cli,
    data::{
        auth::{AuthClient, SessionInfo},
        marine::MarineClient,
    },
    domain::{
        marine::{MarineBundle, RefreshMetadata},
        spots::{self, Spot},
    },
    resilience::{
        backoff::Backoff,
        freshness::{REVALIDATE_SECS, evaluate_freshness},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Loading,
    Ready,
    Error,
    PickingSpot,
    Auth,
    Quit,
}

/// Which credential field the auth panel is editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthField {
    Email,
    Password,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthIntent {
    Login,
    Register,
}

#[derive(Debug, Clone)]
pub struct AuthForm {
    pub email: String,
    pub password: String,
    pub field: AuthField,
    pub intent: AuthIntent,
    pub error: Option<String>,
    pub busy: bool,
}

impl Default for AuthForm {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            field: AuthField::Email,
            intent: AuthIntent::Login,
            error: None,
            busy: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SpotPicker {
    pub query: String,
    pub selected: usize,
}

impl SpotPicker {
    #[must_use]
    pub fn results(&self) -> Vec<&'static Spot> {
        if self.query.is_empty() {
            spots::all().iter().collect()
        } else {
            spots::search(&self.query)
        }
    }
}

pub struct AppState {
    pub mode: AppMode,
    pub running: bool,
    pub loading_message: String,
    pub last_error: Option<String>,
    pub spot: Spot,
    pub marine: Option<MarineBundle>,
    pub refresh_meta: RefreshMetadata,
    pub session: SessionInfo,
    pub auth_form: AuthForm,
    pub picker: SpotPicker,
    pub prefs: Preferences,
    pub backoff: Backoff,
    pub fetch_in_flight: bool,
    pub last_frame_at: Instant,
    pub frame_tick: u64,
    pub animate_ui: bool,
    marine_client: MarineClient,
    auth_client: AuthClient,
    prefs_store: Box<dyn PrefsStore + Send>,
    cache: LruCache<String, MarineBundle>,
}

impl AppState {
    pub fn new(cli: &Cli) -> Self {
        let prefs_store: Box<dyn PrefsStore + Send> = if cli.no_prefs {
            Box::new(MemoryStore)
        } else {
            match JsonFileStore::discover() {
                Some(store) => Box::new(store),
                None => Box::new(MemoryStore),
            }
        };

        let mut prefs = prefs_store.load().unwrap_or_default();
        if let Some(theme) = cli.theme {
            prefs.theme = theme;
        }
        if let Some(lang) = cli.lang {
            prefs.lang = lang;
        }

        let marine_client = match &cli.marine_url {
            Some(url) => MarineClient::with_base_url(url.clone()),
            None => MarineClient::new(),
        };
        let auth_client = match &cli.auth_url {
            Some(url) => AuthClient::with_base_url(url.clone()),
            None => AuthClient::new(),
        };

        Self {
            mode: AppMode::Loading,
            running: true,
            loading_message: "Initializing...".to_string(),
            last_error: None,
            spot: resolve_spot(cli),
            marine: None,
            refresh_meta: RefreshMetadata::default(),
            session: SessionInfo::default(),
            auth_form: AuthForm::default(),
            picker: SpotPicker::default(),
            prefs,
            backoff: Backoff::new(10, 300),
            fetch_in_flight: false,
            last_frame_at: Instant::now(),
            frame_tick: 0,
            animate_ui: !cli.no_animation,
            marine_client,
            auth_client,
            prefs_store,
            cache: LruCache::new(NonZeroUsize::new(16).expect("non-zero cache size")),
        }
    }

    pub async fn handle_event(
        &mut self,
        event: AppEvent,
        tx: &mpsc::Sender<AppEvent>,
        cli: &Cli,
    ) -> Result<()> {
        match event {
            AppEvent::Bootstrap => {
                cli.validate()?;
                start_frame_task(tx.clone(), cli.fps);
                start_refresh_task(tx.clone(), cli.refresh_interval);
                self.start_fetch(tx).await?;
                self.check_session(tx);
            }
            AppEvent::TickFrame => {
                let now = Instant::now();
                self.last_frame_at = now;
                self.frame_tick = self.frame_tick.saturating_add(1);
                self.refresh_meta.state = evaluate_freshness(
                    self.refresh_meta.last_success,
                    self.refresh_meta.consecutive_failures,
                );
            }
            AppEvent::TickRefresh => {
                if matches!(self.mode, AppMode::Ready | AppMode::Error | AppMode::Loading) {
                    self.start_fetch(tx).await?;
                }
            }
            AppEvent::Input(event) => self.handle_input(event, tx).await?,
            AppEvent::FetchStarted => {
                self.fetch_in_flight = true;
                self.loading_message = "Fetching marine forecast...".to_string();
                if self.marine.is_none() {
                    self.mode = AppMode::Loading;
                }
                self.refresh_meta.last_attempt = Some(Utc::now());
            }
            AppEvent::FetchSucceeded(bundle) => {
                self.fetch_in_flight = false;
                self.cache.put(bundle.spot.slug(), (*bundle).clone());
                self.marine = Some(*bundle);
                if !matches!(self.mode, AppMode::PickingSpot | AppMode::Auth) {
                    self.mode = AppMode::Ready;
                }
                self.last_error = None;
                self.refresh_meta.mark_success();
                self.backoff.reset();
            }
            AppEvent::FetchFailed(err) => {
                self.fetch_in_flight = false;
                self.last_error = Some(err);
                if !matches!(self.mode, AppMode::PickingSpot | AppMode::Auth) {
                    self.mode = AppMode::Error;
                }
                self.refresh_meta.mark_failure();
                self.refresh_meta.state = evaluate_freshness(
                    self.refresh_meta.last_success,
                    self.refresh_meta.consecutive_failures,
                );
                let delay = self.backoff.next_delay();
                schedule_retry(tx.clone(), delay);
            }
            AppEvent::SessionChecked(info) => {
                self.session = info;
            }
            AppEvent::AuthSucceeded(info) => {
                self.session = info;
                self.auth_form = AuthForm::default();
                self.mode = if self.marine.is_some() {
                    AppMode::Ready
                } else {
                    AppMode::Loading
                };
            }
            AppEvent::AuthFailed(err) => {
                self.auth_form.busy = false;
                self.auth_form.error = Some(err);
            }
            AppEvent::LoggedOut => {
                self.session = SessionInfo::default();
            }
            AppEvent::Quit => {
                self.mode = AppMode::Quit;
            }
        }

        Ok(())
    }

    async fn handle_input(&mut self, event: Event, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        let Event::Key(key) = event else {
            return Ok(());
        };
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        match self.mode {
            AppMode::PickingSpot => self.handle_picker_key(key, tx).await?,
            AppMode::Auth => self.handle_auth_key(key, tx).await?,
            _ => self.handle_global_key(key, tx).await?,
        }

        Ok(())
    }

    async fn handle_global_key(
        &mut self,
        key: KeyEvent,
        tx: &mpsc::Sender<AppEvent>,
    ) -> Result<()> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                tx.send(AppEvent::Quit).await?;
            }
            KeyCode::Char('r') => {
                self.start_fetch(tx).await?;
            }
            KeyCode::Char('s') | KeyCode::Char('/') => {
                self.picker = SpotPicker::default();
                self.mode = AppMode::PickingSpot;
            }
            KeyCode::Char('a') => {
                if self.session.authenticated {
                    self.logout(tx);
                } else {
                    self.auth_form = AuthForm::default();
                    self.mode = AppMode::Auth;
                }
            }
            KeyCode::Char('f') => {
                self.prefs.toggle_favourite(&self.spot.slug());
                self.save_prefs();
            }
            KeyCode::Char('t') => {
                self.prefs.theme = match self.prefs.theme {
                    ThemePref::Dark => ThemePref::Light,
                    ThemePref::Light => ThemePref::Dark,
                };
                self.save_prefs();
            }
            KeyCode::Char('l') => {
                self.prefs.lang = match self.prefs.lang {
                    Lang::Fr => Lang::En,
                    Lang::En => Lang::Fr,
                };
                self.save_prefs();
            }
            KeyCode::Char(digit @ '1'..='9') => {
                let favs = spots::favourites(&self.prefs.favourites);
                let idx = (digit as usize) - ('1' as usize);
                if let Some(&spot) = favs.get(idx) {
                    self.switch_spot(spot.clone(), tx).await?;
                }
            }
            _ => {}
        }
        Ok(())
    }

    async fn handle_picker_key(
        &mut self,
        key: KeyEvent,
        tx: &mpsc::Sender<AppEvent>,
    ) -> Result<()> {
        match key.code {
            KeyCode::Esc => {
                self.mode = if self.marine.is_some() {
                    AppMode::Ready
                } else {
                    AppMode::Loading
                };
            }
            KeyCode::Enter => {
                let choice = self.picker.results().get(self.picker.selected).copied();
                if let Some(spot) = choice {
                    self.switch_spot(spot.clone(), tx).await?;
                }
            }
            KeyCode::Up => {
                self.picker.selected = self.picker.selected.saturating_sub(1);
            }
            KeyCode::Down => {
                let max = self.picker.results().len().saturating_sub(1);
                self.picker.selected = (self.picker.selected + 1).min(max);
            }
            KeyCode::Backspace => {
                self.picker.query.pop();
                self.picker.selected = 0;
            }
            KeyCode::Char(c) => {
                self.picker.query.push(c);
                self.picker.selected = 0;
            }
            _ => {}
        }
        Ok(())
    }

    async fn handle_auth_key(&mut self, key: KeyEvent, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        if self.auth_form.busy {
            return Ok(());
        }

        match key.code {
            KeyCode::Esc => {
                self.auth_form = AuthForm::default();
                self.mode = if self.marine.is_some() {
                    AppMode::Ready
                } else {
                    AppMode::Loading
                };
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.auth_form.field = match self.auth_form.field {
                    AuthField::Email => AuthField::Password,
                    AuthField::Password => AuthField::Email,
                };
            }
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.auth_form.intent = match self.auth_form.intent {
                    AuthIntent::Login => AuthIntent::Register,
                    AuthIntent::Register => AuthIntent::Login,
                };
                self.auth_form.error = None;
            }
            KeyCode::Enter => {
                self.submit_auth(tx);
            }
            KeyCode::Backspace => {
                match self.auth_form.field {
                    AuthField::Email => self.auth_form.email.pop(),
                    AuthField::Password => self.auth_form.password.pop(),
                };
            }
            KeyCode::Char(c) => match self.auth_form.field {
                AuthField::Email => self.auth_form.email.push(c),
                AuthField::Password => self.auth_form.password.push(c),
            },
            _ => {}
        }
        Ok(())
    }

    async fn switch_spot(&mut self, spot: Spot, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        self.spot = spot;
        self.mode = if self.marine.is_some() {
            AppMode::Ready
        } else {
            AppMode::Loading
        };
        self.start_fetch(tx).await
    }

    /// Kicks off a marine fetch for the current spot, unless a recent bundle
    /// for it is still in the cache. Cached hits replay through the normal
    /// success path so freshness bookkeeping stays in one place.
    async fn start_fetch(&mut self, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        if self.fetch_in_flight {
            return Ok(());
        }

        let slug = self.spot.slug();
        if let Some(cached) = self.cache.get(&slug) {
            let age = Utc::now() - cached.fetched_at;
            if age < Duration::seconds(REVALIDATE_SECS) {
                let bundle = cached.clone();
                tx.send(AppEvent::FetchSucceeded(Box::new(bundle))).await?;
                return Ok(());
            }
        }

        tx.send(AppEvent::FetchStarted).await?;

        let client = self.marine_client.clone();
        let spot = self.spot.clone();
        let tx2 = tx.clone();
        tokio::spawn(async move {
            match client.fetch(spot).await {
                Ok(bundle) => {
                    let _ = tx2.send(AppEvent::FetchSucceeded(Box::new(bundle))).await;
                }
                Err(err) => {
                    let _ = tx2.send(AppEvent::FetchFailed(err.to_string())).await;
                }
            }
        });

        Ok(())
    }

    fn check_session(&self, tx: &mpsc::Sender<AppEvent>) {
        let client = self.auth_client.clone();
        let tx2 = tx.clone();
        tokio::spawn(async move {
            // An unreachable account service only mutes the session panel.
            if let Ok(info) = client.me().await {
                let _ = tx2.send(AppEvent::SessionChecked(info)).await;
            }
        });
    }

    fn submit_auth(&mut self, tx: &mpsc::Sender<AppEvent>) {
        self.auth_form.busy = true;
        self.auth_form.error = None;

        let client = self.auth_client.clone();
        let email = self.auth_form.email.clone();
        let password = self.auth_form.password.clone();
        let intent = self.auth_form.intent;
        let tx2 = tx.clone();
        tokio::spawn(async move {
            let result = match intent {
                AuthIntent::Login => client.login(&email, &password).await,
                AuthIntent::Register => client.register(&email, &password).await,
            };
            let event = match result {
                Ok(info) => AppEvent::AuthSucceeded(info),
                Err(err) => AppEvent::AuthFailed(err.to_string()),
            };
            let _ = tx2.send(event).await;
        });
    }

    fn logout(&self, tx: &mpsc::Sender<AppEvent>) {
        let client = self.auth_client.clone();
        let tx2 = tx.clone();
        tokio::spawn(async move {
            if client.logout().await.is_ok() {
                let _ = tx2.send(AppEvent::LoggedOut).await;
            }
        });
    }

    fn save_prefs(&self) {
        // Preference writes are best effort; a read-only config dir should
        // never take the dashboard down.
        let _ = self.prefs_store.save(&self.prefs);
    }

    #[must_use]
    pub fn today(&self) -> chrono::NaiveDate {
        Local::now().date_naive()
    }

    #[must_use]
    pub fn is_current_favourite(&self) -> bool {
        self.prefs.is_favourite(&self.spot.slug())
    }
}

/// Resolves what the dashboard should show first: explicit coordinates beat
/// the spot argument, which beats the default spot.
fn resolve_spot(cli: &Cli) -> Spot {
    if let (Some(lat), Some(lon)) = (cli.lat, cli.lon) {
        return Spot {
            name: "Custom coordinates",
            city: "",
            lat,
            lon,
        };
    }

    match &cli.spot {
        Some(query) => spots::resolve(query)
            .cloned()
            .unwrap_or_else(|| spots::default_spot().clone()),
        None => spots::default_spot().clone(),
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn cli(args: &[&str]) -> Cli {
        let mut full = vec!["swell-tui", "--no-prefs"];
        full.extend_from_slice(args);
        Cli::parse_from(full)
    }

    #[test]
    fn resolve_spot_prefers_coordinates() {
        let spot = resolve_spot(&cli(&["la-torche-plomeur", "--lat", "48.0", "--lon", "-4.5"]));
        assert_eq!(spot.name, "Custom coordinates");
        assert_eq!(spot.lat, 48.0);
    }

    #[test]
    fn resolve_spot_falls_back_to_default() {
        assert_eq!(resolve_spot(&cli(&[])).name, "Plage de Carnac");
        assert_eq!(resolve_spot(&cli(&["zzz-no-such"])).name, "Plage de Carnac");
        assert_eq!(resolve_spot(&cli(&["torche"])).name, "La Torche");
    }

    #[test]
    fn cli_overrides_win_over_default_prefs() {
        let state = AppState::new(&cli(&["--theme", "light", "--lang", "en"]));
        assert_eq!(state.prefs.theme, ThemePref::Light);
        assert_eq!(state.prefs.lang, Lang::En);
    }

    #[test]
    fn picker_lists_all_spots_for_empty_query() {
        let picker = SpotPicker::default();
        assert_eq!(picker.results().len(), spots::all().len());
    }
}
