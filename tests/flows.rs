mod common;

use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use swell_tui::{
    app::events::AppEvent,
    app::prefs::{Lang, ThemePref},
    app::state::{AppMode, AppState, AuthIntent},
    data::auth::SessionInfo,
    resilience::freshness::FreshnessState,
};
use tokio::sync::mpsc;
use tokio::time::timeout;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

fn key(code: KeyCode) -> AppEvent {
    AppEvent::Input(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
}

fn ctrl_key(c: char) -> AppEvent {
    AppEvent::Input(Event::Key(KeyEvent::new(
        KeyCode::Char(c),
        KeyModifiers::CONTROL,
    )))
}

async fn recv(rx: &mut mpsc::Receiver<AppEvent>) -> AppEvent {
    timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("event within deadline")
        .expect("channel open")
}

#[tokio::test]
async fn fetch_success_marks_ready_and_resets_backoff() {
    let cli = common::carnac_cli();
    let mut state = AppState::new(&cli);
    let (tx, _rx) = mpsc::channel(32);

    state.backoff.next_delay();
    state
        .handle_event(
            AppEvent::FetchSucceeded(Box::new(common::fixture_bundle())),
            &tx,
            &cli,
        )
        .await
        .unwrap();

    assert_eq!(state.mode, AppMode::Ready);
    assert!(state.marine.is_some());
    assert!(state.last_error.is_none());
    assert_eq!(state.refresh_meta.state, FreshnessState::Fresh);
    assert_eq!(state.refresh_meta.consecutive_failures, 0);
    // Backoff was reset: the next delay is the base again.
    assert_eq!(state.backoff.next_delay(), 10);
}

#[tokio::test]
async fn fetch_failure_marks_error_and_schedules_retry() {
    let cli = common::carnac_cli();
    let mut state = AppState::new(&cli);
    let (tx, _rx) = mpsc::channel(32);

    state
        .handle_event(
            AppEvent::FetchFailed("connection refused".to_string()),
            &tx,
            &cli,
        )
        .await
        .unwrap();

    assert_eq!(state.mode, AppMode::Error);
    assert_eq!(state.last_error.as_deref(), Some("connection refused"));
    assert_eq!(state.refresh_meta.consecutive_failures, 1);
}

#[tokio::test]
async fn cached_bundle_avoids_second_request_within_ttl() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::mock_marine_payload()))
        .mount(&server)
        .await;

    let cli = common::cli_with_urls(&server.uri(), &server.uri());
    let mut state = AppState::new(&cli);
    let (tx, mut rx) = mpsc::channel(32);

    state
        .handle_event(AppEvent::TickRefresh, &tx, &cli)
        .await
        .unwrap();
    assert!(matches!(recv(&mut rx).await, AppEvent::FetchStarted));
    state
        .handle_event(AppEvent::FetchStarted, &tx, &cli)
        .await
        .unwrap();
    let fetched = recv(&mut rx).await;
    assert!(matches!(fetched, AppEvent::FetchSucceeded(_)));
    state.handle_event(fetched, &tx, &cli).await.unwrap();

    // Same spot again, within the revalidation window: served from cache.
    state
        .handle_event(AppEvent::TickRefresh, &tx, &cli)
        .await
        .unwrap();
    let replay = recv(&mut rx).await;
    assert!(matches!(replay, AppEvent::FetchSucceeded(_)));

    let requests = server.received_requests().await.expect("requests");
    assert_eq!(requests.len(), 1);
}

#[tokio::test]
async fn picker_flow_filters_and_switches_spot() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let cli = common::cli_with_urls(&server.uri(), &server.uri());
    let mut state = AppState::new(&cli);
    let (tx, mut rx) = mpsc::channel(32);

    state.handle_event(key(KeyCode::Char('s')), &tx, &cli).await.unwrap();
    assert_eq!(state.mode, AppMode::PickingSpot);

    for c in "torche".chars() {
        state.handle_event(key(KeyCode::Char(c)), &tx, &cli).await.unwrap();
    }
    assert_eq!(state.picker.results()[0].name, "La Torche");

    state.handle_event(key(KeyCode::Enter), &tx, &cli).await.unwrap();
    assert_eq!(state.spot.name, "La Torche");
    assert!(matches!(recv(&mut rx).await, AppEvent::FetchStarted));
}

#[tokio::test]
async fn picker_escape_returns_without_switching() {
    let cli = common::carnac_cli();
    let mut state = AppState::new(&cli);
    state.marine = Some(common::fixture_bundle());
    state.mode = AppMode::Ready;
    let (tx, _rx) = mpsc::channel(32);

    state.handle_event(key(KeyCode::Char('/')), &tx, &cli).await.unwrap();
    assert_eq!(state.mode, AppMode::PickingSpot);
    state.handle_event(key(KeyCode::Esc), &tx, &cli).await.unwrap();
    assert_eq!(state.mode, AppMode::Ready);
    assert_eq!(state.spot.name, "Plage de Carnac");
}

#[tokio::test]
async fn preference_toggles_flip_theme_lang_and_favourite() {
    let cli = common::carnac_cli();
    let mut state = AppState::new(&cli);
    let (tx, _rx) = mpsc::channel(32);

    assert_eq!(state.prefs.theme, ThemePref::Dark);
    state.handle_event(key(KeyCode::Char('t')), &tx, &cli).await.unwrap();
    assert_eq!(state.prefs.theme, ThemePref::Light);

    assert_eq!(state.prefs.lang, Lang::Fr);
    state.handle_event(key(KeyCode::Char('l')), &tx, &cli).await.unwrap();
    assert_eq!(state.prefs.lang, Lang::En);

    assert!(!state.is_current_favourite());
    state.handle_event(key(KeyCode::Char('f')), &tx, &cli).await.unwrap();
    assert!(state.is_current_favourite());
    state.handle_event(key(KeyCode::Char('f')), &tx, &cli).await.unwrap();
    assert!(!state.is_current_favourite());
}

#[tokio::test]
async fn auth_form_editing_and_events() {
    let cli = common::carnac_cli();
    let mut state = AppState::new(&cli);
    let (tx, _rx) = mpsc::channel(32);

    state.handle_event(key(KeyCode::Char('a')), &tx, &cli).await.unwrap();
    assert_eq!(state.mode, AppMode::Auth);
    assert_eq!(state.auth_form.intent, AuthIntent::Login);

    for c in "surfer@example.com".chars() {
        state.handle_event(key(KeyCode::Char(c)), &tx, &cli).await.unwrap();
    }
    state.handle_event(key(KeyCode::Tab), &tx, &cli).await.unwrap();
    for c in "secret1".chars() {
        state.handle_event(key(KeyCode::Char(c)), &tx, &cli).await.unwrap();
    }
    assert_eq!(state.auth_form.email, "surfer@example.com");
    assert_eq!(state.auth_form.password, "secret1");

    state.handle_event(ctrl_key('r'), &tx, &cli).await.unwrap();
    assert_eq!(state.auth_form.intent, AuthIntent::Register);

    state
        .handle_event(
            AppEvent::AuthFailed("invalid email or password".to_string()),
            &tx,
            &cli,
        )
        .await
        .unwrap();
    assert_eq!(
        state.auth_form.error.as_deref(),
        Some("invalid email or password")
    );

    state
        .handle_event(
            AppEvent::AuthSucceeded(SessionInfo {
                authenticated: true,
                email: Some("surfer@example.com".to_string()),
            }),
            &tx,
            &cli,
        )
        .await
        .unwrap();
    assert!(state.session.authenticated);
    assert_ne!(state.mode, AppMode::Auth);
    assert!(state.auth_form.email.is_empty());

    state.handle_event(AppEvent::LoggedOut, &tx, &cli).await.unwrap();
    assert!(!state.session.authenticated);
    assert!(state.session.email.is_none());
}

#[tokio::test]
async fn quit_key_requests_shutdown() {
    let cli = common::carnac_cli();
    let mut state = AppState::new(&cli);
    let (tx, mut rx) = mpsc::channel(32);

    state.handle_event(key(KeyCode::Char('q')), &tx, &cli).await.unwrap();
    let event = recv(&mut rx).await;
    assert!(matches!(event, AppEvent::Quit));
    state.handle_event(event, &tx, &cli).await.unwrap();
    assert_eq!(state.mode, AppMode::Quit);
}

#[tokio::test]
async fn favourite_digit_jumps_to_spot() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let cli = common::cli_with_urls(&server.uri(), &server.uri());
    let mut state = AppState::new(&cli);
    let (tx, _rx) = mpsc::channel(32);

    state.prefs.favourites = vec!["la-torche-plomeur".to_string()];
    state.handle_event(key(KeyCode::Char('1')), &tx, &cli).await.unwrap();
    assert_eq!(state.spot.name, "La Torche");
}
