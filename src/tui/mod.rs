//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Loading**: draws every ~80ms so the spinner animates.
//! - **Idle**: sleeps up to 500ms, only redraws on events, fetch results,
//!   or terminal resize.
//!
//! ## Fetch Lifecycle
//!
//! `Effect::FetchItems` spawns one tokio task per mount. The task posts
//! `Action::ItemsLoaded` back over an mpsc channel. Leaving the screen
//! aborts the task; a result that still slips through carries an old mount
//! id and the reducer ignores it.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::navigation::Route;
use crate::core::session::Session;
use crate::core::state::App;
use crate::store::{FirestoreStore, ItemStore};
use crate::tui::component::EventHandler;
use crate::tui::components::ItemListState;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub item_list: ItemListState,
    pub spinner_frame: usize,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            item_list: ItemListState::new(),
            spinner_frame: 0,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, Hide)?;
        info!("Terminal modes enabled (mouse capture, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show);
    }
}

/// Build the item store from the resolved config and session.
pub fn build_store(config: &ResolvedConfig, session: Arc<Session>) -> Arc<dyn ItemStore> {
    Arc::new(
        FirestoreStore::new(
            config.project_id.clone(),
            config.collection.clone(),
            Some(config.base_url.clone()),
            session,
        )
        .with_api_key(config.api_key.clone())
        .with_timeout(Duration::from_secs(config.timeout_secs)),
    )
}

/// Maps a terminal event to a core action for the visible route.
/// Scrolling and clicks are handled by the caller.
fn route_event(route: Route, event: &TuiEvent) -> Option<Action> {
    match (route, event) {
        (_, TuiEvent::ForceQuit | TuiEvent::Quit) => Some(Action::Quit),
        (Route::Home, TuiEvent::Escape) => Some(Action::Quit),
        (Route::Home, TuiEvent::Submit) => Some(Action::OpenShop),
        (Route::ShopList, TuiEvent::Escape | TuiEvent::Back) => Some(Action::Back),
        (Route::ShopList, TuiEvent::Reload) => Some(Action::Reload),
        _ => None,
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let session = Arc::new(Session::from_config(&config));
    let store = build_store(&config, session.clone());
    let mut app = App::new(store, session);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let guard = TerminalModeGuard::new();
    if let Err(e) = &guard {
        warn!("Failed to enable terminal modes: {}", e);
    }

    let result = event_loop(&mut terminal, &mut app, &mut tui);

    drop(guard);
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
) -> std::io::Result<()> {
    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    // Abort handle for the current mount's fetch
    let mut active_fetch: Option<tokio::task::AbortHandle> = None;

    let effect = update(app, Action::Start);
    apply_effect(effect, app, tui, &tx, &mut active_fetch);

    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let animating = app.current_route() == Route::ShopList && app.shop.is_loading();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            tui.spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let route = app.current_route();

            if route == Route::ShopList
                && matches!(
                    event,
                    TuiEvent::ScrollUp
                        | TuiEvent::ScrollDown
                        | TuiEvent::ScrollPageUp
                        | TuiEvent::ScrollPageDown
                        | TuiEvent::ScrollToTop
                        | TuiEvent::ScrollToBottom
                )
            {
                tui.item_list.handle_event(&event);
                continue;
            }

            let action = match event {
                TuiEvent::MouseClick(column, row) => {
                    let frame_area = terminal.get_frame().area();
                    (route == Route::ShopList && ui::hit_test_back(column, row, frame_area))
                        .then_some(Action::Back)
                }
                ref other => route_event(route, other),
            };

            if let Some(action) = action {
                debug!("Dispatching {:?}", action);
                let effect = update(app, action);
                if apply_effect(effect, app, tui, &tx, &mut active_fetch) {
                    should_quit = true;
                    break;
                }
            }
        }

        if should_quit {
            break;
        }

        // Handle fetch results
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(app, action);
            apply_effect(effect, app, tui, &tx, &mut active_fetch);
        }
    }

    if let Some(handle) = active_fetch.take() {
        handle.abort();
    }
    Ok(())
}

/// Performs the I/O an effect asks for. Returns true when the app should quit.
fn apply_effect(
    effect: Effect,
    app: &App,
    tui: &mut TuiState,
    tx: &mpsc::Sender<Action>,
    active_fetch: &mut Option<tokio::task::AbortHandle>,
) -> bool {
    match effect {
        Effect::None => false,
        Effect::Quit => true,
        Effect::CancelFetch => {
            if let Some(handle) = active_fetch.take() {
                debug!("Aborting in-flight fetch");
                handle.abort();
            }
            false
        }
        Effect::FetchItems { mount } => {
            if let Some(handle) = active_fetch.take() {
                handle.abort();
            }
            tui.item_list = ItemListState::new();
            *active_fetch = Some(spawn_fetch(app.store.clone(), mount, tx.clone()));
            false
        }
    }
}

fn spawn_fetch(
    store: Arc<dyn ItemStore>,
    mount: u64,
    tx: mpsc::Sender<Action>,
) -> tokio::task::AbortHandle {
    info!("Spawning item fetch from {} (mount={})", store.name(), mount);

    let handle = tokio::spawn(async move {
        let result = store.fetch_purchasable_items().await;
        if tx.send(Action::ItemsLoaded { mount, result }).is_err() {
            warn!("Failed to send fetch result for mount {}: receiver dropped", mount);
        }
    });
    handle.abort_handle()
}
