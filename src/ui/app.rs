//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::cli_consts::UI_POLL_INTERVAL_MS;
use crate::dashboard::Panel;
use crate::events::Event as LoadEvent;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::workers::{LoadOutcome, PanelLoader};
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Terminal, backend::Backend};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::debug;

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub initial_panel: Panel,
}

impl UIConfig {
    pub fn new(with_background_color: bool, initial_panel: Panel) -> Self {
        Self {
            with_background_color,
            initial_panel,
        }
    }
}

/// What a key press asks the dashboard to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Select(Panel),
    Refresh,
    Ignore,
}

/// Maps a key to its action given the panel currently shown.
pub fn key_action(code: KeyCode, active: Panel) -> KeyAction {
    match code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => KeyAction::Quit,
        KeyCode::Right | KeyCode::Tab => KeyAction::Select(active.next()),
        KeyCode::Left | KeyCode::BackTab => KeyAction::Select(active.previous()),
        KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Refresh,
        KeyCode::Char(c @ '1'..='9') => {
            let index = (c as usize) - ('1' as usize);
            Panel::from_index(index).map_or(KeyAction::Ignore, KeyAction::Select)
        }
        _ => KeyAction::Ignore,
    }
}

/// Application state
pub struct App {
    state: DashboardState,

    /// Spawns panel loads in the background.
    loader: PanelLoader,

    /// Receives finished panel loads.
    outcome_receiver: mpsc::Receiver<LoadOutcome>,

    /// Receives activity events from load tasks.
    event_receiver: mpsc::Receiver<LoadEvent>,

    /// Reload the active panel this often, if set.
    refresh_interval: Option<Duration>,

    /// When the last load was started.
    last_load: Instant,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        state: DashboardState,
        loader: PanelLoader,
        outcome_receiver: mpsc::Receiver<LoadOutcome>,
        event_receiver: mpsc::Receiver<LoadEvent>,
        refresh_interval: Option<Duration>,
    ) -> Self {
        Self {
            state,
            loader,
            outcome_receiver,
            event_receiver,
            refresh_interval,
            last_load: Instant::now(),
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    fn start_load(&mut self, generation: u64) {
        self.last_load = Instant::now();
        // The handle is dropped: a load is never cancelled, its outcome is discarded instead.
        drop(self.loader.spawn(self.state.active_panel(), generation));
    }

    /// Applies a key action. Returns `false` when the app should exit.
    pub fn apply(&mut self, action: KeyAction) -> bool {
        match action {
            KeyAction::Quit => return false,
            KeyAction::Select(panel) if panel == self.state.active_panel() => {}
            KeyAction::Select(panel) => {
                let generation = self.state.select_panel(panel);
                debug!(%panel, generation, "panel selected");
                self.start_load(generation);
            }
            KeyAction::Refresh => {
                let generation = self.state.begin_load();
                self.start_load(generation);
            }
            KeyAction::Ignore => {}
        }
        true
    }

    /// Drains both channels into the dashboard state.
    pub fn drain_channels(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            self.state.add_event(event);
        }
        while let Ok(outcome) = self.outcome_receiver.try_recv() {
            self.state.handle_outcome(outcome);
        }
    }

    fn refresh_due(&self) -> bool {
        match self.refresh_interval {
            Some(interval) => !self.state.is_loading() && self.last_load.elapsed() >= interval,
            None => false,
        }
    }
}

/// Runs the application UI in a loop, handling events and rendering the dashboard.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let generation = app.state.begin_load();
    app.start_load(generation);

    // UI event loop
    loop {
        app.drain_channels();
        app.state.update();
        terminal.draw(|f| render_dashboard(f, &app.state))?;

        if app.refresh_due() && !app.apply(KeyAction::Refresh) {
            return Ok(());
        }

        // Poll for key events
        if event::poll(Duration::from_millis(UI_POLL_INTERVAL_MS))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }
                if !app.apply(key_action(key.code, app.state.active_panel())) {
                    return Ok(());
                }
            }
        }

        // Let load tasks make progress on a current-thread runtime.
        tokio::task::yield_now().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{MockDashboardApi, RestaurantId};
    use crate::config::ApiConfig;
    use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
    use crate::events::EventType;
    use crate::ui::dashboard::state::PanelState;
    use crate::workers::EventSender;
    use std::sync::Arc;

    fn app_with(api: MockDashboardApi) -> App {
        let (outcome_tx, outcome_rx) = mpsc::channel(EVENT_QUEUE_SIZE);
        let (event_tx, event_rx) = mpsc::channel(EVENT_QUEUE_SIZE);
        let loader = PanelLoader::new(
            Arc::new(api),
            RestaurantId::default(),
            outcome_tx,
            EventSender::new(event_tx),
        );
        let state = DashboardState::new(
            RestaurantId::default(),
            ApiConfig::resolve_with(None, None),
            Instant::now(),
            UIConfig::new(false, Panel::General),
        );
        App::new(state, loader, outcome_rx, event_rx, None)
    }

    #[tokio::test]
    async fn switching_panels_discards_the_earlier_load() {
        let mut api = MockDashboardApi::new();
        api.expect_fetch_menu_performance().returning(|_| Ok(vec![]));
        api.expect_fetch_profit_loss().returning(|_| Ok(vec![]));
        api.expect_fetch_revenue_last_30_days()
            .returning(|_| Ok(vec![]));
        let mut app = app_with(api);

        assert!(app.apply(KeyAction::Select(Panel::Menu)));
        assert!(app.apply(KeyAction::Select(Panel::Financial)));

        let discarded = |app: &App| {
            app.state()
                .activity_logs
                .iter()
                .any(|e| e.event_type == EventType::Discarded)
        };
        for _ in 0..200 {
            app.drain_channels();
            if !app.state().is_loading() && discarded(&app) {
                break;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }

        assert_eq!(app.state().active_panel(), Panel::Financial);
        assert!(matches!(
            app.state().panel_state(),
            PanelState::Ready(data) if data.panel() == Panel::Financial
        ));
        assert!(discarded(&app));
    }

    #[test]
    fn selecting_the_shown_panel_starts_nothing() {
        // No expectations: any fetch would panic the load task.
        let mut app = app_with(MockDashboardApi::new());
        let before = app.state().generation();
        assert!(app.apply(KeyAction::Select(Panel::General)));
        assert_eq!(app.state().generation(), before);
        assert!(!app.apply(KeyAction::Quit));
    }

    #[test]
    fn arrows_and_tabs_cycle_panels() {
        assert_eq!(
            key_action(KeyCode::Right, Panel::General),
            KeyAction::Select(Panel::Financial)
        );
        assert_eq!(
            key_action(KeyCode::Tab, Panel::Inventory),
            KeyAction::Select(Panel::General)
        );
        assert_eq!(
            key_action(KeyCode::Left, Panel::General),
            KeyAction::Select(Panel::Inventory)
        );
        assert_eq!(
            key_action(KeyCode::BackTab, Panel::Menu),
            KeyAction::Select(Panel::Financial)
        );
    }

    #[test]
    fn digits_jump_to_panels() {
        assert_eq!(
            key_action(KeyCode::Char('1'), Panel::Menu),
            KeyAction::Select(Panel::General)
        );
        assert_eq!(
            key_action(KeyCode::Char('4'), Panel::General),
            KeyAction::Select(Panel::Inventory)
        );
        assert_eq!(key_action(KeyCode::Char('5'), Panel::General), KeyAction::Ignore);
    }

    #[test]
    fn quit_and_refresh_keys() {
        assert_eq!(key_action(KeyCode::Char('q'), Panel::Menu), KeyAction::Quit);
        assert_eq!(key_action(KeyCode::Esc, Panel::Menu), KeyAction::Quit);
        assert_eq!(key_action(KeyCode::Char('r'), Panel::Menu), KeyAction::Refresh);
        assert_eq!(key_action(KeyCode::Char('x'), Panel::Menu), KeyAction::Ignore);
    }
}
