//! Dashboard state management
//!
//! Contains the main dashboard state struct and related enums

use crate::api::RestaurantId;
use crate::config::ApiConfig;
use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::dashboard::{Panel, PanelData};
use crate::events::Event as LoadEvent;
use crate::ui::app::UIConfig;

use std::collections::VecDeque;
use std::time::Instant;

/// What the active panel currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelState {
    /// A load is in flight.
    Loading { started_at: Instant },
    Ready(Box<PanelData>),
    /// The load failed; holds the message shown in the error panel.
    Failed(String),
}

/// Dashboard state: active panel, its data and the activity log.
#[derive(Debug)]
pub struct DashboardState {
    pub restaurant_id: RestaurantId,
    /// Where the data comes from.
    pub api_config: ApiConfig,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<LoadEvent>,
    /// Activity logs for display
    pub activity_logs: VecDeque<LoadEvent>,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Animation tick counter
    pub tick: usize,
    /// Timestamp of the last successful load, "YYYY-MM-DD HH:MM:SS"
    pub last_refreshed: Option<String>,

    active_panel: Panel,
    panel_state: PanelState,
    /// Id of the load whose result the active panel is waiting for.
    generation: u64,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state. No load is in flight yet.
    pub fn new(
        restaurant_id: RestaurantId,
        api_config: ApiConfig,
        start_time: Instant,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            restaurant_id,
            api_config,
            start_time,
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            with_background_color: ui_config.with_background_color,
            tick: 0,
            last_refreshed: None,
            active_panel: ui_config.initial_panel,
            panel_state: PanelState::Loading {
                started_at: start_time,
            },
            generation: 0,
        }
    }

    pub fn active_panel(&self) -> Panel {
        self.active_panel
    }

    pub fn panel_state(&self) -> &PanelState {
        &self.panel_state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Switches to `panel` and marks it loading. Returns the id of the load to start.
    pub fn select_panel(&mut self, panel: Panel) -> u64 {
        self.active_panel = panel;
        self.begin_load()
    }

    /// Reloads the active panel. Returns the id of the load to start.
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.panel_state = PanelState::Loading {
            started_at: Instant::now(),
        };
        self.generation
    }

    /// Applies a finished load. Results for an older load or another panel are
    /// dropped and `false` is returned.
    pub fn apply_result(
        &mut self,
        generation: u64,
        panel: Panel,
        result: Result<PanelData, String>,
        finished_at: String,
    ) -> bool {
        if generation != self.generation || panel != self.active_panel {
            return false;
        }
        self.panel_state = match result {
            Ok(data) => {
                self.last_refreshed = Some(finished_at);
                PanelState::Ready(Box::new(data))
            }
            Err(message) => PanelState::Failed(message),
        };
        true
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.panel_state, PanelState::Loading { .. })
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: LoadEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: LoadEvent) {
        self.pending_events.push_back(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::loader::MenuPanel;
    use crate::events::EventType;
    use crate::logging::LogLevel;

    fn state() -> DashboardState {
        DashboardState::new(
            RestaurantId::default(),
            ApiConfig::resolve_with(None, None),
            Instant::now(),
            UIConfig::new(false, Panel::General),
        )
    }

    fn menu_data() -> PanelData {
        PanelData::Menu(MenuPanel { items: vec![] })
    }

    #[test]
    fn current_result_is_applied() {
        let mut state = state();
        let generation = state.select_panel(Panel::Menu);
        assert!(state.is_loading());

        let applied = state.apply_result(
            generation,
            Panel::Menu,
            Ok(menu_data()),
            "2025-03-01 10:00:00".into(),
        );
        assert!(applied);
        assert_eq!(state.panel_state(), &PanelState::Ready(Box::new(menu_data())));
        assert_eq!(state.last_refreshed.as_deref(), Some("2025-03-01 10:00:00"));
    }

    #[test]
    // A result for a panel the user already left must not replace the new view.
    fn stale_result_is_discarded() {
        let mut state = state();
        let old = state.select_panel(Panel::Menu);
        let new = state.select_panel(Panel::Inventory);
        assert!(new > old);

        let applied = state.apply_result(old, Panel::Menu, Ok(menu_data()), String::new());
        assert!(!applied);
        assert!(state.is_loading());
        assert_eq!(state.active_panel(), Panel::Inventory);
    }

    #[test]
    fn refresh_supersedes_earlier_load_of_same_panel() {
        let mut state = state();
        let first = state.begin_load();
        let second = state.begin_load();

        assert!(!state.apply_result(first, Panel::General, Err("boom".into()), String::new()));
        assert!(state.apply_result(
            second,
            Panel::General,
            Err("HTTP error with status 500".into()),
            String::new()
        ));
        assert_eq!(
            state.panel_state(),
            &PanelState::Failed("HTTP error with status 500".into())
        );
        assert_eq!(state.last_refreshed, None);
    }

    #[test]
    fn activity_log_is_bounded() {
        let mut state = state();
        for i in 0..(MAX_ACTIVITY_LOGS + 5) {
            state.add_to_activity_log(LoadEvent::panel_with_level(
                Panel::General,
                format!("event {i}"),
                EventType::Refresh,
                LogLevel::Info,
            ));
        }
        assert_eq!(state.activity_logs.len(), MAX_ACTIVITY_LOGS);
        assert_eq!(state.activity_logs.front().unwrap().msg, "event 5");
    }
}
