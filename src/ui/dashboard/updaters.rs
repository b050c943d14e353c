//! Dashboard state update logic
//!
//! Contains all methods for updating dashboard state from events and load outcomes

use super::state::DashboardState;

use crate::events::Event as LoadEvent;
use crate::workers::LoadOutcome;
use chrono::Local;
use tracing::debug;

impl DashboardState {
    /// Update the dashboard state with a new tick and any queued events.
    pub fn update(&mut self) {
        self.tick += 1;

        // Process all queued events one by one
        while let Some(event) = self.pending_events.pop_front() {
            self.add_to_activity_log(event);
        }
    }

    /// Applies a finished load, logging it when it arrives for a view that is gone.
    pub fn handle_outcome(&mut self, outcome: LoadOutcome) {
        let LoadOutcome {
            generation,
            panel,
            result,
        } = outcome;
        let finished_at = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        if !self.apply_result(generation, panel, result, finished_at) {
            debug!(%panel, generation, current = self.generation(), "stale load discarded");
            self.add_to_activity_log(LoadEvent::discarded(panel, generation));
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::api::RestaurantId;
    use crate::config::ApiConfig;
    use crate::dashboard::Panel;
    use crate::events::EventType;
    use crate::ui::app::UIConfig;
    use crate::ui::dashboard::state::{DashboardState, PanelState};
    use crate::workers::LoadOutcome;
    use std::time::Instant;

    fn state() -> DashboardState {
        DashboardState::new(
            RestaurantId::default(),
            ApiConfig::resolve_with(None, None),
            Instant::now(),
            UIConfig::new(false, Panel::General),
        )
    }

    #[test]
    fn stale_outcome_is_logged_as_discarded() {
        let mut state = state();
        let old = state.select_panel(Panel::Financial);
        state.select_panel(Panel::Menu);

        state.handle_outcome(LoadOutcome {
            generation: old,
            panel: Panel::Financial,
            result: Err("late".into()),
        });

        assert!(state.is_loading());
        let last = state.activity_logs.back().unwrap();
        assert_eq!(last.event_type, EventType::Discarded);
        assert_eq!(last.panel, Some(Panel::Financial));
    }

    #[test]
    fn current_outcome_updates_the_panel() {
        let mut state = state();
        let generation = state.begin_load();
        state.handle_outcome(LoadOutcome {
            generation,
            panel: Panel::General,
            result: Err("HTTP error with status 500".into()),
        });
        assert!(matches!(state.panel_state(), PanelState::Failed(_)));
        assert!(state.activity_logs.is_empty());
    }
}
