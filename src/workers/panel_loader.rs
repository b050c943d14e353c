//! Panel loading on background tasks

use super::core::EventSender;
use crate::api::{DashboardApi, RestaurantId};
use crate::dashboard::{Panel, PanelData, load_panel};
use crate::error_classifier::ErrorClassifier;
use crate::events::EventType;
use crate::logging::LogLevel;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Result of one panel load, tagged with the load it answers.
#[derive(Debug)]
pub struct LoadOutcome {
    pub generation: u64,
    pub panel: Panel,
    pub result: Result<PanelData, String>,
}

/// Spawns panel loads and reports each outcome exactly once.
#[derive(Clone)]
pub struct PanelLoader {
    api: Arc<dyn DashboardApi>,
    restaurant_id: RestaurantId,
    outcomes: mpsc::Sender<LoadOutcome>,
    event_sender: EventSender,
    classifier: ErrorClassifier,
}

impl PanelLoader {
    pub fn new(
        api: Arc<dyn DashboardApi>,
        restaurant_id: RestaurantId,
        outcomes: mpsc::Sender<LoadOutcome>,
        event_sender: EventSender,
    ) -> Self {
        Self {
            api,
            restaurant_id,
            outcomes,
            event_sender,
            classifier: ErrorClassifier::new(),
        }
    }

    /// Starts loading `panel` without waiting for it.
    pub fn spawn(&self, panel: Panel, generation: u64) -> JoinHandle<()> {
        let loader = self.clone();
        tokio::spawn(async move { loader.load(panel, generation).await })
    }

    /// Loads `panel` and sends the outcome, even if the UI has moved on.
    pub async fn load(&self, panel: Panel, generation: u64) {
        self.event_sender
            .send_panel_event(
                panel,
                format!("Loading {} for restaurant {}...", panel, self.restaurant_id),
                EventType::Refresh,
                LogLevel::Info,
            )
            .await;

        let started = Instant::now();
        let result = load_panel(self.api.as_ref(), self.restaurant_id, panel).await;
        let elapsed_ms = started.elapsed().as_millis();

        let result = match result {
            Ok(data) => {
                info!(%panel, generation, elapsed_ms, "panel loaded");
                self.event_sender
                    .send_panel_event(
                        panel,
                        format!("{} loaded in {} ms", panel, elapsed_ms),
                        EventType::Success,
                        LogLevel::Info,
                    )
                    .await;
                Ok(data)
            }
            Err(e) => {
                let log_level = self.classifier.classify_fetch_error(&e);
                warn!(%panel, generation, error = %e, "panel failed to load");
                self.event_sender
                    .send_panel_event(
                        panel,
                        format!("Failed to load {}: {}", panel, e),
                        EventType::Error,
                        log_level,
                    )
                    .await;
                Err(e.to_string())
            }
        };

        let _ = self
            .outcomes
            .send(LoadOutcome {
                generation,
                panel,
                result,
            })
            .await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, MockDashboardApi};
    use reqwest::StatusCode;

    #[tokio::test]
    async fn failed_load_reports_outcome_and_error_event() {
        let mut api = MockDashboardApi::new();
        api.expect_fetch_menu_performance()
            .returning(|_| Err(ApiError::from_status(StatusCode::UNAUTHORIZED)));

        let (outcome_tx, mut outcome_rx) = mpsc::channel(4);
        let (event_tx, mut event_rx) = mpsc::channel(4);
        let loader = PanelLoader::new(
            Arc::new(api),
            RestaurantId::default(),
            outcome_tx,
            EventSender::new(event_tx),
        );

        loader.spawn(Panel::Menu, 7).await.unwrap();

        let outcome = outcome_rx.recv().await.unwrap();
        assert_eq!(outcome.generation, 7);
        assert_eq!(outcome.panel, Panel::Menu);
        assert!(outcome.result.unwrap_err().contains("401"));

        let started = event_rx.recv().await.unwrap();
        assert_eq!(started.event_type, EventType::Refresh);
        let failed = event_rx.recv().await.unwrap();
        assert_eq!(failed.event_type, EventType::Error);
        assert_eq!(failed.log_level, LogLevel::Error);
    }

    #[tokio::test]
    async fn successful_load_reports_data() {
        let mut api = MockDashboardApi::new();
        api.expect_fetch_menu_performance().returning(|_| Ok(vec![]));

        let (outcome_tx, mut outcome_rx) = mpsc::channel(4);
        let (event_tx, _event_rx) = mpsc::channel(4);
        let loader = PanelLoader::new(
            Arc::new(api),
            RestaurantId::default(),
            outcome_tx,
            EventSender::new(event_tx),
        );

        loader.load(Panel::Menu, 1).await;
        let outcome = outcome_rx.recv().await.unwrap();
        assert_eq!(outcome.result.unwrap().panel(), Panel::Menu);
    }
}
