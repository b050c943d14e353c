//! Session setup and initialization

use crate::api::{ApiError, DashboardApi, DashboardClient, RestaurantId};
use crate::config::ApiConfig;
use std::sync::Arc;
use tracing::info;

/// Session data shared by the TUI and headless commands
#[derive(Clone)]
pub struct SessionData {
    /// Client every fetch goes through
    pub api: Arc<dyn DashboardApi>,
    /// Restaurant whose metrics are shown
    pub restaurant_id: RestaurantId,
    /// Resolved API endpoint, for display
    pub api_config: ApiConfig,
}

/// Builds the HTTP client for `api_config` and bundles it with the restaurant id.
pub fn setup_session(
    api_config: ApiConfig,
    restaurant_id: RestaurantId,
) -> Result<SessionData, ApiError> {
    info!(api = %api_config, %restaurant_id, "starting session");
    let client = DashboardClient::new(api_config.clone())?;
    Ok(SessionData {
        api: Arc::new(client),
        restaurant_id,
        api_config,
    })
}
