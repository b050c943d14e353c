//! Typed client for the restaurant analytics API.

pub(crate) mod client;
pub mod error;
pub mod metric;
pub mod restaurant;
pub mod types;

pub use client::DashboardClient;
pub use error::ApiError;
pub use metric::Metric;
pub use restaurant::RestaurantId;

use types::{
    InventoryBelowThreshold, InventoryCategory, InventoryItem, KpiData, MenuItemPerformance,
    Order, OrdersToday, PerformanceData, ProfitLossData, RevenueData, RevenueToday,
};

#[cfg(test)]
use mockall::automock;

/// One GET per metric. Calls are independent: no retries, no caching, no shared state.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait DashboardApi: Send + Sync {
    /// Revenue booked today.
    async fn fetch_revenue_today(&self, restaurant_id: RestaurantId)
    -> Result<RevenueToday, ApiError>;

    /// Number of orders placed today.
    async fn fetch_orders_today(&self, restaurant_id: RestaurantId)
    -> Result<OrdersToday, ApiError>;

    /// Count of inventory items under their minimum stock level.
    async fn fetch_inventory_below_threshold(
        &self,
        restaurant_id: RestaurantId,
    ) -> Result<InventoryBelowThreshold, ApiError>;

    /// Daily revenue over the last 30 days.
    async fn fetch_revenue_last_30_days(
        &self,
        restaurant_id: RestaurantId,
    ) -> Result<Vec<RevenueData>, ApiError>;

    /// Current period against the prior one.
    async fn fetch_performance_comparison(
        &self,
        restaurant_id: RestaurantId,
    ) -> Result<Vec<PerformanceData>, ApiError>;

    async fn fetch_profit_loss(
        &self,
        restaurant_id: RestaurantId,
    ) -> Result<Vec<ProfitLossData>, ApiError>;

    async fn fetch_menu_performance(
        &self,
        restaurant_id: RestaurantId,
    ) -> Result<Vec<MenuItemPerformance>, ApiError>;

    /// Stock value grouped by category.
    async fn fetch_inventory_value(
        &self,
        restaurant_id: RestaurantId,
    ) -> Result<Vec<InventoryCategory>, ApiError>;

    async fn fetch_recent_orders(&self, restaurant_id: RestaurantId)
    -> Result<Vec<Order>, ApiError>;

    async fn fetch_inventory_items(
        &self,
        restaurant_id: RestaurantId,
    ) -> Result<Vec<InventoryItem>, ApiError>;

    /// Aggregate KPI bundle for the general panel.
    async fn fetch_kpis(&self, restaurant_id: RestaurantId) -> Result<KpiData, ApiError>;

    /// The metric's body exactly as the server sent it, after the same
    /// decoding and validation as its typed call.
    async fn fetch_metric_json(
        &self,
        metric: Metric,
        restaurant_id: RestaurantId,
    ) -> Result<serde_json::Value, ApiError>;
}
