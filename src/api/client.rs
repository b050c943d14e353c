//! Dashboard API Client
//!
//! Issues one GET per metric against the configured base URL and decodes the
//! JSON body into the matching response shape.

use crate::api::error::ApiError;
use crate::api::metric::Metric;
use crate::api::restaurant::RestaurantId;
use crate::api::types::{
    InventoryBelowThreshold, InventoryCategory, InventoryItem, KpiData, MenuItemPerformance,
    Order, OrdersToday, PerformanceData, ProfitLossData, RevenueData, RevenueToday, validate_all,
};
use crate::api::DashboardApi;
use crate::config::ApiConfig;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, ClientBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};
use validator::Validate;

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("restaurant-dashboard/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct DashboardClient {
    client: Client,
    config: ApiConfig,
}

impl DashboardClient {
    /// Builds a client without request or connect timeouts.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let client = ClientBuilder::new().user_agent(USER_AGENT).build()?;
        Ok(Self { client, config })
    }

    fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_status(response.status()));
        }
        Ok(response)
    }

    async fn get_request<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.config.url_for(path);
        debug!(%url, "GET");
        let response = self
            .client
            .get(&url)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .inspect_err(|e| warn!(%url, error = %e, "request failed before a response"))?;

        let status = response.status();
        let response = Self::handle_response_status(response)
            .inspect_err(|_| warn!(%url, status = status.as_u16(), "API request failed"))?;
        let response_bytes = response.bytes().await?;
        debug!(%url, status = status.as_u16(), bytes = response_bytes.len(), "response received");
        Ok(serde_json::from_slice(&response_bytes)?)
    }

    async fn get_one<T: DeserializeOwned + Validate>(
        &self,
        metric: Metric,
        restaurant_id: RestaurantId,
    ) -> Result<T, ApiError> {
        let payload: T = self.get_request(&metric.path(restaurant_id)).await?;
        payload.validate()?;
        Ok(payload)
    }

    async fn get_many<T: DeserializeOwned + Validate>(
        &self,
        metric: Metric,
        restaurant_id: RestaurantId,
    ) -> Result<Vec<T>, ApiError> {
        let rows: Vec<T> = self.get_request(&metric.path(restaurant_id)).await?;
        validate_all(&rows)?;
        Ok(rows)
    }
}

/// Runs the typed decoding and validation over a body without keeping the result.
fn check_one<T: DeserializeOwned + Validate>(body: &Value) -> Result<(), ApiError> {
    T::deserialize(body)?.validate()?;
    Ok(())
}

fn check_many<T: DeserializeOwned + Validate>(body: &Value) -> Result<(), ApiError> {
    validate_all(&Vec::<T>::deserialize(body)?)?;
    Ok(())
}

#[async_trait::async_trait]
impl DashboardApi for DashboardClient {
    async fn fetch_revenue_today(
        &self,
        restaurant_id: RestaurantId,
    ) -> Result<RevenueToday, ApiError> {
        self.get_one(Metric::RevenueToday, restaurant_id).await
    }

    async fn fetch_orders_today(
        &self,
        restaurant_id: RestaurantId,
    ) -> Result<OrdersToday, ApiError> {
        self.get_one(Metric::OrdersToday, restaurant_id).await
    }

    async fn fetch_inventory_below_threshold(
        &self,
        restaurant_id: RestaurantId,
    ) -> Result<InventoryBelowThreshold, ApiError> {
        self.get_one(Metric::InventoryBelowThreshold, restaurant_id)
            .await
    }

    async fn fetch_revenue_last_30_days(
        &self,
        restaurant_id: RestaurantId,
    ) -> Result<Vec<RevenueData>, ApiError> {
        self.get_many(Metric::RevenueLast30Days, restaurant_id).await
    }

    async fn fetch_performance_comparison(
        &self,
        restaurant_id: RestaurantId,
    ) -> Result<Vec<PerformanceData>, ApiError> {
        self.get_many(Metric::PerformanceComparison, restaurant_id)
            .await
    }

    async fn fetch_profit_loss(
        &self,
        restaurant_id: RestaurantId,
    ) -> Result<Vec<ProfitLossData>, ApiError> {
        self.get_many(Metric::ProfitLoss, restaurant_id).await
    }

    async fn fetch_menu_performance(
        &self,
        restaurant_id: RestaurantId,
    ) -> Result<Vec<MenuItemPerformance>, ApiError> {
        self.get_many(Metric::MenuPerformance, restaurant_id).await
    }

    async fn fetch_inventory_value(
        &self,
        restaurant_id: RestaurantId,
    ) -> Result<Vec<InventoryCategory>, ApiError> {
        self.get_many(Metric::InventoryValue, restaurant_id).await
    }

    async fn fetch_recent_orders(
        &self,
        restaurant_id: RestaurantId,
    ) -> Result<Vec<Order>, ApiError> {
        self.get_many(Metric::RecentOrders, restaurant_id).await
    }

    async fn fetch_inventory_items(
        &self,
        restaurant_id: RestaurantId,
    ) -> Result<Vec<InventoryItem>, ApiError> {
        self.get_many(Metric::InventoryItems, restaurant_id).await
    }

    async fn fetch_kpis(&self, restaurant_id: RestaurantId) -> Result<KpiData, ApiError> {
        self.get_one(Metric::Kpis, restaurant_id).await
    }

    async fn fetch_metric_json(
        &self,
        metric: Metric,
        restaurant_id: RestaurantId,
    ) -> Result<Value, ApiError> {
        let body: Value = self.get_request(&metric.path(restaurant_id)).await?;
        match metric {
            Metric::RevenueToday => check_one::<RevenueToday>(&body)?,
            Metric::OrdersToday => check_one::<OrdersToday>(&body)?,
            Metric::InventoryBelowThreshold => check_one::<InventoryBelowThreshold>(&body)?,
            Metric::RevenueLast30Days => check_many::<RevenueData>(&body)?,
            Metric::PerformanceComparison => check_many::<PerformanceData>(&body)?,
            Metric::ProfitLoss => check_many::<ProfitLossData>(&body)?,
            Metric::MenuPerformance => check_many::<MenuItemPerformance>(&body)?,
            Metric::InventoryValue => check_many::<InventoryCategory>(&body)?,
            Metric::RecentOrders => check_many::<Order>(&body)?,
            Metric::InventoryItems => check_many::<InventoryItem>(&body)?,
            Metric::Kpis => check_one::<KpiData>(&body)?,
        }
        Ok(body)
    }
}
