//! Named metrics and the API paths that serve them.

use super::restaurant::RestaurantId;
use clap::ValueEnum;
use strum::{Display, EnumIter};

/// One remote metric. Each maps to exactly one GET path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, ValueEnum)]
pub enum Metric {
    #[strum(serialize = "revenue-today")]
    #[value(name = "revenue-today")]
    RevenueToday,
    #[strum(serialize = "orders-today")]
    #[value(name = "orders-today")]
    OrdersToday,
    #[strum(serialize = "inventory-below-threshold")]
    #[value(name = "inventory-below-threshold")]
    InventoryBelowThreshold,
    #[strum(serialize = "revenue-last-30-days")]
    #[value(name = "revenue-last-30-days")]
    RevenueLast30Days,
    #[strum(serialize = "performance-comparison")]
    #[value(name = "performance-comparison")]
    PerformanceComparison,
    #[strum(serialize = "profit-loss")]
    #[value(name = "profit-loss")]
    ProfitLoss,
    #[strum(serialize = "menu-performance")]
    #[value(name = "menu-performance")]
    MenuPerformance,
    #[strum(serialize = "inventory-value")]
    #[value(name = "inventory-value")]
    InventoryValue,
    #[strum(serialize = "recent-orders")]
    #[value(name = "recent-orders")]
    RecentOrders,
    #[strum(serialize = "inventory-items")]
    #[value(name = "inventory-items")]
    InventoryItems,
    #[strum(serialize = "kpis")]
    #[value(name = "kpis")]
    Kpis,
}

impl Metric {
    /// Path (with query, where the endpoint takes one) relative to the base URL.
    pub fn path(self, restaurant_id: RestaurantId) -> String {
        let id = restaurant_id.get();
        match self {
            Metric::RevenueToday => format!("/restaurants/{id}/revenue/today"),
            Metric::OrdersToday => format!("/restaurants/{id}/orders/today"),
            Metric::InventoryBelowThreshold => {
                format!("/restaurants/{id}/inventory/below-threshold")
            }
            Metric::RevenueLast30Days => format!("/restaurants/{id}/revenue/history?days=30"),
            Metric::PerformanceComparison => format!("/restaurants/{id}/performance/comparison"),
            Metric::ProfitLoss => format!("/restaurants/{id}/financial/profit-loss"),
            Metric::MenuPerformance => format!("/restaurants/{id}/menu/performance"),
            Metric::InventoryValue => format!("/restaurants/{id}/inventory/value-by-category"),
            Metric::RecentOrders => format!("/restaurants/{id}/orders/recent"),
            Metric::InventoryItems => format!("/restaurants/{id}/inventory"),
            Metric::Kpis => format!("/dashboard/kpis?restaurant_id={id}"),
        }
    }
}
