//! Panel data loading.
//!
//! Every request a panel needs is issued at once and awaited together. A
//! panel is only built once all of them have settled; the first failure (in
//! declaration order) fails the whole panel. Requests still in flight when
//! another one fails are not cancelled.

use super::panel::Panel;
use crate::api::types::{
    DailyMetrics, InventoryBelowThreshold, InventoryCategory, InventoryItem, KpiData,
    MenuItemPerformance, MenuQuadrant, Order, PerformanceData, ProfitLossData, RevenueData,
};
use crate::api::{ApiError, DashboardApi, RestaurantId};
use rust_decimal::Decimal;
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct GeneralPanel {
    pub kpis: KpiData,
    pub performance: Vec<PerformanceData>,
    pub recent_orders: Vec<Order>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FinancialPanel {
    pub profit_loss: Vec<ProfitLossData>,
    pub revenue_history: Vec<RevenueData>,
}

impl FinancialPanel {
    /// Revenue, costs and profit summed over all reported months.
    pub fn totals(&self) -> (Decimal, Decimal, Decimal) {
        self.profit_loss.iter().fold(
            (Decimal::ZERO, Decimal::ZERO, Decimal::ZERO),
            |(revenue, costs, profit), row| {
                (revenue + row.revenue, costs + row.costs, profit + row.profit)
            },
        )
    }

    pub fn revenue_last_30_days(&self) -> Decimal {
        self.revenue_history.iter().map(|r| r.revenue).sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuPanel {
    pub items: Vec<MenuItemPerformance>,
}

impl MenuPanel {
    /// Number of items per quadrant; items with an unknown label are not counted.
    pub fn quadrant_counts(&self) -> HashMap<MenuQuadrant, usize> {
        let mut counts = HashMap::new();
        for quadrant in self.items.iter().filter_map(MenuItemPerformance::quadrant) {
            *counts.entry(quadrant).or_insert(0) += 1;
        }
        counts
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InventoryPanel {
    pub items: Vec<InventoryItem>,
    pub value_by_category: Vec<InventoryCategory>,
    pub below_threshold: InventoryBelowThreshold,
}

impl InventoryPanel {
    pub fn low_stock(&self) -> impl Iterator<Item = &InventoryItem> {
        self.items.iter().filter(|item| item.is_below_threshold())
    }

    pub fn total_value(&self) -> Decimal {
        self.value_by_category.iter().map(|c| c.value).sum()
    }
}

/// Everything one panel renders.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelData {
    General(GeneralPanel),
    Financial(FinancialPanel),
    Menu(MenuPanel),
    Inventory(InventoryPanel),
}

impl PanelData {
    pub fn panel(&self) -> Panel {
        match self {
            PanelData::General(_) => Panel::General,
            PanelData::Financial(_) => Panel::Financial,
            PanelData::Menu(_) => Panel::Menu,
            PanelData::Inventory(_) => Panel::Inventory,
        }
    }
}

/// Loads the data behind `panel`, issuing its requests concurrently.
pub async fn load_panel(
    api: &dyn DashboardApi,
    restaurant_id: RestaurantId,
    panel: Panel,
) -> Result<PanelData, ApiError> {
    debug!(%panel, %restaurant_id, "loading panel");
    let data = match panel {
        Panel::General => {
            let (kpis, performance, recent_orders) = tokio::join!(
                api.fetch_kpis(restaurant_id),
                api.fetch_performance_comparison(restaurant_id),
                api.fetch_recent_orders(restaurant_id),
            );
            PanelData::General(GeneralPanel {
                kpis: kpis?,
                performance: performance?,
                recent_orders: recent_orders?,
            })
        }
        Panel::Financial => {
            let (profit_loss, revenue_history) = tokio::join!(
                api.fetch_profit_loss(restaurant_id),
                api.fetch_revenue_last_30_days(restaurant_id),
            );
            PanelData::Financial(FinancialPanel {
                profit_loss: profit_loss?,
                revenue_history: revenue_history?,
            })
        }
        Panel::Menu => PanelData::Menu(MenuPanel {
            items: api.fetch_menu_performance(restaurant_id).await?,
        }),
        Panel::Inventory => {
            let (items, value_by_category, below_threshold) = tokio::join!(
                api.fetch_inventory_items(restaurant_id),
                api.fetch_inventory_value(restaurant_id),
                api.fetch_inventory_below_threshold(restaurant_id),
            );
            PanelData::Inventory(InventoryPanel {
                items: items?,
                value_by_category: value_by_category?,
                below_threshold: below_threshold?,
            })
        }
    };
    Ok(data)
}

/// Joins the three single-value endpoints into today's snapshot.
pub async fn load_daily_metrics(
    api: &dyn DashboardApi,
    restaurant_id: RestaurantId,
) -> Result<DailyMetrics, ApiError> {
    let (revenue, orders, below_threshold) = tokio::join!(
        api.fetch_revenue_today(restaurant_id),
        api.fetch_orders_today(restaurant_id),
        api.fetch_inventory_below_threshold(restaurant_id),
    );
    Ok(DailyMetrics::from_parts(revenue?, orders?, below_threshold?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockDashboardApi;
    use crate::api::types::{OrdersToday, RevenueToday, YearRevenuePoint};
    use mockall::predicate::eq;
    use reqwest::StatusCode;

    fn rid() -> RestaurantId {
        RestaurantId::new(1).unwrap()
    }

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn kpis() -> KpiData {
        KpiData {
            revenue_today: dec("1520.50"),
            orders_today: 31,
            low_stock_items: 2,
            revenue_this_year: vec![YearRevenuePoint {
                date: "2025-01-03".into(),
                year_month: "2025-01".into(),
                revenue: dec("800"),
            }],
        }
    }

    fn inventory_item(name: &str, quantity: &str, min: &str) -> InventoryItem {
        InventoryItem {
            id: 1,
            name: name.into(),
            quantity: dec(quantity),
            unit: "kg".into(),
            min_threshold: dec(min),
            unit_cost: dec("2"),
            last_updated: "2025-03-01T08:00:00".into(),
        }
    }

    #[tokio::test]
    async fn general_panel_joins_its_three_requests() {
        let mut api = MockDashboardApi::new();
        api.expect_fetch_kpis()
            .with(eq(rid()))
            .times(1)
            .returning(|_| Ok(kpis()));
        api.expect_fetch_performance_comparison()
            .times(1)
            .returning(|_| {
                Ok(vec![PerformanceData {
                    period: "Este Período".into(),
                    sales: dec("45000"),
                    orders: 320,
                }])
            });
        api.expect_fetch_recent_orders()
            .times(1)
            .returning(|_| Ok(vec![]));

        let data = load_panel(&api, rid(), Panel::General).await.unwrap();
        assert_eq!(data.panel(), Panel::General);
        match data {
            PanelData::General(general) => {
                assert_eq!(general.kpis.orders_today, 31);
                assert_eq!(general.performance.len(), 1);
                assert!(general.recent_orders.is_empty());
            }
            other => panic!("unexpected panel data: {other:?}"),
        }
    }

    #[tokio::test]
    async fn one_failure_fails_the_panel_after_all_settle() {
        let mut api = MockDashboardApi::new();
        api.expect_fetch_inventory_items()
            .times(1)
            .returning(|_| Ok(vec![]));
        api.expect_fetch_inventory_value()
            .times(1)
            .returning(|_| Err(ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR)));
        // Still awaited even though a sibling failed.
        api.expect_fetch_inventory_below_threshold()
            .times(1)
            .returning(|_| {
                Ok(InventoryBelowThreshold {
                    items_below_threshold: 0,
                })
            });

        let err = load_panel(&api, rid(), Panel::Inventory).await.unwrap_err();
        assert_eq!(err.status(), Some(500));
    }

    #[tokio::test]
    async fn menu_panel_needs_a_single_request() {
        let mut api = MockDashboardApi::new();
        api.expect_fetch_menu_performance()
            .times(1)
            .returning(|_| {
                Ok(vec![
                    MenuItemPerformance {
                        name: "Pizza Margherita".into(),
                        popularity: 85.0,
                        profitability: dec("12.5"),
                        category: "Stars".into(),
                    },
                    MenuItemPerformance {
                        name: "Hambúrguer Clássico".into(),
                        popularity: 92.0,
                        profitability: dec("8.2"),
                        category: "Plowhorses".into(),
                    },
                    MenuItemPerformance {
                        name: "Especial".into(),
                        popularity: 10.0,
                        profitability: dec("1"),
                        category: "Sazonal".into(),
                    },
                ])
            });

        let PanelData::Menu(menu) = load_panel(&api, rid(), Panel::Menu).await.unwrap() else {
            panic!("expected menu data");
        };
        let counts = menu.quadrant_counts();
        assert_eq!(counts.get(&MenuQuadrant::Stars), Some(&1));
        assert_eq!(counts.get(&MenuQuadrant::Plowhorses), Some(&1));
        assert_eq!(counts.get(&MenuQuadrant::Dogs), None);
    }

    #[tokio::test]
    async fn financial_totals_sum_reported_rows() {
        let mut api = MockDashboardApi::new();
        api.expect_fetch_profit_loss().returning(|_| {
            Ok(vec![
                ProfitLossData {
                    month: "Jan".into(),
                    revenue: dec("45000"),
                    costs: dec("32000"),
                    profit: dec("13000"),
                },
                ProfitLossData {
                    month: "Fev".into(),
                    revenue: dec("30000"),
                    costs: dec("35000"),
                    profit: dec("-5000"),
                },
            ])
        });
        api.expect_fetch_revenue_last_30_days().returning(|_| {
            Ok(vec![
                RevenueData {
                    date: "2025-03-01".into(),
                    revenue: dec("100.5"),
                },
                RevenueData {
                    date: "2025-03-02".into(),
                    revenue: dec("99.5"),
                },
            ])
        });

        let PanelData::Financial(fin) = load_panel(&api, rid(), Panel::Financial).await.unwrap()
        else {
            panic!("expected financial data");
        };
        assert_eq!(fin.totals(), (dec("75000"), dec("67000"), dec("8000")));
        assert_eq!(fin.revenue_last_30_days(), dec("200"));
    }

    #[test]
    fn inventory_panel_helpers() {
        let panel = InventoryPanel {
            items: vec![
                inventory_item("Tomate", "2", "5"),
                inventory_item("Farinha", "10", "5"),
            ],
            value_by_category: vec![
                InventoryCategory {
                    category: "Carnes".into(),
                    value: dec("15000"),
                    color: "#2F93F2".into(),
                },
                InventoryCategory {
                    category: "Vegetais".into(),
                    value: dec("8000"),
                    color: "#10B981".into(),
                },
            ],
            below_threshold: InventoryBelowThreshold {
                items_below_threshold: 1,
            },
        };
        let low: Vec<&str> = panel.low_stock().map(|i| i.name.as_str()).collect();
        assert_eq!(low, vec!["Tomate"]);
        assert_eq!(panel.total_value(), dec("23000"));
    }

    #[tokio::test]
    async fn daily_metrics_combine_three_endpoints() {
        let mut api = MockDashboardApi::new();
        api.expect_fetch_revenue_today().returning(|_| {
            Ok(RevenueToday {
                revenue_today: dec("980.40"),
            })
        });
        api.expect_fetch_orders_today()
            .returning(|_| Ok(OrdersToday { orders_today: 12 }));
        api.expect_fetch_inventory_below_threshold().returning(|_| {
            Ok(InventoryBelowThreshold {
                items_below_threshold: 3,
            })
        });

        let metrics = load_daily_metrics(&api, rid()).await.unwrap();
        assert_eq!(
            metrics,
            DailyMetrics {
                revenue_today: dec("980.40"),
                orders_today: 12,
                items_below_threshold: 3,
            }
        );
    }
}
