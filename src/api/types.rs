//! Response shapes of the analytics API.
//!
//! Field names mirror the wire format exactly. Every shape derives
//! [`Validate`]: amounts are non-negative, popularity is a percentage and
//! colors are hex triplets. Profit and menu profitability (a margin
//! percentage) may be negative.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use validator::{Validate, ValidationError, ValidationErrors};

fn non_negative(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ValidationError::new("negative_amount"));
    }
    Ok(())
}

fn hex_color(value: &str) -> Result<(), ValidationError> {
    let digits = value
        .strip_prefix('#')
        .ok_or_else(|| ValidationError::new("hex_color"))?;
    if matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit()) {
        Ok(())
    } else {
        Err(ValidationError::new("hex_color"))
    }
}

/// Validates every element of a list payload, stopping at the first failure.
pub fn validate_all<T: Validate>(items: &[T]) -> Result<(), ValidationErrors> {
    items.iter().try_for_each(Validate::validate)
}

/// Parses the ISO-8601 timestamps the API sends, with or without an offset.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct RevenueToday {
    #[validate(custom(function = "non_negative"))]
    pub revenue_today: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct OrdersToday {
    pub orders_today: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct InventoryBelowThreshold {
    pub items_below_threshold: u64,
}

/// Today's snapshot, joined from the three single-value endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct DailyMetrics {
    #[validate(custom(function = "non_negative"))]
    pub revenue_today: Decimal,
    pub orders_today: u64,
    pub items_below_threshold: u64,
}

impl DailyMetrics {
    pub fn from_parts(
        revenue: RevenueToday,
        orders: OrdersToday,
        below_threshold: InventoryBelowThreshold,
    ) -> Self {
        Self {
            revenue_today: revenue.revenue_today,
            orders_today: orders.orders_today,
            items_below_threshold: below_threshold.items_below_threshold,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct RevenueData {
    pub date: String,
    #[validate(custom(function = "non_negative"))]
    pub revenue: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct PerformanceData {
    pub period: String,
    #[validate(custom(function = "non_negative"))]
    pub sales: Decimal,
    pub orders: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ProfitLossData {
    pub month: String,
    #[validate(custom(function = "non_negative"))]
    pub revenue: Decimal,
    #[validate(custom(function = "non_negative"))]
    pub costs: Decimal,
    /// Reported by the server; may be negative.
    pub profit: Decimal,
}

impl ProfitLossData {
    /// Revenue minus costs. The server's `profit` is shown as sent, even when
    /// it disagrees with this.
    pub fn expected_profit(&self) -> Decimal {
        self.revenue - self.costs
    }
}

/// Menu-engineering quadrant labels computed server-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
pub enum MenuQuadrant {
    Stars,
    Plowhorses,
    Puzzles,
    Dogs,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct MenuItemPerformance {
    pub name: String,
    #[validate(range(min = 0.0, max = 100.0))]
    pub popularity: f64,
    /// Margin percentage; negative for items sold below cost.
    pub profitability: Decimal,
    pub category: String,
}

impl MenuItemPerformance {
    /// The quadrant, when `category` is one of the known labels.
    pub fn quadrant(&self) -> Option<MenuQuadrant> {
        self.category.parse().ok()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct InventoryCategory {
    pub category: String,
    #[validate(custom(function = "non_negative"))]
    pub value: Decimal,
    #[validate(custom(function = "hex_color"))]
    pub color: String,
}

impl InventoryCategory {
    /// The category color as RGB, expanding `#RGB` shorthand.
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        let digits = self.color.strip_prefix('#')?;
        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 => digits.to_string(),
            _ => return None,
        };
        let channel = |i: usize| u8::from_str_radix(expanded.get(i..i + 2)?, 16).ok();
        Some((channel(0)?, channel(2)?, channel(4)?))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct OrderedMenuItem {
    pub name: String,
    #[validate(custom(function = "non_negative"))]
    pub price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct OrderLine {
    pub quantity: u32,
    #[validate(nested)]
    pub menu_item: OrderedMenuItem,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Order {
    pub id: i64,
    pub customer_name: Option<String>,
    #[validate(custom(function = "non_negative"))]
    pub total_amount: Decimal,
    pub status: String,
    pub timestamp: String,
    #[validate(nested)]
    pub items: Vec<OrderLine>,
}

impl Order {
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.quantity)).sum()
    }

    pub fn placed_at(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.timestamp)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct InventoryItem {
    pub id: i64,
    pub name: String,
    #[validate(custom(function = "non_negative"))]
    pub quantity: Decimal,
    pub unit: String,
    #[validate(custom(function = "non_negative"))]
    pub min_threshold: Decimal,
    #[validate(custom(function = "non_negative"))]
    pub unit_cost: Decimal,
    pub last_updated: String,
}

impl InventoryItem {
    pub fn is_below_threshold(&self) -> bool {
        self.quantity < self.min_threshold
    }

    pub fn stock_value(&self) -> Decimal {
        self.quantity * self.unit_cost
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct YearRevenuePoint {
    pub date: String,
    pub year_month: String,
    #[validate(custom(function = "non_negative"))]
    pub revenue: Decimal,
}

/// Aggregate bundle behind the general panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct KpiData {
    #[validate(custom(function = "non_negative"))]
    pub revenue_today: Decimal,
    pub orders_today: u64,
    pub low_stock_items: u64,
    #[validate(nested)]
    pub revenue_this_year: Vec<YearRevenuePoint>,
}

impl KpiData {
    /// Revenue per order today; zero when nothing was ordered.
    pub fn average_ticket(&self) -> Decimal {
        if self.orders_today == 0 {
            return Decimal::ZERO;
        }
        self.revenue_today / Decimal::from(self.orders_today)
    }

    /// Revenue summed per `year_month`, in the order months first appear.
    pub fn monthly_revenue(&self) -> Vec<(String, Decimal)> {
        let mut months: Vec<(String, Decimal)> = Vec::new();
        for point in &self.revenue_this_year {
            match months.iter_mut().find(|(m, _)| *m == point.year_month) {
                Some((_, total)) => *total += point.revenue,
                None => months.push((point.year_month.clone(), point.revenue)),
            }
        }
        months
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn kpis_decode_without_renaming() {
        let body = json!({
            "revenue_today": 1520.5,
            "orders_today": 31,
            "low_stock_items": 2,
            "revenue_this_year": [
                {"date": "2025-01-03", "year_month": "2025-01", "revenue": 800.25},
                {"date": "2025-01-04", "year_month": "2025-01", "revenue": 199.75},
                {"date": "2025-02-01", "year_month": "2025-02", "revenue": 50}
            ]
        });
        let kpis: KpiData = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(kpis.revenue_today, dec("1520.5"));
        assert_eq!(kpis.orders_today, 31);
        assert!(kpis.validate().is_ok());
        assert_eq!(
            kpis.monthly_revenue(),
            vec![
                ("2025-01".to_string(), dec("1000")),
                ("2025-02".to_string(), dec("50"))
            ]
        );
        // Numbers go back out as numbers under the same keys.
        let reencoded = serde_json::to_value(&kpis).unwrap();
        assert_eq!(reencoded["orders_today"], json!(31));
        assert!(reencoded["revenue_today"].is_number());
    }

    #[test]
    fn average_ticket_is_zero_without_orders() {
        let mut kpis = KpiData {
            revenue_today: dec("300"),
            orders_today: 0,
            low_stock_items: 0,
            revenue_this_year: vec![],
        };
        assert_eq!(kpis.average_ticket(), Decimal::ZERO);
        kpis.orders_today = 4;
        assert_eq!(kpis.average_ticket(), dec("75"));
    }

    #[test]
    fn order_with_null_customer_decodes() {
        let order: Order = serde_json::from_value(json!({
            "id": 1234,
            "customer_name": null,
            "total_amount": 85.0,
            "status": "completed",
            "timestamp": "2025-03-01T14:30:00",
            "items": [
                {"quantity": 2, "menu_item": {"name": "Pizza Margherita", "price": 32.5}},
                {"quantity": 1, "menu_item": {"name": "Suco", "price": 20}}
            ]
        }))
        .unwrap();
        assert_eq!(order.customer_name, None);
        assert_eq!(order.item_count(), 3);
        assert_eq!(
            order.placed_at().unwrap().format("%H:%M").to_string(),
            "14:30"
        );
        assert!(order.validate().is_ok());
    }

    #[test]
    fn negative_nested_price_is_rejected() {
        let order = Order {
            id: 1,
            customer_name: Some("Ana".into()),
            total_amount: dec("10"),
            status: "pending".into(),
            timestamp: "2025-03-01T10:00:00Z".into(),
            items: vec![OrderLine {
                quantity: 1,
                menu_item: OrderedMenuItem {
                    name: "Café".into(),
                    price: dec("-1"),
                },
            }],
        };
        assert!(order.validate().is_err());
    }

    #[test]
    fn profit_may_be_negative_but_costs_may_not() {
        let mut row = ProfitLossData {
            month: "Jan".into(),
            revenue: dec("30000"),
            costs: dec("32000"),
            profit: dec("-2000"),
        };
        assert!(row.validate().is_ok());
        assert_eq!(row.expected_profit(), dec("-2000"));

        row.costs = dec("-5");
        assert!(row.validate().is_err());
    }

    #[test]
    fn popularity_must_be_a_percentage_but_margin_may_be_negative() {
        let mut item = MenuItemPerformance {
            name: "Salada Caesar".into(),
            popularity: 28.0,
            profitability: dec("4.1"),
            category: "Dogs".into(),
        };
        assert!(item.validate().is_ok());
        assert_eq!(item.quadrant(), Some(MenuQuadrant::Dogs));

        // Sold below cost.
        item.profitability = dec("-12.5");
        assert!(item.validate().is_ok());

        item.popularity = 120.0;
        assert!(item.validate().is_err());

        item.popularity = 50.0;
        item.category = "Unclassified".into();
        assert_eq!(item.quadrant(), None);
    }

    #[test]
    fn inventory_colors_must_be_hex() {
        let mut category = InventoryCategory {
            category: "Carnes".into(),
            value: dec("15000"),
            color: "#2F93F2".into(),
        };
        assert!(category.validate().is_ok());
        assert_eq!(category.rgb(), Some((0x2F, 0x93, 0xF2)));

        category.color = "#abc".into();
        assert!(category.validate().is_ok());
        assert_eq!(category.rgb(), Some((0xAA, 0xBB, 0xCC)));

        category.color = "blue".into();
        assert!(category.validate().is_err());
        category.color = "#12345G".into();
        assert!(category.validate().is_err());
    }

    #[test]
    fn below_threshold_is_strictly_less() {
        let mut item = InventoryItem {
            id: 9,
            name: "Farinha".into(),
            quantity: dec("5"),
            unit: "kg".into(),
            min_threshold: dec("5"),
            unit_cost: dec("4.20"),
            last_updated: "2025-03-01T08:00:00".into(),
        };
        assert!(!item.is_below_threshold());
        assert_eq!(item.stock_value(), dec("21"));
        item.quantity = dec("4.5");
        assert!(item.is_below_threshold());
    }

    #[test]
    fn validate_all_reports_the_first_bad_row() {
        let rows = vec![
            RevenueData {
                date: "2025-03-01".into(),
                revenue: dec("10"),
            },
            RevenueData {
                date: "2025-03-02".into(),
                revenue: dec("-1"),
            },
        ];
        assert!(validate_all(&rows[..1]).is_ok());
        assert!(validate_all(&rows).is_err());
    }

    #[test]
    fn timestamps_parse_with_and_without_offsets() {
        assert!(parse_timestamp("2025-03-01T14:30:00+00:00").is_some());
        assert!(parse_timestamp("2025-03-01T14:30:00.123456").is_some());
        assert!(parse_timestamp("2025-03-01").is_some());
        assert!(parse_timestamp("yesterday").is_none());
    }
}
