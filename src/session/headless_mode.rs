//! Headless commands: `summary` and `fetch`

use super::{SessionData, messages::print_session_starting};
use crate::api::types::{DailyMetrics, KpiData};
use crate::api::{ApiError, Metric};
use crate::dashboard::load_daily_metrics;
use crate::print_cmd_error;
use crate::ui::dashboard::utils::format_money;
use rust_decimal::Decimal;
use std::error::Error;
use tracing::info;

/// Scorecard lines printed by `summary`.
pub fn format_summary(daily: &DailyMetrics, kpis: &KpiData) -> Vec<String> {
    let year_total: Decimal = kpis.revenue_this_year.iter().map(|p| p.revenue).sum();
    vec![
        format!("{:<16}{}", "Receita hoje:", format_money(daily.revenue_today)),
        format!("{:<16}{}", "Pedidos hoje:", daily.orders_today),
        format!("{:<16}{}", "Ticket médio:", format_money(kpis.average_ticket())),
        format!("{:<16}{}", "Estoque baixo:", daily.items_below_threshold),
        format!("{:<16}{}", "Receita no ano:", format_money(year_total)),
    ]
}

/// Loads today's metrics and the KPI bundle together and prints the scorecards.
pub async fn run_summary(session: SessionData) -> Result<(), Box<dyn Error>> {
    print_session_starting("summary", &session);
    let api = session.api.as_ref();
    let (daily, kpis) = tokio::join!(
        load_daily_metrics(api, session.restaurant_id),
        api.fetch_kpis(session.restaurant_id),
    );
    let (daily, kpis) = match (daily, kpis) {
        (Ok(daily), Ok(kpis)) => (daily, kpis),
        (Err(e), _) | (_, Err(e)) => return Err(report(e)),
    };
    info!(orders_today = daily.orders_today, "summary loaded");

    for line in format_summary(&daily, &kpis) {
        println!("{}", line);
    }
    Ok(())
}

/// Prints one metric's response as pretty JSON, numbers as the server wrote them.
pub async fn run_fetch(session: SessionData, metric: Metric) -> Result<(), Box<dyn Error>> {
    let value = session
        .api
        .fetch_metric_json(metric, session.restaurant_id)
        .await
        .map_err(report)?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn report(e: ApiError) -> Box<dyn Error> {
    print_cmd_error!("API request failed", &e.to_string());
    Box::new(e)
}
