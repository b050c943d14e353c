//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::api::types::MenuQuadrant;
use crate::events::EventType;
use ratatui::prelude::Color;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::time::Duration;

/// Get a ratatui color for an activity-log event based on its type
pub fn get_event_color(event_type: EventType) -> Color {
    match event_type {
        EventType::Success => Color::Green,
        EventType::Error => Color::LightRed,
        EventType::Refresh => Color::Cyan,
        EventType::Discarded => Color::DarkGray,
    }
}

/// Formats an amount as Brazilian reais: `R$ 1.234,56`.
pub fn format_money(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    format!("R$ {}{},{}", sign, group_thousands(int_part), frac_part)
}

/// Formats a count or quantity with `.` as the thousands separator.
pub fn format_number(value: Decimal) -> String {
    let normalized = value.normalize();
    let text = normalized.abs().to_string();
    let sign = if normalized.is_sign_negative() && !normalized.is_zero() {
        "-"
    } else {
        ""
    };
    match text.split_once('.') {
        Some((int_part, frac_part)) => {
            format!("{}{},{}", sign, group_thousands(int_part), frac_part)
        }
        None => format!("{}{}", sign, group_thousands(&text)),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    grouped
}

/// Bar height for a chart; negative and fractional parts are dropped.
pub fn bar_value(amount: Decimal) -> u64 {
    amount.max(Decimal::ZERO).round().to_u64().unwrap_or(u64::MAX)
}

/// Session uptime as `HH:MM:SS`.
pub fn format_uptime(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some(date_part) = timestamp.split(' ').next() {
        if let Some(time_part) = timestamp.split(' ').nth(1) {
            // Extract MM-DD from date and HH:MM from time
            if let Some(month_day) = date_part.get(5..10) {
                // Get MM-DD
                if let Some(hour_min) = time_part.get(0..5) {
                    // Get HH:MM
                    return format!("{} {}", month_day, hour_min);
                }
            }
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}

/// Clean HTTP error messages
pub fn clean_http_error_message(msg: &str) -> String {
    // Replace verbose HTTP error patterns with cleaner messages
    if msg.contains("Reqwest error") && msg.contains("Connection refused") {
        return "API unreachable - connection refused".to_string();
    }
    if msg.contains("Reqwest error") {
        return "Network error - press R to retry".to_string();
    }
    // Return original message if no HTTP error pattern detected
    msg.to_string()
}

/// Badge color for an order status as the API reports it.
pub fn order_status_color(status: &str) -> Color {
    match status.to_lowercase().as_str() {
        "completed" | "complete" | "completo" | "delivered" | "paid" => Color::Green,
        "pending" | "pendente" | "preparing" | "in_progress" => Color::Yellow,
        "cancelled" | "canceled" | "cancelado" => Color::Red,
        _ => Color::Gray,
    }
}

/// Color of a menu-engineering quadrant; unknown labels are gray.
pub fn quadrant_color(quadrant: Option<MenuQuadrant>) -> Color {
    match quadrant {
        Some(MenuQuadrant::Stars) => Color::LightYellow,
        Some(MenuQuadrant::Plowhorses) => Color::LightBlue,
        Some(MenuQuadrant::Puzzles) => Color::LightMagenta,
        Some(MenuQuadrant::Dogs) => Color::DarkGray,
        None => Color::Gray,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn money_uses_brazilian_separators() {
        assert_eq!(format_money(dec("0")), "R$ 0,00");
        assert_eq!(format_money(dec("85")), "R$ 85,00");
        assert_eq!(format_money(dec("1234.5")), "R$ 1.234,50");
        assert_eq!(format_money(dec("23450")), "R$ 23.450,00");
        assert_eq!(format_money(dec("1234567.891")), "R$ 1.234.567,89");
        assert_eq!(format_money(dec("-2000")), "R$ -2.000,00");
    }

    #[test]
    fn numbers_drop_trailing_zeros() {
        assert_eq!(format_number(dec("12.50")), "12,5");
        assert_eq!(format_number(dec("15000")), "15.000");
        assert_eq!(format_number(dec("3")), "3");
    }

    #[test]
    fn bars_are_non_negative_integers() {
        assert_eq!(bar_value(dec("99.6")), 100);
        assert_eq!(bar_value(dec("-5")), 0);
    }

    #[test]
    fn uptime_rolls_over_hours() {
        assert_eq!(format_uptime(Duration::from_secs(59)), "00:00:59");
        assert_eq!(format_uptime(Duration::from_secs(3723)), "01:02:03");
    }

    #[test]
    fn compact_timestamp_keeps_month_day_and_minutes() {
        assert_eq!(format_compact_timestamp("2025-03-01 14:30:59"), "03-01 14:30");
        assert_eq!(format_compact_timestamp("garbage"), "garbage");
    }

    #[test]
    fn transport_errors_are_shortened() {
        let msg = "Failed to load Geral: Reqwest error: error sending request (Connection refused)";
        assert_eq!(
            clean_http_error_message(msg),
            "API unreachable - connection refused"
        );
        assert_eq!(
            clean_http_error_message("HTTP error with status 500"),
            "HTTP error with status 500"
        );
    }
}
