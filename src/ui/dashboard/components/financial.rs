//! Financial panel: profit and loss by month, revenue over the last 30 days

use super::body::panel_block;
use super::general::header_row;
use crate::dashboard::loader::FinancialPanel;
use crate::ui::dashboard::utils::{bar_value, format_money};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Paragraph, Row, Sparkline, Table};
use rust_decimal::Decimal;

fn profit_color(profit: Decimal) -> Color {
    if profit.is_sign_negative() && !profit.is_zero() {
        Color::LightRed
    } else {
        Color::LightGreen
    }
}

/// Reported profit, flagged when it is not revenue minus costs.
fn profit_text(reported: Decimal, expected: Decimal) -> String {
    if reported == expected {
        format_money(reported)
    } else {
        format!("{} *", format_money(reported))
    }
}

pub fn render_financial(f: &mut Frame, area: Rect, panel: &FinancialPanel) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_profit_loss(f, chunks[0], panel);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Fill(1)])
        .split(chunks[1]);
    render_revenue_summary(f, right[0], panel);
    render_revenue_sparkline(f, right[1], panel);
}

fn render_profit_loss(f: &mut Frame, area: Rect, panel: &FinancialPanel) {
    let mut rows: Vec<Row> = panel
        .profit_loss
        .iter()
        .map(|row| {
            Row::new(vec![
                Cell::from(row.month.clone()),
                Cell::from(format_money(row.revenue)),
                Cell::from(format_money(row.costs)),
                Cell::from(profit_text(row.profit, row.expected_profit()))
                    .style(Style::default().fg(profit_color(row.profit))),
            ])
        })
        .collect();

    let (revenue, costs, profit) = panel.totals();
    rows.push(
        Row::new(vec![
            Cell::from("Total"),
            Cell::from(format_money(revenue)),
            Cell::from(format_money(costs)),
            Cell::from(format_money(profit)).style(Style::default().fg(profit_color(profit))),
        ])
        .style(Style::default().add_modifier(Modifier::BOLD)),
    );

    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Fill(1),
            Constraint::Fill(1),
            Constraint::Fill(1),
        ],
    )
    .header(header_row(["Mês", "Receita", "Custos", "Lucro"]))
    .block(panel_block("Lucros e Perdas", Color::Cyan));
    f.render_widget(table, area);
}

fn render_revenue_summary(f: &mut Frame, area: Rect, panel: &FinancialPanel) {
    let days = panel.revenue_history.len();
    let total = panel.revenue_last_30_days();
    let lines = vec![
        Line::from(vec![
            Span::styled("Total: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format_money(total),
                Style::default()
                    .fg(Color::LightGreen)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Dias com dados: ", Style::default().fg(Color::Gray)),
            Span::raw(days.to_string()),
        ]),
    ];
    let summary = Paragraph::new(lines).block(panel_block("Receita 30 Dias", Color::Cyan));
    f.render_widget(summary, area);
}

fn render_revenue_sparkline(f: &mut Frame, area: Rect, panel: &FinancialPanel) {
    let values: Vec<u64> = panel
        .revenue_history
        .iter()
        .map(|day| bar_value(day.revenue))
        .collect();

    let title = match (panel.revenue_history.first(), panel.revenue_history.last()) {
        (Some(first), Some(last)) => format!("{} a {}", first.date, last.date),
        _ => "Sem dados".to_string(),
    };

    let sparkline = Sparkline::default()
        .block(panel_block(&title, Color::DarkGray))
        .data(&values)
        .style(Style::default().fg(Color::LightGreen));
    f.render_widget(sparkline, area);
}
