//! General panel: scorecards, yearly revenue, period comparison and recent orders

use super::body::panel_block;
use crate::consts::cli_consts::{MAX_REVENUE_BARS, MAX_TABLE_ROWS};
use crate::dashboard::loader::GeneralPanel;
use crate::ui::dashboard::utils::{bar_value, format_money, format_number, order_status_color};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Cell, Paragraph, Row, Table};
use rust_decimal::Decimal;

pub fn render_general(f: &mut Frame, area: Rect, panel: &GeneralPanel) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Fill(1),
        ])
        .split(area);

    render_scorecards(f, chunks[0], panel);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);
    render_year_revenue(f, middle[0], panel);
    render_comparison(f, middle[1], panel);

    render_recent_orders(f, chunks[2], panel);
}

fn render_scorecards(f: &mut Frame, area: Rect, panel: &GeneralPanel) {
    let kpis = &panel.kpis;
    let low_stock_color = if kpis.low_stock_items > 0 {
        Color::LightRed
    } else {
        Color::Green
    };
    let cards = [
        ("Receita Hoje", format_money(kpis.revenue_today), Color::LightGreen),
        ("Pedidos Hoje", kpis.orders_today.to_string(), Color::White),
        ("Ticket Médio", format_money(kpis.average_ticket()), Color::LightYellow),
        ("Estoque Baixo", kpis.low_stock_items.to_string(), low_stock_color),
    ];

    let card_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for ((label, value, color), chunk) in cards.into_iter().zip(card_chunks.iter()) {
        let card = Paragraph::new(Line::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .block(panel_block(label, Color::DarkGray));
        f.render_widget(card, *chunk);
    }
}

fn render_year_revenue(f: &mut Frame, area: Rect, panel: &GeneralPanel) {
    let months = panel.kpis.monthly_revenue();
    let skip = months.len().saturating_sub(MAX_REVENUE_BARS);
    let bars: Vec<Bar> = months
        .iter()
        .skip(skip)
        .map(|(month, revenue)| {
            Bar::default()
                .label(Line::from(month.clone()))
                .value(bar_value(*revenue))
                .text_value(format_number(revenue.round()))
        })
        .collect();

    let chart = BarChart::default()
        .block(panel_block("Receita do Ano", Color::Cyan))
        .data(BarGroup::default().bars(&bars))
        .bar_width(8)
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::LightGreen))
        .value_style(Style::default().fg(Color::Black).bg(Color::LightGreen));
    f.render_widget(chart, area);
}

fn render_comparison(f: &mut Frame, area: Rect, panel: &GeneralPanel) {
    let rows: Vec<Row> = panel
        .performance
        .iter()
        .map(|p| {
            Row::new(vec![
                Cell::from(p.period.clone()),
                Cell::from(format_money(p.sales)),
                Cell::from(p.orders.to_string()),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Fill(1),
            Constraint::Length(16),
            Constraint::Length(8),
        ],
    )
    .header(header_row(["Período", "Vendas", "Pedidos"]))
    .block(panel_block("Comparativo", Color::Cyan));
    f.render_widget(table, area);
}

fn render_recent_orders(f: &mut Frame, area: Rect, panel: &GeneralPanel) {
    let rows: Vec<Row> = panel
        .recent_orders
        .iter()
        .take(MAX_TABLE_ROWS)
        .map(|order| {
            let placed_at = order
                .placed_at()
                .map(|t| t.format("%d/%m %H:%M").to_string())
                .unwrap_or_else(|| order.timestamp.clone());
            Row::new(vec![
                Cell::from(format!("#{}", order.id)),
                Cell::from(order.customer_name.clone().unwrap_or_else(|| "-".into())),
                Cell::from(format_number(Decimal::from(order.item_count()))),
                Cell::from(format_money(order.total_amount)),
                Cell::from(order.status.clone())
                    .style(Style::default().fg(order_status_color(&order.status))),
                Cell::from(placed_at),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(7),
            Constraint::Fill(1),
            Constraint::Length(6),
            Constraint::Length(14),
            Constraint::Length(11),
            Constraint::Length(12),
        ],
    )
    .header(header_row(["Pedido", "Cliente", "Itens", "Total", "Status", "Horário"]))
    .block(panel_block("Pedidos Recentes", Color::Cyan));
    f.render_widget(table, area);
}

/// Bold header row for the panel tables.
pub fn header_row<const N: usize>(titles: [&'static str; N]) -> Row<'static> {
    Row::new(titles).style(
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::BOLD),
    )
}
