//! Inventory panel: stock table, value by category and the below-threshold count

use super::body::panel_block;
use super::general::header_row;
use crate::consts::cli_consts::MAX_TABLE_ROWS;
use crate::dashboard::loader::InventoryPanel;
use crate::ui::dashboard::utils::{format_money, format_number};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Paragraph, Row, Table};

pub fn render_inventory(f: &mut Frame, area: Rect, panel: &InventoryPanel) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    render_stock_table(f, chunks[0], panel);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Fill(1)])
        .split(chunks[1]);
    render_stock_summary(f, right[0], panel);
    render_value_by_category(f, right[1], panel);
}

fn render_stock_table(f: &mut Frame, area: Rect, panel: &InventoryPanel) {
    // Items below their threshold are listed first.
    let stocked = panel.items.iter().filter(|item| !item.is_below_threshold());

    let rows: Vec<Row> = panel
        .low_stock()
        .chain(stocked)
        .take(MAX_TABLE_ROWS)
        .map(|item| {
            let style = if item.is_below_threshold() {
                Style::default().fg(Color::LightRed)
            } else {
                Style::default()
            };
            Row::new(vec![
                Cell::from(item.name.clone()),
                Cell::from(format!("{} {}", format_number(item.quantity), item.unit)),
                Cell::from(format_number(item.min_threshold)),
                Cell::from(format_money(item.unit_cost)),
                Cell::from(format_money(item.stock_value())),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Fill(2),
            Constraint::Length(12),
            Constraint::Length(8),
            Constraint::Length(13),
            Constraint::Length(14),
        ],
    )
    .header(header_row(["Item", "Quantidade", "Mínimo", "Custo Un.", "Valor"]))
    .block(panel_block("Estoque", Color::Cyan));
    f.render_widget(table, area);
}

fn render_stock_summary(f: &mut Frame, area: Rect, panel: &InventoryPanel) {
    let below = panel.below_threshold.items_below_threshold;
    let below_color = if below > 0 { Color::LightRed } else { Color::Green };
    let lines = vec![
        Line::from(vec![
            Span::styled("Abaixo do mínimo: ", Style::default().fg(Color::Gray)),
            Span::styled(
                below.to_string(),
                Style::default().fg(below_color).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Valor total: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format_money(panel.total_value()),
                Style::default()
                    .fg(Color::LightGreen)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];
    let summary = Paragraph::new(lines).block(panel_block("Resumo", Color::Cyan));
    f.render_widget(summary, area);
}

fn render_value_by_category(f: &mut Frame, area: Rect, panel: &InventoryPanel) {
    let lines: Vec<Line> = panel
        .value_by_category
        .iter()
        .map(|category| {
            let color = category
                .rgb()
                .map(|(r, g, b)| Color::Rgb(r, g, b))
                .unwrap_or(Color::Gray);
            Line::from(vec![
                Span::styled("■ ", Style::default().fg(color)),
                Span::raw(format!("{}: ", category.category)),
                Span::styled(format_money(category.value), Style::default().fg(Color::White)),
            ])
        })
        .collect();
    let list = Paragraph::new(lines).block(panel_block("Valor por Categoria", Color::Cyan));
    f.render_widget(list, area);
}
