//! Menu panel: menu engineering table and quadrant counts

use super::body::panel_block;
use super::general::header_row;
use crate::api::types::MenuQuadrant;
use crate::dashboard::loader::MenuPanel;
use crate::ui::dashboard::utils::quadrant_color;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Paragraph, Row, Table};
use strum::IntoEnumIterator;

pub fn render_menu(f: &mut Frame, area: Rect, panel: &MenuPanel) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(area);

    let rows: Vec<Row> = panel
        .items
        .iter()
        .map(|item| {
            let color = quadrant_color(item.quadrant());
            Row::new(vec![
                Cell::from(item.name.clone()),
                Cell::from(item.category.clone()).style(Style::default().fg(color)),
                Cell::from(format!("{:.1}%", item.popularity)),
                Cell::from(format!("{:.1}%", item.profitability)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Fill(2),
            Constraint::Length(12),
            Constraint::Length(13),
            Constraint::Length(15),
        ],
    )
    .header(header_row(["Item", "Quadrante", "Popularidade", "Margem %"]))
    .block(panel_block("Engenharia de Menu", Color::Cyan));
    f.render_widget(table, chunks[0]);

    let counts = panel.quadrant_counts();
    let lines: Vec<Line> = MenuQuadrant::iter()
        .map(|quadrant| {
            Line::from(vec![
                Span::styled(
                    format!("{:<11}", quadrant.to_string()),
                    Style::default()
                        .fg(quadrant_color(Some(quadrant)))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(counts.get(&quadrant).copied().unwrap_or(0).to_string()),
            ])
        })
        .collect();
    let summary = Paragraph::new(lines).block(panel_block("Quadrantes", Color::Cyan));
    f.render_widget(summary, chunks[1]);
}
