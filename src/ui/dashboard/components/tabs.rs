//! Panel tab bar

use super::super::state::DashboardState;
use crate::dashboard::Panel;
use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Tabs};

pub fn render_tabs(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let titles: Vec<Line> = Panel::titles()
        .into_iter()
        .enumerate()
        .map(|(i, title)| Line::from(format!("{} {}", i + 1, title)))
        .collect();

    let tabs = Tabs::new(titles)
        .select(state.active_panel().index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider("|")
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    f.render_widget(tabs, area);
}
