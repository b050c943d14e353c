//! Active panel body
//!
//! Shows the loading and error states, or hands off to the panel renderer

use super::super::state::{DashboardState, PanelState};
use super::{financial, general, inventory, menu};
use crate::dashboard::PanelData;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

pub const LOADING_TEXT: &str = "Carregando dados...";

pub fn render_panel_body(f: &mut Frame, area: Rect, state: &DashboardState) {
    match state.panel_state() {
        PanelState::Loading { .. } => render_loading(f, area, state),
        PanelState::Failed(message) => render_error(f, area, message),
        PanelState::Ready(data) => match &**data {
            PanelData::General(panel) => general::render_general(f, area, panel),
            PanelData::Financial(panel) => financial::render_financial(f, area, panel),
            PanelData::Menu(panel) => menu::render_menu(f, area, panel),
            PanelData::Inventory(panel) => inventory::render_inventory(f, area, panel),
        },
    }
}

fn render_loading(f: &mut Frame, area: Rect, state: &DashboardState) {
    let spinner = SPINNER[state.tick % SPINNER.len()];
    let loading = Paragraph::new(vec![
        Line::from(""),
        Line::from(format!("{} {}", spinner, LOADING_TEXT)),
    ])
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::LightBlue))
    .block(panel_block(&state.active_panel().to_string(), Color::DarkGray));
    f.render_widget(loading, area);
}

fn render_error(f: &mut Frame, area: Rect, message: &str) {
    let error = Paragraph::new(vec![
        Line::from(""),
        Line::styled(
            "Erro ao carregar dados",
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(message.to_string()),
        Line::from(""),
        Line::styled(
            "Pressione R para tentar novamente",
            Style::default().fg(Color::DarkGray),
        ),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(panel_block("ERRO", Color::LightRed));
    f.render_widget(error, area);
}

/// Rounded block shared by every panel section.
pub fn panel_block(title: &str, color: Color) -> Block<'static> {
    Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
        .padding(Padding::horizontal(1))
}
