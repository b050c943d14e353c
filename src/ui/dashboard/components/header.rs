//! Dashboard header component
//!
//! Renders the title and the load status gauge

use super::super::state::{DashboardState, PanelState};
use super::super::utils::{format_compact_timestamp, format_uptime};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

/// Render header with title, data source and load progress.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let title_text = format!(
        "RESTAURANT DASHBOARD v{} | Restaurante #{} | API {} | {}",
        version,
        state.restaurant_id,
        state.api_config,
        format_uptime(state.start_time.elapsed())
    );

    let title = Paragraph::new(title_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    let (progress_text, gauge_color, progress_percent) = match state.panel_state() {
        PanelState::Loading { started_at } => {
            // Animated loading gauge - loops every 20 ticks
            let progress = ((state.tick % 20) as f64 / 20.0 * 100.0) as u16;
            (
                format!(
                    "CARREGANDO {} ({:.1}s)",
                    state.active_panel(),
                    started_at.elapsed().as_secs_f64()
                ),
                Color::LightBlue,
                progress,
            )
        }
        PanelState::Ready(_) => {
            let refreshed = state
                .last_refreshed
                .as_deref()
                .map(format_compact_timestamp)
                .unwrap_or_else(|| "-".to_string());
            (
                format!("PRONTO - atualizado {}", refreshed),
                Color::LightGreen,
                100,
            )
        }
        PanelState::Failed(_) => ("ERRO - pressione R".to_string(), Color::LightRed, 100),
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(
            Style::default()
                .fg(gauge_color)
                .add_modifier(Modifier::BOLD),
        )
        .percent(progress_percent)
        .label(progress_text);

    f.render_widget(gauge, header_chunks[1]);
}
