//! TUI mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_starting},
};
use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
use crate::dashboard::Panel;
use crate::ui::dashboard::DashboardState;
use crate::ui::{self, UIConfig};
use crate::workers::{EventSender, PanelLoader};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::time::{Duration, Instant};
use std::{error::Error, io};
use tokio::sync::mpsc;

/// Options of the `dashboard` command
#[derive(Debug, Clone)]
pub struct DashboardOptions {
    /// Panel shown first
    pub panel: Panel,
    /// Reload the active panel every this many seconds
    pub refresh_secs: Option<u64>,
    /// Whether to enable background colors
    pub with_background: bool,
}

/// Runs the interactive dashboard
///
/// This function handles:
/// 1. Terminal setup and cleanup
/// 2. Wiring the panel loader to the UI channels
/// 3. Running the UI loop until the user quits
pub async fn run_tui_mode(
    session: SessionData,
    options: DashboardOptions,
) -> Result<(), Box<dyn Error>> {
    print_session_starting("dashboard", &session);

    let (outcome_sender, outcome_receiver) = mpsc::channel(EVENT_QUEUE_SIZE);
    let (event_sender, event_receiver) = mpsc::channel(EVENT_QUEUE_SIZE);
    let loader = PanelLoader::new(
        session.api.clone(),
        session.restaurant_id,
        outcome_sender,
        EventSender::new(event_sender),
    );

    let state = DashboardState::new(
        session.restaurant_id,
        session.api_config.clone(),
        Instant::now(),
        UIConfig::new(options.with_background, options.panel),
    );
    let refresh_interval = options
        .refresh_secs
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs);
    let app = ui::App::new(state, loader, outcome_receiver, event_receiver, refresh_interval);

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Initialize the terminal with Crossterm backend
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = ui::run(&mut terminal, app).await;

    // Clean up the terminal after running the application
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle the result
    result?;

    print_session_exit_success();
    Ok(())
}
