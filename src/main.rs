mod api;
mod cli_messages;
mod config;
mod consts;
mod dashboard;
mod error_classifier;
mod events;
mod logging;
mod session;
mod ui;
mod workers;

use crate::api::{Metric, RestaurantId};
use crate::config::{API_URL_ENV, ApiConfig, BaseUrlSource};
use crate::dashboard::Panel;
use crate::logging::{LogTarget, init_tracing};
use crate::session::{DashboardOptions, run_fetch, run_summary, run_tui_mode, setup_session};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Terminal dashboard for the restaurant analytics API
struct Args {
    /// Base URL of the analytics API
    #[arg(long, global = true, env = API_URL_ENV, value_name = "URL")]
    api_url: Option<String>,

    /// Restaurant whose metrics are shown
    #[arg(long, global = true, default_value_t = RestaurantId::default(), value_name = "ID")]
    restaurant_id: RestaurantId,

    /// Write logs to this file. The dashboard logs nowhere otherwise.
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive dashboard
    Dashboard {
        /// Panel shown first
        #[arg(long, value_enum, default_value_t = Panel::General)]
        panel: Panel,

        /// Reload the active panel every N seconds
        #[arg(long, value_name = "N")]
        refresh_secs: Option<u64>,

        /// Paint a dark background behind the dashboard
        #[arg(long, default_value_t = false)]
        with_background: bool,
    },
    /// Print today's scorecards
    Summary,
    /// Print one metric as JSON
    Fetch {
        /// Metric to fetch
        #[arg(value_enum)]
        metric: Metric,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    // The terminal UI owns the screen, so it only logs to a file.
    let target = match (&args.command, &args.log_file) {
        (_, Some(path)) => LogTarget::File(path),
        (Command::Dashboard { .. }, None) => LogTarget::Silent,
        _ => LogTarget::Stderr,
    };
    let _log_guard = match init_tracing(target, "info") {
        Ok(guard) => guard,
        Err(e) => {
            crate::print_cmd_warn!("Logging disabled", "{}", e);
            None
        }
    };

    let api_config = ApiConfig::resolve(args.api_url.as_deref());
    let session = setup_session(api_config, args.restaurant_id)?;

    match args.command {
        Command::Dashboard {
            panel,
            refresh_secs,
            with_background,
        } => {
            let options = DashboardOptions {
                panel,
                refresh_secs,
                with_background,
            };
            run_tui_mode(session, options).await
        }
        Command::Summary => {
            warn_if_default(&session.api_config);
            run_summary(session).await
        }
        Command::Fetch { metric } => {
            warn_if_default(&session.api_config);
            run_fetch(session, metric).await
        }
    }
}

fn warn_if_default(api_config: &ApiConfig) {
    if api_config.source() == BaseUrlSource::Default {
        crate::print_cmd_warn!(
            "No API URL configured",
            "using {}; set --api-url or {}",
            api_config.base_url(),
            API_URL_ENV
        );
    }
}
