//! Dashboard view layer: which data each panel needs and how it is loaded.

pub mod loader;
pub mod panel;

pub use loader::{PanelData, load_daily_metrics, load_panel};
pub use panel::Panel;
