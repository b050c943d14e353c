//! Background tasks feeding the UI.

pub mod core;
pub mod panel_loader;

pub use self::core::EventSender;
pub use panel_loader::{LoadOutcome, PanelLoader};
