//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod body;
pub mod financial;
pub mod footer;
pub mod general;
pub mod header;
pub mod inventory;
pub mod logs;
pub mod menu;
pub mod tabs;
