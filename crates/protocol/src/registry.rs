//! Descriptor-set selection per dialect.
//!
//! The four tables layer into a session's command surface: a W3C session
//! exposes the WebDriver base plus the mobile and vendor layers, a legacy
//! session swaps the base for JSONWP. Later layers override earlier ones
//! on name collision.

use crate::descriptor::{CommandDescriptor, Dialect};
use crate::{appium, jsonwp, mjsonwp, webdriver};

/// Raw descriptor table for one dialect.
pub fn descriptor_set(dialect: Dialect) -> &'static [CommandDescriptor] {
    match dialect {
        Dialect::WebDriver => webdriver::COMMANDS,
        Dialect::JsonWire => jsonwp::COMMANDS,
        Dialect::MJsonWire => mjsonwp::COMMANDS,
        Dialect::Appium => appium::COMMANDS,
    }
}

/// Descriptor sets layered into a session's command surface, in override
/// order (later wins).
pub fn surface_sets(session_dialect: Dialect) -> [&'static [CommandDescriptor]; 3] {
    let base = if session_dialect.is_w3c() {
        webdriver::COMMANDS
    } else {
        jsonwp::COMMANDS
    };
    [base, mjsonwp::COMMANDS, appium::COMMANDS]
}

/// Looks up one descriptor by method name within a dialect's table.
pub fn find(dialect: Dialect, name: &str) -> Option<&'static CommandDescriptor> {
    descriptor_set(dialect).iter().find(|d| d.name == name)
}
