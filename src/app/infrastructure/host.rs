//! Capabilities the host application lends to the plugin.
//!
//! The plugin never reaches for the workspace, clipboard, notices or storage
//! directly; everything goes through these traits so any host (or a test
//! double) can drive it.

use std::time::Duration;

use super::error::Result;
use crate::app::domain::ActiveDocument;

/// Access to the host's editing workspace.
pub trait Workspace {
    /// The document focused in the main editing view, if any
    fn active_document(&self) -> Option<ActiveDocument>;
}

pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// Transient, non-blocking user messages.
pub trait Notifier {
    fn show_notice(&mut self, text: &str, duration: Duration);
}

/// Key-value persistence scoped to this plugin.
pub trait SettingsStore {
    /// Previously saved record, or `None` if nothing was ever saved
    fn load_data(&self) -> Result<Option<serde_json::Value>>;

    /// Replace the saved record wholesale
    fn save_data(&mut self, data: &serde_json::Value) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    pub id: &'static str,
    pub name: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RibbonIconSpec {
    pub icon: &'static str,
    pub label: &'static str,
}

/// Registration calls made while the plugin activates.
///
/// The host routes each registered surface back to the plugin as a
/// `Trigger` when the user activates it.
pub trait Registrar {
    fn register_command(&mut self, command: CommandSpec);
    fn register_ribbon_icon(&mut self, icon: RibbonIconSpec);
    fn remove_ribbon_icon(&mut self, icon: RibbonIconSpec);
    fn register_settings_panel(&mut self);
}

/// Everything the plugin needs from its host.
pub trait Host: Workspace + Clipboard + Notifier + SettingsStore + Registrar {}

impl<T> Host for T where T: Workspace + Clipboard + Notifier + SettingsStore + Registrar {}
