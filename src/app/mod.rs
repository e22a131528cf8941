//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (ActiveDocument, PluginSettings, Trigger)
//! - `controllers/` - Settings panel model
//! - `services/` - URL derivation
//! - `infrastructure/` - Host traits, settings store, clipboard, errors
//! - `plugin.rs` - The activated plugin, wiring everything to the host

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod plugin;
pub mod services;

// Re-exports for convenient external access
pub use controllers::settings_panel::{
    DropdownOption, FieldKind, SettingChange, SettingField, SettingKey, SettingsPanel,
};
pub use domain::{ActiveDocument, ExtensionChoice, PluginSettings, Trigger};
pub use infrastructure::clipboard::SystemClipboard;
pub use infrastructure::error::{AppError, Result};
pub use infrastructure::host::{
    Clipboard, CommandSpec, Host, Notifier, Registrar, RibbonIconSpec, SettingsStore, Workspace,
};
pub use infrastructure::storage::PluginDataStore;
pub use plugin::{CopyNoteUrlPlugin, CopyOutcome};
pub use services::url::derive_url;
