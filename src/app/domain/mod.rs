//! Domain layer - core data structures and types.
//!
//! - The active document as seen by the plugin
//! - Plugin settings
//! - Triggers the host dispatches

pub mod document;
pub mod settings;
pub mod trigger;

pub use document::ActiveDocument;
pub use settings::{ExtensionChoice, PluginSettings};
pub use trigger::Trigger;
