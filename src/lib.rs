//! Copy a shareable URL for the active note.
//!
//! The URL is the configured prefix followed by the note's vault-relative
//! path, with the `.md` suffix optionally rewritten. The plugin runs inside a
//! host application and reaches the workspace, clipboard, notices and storage
//! only through the traits in [`app::infrastructure::host`].

pub mod app;

pub use app::*;

/// Identifier used for the command and the plugin's data directory
pub const PLUGIN_ID: &str = "copy-note-url";
