//! Controllers layer - orchestration between the domain and the host UI.
//!
//! - Settings panel description and edits

pub mod settings_panel;
