//! Declarative description of the plugin's settings panel.
//!
//! The host renders these descriptors with whatever toolkit it has and
//! reports edits back as `SettingChange` values.

use crate::app::domain::{ExtensionChoice, PluginSettings};

pub const PANEL_HEADING: &str = "Copy Note URL Settings";

pub const PANEL_INTRO: &str = "This plugin is useful when you publish your notes in some custom way, \
like using a plain GitHub repo and reading the notes as files in the repository. \
It combines whatever you put in prefix with the path of the note within the vault.";

pub const PREFIX_PLACEHOLDER: &str = "https://github.com/something/something/blob/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKey {
    Prefix,
    Extension,
    ShowRibbonIcon,
}

/// An edit reported by the host after the user changed a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingChange {
    Prefix(String),
    Extension(String),
    ShowRibbonIcon(bool),
}

impl SettingChange {
    pub fn key(&self) -> SettingKey {
        match self {
            Self::Prefix(_) => SettingKey::Prefix,
            Self::Extension(_) => SettingKey::Extension,
            Self::ShowRibbonIcon(_) => SettingKey::ShowRibbonIcon,
        }
    }

    /// Write the new value into `settings`
    pub fn apply_to(self, settings: &mut PluginSettings) {
        match self {
            Self::Prefix(value) => settings.prefix = value,
            Self::Extension(value) => settings.extension = value,
            Self::ShowRibbonIcon(value) => settings.show_ribbon_icon = value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropdownOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text {
        placeholder: &'static str,
        value: String,
    },
    Dropdown {
        options: Vec<DropdownOption>,
        value: String,
    },
    Toggle {
        value: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingField {
    pub key: SettingKey,
    pub label: &'static str,
    pub description: &'static str,
    pub kind: FieldKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsPanel {
    pub heading: &'static str,
    pub intro: &'static str,
    pub fields: Vec<SettingField>,
}

impl SettingsPanel {
    /// Describe the panel with the current values filled in
    pub fn build(settings: &PluginSettings) -> Self {
        let extension_options = ExtensionChoice::all()
            .iter()
            .map(|c| DropdownOption {
                value: c.value(),
                label: c.label(),
            })
            .collect();

        Self {
            heading: PANEL_HEADING,
            intro: PANEL_INTRO,
            fields: vec![
                SettingField {
                    key: SettingKey::Prefix,
                    label: "Prefix",
                    description: "Everything in your URL that goes before the path of the note in the vault. Include the trailing \"/\"",
                    kind: FieldKind::Text {
                        placeholder: PREFIX_PLACEHOLDER,
                        value: settings.prefix.clone(),
                    },
                },
                SettingField {
                    key: SettingKey::Extension,
                    label: "File extension",
                    description: "Should the URL end with .md, .html or none? (The extension of non-markdown files is never changed.)",
                    kind: FieldKind::Dropdown {
                        options: extension_options,
                        value: settings.extension.clone(),
                    },
                },
                SettingField {
                    key: SettingKey::ShowRibbonIcon,
                    label: "Show ribbon icon",
                    description: "Add an icon to the ribbon that copies the URL of the active note.",
                    kind: FieldKind::Toggle {
                        value: settings.show_ribbon_icon,
                    },
                },
            ],
        }
    }
}
