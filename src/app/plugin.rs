use std::time::Duration;

use tracing::{debug, info, warn};

use super::controllers::settings_panel::{SettingChange, SettingKey, SettingsPanel};
use super::domain::{PluginSettings, Trigger};
use super::infrastructure::error::{AppError, Result};
use super::infrastructure::host::{CommandSpec, Host, RibbonIconSpec};
use super::services::url::derive_url;

pub const COMMAND: CommandSpec = CommandSpec {
    id: crate::PLUGIN_ID,
    name: "Copy Note Url",
};

pub const RIBBON_ICON: RibbonIconSpec = RibbonIconSpec {
    icon: "external-link",
    label: "Copy note URL",
};

pub const NOTICE_COPIED: &str = "URL copied!";
pub const NOTICE_NO_ACTIVE_NOTE: &str = "Open a note first.";
pub const NOTICE_COPY_FAILED: &str = "Could not copy URL.";
pub const NOTICE_DURATION: Duration = Duration::from_secs(5);

/// Result of a copy action that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied(String),
    NoActiveDocument,
}

/// The activated plugin: current settings plus the host it runs in.
pub struct CopyNoteUrlPlugin<H: Host> {
    host: H,
    settings: PluginSettings,
    ribbon_registered: bool,
}

impl<H: Host> CopyNoteUrlPlugin<H> {
    /// Activate the plugin: load settings, then register every surface with the host.
    pub fn load(host: H) -> Result<Self> {
        let mut plugin = Self {
            host,
            settings: PluginSettings::default(),
            ribbon_registered: false,
        };

        plugin.load_settings()?;
        plugin.host.register_command(COMMAND);
        plugin.sync_ribbon_icon();
        plugin.host.register_settings_panel();

        info!("{} loaded", crate::PLUGIN_ID);
        Ok(plugin)
    }

    /// Deactivate and hand the host back.
    pub fn unload(mut self) -> H {
        if self.ribbon_registered {
            self.host.remove_ribbon_icon(RIBBON_ICON);
        }
        info!("{} unloaded", crate::PLUGIN_ID);
        self.host
    }

    pub fn settings(&self) -> &PluginSettings {
        &self.settings
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn handle_trigger(&mut self, trigger: Trigger) -> Result<CopyOutcome> {
        debug!(?trigger, "trigger received");
        match trigger {
            Trigger::Command | Trigger::RibbonIcon => self.copy_url_action(),
        }
    }

    /// Copy the active note's URL to the clipboard and tell the user.
    ///
    /// Clipboard failures are reported with a notice and then returned to the host.
    pub fn copy_url_action(&mut self) -> Result<CopyOutcome> {
        let active = self.host.active_document();

        // An empty URL has nothing worth copying; treat it like no open note
        let derived = derive_url(active.as_ref(), &self.settings).filter(|url| !url.is_empty());
        let Some(url) = derived else {
            self.host.show_notice(NOTICE_NO_ACTIVE_NOTE, NOTICE_DURATION);
            return Ok(CopyOutcome::NoActiveDocument);
        };
        debug!(%url, "derived note url");

        if let Err(e) = self.host.write_text(&url) {
            warn!("Failed to copy note URL: {}", e);
            self.host.show_notice(NOTICE_COPY_FAILED, NOTICE_DURATION);
            return Err(e);
        }

        self.host.show_notice(NOTICE_COPIED, NOTICE_DURATION);
        info!(%url, "copied note url");
        Ok(CopyOutcome::Copied(url))
    }

    /// Merge the persisted record over the defaults
    pub fn load_settings(&mut self) -> Result<()> {
        let data = self.host.load_data()?;
        self.settings = PluginSettings::from_persisted(data)
            .map_err(|e| AppError::Settings(format!("stored settings are invalid: {}", e)))?;
        debug!(settings = ?self.settings, "settings loaded");
        Ok(())
    }

    /// Persist the full settings record, replacing what was stored
    pub fn save_settings(&mut self) -> Result<()> {
        let data = serde_json::to_value(&self.settings)?;
        self.host
            .save_data(&data)
            .inspect_err(|e| warn!("Failed to save settings: {}", e))
    }

    pub fn settings_panel(&self) -> SettingsPanel {
        SettingsPanel::build(&self.settings)
    }

    /// Apply an edit from the settings panel and persist it right away.
    pub fn apply_setting(&mut self, change: SettingChange) -> Result<()> {
        let key = change.key();
        change.apply_to(&mut self.settings);
        if key == SettingKey::ShowRibbonIcon {
            self.sync_ribbon_icon();
        }
        self.save_settings()
    }

    fn sync_ribbon_icon(&mut self) {
        match (self.settings.show_ribbon_icon, self.ribbon_registered) {
            (true, false) => self.host.register_ribbon_icon(RIBBON_ICON),
            (false, true) => self.host.remove_ribbon_icon(RIBBON_ICON),
            _ => return,
        }
        self.ribbon_registered = self.settings.show_ribbon_icon;
    }
}
