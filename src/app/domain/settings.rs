use serde::{Deserialize, Serialize};

/// Extension choices offered by the settings panel dropdown.
/// The stored setting stays a plain string so any literal suffix still works.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtensionChoice {
    None,
    #[default]
    Markdown,
    Html,
}

impl ExtensionChoice {
    /// Value written to `PluginSettings::extension`
    pub fn value(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::Markdown => "md",
            Self::Html => "html",
        }
    }

    /// Label shown in the dropdown
    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Markdown => ".md",
            Self::Html => ".html",
        }
    }

    pub fn all() -> &'static [ExtensionChoice] {
        &[Self::None, Self::Markdown, Self::Html]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginSettings {
    /// Suffix the copied URL should end with ("" strips `.md`)
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Text placed before the note path, usually a base URL with a trailing "/"
    #[serde(default)]
    pub prefix: String,

    #[serde(default)]
    pub show_ribbon_icon: bool,
}

fn default_extension() -> String {
    ExtensionChoice::Markdown.value().to_string()
}

impl Default for PluginSettings {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            prefix: String::new(),
            show_ribbon_icon: false,
        }
    }
}

impl PluginSettings {
    /// Merge a persisted (possibly partial) record over the defaults.
    ///
    /// Keys present in `data` always win; missing keys keep their default.
    pub fn from_persisted(data: Option<serde_json::Value>) -> serde_json::Result<Self> {
        match data {
            Some(serde_json::Value::Null) | None => Ok(Self::default()),
            Some(value) => serde_json::from_value(value),
        }
    }
}
