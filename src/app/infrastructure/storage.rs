use std::fs;
use std::path::{Path, PathBuf};

use super::error::{AppError, Result};
use super::host::SettingsStore;

const DATA_FILE: &str = "data.json";

/// `SettingsStore` backed by a `data.json` file in the plugin's own directory.
#[derive(Debug, Clone)]
pub struct PluginDataStore {
    path: PathBuf,
}

impl PluginDataStore {
    /// Store inside `dir`, as `dir/data.json`
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(DATA_FILE),
        }
    }

    /// Store in the per-user config directory (cross-platform)
    pub fn default_location() -> Self {
        let mut dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        dir.push(crate::PLUGIN_ID);
        Self::new(dir)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for PluginDataStore {
    fn load_data(&self) -> Result<Option<serde_json::Value>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        if contents.trim().is_empty() {
            return Ok(None);
        }

        serde_json::from_str(&contents).map(Some).map_err(|e| {
            AppError::Persistence(format!("{} is not valid JSON: {}", self.path.display(), e))
        })
    }

    fn save_data(&mut self, data: &serde_json::Value) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, json)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_loads_nothing() {
        let dir = TempDir::new().unwrap();
        let store = PluginDataStore::new(dir.path());
        assert!(store.load_data().unwrap().is_none());
    }

    #[test]
    fn test_empty_file_loads_nothing() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("data.json"), "  \n").unwrap();
        let store = PluginDataStore::new(dir.path());
        assert!(store.load_data().unwrap().is_none());
    }

    #[test]
    fn test_save_creates_directories() {
        let dir = TempDir::new().unwrap();
        let mut store = PluginDataStore::new(dir.path().join("plugins").join("copy-note-url"));
        store.save_data(&json!({"prefix": "p/"})).unwrap();
        assert!(store.path().exists());
        assert_eq!(store.load_data().unwrap(), Some(json!({"prefix": "p/"})));
    }

    #[test]
    fn test_save_overwrites_wholesale() {
        let dir = TempDir::new().unwrap();
        let mut store = PluginDataStore::new(dir.path());
        store.save_data(&json!({"prefix": "a/", "extension": "html"})).unwrap();
        store.save_data(&json!({"prefix": "b/"})).unwrap();
        assert_eq!(store.load_data().unwrap(), Some(json!({"prefix": "b/"})));
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("data.json"), "{not json").unwrap();
        let store = PluginDataStore::new(dir.path());
        let err = store.load_data().unwrap_err();
        assert!(matches!(err, AppError::Persistence(_)));
    }

    #[test]
    fn test_default_location_is_plugin_dir() {
        let store = PluginDataStore::default_location();
        assert!(store.path().ends_with("copy-note-url/data.json"));
        let parent = store.path().parent().unwrap();
        assert_eq!(parent.file_name().and_then(|n| n.to_str()), Some("copy-note-url"));
    }
}
