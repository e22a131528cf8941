use std::path::Path;

/// The note currently focused in the host workspace.
///
/// `path` is vault-relative, exactly as the host addresses the file.
/// `extension` is the file extension without the leading dot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveDocument {
    pub path: String,
    pub extension: String,
}

impl ActiveDocument {
    pub fn new(path: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            extension: extension.into(),
        }
    }

    /// Build a document from its path, taking the extension from the file name.
    /// Dotfiles like `.gitignore` and names without a dot get an empty extension.
    pub fn from_path(path: impl Into<String>) -> Self {
        let path = path.into();
        let extension = Path::new(&path)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_string();
        Self { path, extension }
    }

    pub fn is_markdown(&self) -> bool {
        self.extension == "md"
    }
}
