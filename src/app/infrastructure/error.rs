use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Settings error: {0}")]
    Settings(String),
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only vault");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
        assert!(app_err.to_string().contains("read-only vault"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let app_err: AppError = json_err.into();
        assert!(matches!(app_err, AppError::Json(_)));
    }

    #[test]
    fn test_error_display() {
        let err = AppError::Clipboard("access denied".to_string());
        assert_eq!(err.to_string(), "Clipboard error: access denied");

        let err = AppError::Persistence("disk full".to_string());
        assert_eq!(err.to_string(), "Persistence error: disk full");

        let err = AppError::Settings("prefix is not a string".to_string());
        assert_eq!(err.to_string(), "Settings error: prefix is not a string");
    }
}
