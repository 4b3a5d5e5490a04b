use std::path::PathBuf;

/// Errors that can occur while loading or saving settings and statistics.
///
/// Gameplay never depends on persistence succeeding; callers log or drop
/// these and continue with in-memory defaults.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_read_display() {
        let err = PersistError::FileRead {
            path: PathBuf::from("settings.toml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.to_string(), "failed to read settings.toml: gone");
    }

    #[test]
    fn test_json_error_converts() {
        let source = serde_json::from_str::<crate::stats::Stats>("{not json").unwrap_err();
        let err: PersistError = source.into();
        assert!(err.to_string().starts_with("JSON error:"));
    }
}
