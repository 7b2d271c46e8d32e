use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DentakuError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid config {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    #[error("Unknown key: {0:?}")]
    UnknownKey(char),

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

impl DentakuError {
    pub fn config(path: &Path, message: impl Into<String>) -> Self {
        DentakuError::Config {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts() {
        let err: DentakuError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, DentakuError::Io(_)));
        assert_eq!(err.to_string(), "I/O error: gone");
    }

    #[test]
    fn test_config_error_message() {
        let err = DentakuError::config(Path::new("/tmp/config.toml"), "bad value");
        assert_eq!(err.to_string(), "Invalid config /tmp/config.toml: bad value");
    }

    #[test]
    fn test_unknown_key_message() {
        assert_eq!(DentakuError::UnknownKey('%').to_string(), "Unknown key: '%'");
    }
}
